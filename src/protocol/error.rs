// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

use thiserror::Error;

/// Reasons a command line is rejected under [`NumberPolicy::Strict`](super::NumberPolicy::Strict).
///
/// `index` is the zero-based position of the number within the command (0 = first, 1 = second).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing number {index}")]
    MissingNumber { index: usize },

    #[error("number {index} is not a decimal integer")]
    InvalidNumber { index: usize },

    #[error("unexpected text after the second number")]
    TrailingInput,
}
