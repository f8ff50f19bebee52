// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

pub mod error;
pub mod line;
pub mod messages;
pub mod number;
pub mod parser;
pub mod tx;

pub use error::ParseError;
pub use line::{ByteSource, LineReader};
pub use messages::{Command, CommandMode};
pub use number::NumberPolicy;
pub use parser::Parser;
pub use tx::TxQueue;
