// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Integer token conversion.
//!
//! The rig has historically accepted anything on the line and turned unreadable numbers into 0,
//! which the control loop then treats as "disable". That behavior is kept as
//! [`NumberPolicy::ParseOrZero`]; [`NumberPolicy::Strict`] rejects the line instead.

use crate::protocol::ParseError;

/// How numeric tokens are converted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum NumberPolicy {
    /// `atol`-style conversion: leading digits are used, junk becomes 0, a missing token is 0.
    #[default]
    ParseOrZero,
    /// Every token must be a complete decimal `i32`.
    Strict,
}

impl NumberPolicy {
    /// Convert the token at position `index`, which may be absent.
    pub fn number(self, token: Option<&str>, index: usize) -> Result<i32, ParseError> {
        match (self, token) {
            (NumberPolicy::ParseOrZero, Some(t)) => Ok(parse_or_zero(t)),
            (NumberPolicy::ParseOrZero, None) => Ok(0),
            (NumberPolicy::Strict, Some(t)) => {
                t.parse::<i32>().map_err(|_| ParseError::InvalidNumber { index })
            }
            (NumberPolicy::Strict, None) => Err(ParseError::MissingNumber { index }),
        }
    }
}

/// Leading-integer conversion with C `atol` semantics.
///
/// Skips leading whitespace, accepts one optional sign, then reads decimal digits until the first
/// non-digit. No digits gives 0. Out-of-range values saturate at the `i32` bounds.
pub fn parse_or_zero(token: &str) -> i32 {
    let bytes = token.trim_start().as_bytes();
    let (negative, digits) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };

    // One past i32::MAX so that i32::MIN still fits after negation.
    const LIMIT: i64 = i32::MAX as i64 + 1;
    let mut value: i64 = 0;
    for &b in digits.iter().take_while(|b| b.is_ascii_digit()) {
        value = (value * 10 + (b - b'0') as i64).min(LIMIT);
    }

    let value = if negative { -value } else { value };
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
