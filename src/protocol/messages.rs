// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Command line format for the winch controller.
//!
//! ```text
//! [S [LT|LB|RT|RB] | P] <a> <b>\n
//! ```
//!
//! A bare `<a> <b>` line is read in the controller's startup [`CommandMode`].

use crate::geometry::{Anchor, Point};

/// Forces a speed command: `<a>` = speed, `<b>` = max speed (steps/s).
pub const KW_SPEED: &str = "S";
/// Forces a position command: `<a>` = x, `<b>` = y.
pub const KW_POSITION: &str = "P";

/// How a bare two-number line is interpreted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CommandMode {
    #[default]
    Speed,
    Position,
}

/// A decoded command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run one winch at constant speed. `axis = None` addresses the default speed axis.
    Speed {
        axis: Option<Anchor>,
        speed: i32,
        max_speed: i32,
    },
    /// Recompute the rig state for a new carriage target.
    Target(Point),
}

impl Command {
    /// The two numbers carried on the line, in order.
    pub fn values(&self) -> (i32, i32) {
        match *self {
            Command::Speed {
                speed, max_speed, ..
            } => (speed, max_speed),
            Command::Target(p) => (p.x, p.y),
        }
    }
}
