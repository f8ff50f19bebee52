// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Compile-time rig configuration.
//!
//! Geometry is measured between motor shafts on the frame. Everything else in the firmware works
//! in points: `POINTS_PER_MILLIMETER` points per millimetre.

use crate::geometry::{Anchor, Workspace};
use crate::protocol::{CommandMode, NumberPolicy};

/// Horizontal distance between the left and right anchors.
pub const WIDTH_BETWEEN_MOTORS_CM: u32 = 120;
/// Vertical distance between the top and bottom anchors.
pub const HEIGHT_BETWEEN_MOTORS_CM: u32 = 90;
/// Length resolution.
pub const POINTS_PER_MILLIMETER: u32 = 10;

/// Debug/command USART baud rate.
pub const BAUD_RATE: u32 = 9_600;
/// Longest accepted command line, in bytes, excluding the terminator.
pub const LINE_CAPACITY: usize = 32;
/// Diagnostic output queued ahead of the transmitter, in bytes.
pub const TX_CAPACITY: usize = 256;

/// Minimum STEP high time for the winch drivers (DRV8825 needs 1.9 µs).
pub const MIN_PULSE_WIDTH_US: u32 = 2;

/// Workspace spanned by the anchors, in points.
pub const fn workspace() -> Workspace {
    Workspace::new(
        HEIGHT_BETWEEN_MOTORS_CM * 10 * POINTS_PER_MILLIMETER,
        WIDTH_BETWEEN_MOTORS_CM * 10 * POINTS_PER_MILLIMETER,
    )
}

/// Control loop behavior.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Interpretation of bare `a b` lines.
    pub mode: CommandMode,
    /// Numeric token conversion.
    pub policy: NumberPolicy,
    /// Winch addressed by speed commands that name no anchor.
    pub speed_axis: Anchor,
    /// `(speed, max_speed)` applied to `speed_axis` at startup.
    pub startup_speed: Option<(i32, i32)>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: if cfg!(feature = "position-mode") {
                CommandMode::Position
            } else {
                CommandMode::Speed
            },
            policy: if cfg!(feature = "strict-input") {
                NumberPolicy::Strict
            } else {
                NumberPolicy::ParseOrZero
            },
            speed_axis: Anchor::LeftBottom,
            startup_speed: Some((3200, 3200)),
        }
    }
}
