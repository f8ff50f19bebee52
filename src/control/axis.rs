// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Per-winch run state.

use crate::control::Actuator;

/// Operating state of one winch.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum AxisState {
    /// Driver disabled, no stepping.
    #[default]
    Idle,

    /// Driver enabled, stepping at constant `speed` (steps/s) bounded by `max_speed`.
    Running { speed: i32, max_speed: i32 },
}

impl AxisState {
    /// State selected by a speed command. A zero in either field idles the axis; everything
    /// else, including negative values, runs it.
    pub fn from_command(speed: i32, max_speed: i32) -> Self {
        if speed == 0 || max_speed == 0 {
            AxisState::Idle
        } else {
            AxisState::Running { speed, max_speed }
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self, AxisState::Running { .. })
    }

    /// Push this state to the drive.
    pub fn apply<A: Actuator>(&self, actuator: &mut A) {
        match *self {
            AxisState::Idle => actuator.set_enabled(false),
            AxisState::Running { speed, max_speed } => {
                actuator.set_enabled(true);
                actuator.set_speed_and_max(speed as f32, max_speed as f32);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_in_either_field_idles() {
        assert_eq!(AxisState::from_command(0, 3200), AxisState::Idle);
        assert_eq!(AxisState::from_command(3200, 0), AxisState::Idle);
        assert_eq!(AxisState::from_command(0, 0), AxisState::Idle);
    }

    #[test]
    fn non_zero_runs() {
        for &(s, m) in &[(3200, 3200), (-100, 50), (1, -1), (i32::MIN, i32::MAX)] {
            assert_eq!(
                AxisState::from_command(s, m),
                AxisState::Running {
                    speed: s,
                    max_speed: m
                }
            );
        }
    }
}
