// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Interface between the control loop and one winch motor.

/// A winch drive that steps continuously at a commanded speed.
///
/// Implemented by [`Stepper`](crate::drivers::Stepper) on hardware and by recording mocks in
/// tests.
pub trait Actuator {
    /// Electrically enable or disable the motor driver.
    fn set_enabled(&mut self, enabled: bool);

    /// Constant-speed parameters in steps/s. `speed` may be negative to reverse; `max_speed`
    /// bounds its magnitude.
    fn set_speed_and_max(&mut self, speed: f32, max_speed: f32);

    /// Execute one scheduling quantum. Must be called every loop cycle; issues at most one step.
    ///
    /// `now_us` is a free-running, wrapping microsecond timestamp.
    fn run_step(&mut self, now_us: u32);
}
