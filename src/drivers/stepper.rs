// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! STEP/DIR stepper driver (DRV8825, A4988 and similar) running at constant speed.
//!
//! The driver is polled from the main loop through [`Actuator::run_step`]. Nothing here blocks:
//! the STEP pulse is raised on one poll and lowered on a later one once the minimum pulse width
//! has elapsed, so the loop has to run at least that often (it runs far faster).
//!
//! Timing uses a wrapping microsecond counter, so a 32-bit 1 MHz timer can be read directly.

use embedded_hal::digital::v2::OutputPin;

use crate::config::MIN_PULSE_WIDTH_US;
use crate::control::Actuator;

/// One winch motor: STEP and DIR outputs plus an active-low ENABLE output.
pub struct Stepper<STEP, DIR, EN> {
    step: STEP,
    dir: DIR,
    enable: EN,

    enabled: bool,
    /// Signed speed in steps/s, already clamped to `max_speed`.
    speed: f32,
    max_speed: f32,
    /// 0 = stopped.
    step_interval_us: u32,
    last_step_us: u32,
    /// Set while STEP is high.
    pulse_started_us: Option<u32>,
    min_pulse_width_us: u32,
    /// Steps issued, positive = DIR high.
    position: i64,
}

impl<STEP, DIR, EN> Stepper<STEP, DIR, EN>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
{
    /// Wrap the pins. The driver starts disabled with STEP low.
    pub fn new(mut step: STEP, mut dir: DIR, mut enable: EN) -> Self {
        step.set_low().ok();
        dir.set_low().ok();
        enable.set_high().ok();
        Self {
            step,
            dir,
            enable,
            enabled: false,
            speed: 0.0,
            max_speed: 1.0,
            step_interval_us: 0,
            last_step_us: 0,
            pulse_started_us: None,
            min_pulse_width_us: MIN_PULSE_WIDTH_US,
            position: 0,
        }
    }

    pub fn with_min_pulse_width_us(mut self, us: u32) -> Self {
        self.min_pulse_width_us = us;
        self
    }

    fn set_max_speed(&mut self, max_speed: f32) {
        self.max_speed = libm::fabsf(max_speed);
    }

    fn set_speed(&mut self, speed: f32) {
        let speed = speed.clamp(-self.max_speed, self.max_speed);
        self.step_interval_us = if speed == 0.0 {
            0
        } else {
            // Faster than 1 MHz still steps, as fast as the loop allows.
            ((1_000_000.0 / libm::fabsf(speed)) as u32).max(1)
        };

        // DIR changes here, well before the next STEP edge, to respect the driver's setup time.
        if speed > 0.0 {
            self.dir.set_high().ok();
        } else if speed < 0.0 {
            self.dir.set_low().ok();
        }
        self.speed = speed;
    }

    fn end_pulse(&mut self) {
        self.step.set_low().ok();
        self.pulse_started_us = None;
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    #[inline]
    pub fn step_interval_us(&self) -> u32 {
        self.step_interval_us
    }

    /// Net steps issued since construction.
    #[inline]
    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn free(self) -> (STEP, DIR, EN) {
        (self.step, self.dir, self.enable)
    }
}

impl<STEP, DIR, EN> Actuator for Stepper<STEP, DIR, EN>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
{
    fn set_enabled(&mut self, enabled: bool) {
        if enabled {
            self.enable.set_low().ok();
        } else {
            self.enable.set_high().ok();
            if self.pulse_started_us.is_some() {
                self.end_pulse();
            }
        }
        self.enabled = enabled;
    }

    fn set_speed_and_max(&mut self, speed: f32, max_speed: f32) {
        self.set_max_speed(max_speed);
        self.set_speed(speed);
    }

    fn run_step(&mut self, now_us: u32) {
        if let Some(started) = self.pulse_started_us {
            if now_us.wrapping_sub(started) >= self.min_pulse_width_us {
                self.end_pulse();
            }
            return;
        }

        if !self.enabled || self.step_interval_us == 0 {
            return;
        }

        if now_us.wrapping_sub(self.last_step_us) >= self.step_interval_us {
            self.position += if self.speed > 0.0 { 1 } else { -1 };
            self.step.set_high().ok();
            self.pulse_started_us = Some(now_us);
            self.last_step_us = now_us;
        }
    }
}
