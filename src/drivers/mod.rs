// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! Drivers sit above the raw `hw/` layer and implement the control-side traits.
//!
//! ## Existing drivers
//!
//! - [`stepper`] – STEP/DIR/ENABLE stepper driver (DRV8825 class) for the winch motors

pub mod stepper;

pub use stepper::Stepper;
