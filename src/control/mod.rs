// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Control
//!
//! ## Modules
//!
//! - [`actuator`] - Interface to one winch drive.
//! - [`axis`] - Idle/running state of a single winch.
//! - [`control_loop`] - Polling loop tying input, kinematics and winches together.

pub mod actuator;
pub mod axis;
pub mod control_loop;

pub use actuator::Actuator;
pub use axis::AxisState;
pub use control_loop::ControlLoop;
