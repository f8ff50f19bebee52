// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Quadwinch Firmware
//!
//! Firmware for a four-winch cable rig: one stepper-driven winch at each corner of a rectangular
//! frame, all cables meeting at a common carriage. Targets an STM32F777 MCU.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`geometry`] | Workspace, points, anchors |
//! | [`kinematics`] | Carriage position to cable lengths |
//! | [`rig`] | Current cable lengths of the rig |
//! | [`protocol`] | Serial command lines |
//! | [`control`] | Winch interface and the main polling loop |
//! | [`drivers`] | STEP/DIR stepper driver |
//! | [`hw`] | MCU-level wrappers around USART, timers, GPIO |
//! | [`config`] | Compile-time rig configuration |
//!
//! ## Getting Started
//!
//! Run the unit tests on the host:
//!
//! ```bash
//! cargo test --lib
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release
//! ```
//!
//! Send `3200 3200` on the serial port to run the default winch, `0 0` to stop it, and
//! `P <x> <y>` to compute the cable lengths for a carriage target.
//!
//! ## License
//!
//! Licensed under the **MIT License**.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod drivers;
pub mod geometry;
pub mod hw;
pub mod kinematics;
pub mod protocol;
pub mod rig;
