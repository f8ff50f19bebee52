// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! MCU-level wrappers: serial port, microsecond timer, status LED and board pin map.

pub mod clock;
pub mod led;
pub mod pins;
pub mod usart;

pub use clock::MicrosTimer;
pub use led::Led;
pub use pins::{BoardPins, WinchPins};
pub use usart::Usart;
