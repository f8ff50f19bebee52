// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the STM32F777 winch controller board.

use stm32f7xx_hal::{
    gpio::{gpioa, gpiod, Alternate, ErasedPin, Output, PushPull},
    pac,
    prelude::*,
};

use crate::geometry::PerAnchor;

/// Type-erased push-pull output, so all four winches share one driver type.
pub type WinchOutput = ErasedPin<Output<PushPull>>;

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOD, dp.GPIOE);
/// ```
pub struct BoardPins {
    pub status_led: gpiod::PD10<Output<PushPull>>,
    pub usart1: Usart1Pins,
    pub winches: PerAnchor<WinchPins>,
}

pub struct Usart1Pins {
    pub tx: gpioa::PA9<Alternate<7>>,
    pub rx: gpioa::PA10<Alternate<7>>,
}

/// STEP/DIR/ENABLE for one winch driver. ENABLE is active-low.
pub struct WinchPins {
    pub step: WinchOutput,
    pub dir: WinchOutput,
    pub enable: WinchOutput,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(gpioa: pac::GPIOA, gpiod: pac::GPIOD, gpioe: pac::GPIOE) -> Self {
        let gpioa = gpioa.split();
        let gpiod = gpiod.split();
        let gpioe = gpioe.split();

        Self {
            status_led: gpiod.pd10.into_push_pull_output(),

            usart1: Usart1Pins {
                tx: gpioa.pa9.into_alternate::<7>(),
                rx: gpioa.pa10.into_alternate::<7>(),
            },

            winches: PerAnchor::new(
                // Left top
                WinchPins {
                    step: gpiod.pd12.into_push_pull_output().erase(),
                    dir: gpiod.pd13.into_push_pull_output().erase(),
                    enable: gpioa.pa4.into_push_pull_output().erase(),
                },
                // Left bottom
                WinchPins {
                    step: gpiod.pd14.into_push_pull_output().erase(),
                    dir: gpiod.pd15.into_push_pull_output().erase(),
                    enable: gpiod.pd2.into_push_pull_output().erase(),
                },
                // Right top
                WinchPins {
                    step: gpioe.pe7.into_push_pull_output().erase(),
                    dir: gpioe.pe8.into_push_pull_output().erase(),
                    enable: gpioe.pe9.into_push_pull_output().erase(),
                },
                // Right bottom
                WinchPins {
                    step: gpioe.pe10.into_push_pull_output().erase(),
                    dir: gpioe.pe11.into_push_pull_output().erase(),
                    enable: gpioe.pe15.into_push_pull_output().erase(),
                },
            ),
        }
    }
}
