// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Free-running microsecond timebase on TIM2.
//!
//! TIM2 is 32-bit, so with a 1 MHz tick the counter itself is the wrapping microsecond timestamp
//! the stepper drivers expect (wraps every ~71.6 minutes).

use stm32f7xx_hal::pac;

pub struct MicrosTimer {
    tim: pac::TIM2,
}

impl MicrosTimer {
    /// Start TIM2 counting at 1 MHz. `timer_clock_hz` is the APB1 timer clock.
    pub fn tim2(tim2: pac::TIM2, timer_clock_hz: u32) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim2en().set_bit());

        let tim = tim2;

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        let psc = (timer_clock_hz / 1_000_000).saturating_sub(1);
        tim.psc.write(|w| unsafe { w.bits(psc) });

        // Auto-reload: max 32-bit
        tim.arr.write(|w| w.bits(0xFFFF_FFFF));

        // Latch the prescaler
        tim.egr.write(|w| w.ug().set_bit());

        tim.cnt.write(|w| w.bits(0));
        tim.cr1.modify(|_, w| w.cen().set_bit());

        Self { tim }
    }

    /// Microseconds since start, wrapping.
    #[inline]
    pub fn now_us(&self) -> u32 {
        self.tim.cnt.read().cnt().bits()
    }

    pub fn free(self) -> pac::TIM2 {
        self.tim
    }
}
