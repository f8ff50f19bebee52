#![no_main]
#![no_std]

use cortex_m_rt::entry;
use panic_halt as _;

use hal::{
    pac,
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use quadwinch::{
    config::{self, Settings},
    control::ControlLoop,
    drivers::Stepper,
    hw::{BoardPins, Led, MicrosTimer, Usart},
    protocol::{line, LineReader},
};

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    // GPIO
    let pins = BoardPins::new(dp.GPIOA, dp.GPIOD, dp.GPIOE);

    // LED on while any winch runs
    let mut status = Led::active_low(pins.status_led);

    // USART1 (commands in, diagnostics out)
    let usart_cfg = Config {
        baud_rate: config::BAUD_RATE.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART1,
        (pins.usart1.tx, pins.usart1.rx),
        &clocks,
        usart_cfg,
    );
    let mut usart = Usart::new(serial);

    // TIM2 1 MHz timebase
    let timer = MicrosTimer::tim2(dp.TIM2, clocks.timclk1().raw());

    // Winches
    let winches = pins
        .winches
        .map(|p| Stepper::new(p.step, p.dir, p.enable));
    let mut control = ControlLoop::new(config::workspace(), winches, Settings::default());
    let mut lines = LineReader::<{ config::LINE_CAPACITY }>::new();

    line::wait_ready(&usart);
    control.start(&mut usart);

    loop {
        let line = lines.poll(&mut usart);
        control.cycle(line, timer.now_us(), &mut usart);
        usart.pump_tx();
        status.set(control.any_running());
    }
}
