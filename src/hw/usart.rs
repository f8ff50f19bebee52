// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! USART abstraction layer.
//!
//! TX carries diagnostics to the attached terminal; RX carries command lines from it. Neither
//! direction blocks: writes land in a queue that [`Usart::pump_tx`] feeds to the transmitter, and
//! reads return `None` when nothing has arrived.
//!
//! Note: When using `writeln!`, be sure to include `\r` (CR) in the format string to ensure correct
//! line endings on the terminal.
//!
//! To access the terminal on the host machine, connect to the debug USB port and use
//! ```text
//! $ screen /dev/tty.usbmodem* <baud_rate>
//! ```
//!
//! To close the debug terminal, press `Ctrl+A` then `Ctrl+\` then `y`.

use core::fmt;

use stm32f7xx_hal::{
    prelude::*,
    serial::{Instance, Pins, Rx, Serial, Tx},
};

use crate::config::TX_CAPACITY;
use crate::protocol::{ByteSource, TxQueue};

pub struct Usart<U: Instance> {
    tx: Tx<U>,
    rx: Rx<U>,
    out: TxQueue<TX_CAPACITY>,
}

impl<U: Instance> Usart<U> {
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, rx) = serial.split();
        Self {
            tx,
            rx,
            out: TxQueue::new(),
        }
    }

    /// Queue `s` for transmission. Dropped in part if the queue is full.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push(s.as_bytes());
    }

    /// Move queued bytes into the transmitter until it is busy. Call once per loop iteration.
    #[inline]
    pub fn pump_tx(&mut self) -> usize {
        let tx = &mut self.tx;
        self.out.drain(|b| tx.write(b))
    }

    /// Next received byte, if one is waiting. Overrun/framing errors drop the byte.
    #[inline]
    pub fn read_byte(&mut self) -> Option<u8> {
        self.rx.read().ok()
    }
}

/// A UART has no link-up signal, so the default `is_ready` (always ready) applies and
/// [`wait_ready`](crate::protocol::line::wait_ready) returns immediately.
impl<U: Instance> ByteSource for Usart<U> {
    fn read_byte(&mut self) -> Option<u8> {
        Usart::read_byte(self)
    }
}

// Implement `core::fmt::Write` so we can use `write!` / `writeln!` on `Usart`.
impl<U: Instance> fmt::Write for Usart<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Usart::write_str(self, s);
        Ok(())
    }
}
