// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Queued serial output.
//!
//! Diagnostics are written into a fixed queue and never wait on the wire. The main loop moves a
//! few bytes to the transmitter on each iteration with [`TxQueue::drain`]. Bytes written while the
//! queue is full are dropped and counted.

use core::fmt;

use heapless::Deque;

pub struct TxQueue<const N: usize> {
    buf: Deque<u8, N>,
    dropped: u32,
}

impl<const N: usize> TxQueue<N> {
    pub const fn new() -> Self {
        Self {
            buf: Deque::new(),
            dropped: 0,
        }
    }

    pub fn push(&mut self, bytes: &[u8]) {
        for &b in bytes {
            if self.buf.push_back(b).is_err() {
                self.dropped = self.dropped.wrapping_add(1);
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Bytes lost to a full queue since construction.
    #[inline]
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Hand queued bytes to `write` in order until it reports `WouldBlock`.
    ///
    /// Returns the number of bytes accepted. A byte rejected with an error is discarded.
    pub fn drain<E>(&mut self, mut write: impl FnMut(u8) -> nb::Result<(), E>) -> usize {
        let mut sent = 0;
        while let Some(&b) = self.buf.front() {
            match write(b) {
                Ok(()) => sent += 1,
                Err(nb::Error::WouldBlock) => break,
                Err(nb::Error::Other(_)) => {}
            }
            self.buf.pop_front();
        }
        sent
    }
}

impl<const N: usize> Default for TxQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Write for TxQueue<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push(s.as_bytes());
        Ok(())
    }
}
