// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Line assembly on top of a non-blocking byte stream.
//!
//! The control loop must never wait on input, so bytes are collected across loop iterations and a
//! line is only handed out once its `\n` has arrived.

use heapless::Vec;

/// A non-blocking source of received bytes (e.g. a UART RX half).
pub trait ByteSource {
    /// Next received byte, or `None` if nothing is pending.
    fn read_byte(&mut self) -> Option<u8>;

    /// Whether the channel is up. Checked once at startup by [`wait_ready`].
    fn is_ready(&self) -> bool {
        true
    }
}

/// Block until `src` reports ready. Only used before the control loop starts.
pub fn wait_ready<S: ByteSource>(src: &S) {
    while !src.is_ready() {
        cortex_m::asm::nop();
    }
}

/// Fixed-capacity line buffer.
///
/// `\r` is dropped. A line longer than `N` bytes is discarded up to and including its `\n`.
pub struct LineReader<const N: usize> {
    buf: Vec<u8, N>,
    complete: bool,
    overflow: bool,
}

impl<const N: usize> LineReader<N> {
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            complete: false,
            overflow: false,
        }
    }

    /// Drain pending bytes from `src` and return the next complete line, if any.
    ///
    /// At most one line is returned per call; bytes after its `\n` stay in `src`.
    pub fn poll<S: ByteSource>(&mut self, src: &mut S) -> Option<&str> {
        if self.complete {
            self.buf.clear();
            self.complete = false;
        }

        while let Some(byte) = src.read_byte() {
            match byte {
                b'\n' => {
                    if self.overflow {
                        self.overflow = false;
                        self.buf.clear();
                        continue;
                    }
                    self.complete = true;
                    return Some(utf8_prefix(&self.buf));
                }
                b'\r' => {}
                _ if self.overflow => {}
                _ => {
                    if self.buf.push(byte).is_err() {
                        self.overflow = true;
                    }
                }
            }
        }
        None
    }
}

impl<const N: usize> Default for LineReader<N> {
    fn default() -> Self {
        Self::new()
    }
}

// Longest valid UTF-8 prefix; garbage after it is dropped.
fn utf8_prefix(bytes: &[u8]) -> &str {
    match core::str::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => core::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct Rx(VecDeque<u8>);

    impl Rx {
        fn new(bytes: &[u8]) -> Self {
            Rx(bytes.iter().copied().collect())
        }

        fn feed(&mut self, bytes: &[u8]) {
            self.0.extend(bytes.iter().copied());
        }
    }

    impl ByteSource for Rx {
        fn read_byte(&mut self) -> Option<u8> {
            self.0.pop_front()
        }
    }

    #[test]
    fn assembles_line_across_polls() {
        let mut rx = Rx::new(b"3200 ");
        let mut lines = LineReader::<32>::new();
        assert_eq!(lines.poll(&mut rx), None);

        rx.feed(b"3200\r\n");
        assert_eq!(lines.poll(&mut rx), Some("3200 3200"));
        assert_eq!(lines.poll(&mut rx), None);
    }

    #[test]
    fn one_line_per_poll() {
        let mut rx = Rx::new(b"1 2\n3 4\n");
        let mut lines = LineReader::<32>::new();
        assert_eq!(lines.poll(&mut rx), Some("1 2"));
        assert_eq!(rx.0.len(), 4);
        assert_eq!(lines.poll(&mut rx), Some("3 4"));
        assert_eq!(lines.poll(&mut rx), None);
    }

    #[test]
    fn empty_line_is_delivered() {
        let mut rx = Rx::new(b"\n");
        let mut lines = LineReader::<8>::new();
        assert_eq!(lines.poll(&mut rx), Some(""));
    }

    #[test]
    fn overlong_line_is_discarded() {
        let mut rx = Rx::new(b"123456789 123456789\n5 6\n");
        let mut lines = LineReader::<8>::new();
        assert_eq!(lines.poll(&mut rx), Some("5 6"));
    }

    #[test]
    fn invalid_utf8_is_truncated() {
        let mut rx = Rx::new(b"12 \xFF34\n");
        let mut lines = LineReader::<16>::new();
        assert_eq!(lines.poll(&mut rx), Some("12 "));
    }

    #[test]
    fn wait_ready_returns_for_ready_source() {
        wait_ready(&Rx::new(b""));
    }
}
