//! Transport over an interrupt-fed [`ByteRing`].
//!
//! The RX interrupt (or a reader thread) owns the producer side of the
//! ring and is handed the ring explicitly at setup; the console drains it
//! through this adapter. Output goes to a caller-supplied byte sink,
//! typically a blocking UART TX write.

use crate::ring::ByteRing;
use crate::transport::Transport;

/// Ring-backed transport
pub struct RingTransport<'a, W: FnMut(u8), const N: usize> {
    rx: &'a ByteRing<N>,
    tx: W,
}

impl<'a, W: FnMut(u8), const N: usize> RingTransport<'a, W, N> {
    /// Consume from `rx`, write through `tx`
    pub fn new(rx: &'a ByteRing<N>, tx: W) -> Self {
        Self { rx, tx }
    }

    /// The ring being drained
    pub fn ring(&self) -> &'a ByteRing<N> {
        self.rx
    }
}

impl<W: FnMut(u8), const N: usize> Transport for RingTransport<'_, W, N> {
    fn available(&mut self) -> usize {
        self.rx.len()
    }

    fn read_byte(&mut self) -> u8 {
        self.rx.pop().unwrap_or(0)
    }

    fn write_byte(&mut self, byte: u8) {
        (self.tx)(byte)
    }
}
