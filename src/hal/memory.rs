//! In-memory transport.
//!
//! Input is queued with [`MemoryTransport::feed`], everything the console
//! writes is kept for inspection. Used for loopback setups, scripted
//! hosts and tests.

use heapless::{Deque, Vec};

use crate::transport::Transport;

/// Fixed-capacity loopback transport
pub struct MemoryTransport<const IN: usize = 256, const OUT: usize = 2048> {
    rx: Deque<u8, IN>,
    tx: Vec<u8, OUT>,
    /// Output bytes lost because `tx` was full
    tx_overflow: usize,
}

impl<const IN: usize, const OUT: usize> MemoryTransport<IN, OUT> {
    /// Create empty transport
    pub const fn new() -> Self {
        Self {
            rx: Deque::new(),
            tx: Vec::new(),
            tx_overflow: 0,
        }
    }

    /// Queue input bytes. Returns how many fit.
    pub fn feed(&mut self, bytes: &[u8]) -> usize {
        bytes
            .iter()
            .take_while(|&&b| self.rx.push_back(b).is_ok())
            .count()
    }

    /// Queue input text
    pub fn feed_str(&mut self, s: &str) -> usize {
        self.feed(s.as_bytes())
    }

    /// Bytes still waiting to be read
    pub fn pending_input(&self) -> usize {
        self.rx.len()
    }

    /// Everything written so far
    pub fn output(&self) -> &[u8] {
        &self.tx
    }

    /// Output as text (empty if not valid UTF-8)
    pub fn output_str(&self) -> &str {
        core::str::from_utf8(&self.tx).unwrap_or("")
    }

    /// Drop captured output
    pub fn clear_output(&mut self) {
        self.tx.clear();
        self.tx_overflow = 0;
    }

    /// Output bytes lost to a full buffer
    pub fn output_overflow(&self) -> usize {
        self.tx_overflow
    }
}

impl<const IN: usize, const OUT: usize> Default for MemoryTransport<IN, OUT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const IN: usize, const OUT: usize> Transport for MemoryTransport<IN, OUT> {
    fn available(&mut self) -> usize {
        self.rx.len()
    }

    fn read_byte(&mut self) -> u8 {
        self.rx.pop_front().unwrap_or(0)
    }

    fn write_byte(&mut self, byte: u8) {
        if self.tx.push(byte).is_err() {
            self.tx_overflow += 1;
        }
    }
}
