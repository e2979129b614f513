//! Lock-free SPSC (Single Producer, Single Consumer) byte ring.
//!
//! Carries received bytes from the UART interrupt (or a reader thread)
//! to the console, which drains it from its poll loop.
//!
//! ```text
//! ISR / reader ──push──▶ ByteRing ──pop──▶ Console poll
//!                        (lock-free)
//! ```
//!
//! # Rules
//!
//! - Only the producer advances `head`, only the consumer advances `tail`
//! - Index publication uses Release, observation uses Acquire
//! - No operation blocks; a full ring drops the incoming byte
//!
//! # Overflow
//!
//! A full ring rejects the newest byte and counts it in `dropped()`
//! instead of overwriting the oldest unread one. Overwriting would make
//! the producer move `tail`, which only the consumer may touch, and the
//! console could then see a line or escape sequence with bytes missing
//! from its middle. Dropping keeps every byte already queued intact.

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

/// Default ring size in bytes.
pub const DEFAULT_RING_SIZE: usize = 256;

/// Lock-free byte ring buffer.
///
/// # Safety
///
/// Uses `UnsafeCell` internally. Sound as long as at most one context
/// pushes and at most one context pops at a time (enforced by convention,
/// as with any ISR-shared buffer).
pub struct ByteRing<const N: usize = DEFAULT_RING_SIZE> {
    slots: UnsafeCell<[u8; N]>,
    /// Next write position (producer only).
    head: AtomicUsize,
    /// Next read position (consumer only).
    tail: AtomicUsize,
    /// Bytes rejected because the ring was full.
    dropped: AtomicU32,
}

// SAFETY: Single producer, single consumer, atomic coordination.
unsafe impl<const N: usize> Sync for ByteRing<N> {}
unsafe impl<const N: usize> Send for ByteRing<N> {}

impl<const N: usize> ByteRing<N> {
    /// Mask for wrapping index to buffer size.
    const MASK: usize = N - 1;

    /// Create a new empty ring.
    ///
    /// # Panics
    ///
    /// Panics at compile time if N is not a power of 2.
    pub const fn new() -> Self {
        assert!(N.is_power_of_two(), "Ring size must be power of 2");

        Self {
            slots: UnsafeCell::new([0u8; N]),
            head: AtomicUsize::new(0),
            tail: AtomicUsize::new(0),
            dropped: AtomicU32::new(0),
        }
    }

    /// Push a byte (producer side).
    ///
    /// Returns `false` and counts a drop if the ring is full.
    #[inline]
    pub fn push(&self, byte: u8) -> bool {
        let head = self.head.load(Ordering::Relaxed);
        let tail = self.tail.load(Ordering::Acquire);

        if head.wrapping_sub(tail) >= N {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return false;
        }

        // SAFETY: Slot `head` is outside the consumer's readable window
        // until the Release store below publishes it.
        unsafe {
            (*self.slots.get())[head & Self::MASK] = byte;
        }
        self.head.store(head.wrapping_add(1), Ordering::Release);
        true
    }

    /// Push as many bytes as fit, returning how many were accepted.
    pub fn push_slice(&self, bytes: &[u8]) -> usize {
        bytes.iter().take_while(|&&b| self.push(b)).count()
    }

    /// Pop a byte (consumer side).
    #[inline]
    pub fn pop(&self) -> Option<u8> {
        let tail = self.tail.load(Ordering::Relaxed);
        let head = self.head.load(Ordering::Acquire);

        if head == tail {
            return None;
        }

        // SAFETY: Slot `tail` was published by the producer's Release store
        // and will not be rewritten until `tail` advances.
        let byte = unsafe { (*self.slots.get())[tail & Self::MASK] };
        self.tail.store(tail.wrapping_add(1), Ordering::Release);
        Some(byte)
    }

    /// Number of bytes waiting to be popped.
    #[inline]
    pub fn len(&self) -> usize {
        let head = self.head.load(Ordering::Acquire);
        let tail = self.tail.load(Ordering::Acquire);
        head.wrapping_sub(tail)
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes dropped because the ring was full.
    #[inline]
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Reset dropped counter (e.g., after reporting).
    #[inline]
    pub fn reset_dropped(&self) {
        self.dropped.store(0, Ordering::Relaxed);
    }

    /// Get the buffer capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for ByteRing<N> {
    fn default() -> Self {
        Self::new()
    }
}
