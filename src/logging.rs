//! Non-blocking diagnostics log for the console.
//!
//! # Architecture
//!
//! ```text
//! Console / ISR          LogStream            Drain (idle loop)
//! ─────────────          ─────────            ─────────────────
//!
//! cli_log!() ──────────▶ [L0][L1][L2] ──────▶ Transport / stderr
//! non-blocking            lock-free           blocking ok
//! ```
//!
//! # Rules
//!
//! - Logging never writes to the console transport directly: the console
//!   shares its wire with the operator and must only emit echo and output.
//! - Messages may be dropped if the ring is full.

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicU32, Ordering};

/// Maximum message length.
pub const MAX_MSG_LEN: usize = 80;

/// Log buffer size (number of entries).
pub const LOG_BUFFER_SIZE: usize = 32;

/// Log level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    /// Convert to string for output.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

/// A single log entry.
#[derive(Clone, Copy)]
#[repr(C)]
pub struct LogEntry {
    /// Sequence number (position in the stream since boot).
    pub seq: u32,
    /// Log level.
    pub level: LogLevel,
    /// Message length.
    pub len: u8,
    /// Message bytes (not null-terminated).
    pub msg: [u8; MAX_MSG_LEN],
}

impl LogEntry {
    const EMPTY: Self = Self {
        seq: 0,
        level: LogLevel::Info,
        len: 0,
        msg: [0; MAX_MSG_LEN],
    };

    /// Message as text.
    pub fn message(&self) -> &str {
        core::str::from_utf8(&self.msg[..self.len as usize]).unwrap_or("<invalid utf8>")
    }
}

impl Default for LogEntry {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// One ring slot: the entry plus its publication stamp.
struct Slot {
    /// `seq + 1` of the entry last published here (0 = never written).
    committed: AtomicU32,
    entry: UnsafeCell<LogEntry>,
}

#[allow(clippy::declare_interior_mutable_const)]
const EMPTY_SLOT: Slot = Slot {
    committed: AtomicU32::new(0),
    entry: UnsafeCell::new(LogEntry::EMPTY),
};

/// Lock-free log stream (multiple producers, single consumer).
///
/// - Producers reserve a position with a CAS on `write_idx`, fill the slot,
///   then publish it through the slot's `committed` stamp
/// - The reader only copies a slot whose stamp says it is published
/// - Push never blocks (drops message if full)
/// - Drain runs from the idle loop at leisure
pub struct LogStream<const N: usize = LOG_BUFFER_SIZE> {
    slots: [Slot; N],
    write_idx: AtomicU32,
    read_idx: AtomicU32,
    dropped: AtomicU32,
}

// SAFETY: A slot's payload is written only by the producer that reserved
// its position and read only after the Release/Acquire pair on
// `committed`. Producers never reserve past `read_idx`, so a slot being
// copied by the reader is never rewritten.
unsafe impl<const N: usize> Sync for LogStream<N> {}
unsafe impl<const N: usize> Send for LogStream<N> {}

impl<const N: usize> LogStream<N> {
    const MASK: usize = N - 1;

    /// Create a new empty log stream.
    pub const fn new() -> Self {
        assert!(N.is_power_of_two(), "Log buffer size must be power of 2");

        Self {
            slots: [EMPTY_SLOT; N],
            write_idx: AtomicU32::new(0),
            read_idx: AtomicU32::new(0),
            dropped: AtomicU32::new(0),
        }
    }

    /// Push a log entry (never blocks).
    ///
    /// Returns `true` if message was queued, `false` if dropped (ring full).
    /// Messages longer than [`MAX_MSG_LEN`] are truncated.
    #[inline]
    pub fn push(&self, level: LogLevel, msg: &[u8]) -> bool {
        let read = self.read_idx.load(Ordering::Acquire);
        let mut write = self.write_idx.load(Ordering::Relaxed);

        // Reserve a slot only if one is free, so a full ring never
        // advances write_idx past the reader.
        loop {
            if write.wrapping_sub(read) >= N as u32 {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                return false;
            }
            match self.write_idx.compare_exchange_weak(
                write,
                write.wrapping_add(1),
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(current) => write = current,
            }
        }

        let slot = &self.slots[(write as usize) & Self::MASK];

        // SAFETY: Position `write` was reserved by the CAS above and the
        // reader has already released this slot (write - read < N). The
        // reader will not touch it until `committed` is published below.
        unsafe {
            let entry = &mut *slot.entry.get();
            let len = msg.len().min(MAX_MSG_LEN);
            entry.seq = write;
            entry.level = level;
            entry.len = len as u8;
            entry.msg[..len].copy_from_slice(&msg[..len]);
        }
        slot.committed.store(write.wrapping_add(1), Ordering::Release);

        true
    }

    /// Drain next log entry.
    ///
    /// Returns `None` if no entries available, or if the next entry is
    /// reserved but its producer has not finished writing it yet.
    #[inline]
    pub fn drain(&self) -> Option<LogEntry> {
        let read = self.read_idx.load(Ordering::Relaxed);
        let slot = &self.slots[(read as usize) & Self::MASK];

        if slot.committed.load(Ordering::Acquire) != read.wrapping_add(1) {
            return None;
        }

        // SAFETY: Single consumer; the Acquire above pairs with the
        // producer's Release, so the payload is complete.
        let entry = unsafe { *slot.entry.get() };

        self.read_idx.store(read.wrapping_add(1), Ordering::Release);
        Some(entry)
    }

    /// Get count of dropped messages.
    #[inline]
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Reset dropped counter (e.g., after reporting).
    #[inline]
    pub fn reset_dropped(&self) {
        self.dropped.store(0, Ordering::Relaxed);
    }

    /// Check if there are entries to drain.
    #[inline]
    pub fn has_entries(&self) -> bool {
        self.pending() != 0
    }

    /// Get number of entries waiting to be drained (including ones still
    /// being written).
    #[inline]
    pub fn pending(&self) -> u32 {
        let read = self.read_idx.load(Ordering::Relaxed);
        let write = self.write_idx.load(Ordering::Acquire);
        write.wrapping_sub(read)
    }
}

impl<const N: usize> Default for LogStream<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a message into a buffer, truncating at the end of `buf`.
///
/// Returns the number of bytes written.
#[inline]
pub fn format_to_buffer(buf: &mut [u8], args: core::fmt::Arguments<'_>) -> usize {
    use core::fmt::Write;

    struct BufWriter<'a> {
        buf: &'a mut [u8],
        pos: usize,
    }

    impl<'a> Write for BufWriter<'a> {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            let bytes = s.as_bytes();
            let remaining = self.buf.len() - self.pos;
            let to_write = bytes.len().min(remaining);
            self.buf[self.pos..self.pos + to_write].copy_from_slice(&bytes[..to_write]);
            self.pos += to_write;
            Ok(())
        }
    }

    let mut writer = BufWriter { buf, pos: 0 };
    let _ = core::fmt::write(&mut writer, args);
    writer.pos
}

/// Log macro.
///
/// # Example
///
/// ```ignore
/// cli_log!(LogLevel::Info, CONSOLE_LOG_STREAM, "registered '{}'", name);
/// ```
#[macro_export]
macro_rules! cli_log {
    ($level:expr, $stream:expr, $($arg:tt)*) => {{
        let mut buf = [0u8; $crate::logging::MAX_MSG_LEN];
        let len = $crate::logging::format_to_buffer(&mut buf, format_args!($($arg)*));
        $stream.push($level, &buf[..len]);
    }};
}

/// Info log.
#[macro_export]
macro_rules! cli_info {
    ($stream:expr, $($arg:tt)*) => {
        $crate::cli_log!($crate::logging::LogLevel::Info, $stream, $($arg)*)
    };
}

/// Warning log.
#[macro_export]
macro_rules! cli_warn {
    ($stream:expr, $($arg:tt)*) => {
        $crate::cli_log!($crate::logging::LogLevel::Warn, $stream, $($arg)*)
    };
}

/// Error log.
#[macro_export]
macro_rules! cli_error {
    ($stream:expr, $($arg:tt)*) => {
        $crate::cli_log!($crate::logging::LogLevel::Error, $stream, $($arg)*)
    };
}

/// Debug log.
#[macro_export]
macro_rules! cli_debug {
    ($stream:expr, $($arg:tt)*) => {
        $crate::cli_log!($crate::logging::LogLevel::Debug, $stream, $($arg)*)
    };
}
