//! Log drain: forwards diagnostics to a byte sink.
//!
//! Runs from the idle loop, never from the console poll path. The sink is
//! any [`Transport`]: a second UART, stderr on hosts, or the console port
//! itself when the operator asked for it.
//!
//! ```text
//! CONSOLE_LOG_STREAM ──drain──▶ format ──▶ Transport
//! ```

use crate::logging::{LogEntry, LogStream};
use crate::transport::Transport;

/// Formatted entry size limit
const FORMAT_BUF_LEN: usize = 128;

/// Format log entry to string.
///
/// Format: `[seq] LEVEL: message\n`
fn format_log_entry(entry: &LogEntry, buf: &mut [u8]) -> usize {
    crate::logging::format_to_buffer(
        buf,
        format_args!("[{:6}] {}: {}\n", entry.seq, entry.level.as_str(), entry.message()),
    )
}

/// Write a log entry to `out`.
pub fn write_log_entry<T: Transport + ?Sized>(out: &mut T, entry: &LogEntry) {
    let mut format_buf = [0u8; FORMAT_BUF_LEN];
    let len = format_log_entry(entry, &mut format_buf);
    out.write_bytes(&format_buf[..len]);
}

/// Drain every pending entry of `stream` into `out`.
///
/// Reports and resets the dropped-message counter afterwards. Returns the
/// number of entries written.
pub fn drain_to<T: Transport + ?Sized, const N: usize>(stream: &LogStream<N>, out: &mut T) -> usize {
    let mut count = 0;

    while let Some(entry) = stream.drain() {
        write_log_entry(out, &entry);
        count += 1;
    }

    let dropped = stream.dropped();
    if dropped > 0 {
        let mut msg = [0u8; 48];
        let len = crate::logging::format_to_buffer(&mut msg, format_args!("[WARN] Dropped: {}\n", dropped));
        out.write_bytes(&msg[..len]);
        stream.reset_dropped();
    }

    count
}
