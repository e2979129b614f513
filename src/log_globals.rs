//! Global log stream instance.
//!
//! Every console instance logs here; the drain side is owned by whatever
//! idle loop forwards diagnostics (see `log_drain`).

use crate::logging::LogStream;

/// Console diagnostics stream.
///
/// Producers: console instances (and ISR glue if it wants to report
/// overruns). Single consumer: the log drain.
pub static CONSOLE_LOG_STREAM: LogStream = LogStream::new();
