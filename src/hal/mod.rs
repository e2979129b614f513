//! Platform adapters implementing [`Transport`](crate::transport::Transport).
//!
//! Thin wrappers around each platform's byte channel.
//! Business logic stays in `console`, HAL is just I/O.

pub mod memory;
pub mod ring;

#[cfg(feature = "std")]
pub mod stdio;

#[cfg(target_os = "espidf")]
pub mod espidf;

pub use memory::MemoryTransport;
pub use ring::RingTransport;

#[cfg(feature = "std")]
pub use stdio::{StdClock, StderrSink, StdioTransport};

#[cfg(target_os = "espidf")]
pub use espidf::{EspClock, UartTransport};
