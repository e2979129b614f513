//! # RustMiniCli
//!
//! Line-editing command console for devices behind a serial port.
//!
//! ## Architecture
//!
//! ```text
//! UART ISR ──▶ ByteRing ──▶ LineAssembler ──▶ parse_line ──▶ Registry
//!              (lock-free)   (echo, editing)   (tokens)       (handlers)
//! ```
//!
//! - Platform I/O is reached only through the [`Transport`] trait
//! - Everything is polled; nothing blocks, nothing allocates
//! - Output uses a small `printf` subset ([`cli_printf!`])
//!
//! ## Example
//!
//! ```
//! use rust_mini_cli::{Console, ConsoleConfig, MemoryTransport};
//! use rust_mini_cli::console::CommandContext;
//!
//! fn led(ctx: &mut CommandContext<'_>, argv: &[&[u8]]) {
//!     rust_mini_cli::cli_printf!(ctx, "led %s\n", argv.first().copied().unwrap_or(&b"?"[..]));
//! }
//!
//! let mut io: MemoryTransport = MemoryTransport::new();
//! io.feed(b"led on\r\n");
//!
//! let mut console = Console::new(io, ConsoleConfig::default());
//! console.add("led", led, "led [on/off]").unwrap();
//! while console.transport().pending_input() > 0 {
//!     console.run();
//! }
//! assert!(console.transport().output_str().ends_with("led on\n"));
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod config;
pub mod console;
pub mod hal;
pub mod log_drain;
pub mod log_globals;
pub mod logging;
pub mod output;
pub mod ring;
pub mod transport;

pub use config::ConsoleConfig;
pub use console::{Console, ConsoleError, ParsedCommand};
pub use hal::{MemoryTransport, RingTransport};
pub use log_globals::CONSOLE_LOG_STREAM;
pub use output::{printf, Arg};
pub use ring::ByteRing;
pub use transport::{Clock, Transport, TransportError};
