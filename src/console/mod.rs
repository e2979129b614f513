//! Serial console: line editing, tokenizing and command dispatch
//!
//! Lazy polling from the application loop - no dedicated task.
//! Zero heap allocation - all static buffers.

pub mod assembler;
pub mod commands;
#[allow(clippy::module_inception)]
pub mod console;
pub mod error;
pub mod escape;
pub mod line_buffer;
pub mod parser;

pub use assembler::LineAssembler;
pub use commands::{CommandContext, CommandEntry, CommandHandler, Registry, HELP_COMMAND};
pub use console::{Console, VERSION};
pub use error::ConsoleError;
pub use escape::{EditAction, EscapeRecognizer, Feed};
pub use line_buffer::EditBuffer;
pub use parser::{parse_line, Latin1, ParsedCommand};
