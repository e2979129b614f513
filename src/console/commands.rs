//! Command registry and handler context

use heapless::Vec;

use super::ConsoleError;
use crate::config::{MAX_COMMANDS, MAX_DESCRIPTION_LEN};
use crate::log_globals::CONSOLE_LOG_STREAM;
use crate::output::{printf, Arg};
use crate::transport::{Transport, TransportError};
use crate::{cli_info, cli_warn};

/// Name answered by the builtin help
pub const HELP_COMMAND: &str = "help";

/// Description listed for the builtin help
pub const HELP_DESCRIPTION: &str = "Shows all available commands and their description.";

/// Command callback. Receives the argument bytes (their count is argc).
pub type CommandHandler = fn(&mut CommandContext<'_>, &[&[u8]]);

/// Command descriptor
#[derive(Clone, Copy)]
pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub handler: CommandHandler,
}

impl core::fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CommandEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

/// Append-only command table
///
/// Lookup is a linear exact-match scan in insertion order; the first
/// match wins.
pub struct Registry {
    entries: Vec<CommandEntry, MAX_COMMANDS>,
    builtin_help: bool,
}

impl Registry {
    /// Create empty registry (builtin help off until the first add)
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            builtin_help: false,
        }
    }

    /// Register a command.
    ///
    /// Fails without touching the table if it is full or if `name` or
    /// `description` is empty. The first successful add enables the
    /// builtin `help`; registering `help` itself replaces it.
    pub fn add(
        &mut self,
        name: &'static str,
        handler: CommandHandler,
        description: &'static str,
    ) -> Result<(), ConsoleError> {
        if name.is_empty() {
            return Err(ConsoleError::EmptyName);
        }
        if description.is_empty() {
            return Err(ConsoleError::EmptyDescription);
        }

        let entry = CommandEntry { name, description, handler };
        if self.entries.push(entry).is_err() {
            cli_warn!(CONSOLE_LOG_STREAM, "command table full, '{}' not added", name);
            return Err(ConsoleError::RegistryFull);
        }

        self.builtin_help = name != HELP_COMMAND && (self.builtin_help || self.entries.len() == 1);
        cli_info!(CONSOLE_LOG_STREAM, "command '{}' registered", name);
        Ok(())
    }

    /// Find a command by exact name
    pub fn find(&self, name: &[u8]) -> Option<&CommandEntry> {
        self.entries.iter().find(|c| c.name.as_bytes() == name)
    }

    /// Check if `help` is answered by the builtin printer
    pub fn builtin_help_enabled(&self) -> bool {
        self.builtin_help
    }

    /// Registered commands in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter()
    }

    /// Get all command names
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|c| c.name)
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if no more commands fit
    pub fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    /// Print the command list: builtin help first, then insertion order
    pub fn print_help<T: Transport + ?Sized>(&self, out: &mut T) {
        out.write_str("Available commands:\n");
        if self.builtin_help {
            print_entry(out, HELP_COMMAND, HELP_DESCRIPTION);
        }
        for c in self.entries.iter() {
            print_entry(out, c.name, c.description);
        }
        out.write_byte(b'\n');
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

fn print_entry<T: Transport + ?Sized>(out: &mut T, name: &str, description: &str) {
    printf(
        out,
        "  %s - %s\n",
        &[Arg::Str(name), Arg::Str(truncate(description, MAX_DESCRIPTION_LEN))],
    );
}

/// Cut at `max` bytes, backing off to a char boundary
fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// What a running handler can reach: the console output and the command
/// table (so a custom `help` can still print the builtin list).
pub struct CommandContext<'a> {
    io: &'a mut dyn Transport,
    registry: &'a Registry,
}

impl<'a> CommandContext<'a> {
    /// Wrap a transport and registry for one handler call
    pub fn new(io: &'a mut dyn Transport, registry: &'a Registry) -> Self {
        Self { io, registry }
    }

    /// Formatted output, see [`printf`]
    pub fn printf(&mut self, fmt: &str, args: &[Arg<'_>]) {
        printf(&mut *self.io, fmt, args);
    }

    /// Print the builtin command list
    pub fn print_help(&mut self) {
        self.registry.print_help(&mut *self.io);
    }

    /// Registered commands
    pub fn registry(&self) -> &Registry {
        self.registry
    }
}

impl Transport for CommandContext<'_> {
    fn setup(&mut self, baud_rate: u32) -> Result<(), TransportError> {
        self.io.setup(baud_rate)
    }

    fn available(&mut self) -> usize {
        self.io.available()
    }

    fn read_byte(&mut self) -> u8 {
        self.io.read_byte()
    }

    fn write_byte(&mut self, byte: u8) {
        self.io.write_byte(byte)
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.io.write_bytes(bytes)
    }
}
