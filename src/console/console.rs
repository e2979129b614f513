//! Main console struct integrating all components

use super::{
    parse_line, CommandContext, CommandHandler, ConsoleError, Latin1, LineAssembler, ParsedCommand,
    Registry, HELP_COMMAND,
};
use crate::cli_info;
use crate::config::ConsoleConfig;
use crate::log_globals::CONSOLE_LOG_STREAM;
use crate::output::{printf, Arg};
use crate::transport::{Transport, TransportError};

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");

/// Console bound to one transport
///
/// Cooperative and non-blocking: call [`run`](Self::run) (or
/// [`poll`](Self::poll)) from the application loop. Each call consumes at
/// most one input byte.
pub struct Console<T: Transport> {
    io: T,
    assembler: LineAssembler,
    registry: Registry,
}

impl<T: Transport> Console<T> {
    /// Configure the transport and create the console
    pub fn setup(mut io: T, config: ConsoleConfig) -> Result<Self, TransportError> {
        io.setup(config.baud_rate)?;
        Ok(Self::new(io, config))
    }

    /// Create console on an already configured transport
    pub fn new(io: T, config: ConsoleConfig) -> Self {
        Self {
            io,
            assembler: LineAssembler::new(config),
            registry: Registry::new(),
        }
    }

    /// Register a command, see [`Registry::add`]
    pub fn add(
        &mut self,
        name: &'static str,
        handler: CommandHandler,
        description: &'static str,
    ) -> Result<(), ConsoleError> {
        self.registry.add(name, handler, description)
    }

    /// Poll for a completed line and tokenize it, without dispatching.
    ///
    /// A line with no words yields an empty command (`argc() == 0`).
    pub fn poll(&mut self) -> Option<ParsedCommand> {
        let line = self.assembler.poll(&mut self.io)?;
        Some(parse_line(line))
    }

    /// Run the handler for a parsed command.
    ///
    /// `help` goes to the builtin printer while it is enabled. Unlike
    /// [`run`](Self::run), reports why nothing was executed.
    pub fn dispatch(&mut self, cmd: &ParsedCommand) -> Result<(), ConsoleError> {
        if cmd.is_empty() {
            return Err(ConsoleError::EmptyCommand);
        }

        let name = cmd.name();
        if name == HELP_COMMAND.as_bytes() && self.registry.builtin_help_enabled() {
            self.registry.print_help(&mut self.io);
            return Ok(());
        }

        let Some(entry) = self.registry.find(name) else {
            cli_info!(CONSOLE_LOG_STREAM, "unknown command '{}'", Latin1(name));
            return Err(ConsoleError::UnknownCommand);
        };
        let handler = entry.handler;

        let refs = cmd.arg_refs();
        let mut ctx = CommandContext::new(&mut self.io, &self.registry);
        handler(&mut ctx, &refs[..cmd.argc()]);
        Ok(())
    }

    /// Poll, tokenize and dispatch.
    ///
    /// Returns `true` only if a command was executed. Unknown commands are
    /// silently not handled; use [`poll`](Self::poll) plus
    /// [`dispatch`](Self::dispatch) to report them.
    pub fn run(&mut self) -> bool {
        match self.poll() {
            Some(cmd) => self.dispatch(&cmd).is_ok(),
            None => false,
        }
    }

    /// Formatted output on the console transport
    pub fn printf(&mut self, fmt: &str, args: &[Arg<'_>]) {
        printf(&mut self.io, fmt, args);
    }

    /// Print the builtin command list
    pub fn print_help(&mut self) {
        self.registry.print_help(&mut self.io);
    }

    /// Print welcome banner
    pub fn print_banner(&mut self) {
        printf(
            &mut self.io,
            "\n%s\nType 'help' for commands.\n\n",
            &[Arg::Str(VERSION)],
        );
    }

    /// Registered commands
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Registered commands in insertion order
    pub fn commands(&self) -> impl Iterator<Item = &super::CommandEntry> {
        self.registry.iter()
    }

    /// Input assembler state
    pub fn assembler(&self) -> &LineAssembler {
        &self.assembler
    }

    /// Borrow the transport
    pub fn transport(&self) -> &T {
        &self.io
    }

    /// Borrow the transport mutably
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.io
    }

    /// Give the transport back
    pub fn into_transport(self) -> T {
        self.io
    }
}
