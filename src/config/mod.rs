//! Module: config
//!
//! Purpose: Buffer capacities and runtime options for the console.
//!
//! Capacities are compile-time constants so every table and buffer is
//! statically sized. The `small` feature selects the low-resource profile
//! (8-bit parts with a few KB of RAM).
//!
//! Safety: plain data, no global mutable state.

#[cfg(not(feature = "small"))]
mod profile {
    /// Edit buffer size in bytes (one slot is reserved, see `EditBuffer`).
    pub const LINE_SIZE: usize = 64;
    /// Maximum command name length kept by the tokenizer, in bytes.
    ///
    /// Counts token bytes only (24-byte C field less its terminator).
    pub const MAX_CMD_LEN: usize = 23;
    /// Maximum argument length kept by the tokenizer, in bytes.
    ///
    /// Counts token bytes only (32-byte C field less its terminator).
    pub const MAX_ARGV_LEN: usize = 31;
    /// Maximum number of arguments kept per command.
    pub const MAX_ARGV: usize = 4;
    /// Maximum number of registered commands.
    pub const MAX_COMMANDS: usize = 16;
    /// Maximum description length printed by the builtin help.
    pub const MAX_DESCRIPTION_LEN: usize = 64;
}

#[cfg(feature = "small")]
mod profile {
    pub const LINE_SIZE: usize = 32;
    pub const MAX_CMD_LEN: usize = 15;
    pub const MAX_ARGV_LEN: usize = 11;
    pub const MAX_ARGV: usize = 2;
    pub const MAX_COMMANDS: usize = 10;
    pub const MAX_DESCRIPTION_LEN: usize = 32;
}

pub use profile::*;

/// Numeric scratch buffer size for the output engine.
///
/// 20 digits of `u64::MAX` plus sign fit in 21 bytes; one spare.
pub const MAX_PRINT_SIZE: usize = 22;

/// Default serial speed handed to `Transport::setup`.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Runtime console options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Baud rate passed to the transport at setup.
    pub baud_rate: u32,
    /// Accept bytes 128..=254 as printable input.
    pub extended_ascii: bool,
}

impl ConsoleConfig {
    /// Default configuration (ASCII only, 115200 baud).
    pub const fn new() -> Self {
        Self {
            baud_rate: DEFAULT_BAUD_RATE,
            extended_ascii: false,
        }
    }

    /// Builder-style baud rate override.
    pub const fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    /// Builder-style extended ASCII switch.
    pub const fn with_extended_ascii(mut self, enabled: bool) -> Self {
        self.extended_ascii = enabled;
        self
    }

    /// Check whether `byte` is inserted into the edit buffer.
    #[inline]
    pub fn is_printable(&self, byte: u8) -> bool {
        match byte {
            0x20..=0x7E => true,
            0x80..=0xFE => self.extended_ascii,
            _ => false,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new()
    }
}
