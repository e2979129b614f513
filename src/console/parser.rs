//! Command line tokenizer
//!
//! Splits on space, CR and LF. First token is the command, up to
//! `MAX_ARGV` following tokens are arguments; the rest is ignored.
//! Oversized tokens are truncated, never rejected.
//!
//! Tokens are kept as the raw input bytes. With extended ASCII enabled a
//! byte in 128..=254 stays one byte, so limits count input bytes and a
//! handler echoing its arguments writes back exactly what was typed.

use core::fmt;

use heapless::Vec;

use crate::config::{MAX_ARGV, MAX_ARGV_LEN, MAX_CMD_LEN};

/// Bounded command name
pub type CommandName = Vec<u8, MAX_CMD_LEN>;

/// Bounded argument
pub type Argument = Vec<u8, MAX_ARGV_LEN>;

/// Parsed command with up to `MAX_ARGV` arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    /// The command name (first token, empty if the line had none)
    pub command: CommandName,
    /// Arguments in order
    pub argv: Vec<Argument, MAX_ARGV>,
}

impl ParsedCommand {
    /// Create empty command
    pub const fn empty() -> Self {
        Self {
            command: Vec::new(),
            argv: Vec::new(),
        }
    }

    /// Number of arguments kept
    pub fn argc(&self) -> usize {
        self.argv.len()
    }

    /// Command name bytes
    pub fn name(&self) -> &[u8] {
        &self.command
    }

    /// Get argument by index (0-based)
    pub fn arg(&self, idx: usize) -> Option<&[u8]> {
        self.argv.get(idx).map(|a| a.as_slice())
    }

    /// Check if the line carried no command
    pub fn is_empty(&self) -> bool {
        self.command.is_empty()
    }

    /// Arguments as byte slices, for handler invocation
    pub fn arg_refs(&self) -> [&[u8]; MAX_ARGV] {
        let mut refs: [&[u8]; MAX_ARGV] = [&[]; MAX_ARGV];
        for (slot, arg) in refs.iter_mut().zip(self.argv.iter()) {
            *slot = arg.as_slice();
        }
        refs
    }
}

#[inline]
fn is_delimiter(b: u8) -> bool {
    matches!(b, b' ' | b'\r' | b'\n')
}

/// Count maximal runs of non-delimiter bytes
pub fn count_words(line: &[u8]) -> usize {
    tokens(line).count()
}

fn tokens(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(|&b| is_delimiter(b)).filter(|t| !t.is_empty())
}

/// Copy a token, truncating at `N` input bytes
fn bounded<const N: usize>(token: &[u8]) -> Vec<u8, N> {
    let mut v = Vec::new();
    // Cannot fail: the slice is cut to capacity
    let _ = v.extend_from_slice(&token[..token.len().min(N)]);
    v
}

/// Displays token bytes as Latin-1 text (for logs and diagnostics)
pub struct Latin1<'a>(pub &'a [u8]);

impl fmt::Display for Latin1<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        self.0.iter().try_for_each(|&b| f.write_char(char::from(b)))
    }
}

/// Parse a raw line into command and arguments
pub fn parse_line(line: &[u8]) -> ParsedCommand {
    let mut words = tokens(line);
    let mut cmd = ParsedCommand::empty();

    let Some(first) = words.next() else {
        return cmd;
    };
    cmd.command = bounded(first);

    for word in words.take(MAX_ARGV) {
        // Cannot fail: take() bounds the count to capacity
        let _ = cmd.argv.push(bounded(word));
    }

    cmd
}
