//! Input assembler: bytes in, edited lines out
//!
//! Polled from the main loop. Each poll consumes at most one byte, echoes
//! it, applies editing actions and reports when a line is complete.
//!
//! The terminal has no random-access text model, so any edit away from the
//! end of the line rewrites everything after the edit point and walks the
//! terminal cursor back. O(line length) per keystroke.

use super::escape::{EditAction, EscapeRecognizer, Feed};
use super::line_buffer::EditBuffer;
use crate::config::ConsoleConfig;
use crate::log_globals::CONSOLE_LOG_STREAM;
use crate::transport::Transport;
use crate::{cli_debug, cli_warn};

/// Cursor one cell right
pub const CURSOR_RIGHT: &[u8] = b"\x1b[1C";
/// Cursor one cell left
pub const CURSOR_LEFT: &[u8] = b"\x1b[1D";

/// Line assembly state machine
pub struct LineAssembler {
    line: EditBuffer,
    escape: EscapeRecognizer,
    config: ConsoleConfig,
    /// Previous byte completed a line (collapses CRLF)
    last_was_eol: bool,
    /// Line was handed out, clear before the next byte
    line_taken: bool,
    /// A full-buffer warning was already logged for this line
    overflow_logged: bool,
}

impl LineAssembler {
    /// Create assembler with an empty line
    pub const fn new(config: ConsoleConfig) -> Self {
        Self {
            line: EditBuffer::new(),
            escape: EscapeRecognizer::new(),
            config,
            last_was_eol: false,
            line_taken: false,
            overflow_logged: false,
        }
    }

    /// Process at most one pending byte.
    ///
    /// Returns the completed line (without terminator) when an end of line
    /// was received. The slice is valid until the next call.
    pub fn poll<T: Transport + ?Sized>(&mut self, io: &mut T) -> Option<&[u8]> {
        if self.line_taken {
            self.line.clear();
            self.line_taken = false;
            self.overflow_logged = false;
        }

        if io.available() == 0 {
            return None;
        }
        let byte = io.read_byte();

        if byte == b'\r' || byte == b'\n' {
            if self.last_was_eol {
                return None;
            }
            self.last_was_eol = true;
            self.escape.reset();
            io.write_byte(b'\n');
            self.line_taken = true;
            return Some(self.line.as_bytes());
        }
        self.last_was_eol = false;

        match self.escape.feed(byte) {
            Feed::Action(action) => {
                self.apply(action, io);
                return None;
            }
            Feed::Abandoned => {
                cli_debug!(CONSOLE_LOG_STREAM, "escape sequence abandoned at 0x{:02x}", byte);
                return None;
            }
            Feed::Pending => return None,
            Feed::NotConsumed => {}
        }

        if self.config.is_printable(byte) {
            self.insert(byte, io);
        }
        None
    }

    fn insert<T: Transport + ?Sized>(&mut self, byte: u8, io: &mut T) {
        if !self.line.insert(byte) {
            if !self.overflow_logged {
                cli_warn!(CONSOLE_LOG_STREAM, "line full ({} bytes), input dropped", EditBuffer::MAX_LEN);
                self.overflow_logged = true;
            }
            return;
        }

        io.write_byte(byte);
        let tail = self.line.tail();
        if !tail.is_empty() {
            io.write_bytes(tail);
            move_left(io, tail.len());
        }
    }

    /// Apply an editing action to buffer and terminal
    pub fn apply<T: Transport + ?Sized>(&mut self, action: EditAction, io: &mut T) {
        match action {
            EditAction::Backspace => {
                if self.line.backspace() {
                    io.write_bytes(CURSOR_LEFT);
                    self.redraw_tail(io);
                }
            }
            EditAction::Delete => {
                if self.line.delete() {
                    self.redraw_tail(io);
                }
            }
            EditAction::CursorLeft => {
                if self.line.move_left() {
                    io.write_bytes(CURSOR_LEFT);
                }
            }
            EditAction::CursorRight => {
                if self.line.move_right() {
                    io.write_bytes(CURSOR_RIGHT);
                }
            }
        }
    }

    /// Rewrite the tail after a removal, blank the freed cell, walk back
    fn redraw_tail<T: Transport + ?Sized>(&self, io: &mut T) {
        let tail = self.line.tail();
        io.write_bytes(tail);
        io.write_byte(b' ');
        move_left(io, tail.len() + 1);
    }

    /// Line being edited
    pub fn line(&self) -> &EditBuffer {
        &self.line
    }

    /// Active configuration
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Discard the current line and any partial escape sequence
    pub fn reset(&mut self) {
        self.line.clear();
        self.escape.reset();
        self.last_was_eol = false;
        self.line_taken = false;
        self.overflow_logged = false;
    }
}

fn move_left<T: Transport + ?Sized>(io: &mut T, cells: usize) {
    for _ in 0..cells {
        io.write_bytes(CURSOR_LEFT);
    }
}
