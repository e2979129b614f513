//! Edit buffer for console input
//!
//! Fixed storage with a cursor. Invariant: `cursor <= len <= LINE_SIZE - 1`,
//! the last slot is kept for a terminator so the line can be handed to
//! C-style consumers unchanged.

use crate::config::LINE_SIZE;

/// Line being typed, with its cursor
pub struct EditBuffer {
    buf: [u8; LINE_SIZE],
    len: usize,
    cursor: usize,
}

impl EditBuffer {
    /// Maximum number of bytes a line can hold
    pub const MAX_LEN: usize = LINE_SIZE - 1;

    /// Create empty buffer
    pub const fn new() -> Self {
        Self {
            buf: [0u8; LINE_SIZE],
            len: 0,
            cursor: 0,
        }
    }

    /// Insert a byte at the cursor, shifting the tail right.
    ///
    /// Returns `false` (and drops the byte) when the buffer is full.
    pub fn insert(&mut self, c: u8) -> bool {
        if self.len >= Self::MAX_LEN {
            return false;
        }
        self.buf.copy_within(self.cursor..self.len, self.cursor + 1);
        self.buf[self.cursor] = c;
        self.len += 1;
        self.cursor += 1;
        self.buf[self.len] = 0;
        true
    }

    /// Remove the byte before the cursor and move the cursor left.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.remove_at_cursor();
        true
    }

    /// Remove the byte under the cursor.
    pub fn delete(&mut self) -> bool {
        if self.cursor == self.len {
            return false;
        }
        self.remove_at_cursor();
        true
    }

    fn remove_at_cursor(&mut self) {
        self.buf.copy_within(self.cursor + 1..self.len, self.cursor);
        self.len -= 1;
        self.buf[self.len] = 0;
    }

    /// Move cursor one position left
    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move cursor one position right
    pub fn move_right(&mut self) -> bool {
        if self.cursor == self.len {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Clear buffer (contents reset, storage kept)
    pub fn clear(&mut self) {
        self.len = 0;
        self.cursor = 0;
        self.buf[0] = 0;
    }

    /// Bytes from the cursor to the end of the line
    pub fn tail(&self) -> &[u8] {
        &self.buf[self.cursor..self.len]
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Raw bytes including the terminator slot
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=self.len]
    }

    /// Get buffer as string slice (empty if not valid UTF-8)
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(self.as_bytes()).unwrap_or("")
    }

    /// Get buffer length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if full
    pub fn is_full(&self) -> bool {
        self.len >= Self::MAX_LEN
    }
}

impl Default for EditBuffer {
    fn default() -> Self {
        Self::new()
    }
}
