//! Control sequence recognizer
//!
//! Recognizes only what a line editor needs:
//!
//! | Input         | Action       |
//! |---------------|--------------|
//! | `0x7F`, `0x08`| Backspace    |
//! | `ESC [ C`     | CursorRight  |
//! | `ESC [ D`     | CursorLeft   |
//! | `ESC [ 3 ~`   | Delete       |
//!
//! A byte that breaks the expected prefix abandons the sequence and is
//! dropped. This is not a general ANSI parser.

const ESC: u8 = 0x1B;
const DEL: u8 = 0x7F;
const BS: u8 = 0x08;

/// Editing action decoded from a control sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
}

/// Result of feeding one byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    /// Byte is not part of a control sequence
    NotConsumed,
    /// Byte extended a valid prefix, more input needed
    Pending,
    /// Sequence complete
    Action(EditAction),
    /// Byte broke the prefix; sequence dropped
    Abandoned,
}

impl Feed {
    /// Check if the recognizer took the byte
    pub fn is_consumed(self) -> bool {
        self != Feed::NotConsumed
    }
}

/// Prefix received so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EscapeState {
    Idle,
    Escape,   // Got ESC
    Csi,      // Got ESC [
    CsiThree, // Got ESC [ 3
}

/// Escape sequence state machine
#[derive(Debug)]
pub struct EscapeRecognizer {
    state: EscapeState,
}

impl EscapeRecognizer {
    /// Create idle recognizer
    pub const fn new() -> Self {
        Self {
            state: EscapeState::Idle,
        }
    }

    /// Feed one byte
    pub fn feed(&mut self, byte: u8) -> Feed {
        let (next, feed) = match (self.state, byte) {
            (EscapeState::Idle, DEL | BS) => (EscapeState::Idle, Feed::Action(EditAction::Backspace)),
            (EscapeState::Idle, ESC) => (EscapeState::Escape, Feed::Pending),
            (EscapeState::Idle, _) => (EscapeState::Idle, Feed::NotConsumed),

            (EscapeState::Escape, b'[') => (EscapeState::Csi, Feed::Pending),

            (EscapeState::Csi, b'C') => (EscapeState::Idle, Feed::Action(EditAction::CursorRight)),
            (EscapeState::Csi, b'D') => (EscapeState::Idle, Feed::Action(EditAction::CursorLeft)),
            (EscapeState::Csi, b'3') => (EscapeState::CsiThree, Feed::Pending),

            (EscapeState::CsiThree, b'~') => (EscapeState::Idle, Feed::Action(EditAction::Delete)),

            _ => (EscapeState::Idle, Feed::Abandoned),
        };

        self.state = next;
        feed
    }

    /// Check if a sequence is in progress
    pub fn in_sequence(&self) -> bool {
        self.state != EscapeState::Idle
    }

    /// Drop any partial sequence
    pub fn reset(&mut self) {
        self.state = EscapeState::Idle;
    }
}

impl Default for EscapeRecognizer {
    fn default() -> Self {
        Self::new()
    }
}
