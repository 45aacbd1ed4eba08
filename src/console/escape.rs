//! Escape sequence sub-parser.
//!
//! Recognizes two-byte (`ESC <0x40..=0x5F>`) and CSI (`ESC [ ... <0x40..=0x7E>`)
//! sequences and throws them away. Nothing is interpreted: the parser only
//! keeps escape bytes out of the line buffer.
//!
//! ```text
//!  ESC ──▶ [len 1] ──'['──────────▶ [len >1] ──0x40..=0x7E──▶ Complete
//!             │                         │
//!             ├──0x40..=0x5F──▶ Complete ├──other, fits──▶ stay
//!             └──other───────▶ Abandoned └──other, full──▶ TooLong
//!
//!  CR at any point ──▶ Abandoned
//! ```

use heapless::Vec;

use super::ascii::{CR, ESCAPE_SIZE};

/// Result of feeding one byte
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EscapeStep {
    /// Sequence continues
    Pending,
    /// Final byte seen, sequence discarded
    Complete,
    /// Malformed or interrupted, silently dropped
    Abandoned,
    /// Sequence outgrew the buffer
    TooLong,
}

/// Escape sequence state
#[derive(Debug, Clone, Default)]
pub struct EscapeParser {
    buf: Vec<u8, ESCAPE_SIZE>,
    active: bool,
}

impl EscapeParser {
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            active: false,
        }
    }

    /// Start a sequence with its introducer byte
    pub fn begin(&mut self, introducer: u8) {
        self.buf.clear();
        let _ = self.buf.push(introducer);
        self.active = true;
    }

    /// True while inside an unterminated sequence
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Drop the sequence in progress
    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Bytes of the current or last sequence, introducer included
    pub fn sequence(&self) -> &[u8] {
        &self.buf
    }

    /// Feed the next byte. Must only be called while active.
    pub fn feed(&mut self, byte: u8) -> EscapeStep {
        if byte == CR {
            self.active = false;
            return EscapeStep::Abandoned;
        }

        if self.buf.len() <= 1 {
            return match byte {
                b'[' => self.store(byte),
                0x40..=0x5F => self.finish(byte),
                _ => {
                    self.active = false;
                    EscapeStep::Abandoned
                }
            };
        }

        match byte {
            0x40..=0x7E => self.finish(byte),
            _ => self.store(byte),
        }
    }

    fn store(&mut self, byte: u8) -> EscapeStep {
        if self.buf.push(byte).is_err() {
            self.active = false;
            return EscapeStep::TooLong;
        }
        EscapeStep::Pending
    }

    fn finish(&mut self, byte: u8) -> EscapeStep {
        // The final byte may not fit, the sequence is discarded either way
        let _ = self.buf.push(byte);
        self.active = false;
        EscapeStep::Complete
    }
}
