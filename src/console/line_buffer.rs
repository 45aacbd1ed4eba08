//! Line buffer for console input
//!
//! Capacity `N` includes one slot reserved for the terminator, so at most
//! `N - 1` bytes (line terminator included) are ever stored.

use heapless::Vec;

use super::ascii::LINE_SIZE;

/// Line input buffer
#[derive(Debug, Clone, Default)]
pub struct LineBuffer<const N: usize = LINE_SIZE> {
    buf: Vec<u8, N>,
}

impl<const N: usize> LineBuffer<N> {
    /// Bytes a line may hold
    pub const LIMIT: usize = N - 1;

    /// Create empty buffer
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Append a byte. Returns the byte back if the line is full.
    pub fn push(&mut self, c: u8) -> Result<(), u8> {
        if self.buf.len() >= Self::LIMIT {
            return Err(c);
        }
        self.buf.push(c)
    }

    /// Remove last byte
    pub fn pop(&mut self) -> Option<u8> {
        self.buf.pop()
    }

    /// Append `bytes` only if they fit with room left for a terminator
    pub fn try_extend(&mut self, bytes: &[u8]) -> bool {
        if !self.fits_with_terminator(bytes.len()) {
            return false;
        }
        self.buf.extend_from_slice(bytes).is_ok()
    }

    /// True if `extra` more bytes plus a terminator still fit
    #[inline]
    pub fn fits_with_terminator(&self, extra: usize) -> bool {
        self.buf.len() + extra < Self::LIMIT
    }

    /// Clear buffer
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Get buffer as string slice (empty if not UTF-8)
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf).unwrap_or("")
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Get buffer length
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Last whitespace-delimited token (empty if the line ends in whitespace)
    pub fn last_token(&self) -> &[u8] {
        let start = self
            .buf
            .iter()
            .rposition(|&b| super::ascii::is_blank(b))
            .map_or(0, |i| i + 1);
        &self.buf[start..]
    }
}
