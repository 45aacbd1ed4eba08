//! Session configuration
//!
//! Everything the session writes or intercepts that is not a line byte:
//! prompt, newline, abort set, bell and flow-control bytes.

use heapless::{String, Vec};

use super::ascii::{ABORT_CHARS_MAX, BEL, CR, ESC, ETX, PROMPT_SIZE, SPACE, XOFF, XON};
use super::ConsoleError;

/// Default prompt
pub const DEFAULT_PROMPT: &str = ">";

/// Default newline
pub const DEFAULT_NEWLINE: &str = "\r\n";

/// Default abort bytes
pub const DEFAULT_ABORT_CHARS: [u8; 4] = [ESC, ETX, SPACE, CR];

/// Tunables of a [`Session`](super::Session)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    prompt: String<PROMPT_SIZE>,
    newline: String<PROMPT_SIZE>,
    abort_chars: Vec<u8, ABORT_CHARS_MAX>,
    /// Byte written to ring the terminal bell
    pub bell: u8,
    /// Resume byte
    pub xon: u8,
    /// Pause byte
    pub xoff: u8,
    /// Echo typed bytes back
    pub echo: bool,
}

impl SessionConfig {
    /// Defaults: `">"` prompt, CRLF newline, abort on ESC/ETX/SPACE/CR,
    /// BEL, XON 0x11, XOFF 0x13, echo on.
    pub fn new() -> Self {
        let mut prompt = String::new();
        let _ = prompt.push_str(DEFAULT_PROMPT);
        let mut newline = String::new();
        let _ = newline.push_str(DEFAULT_NEWLINE);
        let mut abort_chars = Vec::new();
        let _ = abort_chars.extend_from_slice(&DEFAULT_ABORT_CHARS);

        Self {
            prompt,
            newline,
            abort_chars,
            bell: BEL,
            xon: XON,
            xoff: XOFF,
            echo: true,
        }
    }

    /// Replace the prompt
    pub fn with_prompt(mut self, prompt: &str) -> Result<Self, ConsoleError> {
        self.prompt.clear();
        self.prompt
            .push_str(prompt)
            .map_err(|_| ConsoleError::PromptTooLong)?;
        Ok(self)
    }

    /// Replace the newline sequence
    pub fn with_newline(mut self, newline: &str) -> Result<Self, ConsoleError> {
        self.newline.clear();
        self.newline
            .push_str(newline)
            .map_err(|_| ConsoleError::NewlineTooLong)?;
        Ok(self)
    }

    /// Replace the abort set. An empty set disables abort interception.
    pub fn with_abort_chars(mut self, chars: &[u8]) -> Result<Self, ConsoleError> {
        self.abort_chars.clear();
        self.abort_chars
            .extend_from_slice(chars)
            .map_err(|_| ConsoleError::TooManyAbortChars)?;
        Ok(self)
    }

    /// Replace the XON/XOFF pair
    pub fn with_flow_control(mut self, xon: u8, xoff: u8) -> Self {
        self.xon = xon;
        self.xoff = xoff;
        self
    }

    pub fn with_bell(mut self, bell: u8) -> Self {
        self.bell = bell;
        self
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn prompt(&self) -> &str {
        self.prompt.as_str()
    }

    pub fn newline(&self) -> &str {
        self.newline.as_str()
    }

    pub fn abort_chars(&self) -> &[u8] {
        &self.abort_chars
    }

    /// True if `byte` belongs to the abort set
    #[inline]
    pub fn is_abort_char(&self, byte: u8) -> bool {
        self.abort_chars.contains(&byte)
    }

    /// Check cross-field constraints.
    ///
    /// Flow-control bytes are classified before abort bytes, so an abort
    /// byte equal to XON or XOFF could never fire.
    pub fn validate(&self) -> Result<(), ConsoleError> {
        if self.xon == self.xoff
            || self.is_abort_char(self.xon)
            || self.is_abort_char(self.xoff)
        {
            return Err(ConsoleError::FlowControlConflict);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.prompt(), ">");
        assert_eq!(config.newline(), "\r\n");
        assert_eq!(config.abort_chars(), &[ESC, ETX, SPACE, CR]);
        assert_eq!(config.bell, 0x07);
        assert_eq!((config.xon, config.xoff), (0x11, 0x13));
        assert!(config.echo);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_prompt_too_long() {
        let result = SessionConfig::new().with_prompt("cli> ");
        assert_eq!(result, Err(ConsoleError::PromptTooLong));
    }

    #[test]
    fn test_abort_set_capacity() {
        assert!(SessionConfig::new().with_abort_chars(&[1, 2, 3, 4, 5]).is_ok());
        assert_eq!(
            SessionConfig::new().with_abort_chars(&[1, 2, 3, 4, 5, 6]),
            Err(ConsoleError::TooManyAbortChars)
        );
    }

    #[test]
    fn test_flow_control_conflicts() {
        let same = SessionConfig::new().with_flow_control(0x11, 0x11);
        assert_eq!(same.validate(), Err(ConsoleError::FlowControlConflict));

        let shadowed = SessionConfig::new().with_flow_control(ESC, XOFF);
        assert_eq!(shadowed.validate(), Err(ConsoleError::FlowControlConflict));
    }
}
