//! Console construction errors

/// Configuration rejected when building a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleError {
    /// E01: Prompt does not fit its buffer
    PromptTooLong,
    /// E02: Newline string does not fit its buffer
    NewlineTooLong,
    /// E03: Too many abort bytes
    TooManyAbortChars,
    /// E04: XON/XOFF collide with each other or with an abort byte
    FlowControlConflict,
}

impl ConsoleError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::PromptTooLong => "E01",
            Self::NewlineTooLong => "E02",
            Self::TooManyAbortChars => "E03",
            Self::FlowControlConflict => "E04",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::PromptTooLong => "prompt too long",
            Self::NewlineTooLong => "newline too long",
            Self::TooManyAbortChars => "too many abort chars",
            Self::FlowControlConflict => "flow control conflict",
        }
    }
}

impl core::fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}
