//! Result codes of a processing step.
//!
//! An [`Outcome`] is both the control signal returned to the caller of
//! [`Session::step`](super::Session::step) and the key used to look up a
//! response handler after a command runs.

/// Closed set of step results.
///
/// Numeric codes are stable; handlers may use the `User*` codes for
/// application-specific results routed through the response table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Outcome {
    /// Command executed successfully.
    Success = 0,
    /// Command started a long-running operation. Releases the abort guard.
    Execute = 1,
    /// Command requested a reset.
    Reset = 2,
    /// Command execution failed.
    Failure = 3,
    /// Command argument(s) invalid.
    InvalidArgument = 4,
    /// No command with this name.
    NotFound = 5,
    /// Command exists but is not available right now.
    NotAvailable = 6,
    /// XON byte received.
    FlowOn = 7,
    /// XOFF byte received.
    FlowOff = 8,
    /// Line exceeded the buffer and was discarded.
    LineTooLong = 9,
    /// Line was empty after stripping whitespace.
    LineTooShort = 10,
    /// Escape sequence exceeded its buffer and was discarded.
    EscapeTooLong = 11,
    /// Abort byte intercepted.
    Abort = 12,
    /// More input expected.
    Continue = 13,
    /// Tab pressed, resolver found nothing.
    ContinueNoCompletion = 14,
    /// Tab pressed, unique completion appended.
    ContinueCompletionFound = 15,
    /// Tab pressed, several candidates.
    ContinueCompletionAmbiguous = 16,
    User1 = 17,
    User2 = 18,
    User3 = 19,
    User4 = 20,
    User5 = 21,
    User6 = 22,
    User7 = 23,
    User8 = 24,
}

impl Outcome {
    /// Every variant, in code order.
    pub const ALL: [Outcome; 25] = [
        Outcome::Success,
        Outcome::Execute,
        Outcome::Reset,
        Outcome::Failure,
        Outcome::InvalidArgument,
        Outcome::NotFound,
        Outcome::NotAvailable,
        Outcome::FlowOn,
        Outcome::FlowOff,
        Outcome::LineTooLong,
        Outcome::LineTooShort,
        Outcome::EscapeTooLong,
        Outcome::Abort,
        Outcome::Continue,
        Outcome::ContinueNoCompletion,
        Outcome::ContinueCompletionFound,
        Outcome::ContinueCompletionAmbiguous,
        Outcome::User1,
        Outcome::User2,
        Outcome::User3,
        Outcome::User4,
        Outcome::User5,
        Outcome::User6,
        Outcome::User7,
        Outcome::User8,
    ];

    /// Numeric code.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Convert from raw code. Returns `None` for unknown codes.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// True for the intermediate "line not finished yet" family.
    pub const fn is_continue(self) -> bool {
        matches!(
            self,
            Outcome::Continue
                | Outcome::ContinueNoCompletion
                | Outcome::ContinueCompletionFound
                | Outcome::ContinueCompletionAmbiguous
        )
    }

    /// Short name for logs and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Outcome::Success => "ok",
            Outcome::Execute => "execute",
            Outcome::Reset => "reset",
            Outcome::Failure => "failed",
            Outcome::InvalidArgument => "invalid argument",
            Outcome::NotFound => "command not found",
            Outcome::NotAvailable => "command not available",
            Outcome::FlowOn => "xon",
            Outcome::FlowOff => "xoff",
            Outcome::LineTooLong => "line too long",
            Outcome::LineTooShort => "line too short",
            Outcome::EscapeTooLong => "escape sequence too long",
            Outcome::Abort => "abort",
            Outcome::Continue => "continue",
            Outcome::ContinueNoCompletion => "no completion",
            Outcome::ContinueCompletionFound => "completion found",
            Outcome::ContinueCompletionAmbiguous => "completion ambiguous",
            Outcome::User1 => "user1",
            Outcome::User2 => "user2",
            Outcome::User3 => "user3",
            Outcome::User4 => "user4",
            Outcome::User5 => "user5",
            Outcome::User6 => "user6",
            Outcome::User7 => "user7",
            Outcome::User8 => "user8",
        }
    }
}

impl core::fmt::Display for Outcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_table_position() {
        for (idx, outcome) in Outcome::ALL.iter().enumerate() {
            assert_eq!(outcome.code() as usize, idx);
            assert_eq!(Outcome::from_code(outcome.code()), Some(*outcome));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(Outcome::from_code(25), None);
        assert_eq!(Outcome::from_code(255), None);
    }

    #[test]
    fn test_continue_family() {
        assert!(Outcome::Continue.is_continue());
        assert!(Outcome::ContinueCompletionAmbiguous.is_continue());
        assert!(!Outcome::Abort.is_continue());
        assert!(!Outcome::Success.is_continue());
    }
}
