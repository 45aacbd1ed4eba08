//! Control bytes and buffer capacities

/// Backspace
pub const BS: u8 = 0x08;
/// Delete (sent as backspace by most terminal emulators)
pub const DEL: u8 = 0x7F;
pub const TAB: u8 = 0x09;
pub const LF: u8 = 0x0A;
/// Line terminator
pub const CR: u8 = 0x0D;
/// Ctrl+C
pub const ETX: u8 = 0x03;
pub const ESC: u8 = 0x1B;
pub const BEL: u8 = 0x07;
pub const SPACE: u8 = 0x20;
/// Ctrl+Q, resume transmission
pub const XON: u8 = 0x11;
/// Ctrl+S, pause transmission
pub const XOFF: u8 = 0x13;

/// Line buffer capacity, terminator slot included
pub const LINE_SIZE: usize = 64;

/// Escape sequence buffer capacity, leading ESC included
pub const ESCAPE_SIZE: usize = 16;

/// Prompt and newline string capacity
pub const PROMPT_SIZE: usize = 4;

/// Maximum number of abort bytes
pub const ABORT_CHARS_MAX: usize = 5;

/// Completion suggestion capacity
pub const COMPLETION_SIZE: usize = 32;

/// Whitespace recognized when splitting a command line
#[inline]
pub const fn is_blank(byte: u8) -> bool {
    matches!(byte, SPACE | LF | TAB)
}
