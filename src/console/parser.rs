//! Command line parser
//!
//! Strips leading whitespace, then splits once: the first token is the
//! command, everything after the following whitespace run is the argument
//! string, kept verbatim (trailing whitespace included).

use super::ascii::is_blank;

/// Command token and raw argument remainder of one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    /// The command name (first token)
    pub command: &'a [u8],
    /// Remainder after the command, leading whitespace stripped
    pub arguments: &'a [u8],
}

impl<'a> ParsedLine<'a> {
    /// Command as text (empty if not UTF-8)
    pub fn command_str(&self) -> &'a str {
        core::str::from_utf8(self.command).unwrap_or("")
    }

    /// Arguments as text (empty if not UTF-8)
    pub fn arguments_str(&self) -> &'a str {
        core::str::from_utf8(self.arguments).unwrap_or("")
    }
}

/// Parse a line (terminator already removed).
///
/// Returns `None` if nothing but whitespace is left.
pub fn parse_line(line: &[u8]) -> Option<ParsedLine<'_>> {
    let line = trim_start(line);
    if line.is_empty() {
        return None;
    }

    let (command, arguments) = match line.iter().position(|&b| is_blank(b)) {
        Some(split) => (&line[..split], trim_start(&line[split..])),
        None => (line, &line[line.len()..]),
    };

    Some(ParsedLine { command, arguments })
}

fn trim_start(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|&b| !is_blank(b))
        .unwrap_or(bytes.len());
    &bytes[start..]
}
