//! What a command or response handler gets to see

use core::fmt::Write;

use super::ascii::is_blank;
use super::commands::Command;
use super::io::Sink;

/// One committed line being dispatched.
///
/// Borrowed from the session for the duration of a handler call: the
/// command token, the raw argument remainder, the command table, the
/// output and the echo flag.
pub struct Invocation<'s> {
    command: &'s [u8],
    arguments: &'s [u8],
    commands: &'s [Command],
    sink: &'s mut dyn Sink,
    echo: &'s mut bool,
}

impl<'s> Invocation<'s> {
    pub(crate) fn new(
        command: &'s [u8],
        arguments: &'s [u8],
        commands: &'s [Command],
        sink: &'s mut dyn Sink,
        echo: &'s mut bool,
    ) -> Self {
        Self { command, arguments, commands, sink, echo }
    }

    /// Command token as text (empty if not UTF-8)
    pub fn command(&self) -> &'s str {
        core::str::from_utf8(self.command).unwrap_or("")
    }

    pub fn command_bytes(&self) -> &'s [u8] {
        self.command
    }

    /// Everything after the command, leading whitespace stripped
    pub fn arguments(&self) -> &'s str {
        core::str::from_utf8(self.arguments).unwrap_or("")
    }

    pub fn argument_bytes(&self) -> &'s [u8] {
        self.arguments
    }

    /// Whitespace-separated arguments
    pub fn args(&self) -> impl Iterator<Item = &'s str> + 's {
        let arguments = self.arguments;
        arguments
            .split(|&b| is_blank(b))
            .filter(|word| !word.is_empty())
            .map(|word| core::str::from_utf8(word).unwrap_or(""))
    }

    /// Get argument by index (0-based)
    pub fn arg(&self, idx: usize) -> Option<&'s str> {
        self.args().nth(idx)
    }

    /// Registered command table, for help listings
    pub fn commands(&self) -> &'s [Command] {
        self.commands
    }

    pub fn echo(&self) -> bool {
        *self.echo
    }

    /// Turn echo on or off for the following input (e.g. password entry)
    pub fn set_echo(&mut self, on: bool) {
        *self.echo = on;
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.sink.write_bytes(bytes);
    }
}

impl Write for Invocation<'_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.sink.write_bytes(s.as_bytes());
        Ok(())
    }
}
