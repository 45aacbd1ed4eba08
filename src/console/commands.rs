//! Command and response tables

use super::invocation::Invocation;
use super::Outcome;

/// Runs a command, returns the code routed to the response table
pub type CommandHandler = fn(&mut Invocation<'_>) -> Outcome;

/// Reacts to a command's result (prints "OK", an error, ...)
pub type ResponseHandler = fn(Outcome, &mut Invocation<'_>);

/// Command descriptor
#[derive(Clone, Copy)]
pub struct Command {
    pub name: &'static str,
    pub brief: &'static str,
    pub handler: CommandHandler,
}

impl core::fmt::Debug for Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("brief", &self.brief)
            .finish_non_exhaustive()
    }
}

/// Response descriptor
#[derive(Clone, Copy)]
pub struct Response {
    pub outcome: Outcome,
    pub handler: ResponseHandler,
}

/// Response entries plus the mandatory catch-all.
///
/// The catch-all answers both a command lookup miss (unless a
/// [`Outcome::NotFound`] entry is registered) and any code a handler
/// returns that has no entry of its own.
#[derive(Clone, Copy)]
pub struct ResponseTable<'a> {
    entries: &'a [Response],
    fallback: ResponseHandler,
}

impl<'a> ResponseTable<'a> {
    pub const fn new(entries: &'a [Response], fallback: ResponseHandler) -> Self {
        Self { entries, fallback }
    }

    pub fn entries(&self) -> &'a [Response] {
        self.entries
    }

    /// First entry registered for `outcome`, else the catch-all
    pub fn resolve(&self, outcome: Outcome) -> ResponseHandler {
        match self.entries.iter().find(|r| r.outcome == outcome) {
            Some(response) => response.handler,
            None => {
                log::trace!("no response for {}, using fallback", outcome);
                self.fallback
            }
        }
    }
}

/// Exact-name lookup in registration order
pub fn find<'a>(commands: &'a [Command], name: &[u8]) -> Option<&'a Command> {
    commands.iter().find(|c| c.name.as_bytes() == name)
}

/// Run the command named by `invocation` and its response.
///
/// On a match the handler's output is framed by `newline`; on a miss only
/// the [`Outcome::NotFound`] response runs.
pub(crate) fn dispatch(
    invocation: &mut Invocation<'_>,
    responses: &ResponseTable<'_>,
    newline: &[u8],
) -> Outcome {
    let Some(command) = find(invocation.commands(), invocation.command_bytes()) else {
        log::debug!("command not found: {:?}", invocation.command());
        (responses.resolve(Outcome::NotFound))(Outcome::NotFound, invocation);
        return Outcome::NotFound;
    };

    invocation.write_bytes(newline);
    let outcome = (command.handler)(invocation);
    invocation.write_bytes(newline);
    log::debug!("{} -> {}", command.name, outcome);

    (responses.resolve(outcome))(outcome, invocation);
    outcome
}
