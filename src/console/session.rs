//! Console session state machine
//!
//! One [`Session`] per transport. The caller owns it and calls
//! [`Session::step`] once per available byte; nothing runs in between.
//!
//! Byte classification, first match wins:
//!
//! 1. XON / XOFF
//! 2. abort byte, only while the abort guard is released
//! 3. escape sequence in progress
//! 4. ESC
//! 5. backspace (BS or DEL)
//! 6. tab
//! 7. anything else: echoed, appended, CR commits the line
//!
//! # Abort guard
//!
//! `abort_active` starts set, so abort bytes are ordinary input until a
//! command returns [`Outcome::Execute`]. From then on the first abort byte
//! is intercepted and sets the guard again. Only `Execute` releases it.

use super::ascii::{BS, COMPLETION_SIZE, CR, DEL, ESC, SPACE, TAB};
use super::commands::{self, Command, ResponseTable};
use super::completion::{Completer, Completion};
use super::escape::{EscapeParser, EscapeStep};
use super::invocation::Invocation;
use super::io::Transport;
use super::parser::parse_line;
use super::{ConsoleError, LineBuffer, Outcome, SessionConfig};

/// Erase the previous character on screen
const RUBOUT: &[u8] = &[BS, SPACE, BS];

/// Interactive command line over one transport
pub struct Session<'a, T: Transport> {
    transport: T,
    config: SessionConfig,
    line: LineBuffer,
    escape: EscapeParser,
    /// Abort guard, see module docs
    abort_active: bool,
    echo: bool,
    prompt_pending: bool,
    prompt_newline_pending: bool,
    redraw_pending: bool,
    commands: &'a [Command],
    responses: ResponseTable<'a>,
    completer: Option<&'a mut dyn Completer>,
    completion: heapless::Vec<u8, COMPLETION_SIZE>,
}

impl<'a, T: Transport> Session<'a, T> {
    /// Create a session with the default configuration.
    ///
    /// Without a completer, tab only rings the bell.
    pub fn new(
        transport: T,
        commands: &'a [Command],
        responses: ResponseTable<'a>,
        completer: Option<&'a mut dyn Completer>,
    ) -> Self {
        Self {
            echo: true,
            transport,
            config: SessionConfig::new(),
            line: LineBuffer::new(),
            escape: EscapeParser::new(),
            abort_active: true,
            prompt_pending: true,
            prompt_newline_pending: true,
            redraw_pending: false,
            commands,
            responses,
            completer,
            completion: heapless::Vec::new(),
        }
    }

    /// Create a session with a custom configuration
    pub fn with_config(
        transport: T,
        commands: &'a [Command],
        responses: ResponseTable<'a>,
        completer: Option<&'a mut dyn Completer>,
        config: SessionConfig,
    ) -> Result<Self, ConsoleError> {
        config.validate()?;
        let mut session = Self::new(transport, commands, responses, completer);
        session.echo = config.echo;
        session.config = config;
        Ok(session)
    }

    /// Flush pending output, read one byte and process it.
    ///
    /// Returns [`Outcome::Continue`] without touching state when the
    /// transport has nothing to offer.
    pub fn step(&mut self) -> Outcome {
        self.flush_prompt();
        match self.transport.read_byte() {
            Some(byte) => self.dispatch_byte(byte),
            None => Outcome::Continue,
        }
    }

    /// Flush pending output, then process a single input byte
    pub fn process_byte(&mut self, byte: u8) -> Outcome {
        self.flush_prompt();
        self.dispatch_byte(byte)
    }

    fn dispatch_byte(&mut self, byte: u8) -> Outcome {
        if byte == self.config.xon {
            return Outcome::FlowOn;
        }
        if byte == self.config.xoff {
            return Outcome::FlowOff;
        }

        if !self.abort_active && self.config.is_abort_char(byte) {
            return self.abort();
        }

        if self.escape.is_active() {
            return match self.escape.feed(byte) {
                EscapeStep::TooLong => {
                    log::debug!("escape sequence too long: {:02x?}", self.escape.sequence());
                    Outcome::EscapeTooLong
                }
                _ => Outcome::Continue,
            };
        }

        match byte {
            ESC => {
                self.escape.begin(byte);
                Outcome::Continue
            }
            BS | DEL => self.backspace(),
            TAB => self.complete(),
            _ => self.insert(byte),
        }
    }

    /// Write whatever display output is pending: newline, prompt, line.
    ///
    /// Called at the start of every step; call it directly to show the
    /// prompt before blocking on input.
    pub fn flush_prompt(&mut self) {
        if self.prompt_pending {
            if self.prompt_newline_pending {
                self.transport.write_bytes(self.config.newline().as_bytes());
                self.prompt_newline_pending = false;
            }
            self.transport.write_bytes(self.config.prompt().as_bytes());
            self.prompt_pending = false;
        }

        if self.redraw_pending {
            self.transport.write_bytes(self.line.as_bytes());
            self.redraw_pending = false;
        }
    }

    fn abort(&mut self) -> Outcome {
        log::debug!("abort intercepted");
        self.abort_active = true;
        self.escape.cancel();
        self.line.clear();
        self.schedule_prompt();
        Outcome::Abort
    }

    fn backspace(&mut self) -> Outcome {
        if self.line.pop().is_some() {
            if self.echo {
                self.transport.write_bytes(RUBOUT);
            } else {
                self.transport.write_bytes(self.config.prompt().as_bytes());
            }
        } else {
            if !self.echo {
                self.transport.write_bytes(self.config.prompt().as_bytes());
            }
            self.bell();
        }
        Outcome::Continue
    }

    fn insert(&mut self, byte: u8) -> Outcome {
        if self.echo {
            self.transport.write_bytes(&[byte]);
        }

        if self.line.push(byte).is_err() {
            log::warn!("line too long, discarded {} bytes", self.line.len());
            self.line.clear();
            self.schedule_prompt();
            return Outcome::LineTooLong;
        }

        if byte == CR {
            return self.commit();
        }
        Outcome::Continue
    }

    /// Parse and dispatch the line ending in the CR just appended
    fn commit(&mut self) -> Outcome {
        self.line.pop();

        let outcome = match parse_line(self.line.as_bytes()) {
            Some(parsed) => {
                let mut invocation = Invocation::new(
                    parsed.command,
                    parsed.arguments,
                    self.commands,
                    &mut self.transport,
                    &mut self.echo,
                );
                commands::dispatch(
                    &mut invocation,
                    &self.responses,
                    self.config.newline().as_bytes(),
                )
            }
            None => Outcome::LineTooShort,
        };

        if outcome == Outcome::Execute {
            log::debug!("execution started, abort guard released");
            self.abort_active = false;
        }

        self.line.clear();
        self.schedule_prompt();
        outcome
    }

    fn complete(&mut self) -> Outcome {
        if self.completer.is_none() {
            self.bell();
            return Outcome::Continue;
        }

        let Ok(partial) = core::str::from_utf8(self.line.last_token()) else {
            self.bell();
            return Outcome::ContinueNoCompletion;
        };
        let Some(completer) = self.completer.as_deref_mut() else {
            return Outcome::Continue;
        };

        let answer = completer.complete(partial, &mut self.transport);
        let (text, unique) = match answer {
            Completion::Single(text) => (text, true),
            Completion::Multiple(text) => (text, false),
            Completion::NoMatch | Completion::Error => {
                self.bell();
                return Outcome::ContinueNoCompletion;
            }
        };

        self.completion.clear();
        let stored = self.completion.extend_from_slice(text.as_bytes()).is_ok();
        let appended = stored && self.line.try_extend(&self.completion);

        if unique {
            if !appended {
                self.bell();
                return Outcome::Continue;
            }
            self.transport.write_bytes(&self.completion);
            return Outcome::ContinueCompletionFound;
        }

        if !appended {
            self.bell();
        }
        self.schedule_prompt();
        self.redraw_pending = true;
        Outcome::ContinueCompletionAmbiguous
    }

    fn bell(&mut self) {
        let bell = self.config.bell;
        self.transport.write_bytes(&[bell]);
    }

    fn schedule_prompt(&mut self) {
        self.prompt_pending = true;
        self.prompt_newline_pending = true;
    }

    /// Re-arm the abort guard once an operation started by an
    /// [`Outcome::Execute`] command has finished on its own.
    pub fn end_execution(&mut self) {
        self.abort_active = true;
    }

    /// True while abort bytes are treated as ordinary input
    pub fn abort_active(&self) -> bool {
        self.abort_active
    }

    pub fn echo_enabled(&self) -> bool {
        self.echo
    }

    pub fn set_echo(&mut self, on: bool) {
        self.echo = on;
    }

    pub fn escape_active(&self) -> bool {
        self.escape.is_active()
    }

    pub fn prompt_pending(&self) -> bool {
        self.prompt_pending
    }

    pub fn prompt_newline_pending(&self) -> bool {
        self.prompt_newline_pending
    }

    pub fn redraw_pending(&self) -> bool {
        self.redraw_pending
    }

    /// Bytes typed so far on the current line
    pub fn line(&self) -> &[u8] {
        self.line.as_bytes()
    }

    /// Most recent suggestion returned by the completer
    pub fn last_completion(&self) -> &[u8] {
        &self.completion
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }
}
