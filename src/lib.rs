//! # RustSerialCli
//!
//! Interactive command line for character-stream consoles (UART, USB CDC).
//!
//! ## Architecture
//!
//! A [`Session`] is fed one byte per call and owns all editing state:
//! - Line editing: echo, backspace, bounded line buffer
//! - Escape sequences: recognized and discarded
//! - Abort/flow control bytes: intercepted before anything else
//! - Commit on CR: split command/arguments, run handler, route its
//!   [`Outcome`] through the response table
//!
//! Transport, command handlers and the completion resolver are supplied
//! by the caller. No allocation, no statics, no blocking inside the core.

#![cfg_attr(not(test), no_std)]

pub mod console;

pub use console::{
    Command, Completer, Completion, ConsoleError, Invocation, Outcome, PrefixCompleter, Response,
    ResponseTable, Session, SessionConfig, Sink, Transport,
};
