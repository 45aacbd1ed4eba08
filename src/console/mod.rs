//! Serial console line interpreter
//!
//! Byte in, zero or more bytes out, one call per byte.
//! Zero heap allocation - all buffers are fixed capacity.

pub mod ascii;
pub mod commands;
pub mod completion;
pub mod config;
pub mod error;
pub mod escape;
pub mod invocation;
pub mod io;
pub mod line_buffer;
pub mod outcome;
pub mod parser;
pub mod session;

pub use commands::{Command, CommandHandler, Response, ResponseHandler, ResponseTable};
pub use completion::{Completer, Completion, PrefixCompleter};
pub use config::SessionConfig;
pub use error::ConsoleError;
pub use escape::{EscapeParser, EscapeStep};
pub use invocation::Invocation;
pub use io::{Sink, Transport};
pub use line_buffer::LineBuffer;
pub use outcome::Outcome;
pub use parser::{parse_line, ParsedLine};
pub use session::Session;
