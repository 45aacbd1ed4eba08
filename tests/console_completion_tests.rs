//! Tab completion tests

use rust_serial_cli::console::completion::{Completer, Completion, PrefixCompleter};
use rust_serial_cli::console::io::Sink;

// Mock completions for testing
static TEST_COMMANDS: &[&str] = &["help", "set", "show", "save", "stats", "status"];

#[derive(Default)]
struct TestOutput {
    buf: Vec<u8>,
}

impl TestOutput {
    fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf).unwrap_or("")
    }
}

impl Sink for TestOutput {
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }
}

#[test]
fn test_complete_unique_returns_suffix() {
    let mut completer = PrefixCompleter::new(TEST_COMMANDS);
    let mut out = TestOutput::default();

    assert_eq!(completer.complete("he", &mut out), Completion::Single("lp"));
    assert_eq!(out.as_str(), "");
}

#[test]
fn test_complete_exact_word() {
    let mut completer = PrefixCompleter::new(TEST_COMMANDS);
    let mut out = TestOutput::default();

    assert_eq!(completer.complete("help", &mut out), Completion::Single(""));
}

#[test]
fn test_complete_no_match() {
    let mut completer = PrefixCompleter::new(TEST_COMMANDS);
    let mut out = TestOutput::default();

    assert_eq!(completer.complete("xyz", &mut out), Completion::NoMatch);
    assert_eq!(out.as_str(), "");
}

#[test]
fn test_complete_ambiguous_lists_candidates() {
    let mut completer = PrefixCompleter::new(TEST_COMMANDS);
    let mut out = TestOutput::default();

    assert_eq!(completer.complete("sta", &mut out), Completion::Multiple("t"));
    assert_eq!(out.as_str(), "\r\nstats\r\nstatus");
}

#[test]
fn test_complete_ambiguous_without_common_extension() {
    let mut completer = PrefixCompleter::new(TEST_COMMANDS).with_separator(" ");
    let mut out = TestOutput::default();

    assert_eq!(completer.complete("s", &mut out), Completion::Multiple(""));
    assert_eq!(out.as_str(), " set show save stats status");
}

#[test]
fn test_complete_empty_prefix_matches_all() {
    let mut completer = PrefixCompleter::new(TEST_COMMANDS);
    let mut out = TestOutput::default();

    assert_eq!(completer.complete("", &mut out), Completion::Multiple(""));
    assert_eq!(out.as_str().matches("\r\n").count(), TEST_COMMANDS.len());
}

#[test]
fn test_complete_multibyte_common_prefix() {
    static WORDS: &[&str] = &["zä", "zö"];
    let mut completer = PrefixCompleter::new(WORDS);
    let mut out = TestOutput::default();

    // 'ä' and 'ö' share their first UTF-8 byte
    assert_eq!(completer.complete("z", &mut out), Completion::Multiple(""));
}
