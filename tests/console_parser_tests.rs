//! Parser tests for console command line parsing

use rust_serial_cli::console::parser::{parse_line, ParsedLine};

#[test]
fn test_parse_simple_command() {
    let line = parse_line(b"help").unwrap();
    assert_eq!(line.command, b"help");
    assert_eq!(line.arguments, b"");
}

#[test]
fn test_parse_command_with_arguments() {
    let line = parse_line(b"set wpm 25").unwrap();
    assert_eq!(line.command_str(), "set");
    assert_eq!(line.arguments_str(), "wpm 25");
}

#[test]
fn test_parse_trims_leading_whitespace() {
    let line = parse_line(b" \t\n show   wpm").unwrap();
    assert_eq!(line.command_str(), "show");
    assert_eq!(line.arguments_str(), "wpm");
}

#[test]
fn test_parse_keeps_trailing_whitespace_in_arguments() {
    let line = parse_line(b"echo  a  b  ").unwrap();
    assert_eq!(line.arguments_str(), "a  b  ");
}

#[test]
fn test_parse_splits_on_tab() {
    let line = parse_line(b"set\twpm").unwrap();
    assert_eq!(line.command_str(), "set");
    assert_eq!(line.arguments_str(), "wpm");
}

#[test]
fn test_parse_trailing_space_only() {
    let line = parse_line(b"help   ").unwrap();
    assert_eq!(
        line,
        ParsedLine { command: b"help", arguments: b"" }
    );
}

#[test]
fn test_parse_empty_line() {
    assert!(parse_line(b"").is_none());
    assert!(parse_line(b"   ").is_none());
    assert!(parse_line(b"\t\n ").is_none());
}

#[test]
fn test_parse_non_utf8_command() {
    let line = parse_line(&[0xC3, 0x28, b' ', b'x']).unwrap();
    assert_eq!(line.command, &[0xC3, 0x28]);
    assert_eq!(line.command_str(), "");
    assert_eq!(line.arguments_str(), "x");
}
