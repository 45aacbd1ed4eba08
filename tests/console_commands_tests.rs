//! Command table tests

use rust_serial_cli::console::commands::{find, Command};
use rust_serial_cli::console::{Invocation, Outcome};

static COMMANDS: &[Command] = &[
    Command { name: "help", brief: "List commands", handler: cmd_ok },
    Command { name: "show", brief: "Show parameters", handler: cmd_ok },
    Command { name: "show", brief: "Shadowed duplicate", handler: cmd_fail },
];

fn cmd_ok(_inv: &mut Invocation<'_>) -> Outcome {
    Outcome::Success
}

fn cmd_fail(_inv: &mut Invocation<'_>) -> Outcome {
    Outcome::Failure
}

#[test]
fn test_find_exact_name() {
    let cmd = find(COMMANDS, b"help").unwrap();
    assert_eq!(cmd.name, "help");
    assert_eq!(cmd.brief, "List commands");
}

#[test]
fn test_find_first_registered_wins() {
    let cmd = find(COMMANDS, b"show").unwrap();
    assert_eq!(cmd.brief, "Show parameters");
}

#[test]
fn test_find_unknown() {
    assert!(find(COMMANDS, b"foobar").is_none());
    assert!(find(COMMANDS, b"hel").is_none());
    assert!(find(COMMANDS, b"").is_none());
    assert!(find(&[], b"help").is_none());
}
