//! Command registry tests

use rust_mini_cli::config::{MAX_COMMANDS, MAX_DESCRIPTION_LEN};
use rust_mini_cli::console::commands::HELP_DESCRIPTION;
use rust_mini_cli::console::{CommandContext, ConsoleError, Registry, HELP_COMMAND};
use rust_mini_cli::MemoryTransport;

fn noop(_ctx: &mut CommandContext<'_>, _argv: &[&[u8]]) {}

const NAMES: [&str; 32] = [
    "c00", "c01", "c02", "c03", "c04", "c05", "c06", "c07", "c08", "c09", "c10", "c11", "c12",
    "c13", "c14", "c15", "c16", "c17", "c18", "c19", "c20", "c21", "c22", "c23", "c24", "c25",
    "c26", "c27", "c28", "c29", "c30", "c31",
];

#[test]
fn test_registry_starts_without_builtin_help() {
    let reg = Registry::new();

    assert!(reg.is_empty());
    assert!(!reg.builtin_help_enabled());
}

#[test]
fn test_first_add_enables_builtin_help() {
    let mut reg = Registry::new();
    reg.add("led", noop, "led [on/off]").unwrap();

    assert_eq!(reg.len(), 1);
    assert!(reg.builtin_help_enabled());
    assert!(reg.find(b"led").is_some());
}

#[test]
fn test_custom_help_disables_builtin() {
    let mut reg = Registry::new();
    reg.add("a", noop, "first").unwrap();
    reg.add(HELP_COMMAND, noop, "custom help").unwrap();

    assert!(!reg.builtin_help_enabled());

    // Stays off for later registrations
    reg.add("b", noop, "second").unwrap();
    assert!(!reg.builtin_help_enabled());
}

#[test]
fn test_help_registered_first_never_enables_builtin() {
    let mut reg = Registry::new();
    reg.add(HELP_COMMAND, noop, "custom help").unwrap();
    reg.add("a", noop, "first").unwrap();

    assert!(!reg.builtin_help_enabled());
}

#[test]
fn test_add_rejects_empty_name_or_description() {
    let mut reg = Registry::new();

    assert_eq!(reg.add("", noop, "desc"), Err(ConsoleError::EmptyName));
    assert_eq!(reg.add("x", noop, ""), Err(ConsoleError::EmptyDescription));
    assert!(reg.is_empty());
    assert!(!reg.builtin_help_enabled());
}

#[test]
fn test_add_fails_when_full() {
    let mut reg = Registry::new();
    for name in NAMES.iter().take(MAX_COMMANDS) {
        reg.add(*name, noop, "filler").unwrap();
    }

    assert!(reg.is_full());
    assert_eq!(reg.add("late", noop, "too late"), Err(ConsoleError::RegistryFull));
    assert_eq!(reg.len(), MAX_COMMANDS);
    assert!(reg.find(b"late").is_none());
}

#[test]
fn test_find_is_exact_and_first_wins() {
    let mut reg = Registry::new();
    reg.add("led", noop, "first").unwrap();
    reg.add("led", noop, "second").unwrap();

    assert_eq!(reg.find(b"led").map(|c| c.description), Some("first"));
    assert!(reg.find(b"le").is_none());
    assert!(reg.find(b"LED").is_none());
}

#[test]
fn test_names_in_insertion_order() {
    let mut reg = Registry::new();
    reg.add("b", noop, "b").unwrap();
    reg.add("a", noop, "a").unwrap();

    let names: Vec<&str> = reg.names().collect();
    assert_eq!(names, ["b", "a"]);
}

#[test]
fn test_print_help_builtin_first() {
    let mut reg = Registry::new();
    reg.add("a", noop, "does a").unwrap();
    reg.add("b", noop, "does b").unwrap();

    let mut out: MemoryTransport = MemoryTransport::new();
    reg.print_help(&mut out);

    let expected = format!(
        "Available commands:\n  help - {}\n  a - does a\n  b - does b\n\n",
        builtin_help_description()
    );
    assert_eq!(out.output_str(), expected);
}

#[test]
fn test_print_help_with_custom_help_lists_it_in_place() {
    let mut reg = Registry::new();
    reg.add("a", noop, "does a").unwrap();
    reg.add(HELP_COMMAND, noop, "mine").unwrap();

    let mut out: MemoryTransport = MemoryTransport::new();
    reg.print_help(&mut out);

    assert_eq!(out.output_str(), "Available commands:\n  a - does a\n  help - mine\n\n");
}

#[test]
fn test_error_codes() {
    assert_eq!(ConsoleError::UnknownCommand.code(), "E01");
    assert_eq!(ConsoleError::RegistryFull.code(), "E03");
    assert_eq!(format!("{}", ConsoleError::EmptyName), "E04: empty command name");
}

/// Builtin help description as listed (cut to the description limit)
fn builtin_help_description() -> &'static str {
    &HELP_DESCRIPTION[..HELP_DESCRIPTION.len().min(MAX_DESCRIPTION_LEN)]
}
