//! Line assembly tests: echo, editing redraw, end-of-line events

use rust_mini_cli::config::{ConsoleConfig, LINE_SIZE};
use rust_mini_cli::console::assembler::{CURSOR_LEFT, CURSOR_RIGHT};
use rust_mini_cli::console::LineAssembler;
use rust_mini_cli::MemoryTransport;

type Io = MemoryTransport<256, 4096>;

/// Poll until input is exhausted, collecting completed lines
fn pump(asm: &mut LineAssembler, io: &mut Io) -> Vec<Vec<u8>> {
    let mut lines = Vec::new();
    while io.pending_input() > 0 {
        if let Some(line) = asm.poll(io) {
            lines.push(line.to_vec());
        }
    }
    lines
}

fn setup(input: &[u8]) -> (LineAssembler, Io) {
    let mut io = Io::new();
    io.feed(input);
    (LineAssembler::new(ConsoleConfig::default()), io)
}

fn left(n: usize) -> Vec<u8> {
    CURSOR_LEFT.repeat(n)
}

#[test]
fn test_plain_line_echoed_and_reported() {
    let (mut asm, mut io) = setup(b"led on\n");
    let lines = pump(&mut asm, &mut io);

    assert_eq!(lines, [b"led on".to_vec()]);
    assert_eq!(io.output(), b"led on\n");
}

#[test]
fn test_crlf_gives_single_event() {
    let (mut asm, mut io) = setup(b"ok\r\n");
    let lines = pump(&mut asm, &mut io);

    assert_eq!(lines.len(), 1);
    assert_eq!(io.output(), b"ok\n");
}

#[test]
fn test_bare_cr_ends_line() {
    let (mut asm, mut io) = setup(b"ab\rcd\r");
    let lines = pump(&mut asm, &mut io);

    assert_eq!(lines, [b"ab".to_vec(), b"cd".to_vec()]);
    assert_eq!(io.output(), b"ab\ncd\n");
}

#[test]
fn test_each_terminator_gives_one_event() {
    for input in [&b"go\n"[..], &b"go\r"[..], &b"go\r\n"[..]] {
        let (mut asm, mut io) = setup(input);
        let lines = pump(&mut asm, &mut io);

        assert_eq!(lines, [b"go".to_vec()], "input {:?}", input);
    }
}

#[test]
fn test_consecutive_eol_collapse() {
    let (mut asm, mut io) = setup(b"a\n\n\rb\n");
    let lines = pump(&mut asm, &mut io);

    assert_eq!(lines, [b"a".to_vec(), b"b".to_vec()]);
}

#[test]
fn test_empty_line_reported() {
    let (mut asm, mut io) = setup(b"\n");
    let lines = pump(&mut asm, &mut io);

    assert_eq!(lines, [Vec::<u8>::new()]);
}

#[test]
fn test_line_cleared_on_next_poll() {
    let (mut asm, mut io) = setup(b"abc\n");
    pump(&mut asm, &mut io);
    assert_eq!(asm.line().as_str(), "abc");

    assert!(asm.poll(&mut io).is_none());
    assert!(asm.line().is_empty());
}

#[test]
fn test_insert_in_middle_redraws_tail() {
    let (mut asm, mut io) = setup(b"abd\x1b[Dc");
    pump(&mut asm, &mut io);

    assert_eq!(asm.line().as_str(), "abcd");
    assert_eq!(asm.line().cursor(), 3);

    let mut expected = b"abd".to_vec();
    expected.extend_from_slice(CURSOR_LEFT);
    expected.extend_from_slice(b"cd");
    expected.extend(left(1));
    assert_eq!(io.output(), expected.as_slice());
}

#[test]
fn test_backspace_at_end() {
    let (mut asm, mut io) = setup(b"abc\x7f");
    pump(&mut asm, &mut io);

    assert_eq!(asm.line().as_str(), "ab");

    let mut expected = b"abc".to_vec();
    expected.extend_from_slice(CURSOR_LEFT);
    expected.push(b' ');
    expected.extend(left(1));
    assert_eq!(io.output(), expected.as_slice());
}

#[test]
fn test_backspace_ctrl_h() {
    let (mut asm, mut io) = setup(b"ab\x08\n");
    let lines = pump(&mut asm, &mut io);

    assert_eq!(lines, [b"a".to_vec()]);
}

#[test]
fn test_backspace_on_empty_line_writes_nothing() {
    let (mut asm, mut io) = setup(b"\x7f\x7f");
    pump(&mut asm, &mut io);

    assert!(asm.line().is_empty());
    assert!(io.output().is_empty());
}

#[test]
fn test_delete_in_middle() {
    let (mut asm, mut io) = setup(b"abc\x1b[D\x1b[D");
    pump(&mut asm, &mut io);
    io.clear_output();

    io.feed(b"\x1b[3~");
    pump(&mut asm, &mut io);

    assert_eq!(asm.line().as_str(), "ac");
    assert_eq!(asm.line().cursor(), 1);

    let mut expected = b"c ".to_vec();
    expected.extend(left(2));
    assert_eq!(io.output(), expected.as_slice());
}

#[test]
fn test_delete_at_end_writes_nothing() {
    let (mut asm, mut io) = setup(b"abc");
    pump(&mut asm, &mut io);
    io.clear_output();

    io.feed(b"\x1b[3~");
    pump(&mut asm, &mut io);

    assert_eq!(asm.line().as_str(), "abc");
    assert!(io.output().is_empty());
}

#[test]
fn test_cursor_moves_echo_only_when_possible() {
    let (mut asm, mut io) = setup(b"\x1b[Da\x1b[D\x1b[C\x1b[C");
    pump(&mut asm, &mut io);

    let mut expected = b"a".to_vec();
    expected.extend_from_slice(CURSOR_LEFT);
    expected.extend_from_slice(CURSOR_RIGHT);
    assert_eq!(io.output(), expected.as_slice());
    assert_eq!(asm.line().cursor(), 1);
}

#[test]
fn test_unknown_escape_dropped() {
    let (mut asm, mut io) = setup(b"a\x1b[Ab\n");
    let lines = pump(&mut asm, &mut io);

    assert_eq!(lines, [b"ab".to_vec()]);
}

#[test]
fn test_eol_resets_partial_escape() {
    let (mut asm, mut io) = setup(b"\x1b[\nD\n");
    let lines = pump(&mut asm, &mut io);

    assert_eq!(lines, [Vec::new(), b"D".to_vec()]);
}

#[test]
fn test_control_bytes_ignored() {
    let (mut asm, mut io) = setup(b"a\x01\x00\x80b\n");
    let lines = pump(&mut asm, &mut io);

    assert_eq!(lines, [b"ab".to_vec()]);
    assert_eq!(io.output(), b"ab\n");
}

#[test]
fn test_extended_ascii_accepted_when_enabled() {
    let mut io = Io::new();
    io.feed(b"a\xe9\n");
    let mut asm = LineAssembler::new(ConsoleConfig::new().with_extended_ascii(true));
    let lines = pump(&mut asm, &mut io);

    assert_eq!(lines, [b"a\xe9".to_vec()]);
}

#[test]
fn test_overflow_drops_bytes_without_event() {
    let mut input = vec![b'x'; LINE_SIZE + 5];
    let (mut asm, mut io) = setup(&input);
    let lines = pump(&mut asm, &mut io);

    assert!(lines.is_empty());
    assert_eq!(asm.line().len(), LINE_SIZE - 1);
    assert_eq!(io.output().len(), LINE_SIZE - 1);

    input.clear();
    input.push(b'\n');
    io.feed(&input);
    let lines = pump(&mut asm, &mut io);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].len(), LINE_SIZE - 1);
}

#[test]
fn test_reset_discards_line() {
    let (mut asm, mut io) = setup(b"abc\x1b");
    pump(&mut asm, &mut io);
    asm.reset();

    io.feed(b"[D\n");
    let lines = pump(&mut asm, &mut io);
    assert_eq!(lines, [b"[D".to_vec()]);
}
