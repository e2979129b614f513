//! Inter-character timeout read tests

use std::cell::Cell;

use rust_mini_cli::transport::{read_with_timeout, Clock};
use rust_mini_cli::MemoryTransport;

/// Clock that advances one millisecond every time it is read
struct TickClock {
    now: Cell<u32>,
}

impl TickClock {
    fn starting_at(ms: u32) -> Self {
        Self { now: Cell::new(ms) }
    }
}

impl Clock for TickClock {
    fn now_ms(&self) -> u32 {
        let now = self.now.get();
        self.now.set(now.wrapping_add(1));
        now
    }
}

#[test]
fn test_reads_until_quiet() {
    let mut io: MemoryTransport = MemoryTransport::new();
    io.feed(b"upload");
    let clock = TickClock::starting_at(0);
    let mut buf = [0u8; 32];

    let n = read_with_timeout(&mut io, &clock, &mut buf, 10);
    assert_eq!(&buf[..n], b"upload");
    assert_eq!(io.pending_input(), 0);
}

#[test]
fn test_stops_when_buffer_full() {
    let mut io: MemoryTransport = MemoryTransport::new();
    io.feed(b"abcdef");
    let clock = TickClock::starting_at(0);
    let mut buf = [0u8; 4];

    let n = read_with_timeout(&mut io, &clock, &mut buf, 10);
    assert_eq!(n, 4);
    assert_eq!(&buf, b"abcd");
    assert_eq!(io.pending_input(), 2);
}

#[test]
fn test_no_input_times_out() {
    let mut io: MemoryTransport = MemoryTransport::new();
    let clock = TickClock::starting_at(100);
    let mut buf = [0u8; 8];

    assert_eq!(read_with_timeout(&mut io, &clock, &mut buf, 5), 0);
    assert!(clock.now.get() >= 105);
}

#[test]
fn test_timeout_survives_clock_wrap() {
    let mut io: MemoryTransport = MemoryTransport::new();
    let clock = TickClock::starting_at(u32::MAX - 2);
    let mut buf = [0u8; 8];

    assert_eq!(read_with_timeout(&mut io, &clock, &mut buf, 5), 0);
    assert!(clock.now.get() < 10);
}
