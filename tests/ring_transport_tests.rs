//! Ring-fed transport tests

use std::sync::Arc;
use std::thread;

use rust_mini_cli::config::ConsoleConfig;
use rust_mini_cli::console::{CommandContext, Console};
use rust_mini_cli::transport::Transport;
use rust_mini_cli::{cli_printf, ByteRing, RingTransport};

fn cmd_ping(ctx: &mut CommandContext<'_>, _argv: &[&[u8]]) {
    cli_printf!(ctx, "pong\n");
}

#[test]
fn test_ring_transport_reads_in_order() {
    let ring: ByteRing<16> = ByteRing::new();
    ring.push_slice(b"abc");

    let mut sink = Vec::new();
    let mut io = RingTransport::new(&ring, |b| sink.push(b));

    assert_eq!(io.available(), 3);
    assert_eq!(io.read_byte(), b'a');
    assert_eq!(io.read_byte(), b'b');
    assert_eq!(io.read_byte(), b'c');
    assert_eq!(io.available(), 0);
    assert_eq!(io.read_byte(), 0);

    io.write_str("hi");
    drop(io);
    assert_eq!(sink, b"hi");
}

#[test]
fn test_full_ring_drops_newest() {
    let ring: ByteRing<4> = ByteRing::new();
    let cap = ring.capacity();

    for i in 0..cap as u8 {
        assert!(ring.push(i));
    }
    assert!(!ring.push(0xFF));
    assert_eq!(ring.dropped(), 1);

    // Oldest bytes survive
    assert_eq!(ring.pop(), Some(0));
}

#[test]
fn test_console_over_ring_with_producer_thread() {
    let ring: Arc<ByteRing<64>> = Arc::new(ByteRing::new());

    let producer = {
        let ring = Arc::clone(&ring);
        thread::spawn(move || {
            for &b in b"ping\r\nping\n" {
                while !ring.push(b) {
                    thread::yield_now();
                }
            }
        })
    };

    let mut sink = Vec::new();
    let executed = {
        let io = RingTransport::new(&*ring, |b| sink.push(b));
        let mut console = Console::new(io, ConsoleConfig::default());
        console.add("ping", cmd_ping, "answers pong").unwrap();

        let mut executed = 0;
        while executed < 2 {
            if console.run() {
                executed += 1;
            } else if console.transport_mut().available() == 0 {
                thread::yield_now();
            }
        }
        executed
    };
    producer.join().unwrap();

    assert_eq!(executed, 2);
    assert_eq!(String::from_utf8(sink).unwrap(), "ping\npong\nping\npong\n");
}
