//! Host adapter: stdin/stdout.
//!
//! A reader thread plays the role of the RX interrupt. It receives its own
//! handle to the shared ring when spawned; nothing is reached through
//! globals.

use std::io::{self, Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::ring::ByteRing;
use crate::transport::{Clock, Transport, TransportError};

/// Ring size between the reader thread and the console.
pub const STDIN_RING_SIZE: usize = 1024;

/// State shared with the reader thread
struct Shared {
    ring: ByteRing<STDIN_RING_SIZE>,
    closed: AtomicBool,
}

/// Console transport on the process stdin/stdout
pub struct StdioTransport {
    shared: Arc<Shared>,
    out: io::Stdout,
    reader: Option<thread::JoinHandle<()>>,
}

impl StdioTransport {
    /// Create transport; input starts flowing at [`Transport::setup`]
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                ring: ByteRing::new(),
                closed: AtomicBool::new(false),
            }),
            out: io::stdout(),
            reader: None,
        }
    }

    /// Stdin reached end of file and every byte was consumed
    pub fn is_closed(&self) -> bool {
        self.shared.closed.load(Ordering::Acquire) && self.shared.ring.is_empty()
    }
}

impl Default for StdioTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// Reader thread body: stdin bytes into the ring until EOF.
///
/// Unlike an ISR this thread may wait, so a full ring applies
/// backpressure instead of dropping input.
fn read_stdin(shared: Arc<Shared>) {
    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let mut byte = [0u8; 1];

    loop {
        match stdin.read(&mut byte) {
            Ok(0) => break,
            Ok(_) => {
                while !shared.ring.push(byte[0]) {
                    thread::sleep(Duration::from_millis(1));
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(_) => break,
        }
    }

    shared.closed.store(true, Ordering::Release);
}

impl Transport for StdioTransport {
    fn setup(&mut self, _baud_rate: u32) -> Result<(), TransportError> {
        if self.reader.is_some() {
            return Ok(());
        }

        let shared = Arc::clone(&self.shared);
        let handle = thread::Builder::new()
            .name("stdin-reader".into())
            .spawn(move || read_stdin(shared))
            .map_err(|_| TransportError::SetupFailed)?;
        self.reader = Some(handle);
        Ok(())
    }

    fn available(&mut self) -> usize {
        self.shared.ring.len()
    }

    fn read_byte(&mut self) -> u8 {
        self.shared.ring.pop().unwrap_or(0)
    }

    fn write_byte(&mut self, byte: u8) {
        self.write_bytes(&[byte]);
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        let _ = self.out.write_all(bytes);
        let _ = self.out.flush();
    }
}

/// Diagnostics sink on stderr (write-only)
#[derive(Default)]
pub struct StderrSink;

impl Transport for StderrSink {
    fn available(&mut self) -> usize {
        0
    }

    fn read_byte(&mut self) -> u8 {
        0
    }

    fn write_byte(&mut self, byte: u8) {
        self.write_bytes(&[byte]);
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        let _ = io::stderr().write_all(bytes);
    }
}

/// Millisecond clock from [`Instant`]
pub struct StdClock {
    start: Instant,
}

impl StdClock {
    /// Clock starting at zero now
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for StdClock {
    fn now_ms(&self) -> u32 {
        // Wraps after ~49 days, consumers use wrapping arithmetic
        self.start.elapsed().as_millis() as u32
    }
}
