//! Byte transport and clock capabilities.
//!
//! The console core never owns or configures hardware. Each platform
//! provides one [`Transport`] implementation (see `hal`) and hands it to
//! [`Console`](crate::console::Console) at setup.

/// Transport setup failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// E10: Peripheral or stream could not be configured
    SetupFailed,
    /// E11: Requested baud rate not supported
    UnsupportedBaudRate,
}

impl TransportError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::SetupFailed => "E10",
            Self::UnsupportedBaudRate => "E11",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::SetupFailed => "transport setup failed",
            Self::UnsupportedBaudRate => "unsupported baud rate",
        }
    }
}

impl core::fmt::Display for TransportError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

/// Byte-oriented serial channel.
pub trait Transport {
    /// Configure the channel. Adapters that are ready on construction keep
    /// the default.
    fn setup(&mut self, _baud_rate: u32) -> Result<(), TransportError> {
        Ok(())
    }

    /// Number of received bytes waiting to be read.
    fn available(&mut self) -> usize;

    /// Read one byte.
    ///
    /// Only meaningful when [`available`](Self::available) is non-zero;
    /// adapters return `0` otherwise.
    fn read_byte(&mut self) -> u8;

    /// Write one byte. Failures are not reported to the console core.
    fn write_byte(&mut self, byte: u8);

    /// Write a byte slice.
    fn write_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.write_byte(b);
        }
    }

    /// Write a string.
    fn write_str(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn setup(&mut self, baud_rate: u32) -> Result<(), TransportError> {
        (**self).setup(baud_rate)
    }

    fn available(&mut self) -> usize {
        (**self).available()
    }

    fn read_byte(&mut self) -> u8 {
        (**self).read_byte()
    }

    fn write_byte(&mut self, byte: u8) {
        (**self).write_byte(byte)
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        (**self).write_bytes(bytes)
    }
}

/// Monotonic millisecond clock.
pub trait Clock {
    /// Milliseconds since an arbitrary epoch. May wrap.
    fn now_ms(&self) -> u32;
}

/// Read bytes until the line goes quiet.
///
/// Busy-waits on `clock`: returns once no byte has arrived for
/// `timeout_ms` (measured from the call, then from the last byte) or once
/// `buf` is full. Returns the number of bytes stored. Used outside the
/// interactive editing path (bulk uploads, scripted hosts).
pub fn read_with_timeout<T, C>(io: &mut T, clock: &C, buf: &mut [u8], timeout_ms: u32) -> usize
where
    T: Transport + ?Sized,
    C: Clock + ?Sized,
{
    let mut count = 0;
    let mut last_rx = clock.now_ms();

    while count < buf.len() {
        if io.available() > 0 {
            buf[count] = io.read_byte();
            count += 1;
            last_rx = clock.now_ms();
            continue;
        }

        if clock.now_ms().wrapping_sub(last_rx) >= timeout_ms {
            break;
        }
        core::hint::spin_loop();
    }

    count
}
