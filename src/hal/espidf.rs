//! ESP-IDF adapter: console on a UART driver.
//!
//! The driver's own RX ring (filled by the IDF UART interrupt) is the
//! producer side; the console drains it without blocking.

use esp_idf_svc::hal::delay::NON_BLOCK;
use esp_idf_svc::hal::uart::UartDriver;
use esp_idf_svc::hal::units::Hertz;

use crate::transport::{Clock, Transport, TransportError};

/// Console transport on an installed UART driver
pub struct UartTransport<'d> {
    uart: UartDriver<'d>,
}

impl<'d> UartTransport<'d> {
    /// Wrap an installed driver
    pub fn new(uart: UartDriver<'d>) -> Self {
        Self { uart }
    }

    /// Give the driver back
    pub fn into_inner(self) -> UartDriver<'d> {
        self.uart
    }
}

impl Transport for UartTransport<'_> {
    fn setup(&mut self, baud_rate: u32) -> Result<(), TransportError> {
        self.uart
            .change_baudrate(Hertz(baud_rate))
            .map(|_| ())
            .map_err(|_| TransportError::UnsupportedBaudRate)
    }

    fn available(&mut self) -> usize {
        self.uart.remaining_read().unwrap_or(0)
    }

    fn read_byte(&mut self) -> u8 {
        let mut byte = [0u8; 1];
        match self.uart.read(&mut byte, NON_BLOCK) {
            Ok(1) => byte[0],
            _ => 0,
        }
    }

    fn write_byte(&mut self, byte: u8) {
        let _ = self.uart.write(&[byte]);
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        let _ = self.uart.write(bytes);
    }
}

/// Millisecond clock on the high resolution timer
#[derive(Default)]
pub struct EspClock;

impl Clock for EspClock {
    fn now_ms(&self) -> u32 {
        // SAFETY: esp_timer_get_time is always safe to call after boot
        let us = unsafe { esp_idf_svc::sys::esp_timer_get_time() };
        (us / 1000) as u32
    }
}
