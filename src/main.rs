//! RustMiniCli - Demo console
//!
//! Registers a few commands and services the console from the main loop:
//! 1. Open the platform transport (stdin/stdout on hosts, UART0 on ESP-IDF)
//! 2. Register commands
//! 3. Poll forever, draining diagnostics when idle

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use rust_mini_cli::config::ConsoleConfig;
use rust_mini_cli::console::{CommandContext, Console, VERSION};
use rust_mini_cli::transport::Transport;
use rust_mini_cli::{cli_printf, log_drain, CONSOLE_LOG_STREAM};

/// Simulated LED driven by the `led` command
static LED_ON: AtomicBool = AtomicBool::new(false);

/// Idle delay when no input is pending
const IDLE_DELAY: Duration = Duration::from_millis(5);

fn main() {
    #[cfg(target_os = "espidf")]
    esp_idf_svc::sys::link_patches();

    let io = match platform::open_transport() {
        Ok(io) => io,
        Err(e) => {
            eprintln!("console transport unavailable: {}", e);
            return;
        }
    };

    let mut console = match Console::setup(io, ConsoleConfig::default()) {
        Ok(console) => console,
        Err(e) => {
            eprintln!("console setup failed: {}", e);
            return;
        }
    };

    register_commands(&mut console);
    console.print_banner();

    let log_enabled = std::env::var_os("MINI_CLI_LOG").is_some();

    loop {
        console.run();

        if console.transport_mut().available() == 0 {
            if log_enabled {
                log_drain::drain_to(&CONSOLE_LOG_STREAM, &mut platform::log_sink());
            }
            if platform::input_closed(console.transport()) {
                break;
            }
            thread::sleep(IDLE_DELAY);
        }
    }
}

fn register_commands<T: Transport>(console: &mut Console<T>) {
    let commands: [(&'static str, rust_mini_cli::console::CommandHandler, &'static str); 4] = [
        ("led", cmd_led, "led [on/off], turn the LED on or off."),
        ("version", cmd_version, "Shows current firmware version."),
        ("echo", cmd_echo, "echo [args...], prints its arguments."),
        ("help", cmd_help, "Shows program help information."),
    ];

    for (name, handler, description) in commands {
        if let Err(e) = console.add(name, handler, description) {
            eprintln!("cannot add '{}': {}", name, e);
        }
    }
}

// --- Command Implementations ---

fn cmd_help(ctx: &mut CommandContext<'_>, _argv: &[&[u8]]) {
    cli_printf!(ctx, "\nMiniCli demo %s\n", VERSION);
    ctx.print_help();
}

fn cmd_led(ctx: &mut CommandContext<'_>, argv: &[&[u8]]) {
    match argv.first().copied() {
        Some(b"on") => {
            LED_ON.store(true, Ordering::Relaxed);
            cli_printf!(ctx, "LED ON\n");
        }
        Some(b"off") => {
            LED_ON.store(false, Ordering::Relaxed);
            cli_printf!(ctx, "LED OFF\n");
        }
        _ => cli_printf!(ctx, "LED command needs \"on\" or \"off\" arg.\n"),
    }
}

fn cmd_version(ctx: &mut CommandContext<'_>, _argv: &[&[u8]]) {
    cli_printf!(ctx, "FW App Version: %s\n", VERSION);
}

fn cmd_echo(ctx: &mut CommandContext<'_>, argv: &[&[u8]]) {
    cli_printf!(ctx, "argc=%u", argv.len());
    for arg in argv {
        cli_printf!(ctx, " %s", *arg);
    }
    cli_printf!(ctx, "\n");
}

#[cfg(not(target_os = "espidf"))]
mod platform {
    use rust_mini_cli::hal::{StderrSink, StdioTransport};
    use rust_mini_cli::TransportError;

    pub fn open_transport() -> Result<StdioTransport, TransportError> {
        Ok(StdioTransport::new())
    }

    pub fn log_sink() -> StderrSink {
        StderrSink
    }

    pub fn input_closed(io: &StdioTransport) -> bool {
        io.is_closed()
    }
}

#[cfg(target_os = "espidf")]
mod platform {
    use esp_idf_svc::hal::gpio::AnyIOPin;
    use esp_idf_svc::hal::peripherals::Peripherals;
    use esp_idf_svc::hal::uart::{config::Config, UartDriver};
    use esp_idf_svc::hal::units::Hertz;
    use esp_idf_svc::sys::EspError;

    use rust_mini_cli::config::DEFAULT_BAUD_RATE;
    use rust_mini_cli::hal::{StderrSink, UartTransport};

    /// UART0 on the ESP32-S3 default console pins (TX GPIO43, RX GPIO44)
    pub fn open_transport() -> Result<UartTransport<'static>, EspError> {
        let p = Peripherals::take()?;
        let config = Config::default().baudrate(Hertz(DEFAULT_BAUD_RATE));
        let uart = UartDriver::new(
            p.uart0,
            p.pins.gpio43,
            p.pins.gpio44,
            Option::<AnyIOPin>::None, // CTS
            Option::<AnyIOPin>::None, // RTS
            &config,
        )?;
        Ok(UartTransport::new(uart))
    }

    pub fn log_sink() -> StderrSink {
        StderrSink
    }

    pub fn input_closed(_io: &UartTransport<'_>) -> bool {
        false
    }
}
