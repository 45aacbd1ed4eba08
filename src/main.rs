//! RustSerialCli - firmware entry point
//!
//! 1. Initialize ESP-IDF and the log backend
//! 2. Open UART0 (the USB-serial bridge on most dev boards)
//! 3. Poll the console session forever

use core::fmt::Write;

use esp_idf_svc::hal::delay::BLOCK;
use esp_idf_svc::hal::gpio;
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::hal::uart::{config::Config, UartDriver};
use esp_idf_svc::hal::units::Hertz;
use esp_idf_svc::sys as esp_idf_sys;

use rust_serial_cli::{
    Command, Invocation, Outcome, PrefixCompleter, Response, ResponseTable, Session, Sink,
    Transport,
};

/// Version string (set by build.rs, includes git hash)
const VERSION: &str = env!("VERSION_STRING");

const BAUD_RATE: u32 = 115_200;

/// UART0 as a console transport
struct UartTransport<'d> {
    uart: UartDriver<'d>,
}

impl Sink for UartTransport<'_> {
    fn write_bytes(&mut self, bytes: &[u8]) {
        let _ = self.uart.write(bytes);
    }
}

impl Transport for UartTransport<'_> {
    fn read_byte(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        match self.uart.read(&mut byte, BLOCK) {
            Ok(1) => Some(byte[0]),
            _ => None,
        }
    }
}

static COMMANDS: &[Command] = &[
    Command { name: "help", brief: "List commands", handler: cmd_help },
    Command { name: "echo", brief: "Print arguments", handler: cmd_echo },
    Command { name: "stty", brief: "stty echo on|off", handler: cmd_stty },
    Command { name: "version", brief: "Firmware version", handler: cmd_version },
    Command { name: "go", brief: "Start run, any abort key stops", handler: cmd_go },
    Command { name: "reset", brief: "Restart system", handler: cmd_reset },
];

static COMMAND_NAMES: &[&str] = &["help", "echo", "stty", "version", "go", "reset"];

static RESPONSES: ResponseTable<'static> = ResponseTable::new(
    &[
        Response { outcome: Outcome::Success, handler: respond_ok },
        Response { outcome: Outcome::Execute, handler: respond_running },
    ],
    respond_other,
);

fn cmd_help(inv: &mut Invocation<'_>) -> Outcome {
    for c in inv.commands() {
        let _ = write!(inv, "  {:<10} {}\r\n", c.name, c.brief);
    }
    Outcome::Success
}

fn cmd_echo(inv: &mut Invocation<'_>) -> Outcome {
    let args = inv.arguments();
    let _ = write!(inv, "{}", args);
    Outcome::Success
}

fn cmd_stty(inv: &mut Invocation<'_>) -> Outcome {
    match (inv.arg(0), inv.arg(1)) {
        (Some("echo"), Some("on")) => inv.set_echo(true),
        (Some("echo"), Some("off")) => inv.set_echo(false),
        _ => return Outcome::InvalidArgument,
    }
    Outcome::Success
}

fn cmd_version(inv: &mut Invocation<'_>) -> Outcome {
    let _ = write!(inv, "{}", VERSION);
    Outcome::Success
}

fn cmd_go(inv: &mut Invocation<'_>) -> Outcome {
    let _ = write!(inv, "running, press ESC/SPACE/Ctrl+C to stop");
    Outcome::Execute
}

fn cmd_reset(_inv: &mut Invocation<'_>) -> Outcome {
    Outcome::Reset
}

fn respond_ok(_outcome: Outcome, inv: &mut Invocation<'_>) {
    let _ = write!(inv, "OK");
}

fn respond_running(_outcome: Outcome, _inv: &mut Invocation<'_>) {}

fn respond_other(outcome: Outcome, inv: &mut Invocation<'_>) {
    let command = inv.command();
    match outcome {
        Outcome::NotFound => {
            let _ = write!(inv, "\r\n{}: command not found", command);
        }
        Outcome::Reset => {
            let _ = write!(inv, "restarting...");
        }
        other => {
            let _ = write!(inv, "ERROR: {}", other);
        }
    }
}

fn main() -> Result<(), esp_idf_sys::EspError> {
    // Initialize ESP-IDF
    esp_idf_sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    let peripherals = Peripherals::take()?;
    let uart = UartDriver::new(
        peripherals.uart0,
        peripherals.pins.gpio43,
        peripherals.pins.gpio44,
        Option::<gpio::AnyIOPin>::None, // CTS
        Option::<gpio::AnyIOPin>::None, // RTS
        &Config::default().baudrate(Hertz(BAUD_RATE)),
    )?;

    let mut completer = PrefixCompleter::new(COMMAND_NAMES);
    let mut session = Session::new(
        UartTransport { uart },
        COMMANDS,
        RESPONSES,
        Some(&mut completer),
    );

    log::info!("{} console on UART0 @ {} baud", VERSION, BAUD_RATE);

    loop {
        match session.step() {
            Outcome::Abort => log::info!("run stopped by user"),
            Outcome::Reset => unsafe {
                esp_idf_sys::esp_restart();
            },
            _ => {}
        }
    }
}
