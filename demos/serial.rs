//! Scripted demo session against a real JDS6600 on a serial port.
//!
//! Run with `cargo run --example serial [PORT]`. Without an argument the
//! available ports are listed for interactive selection.

use std::env;
use std::time::Duration;

use inquire::Select;
use jds6600::generator::Jds6600;
use jds6600::types::{Channel, Waveform};
use serialport::SerialPort;

// The serial framing the device requires.
const BAUD_RATE: u32 = 115200;
const READ_TIMEOUT: Duration = Duration::from_secs(1);

/// Adapter giving an OS serial port the `embedded_io` traits the driver needs.
pub struct PortWrapper(Box<dyn SerialPort>);

#[derive(Debug)]
pub struct IoError(std::io::Error);

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl embedded_io::Error for IoError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self.0.kind() {
            std::io::ErrorKind::NotFound => embedded_io::ErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => embedded_io::ErrorKind::PermissionDenied,
            std::io::ErrorKind::BrokenPipe => embedded_io::ErrorKind::BrokenPipe,
            std::io::ErrorKind::InvalidData => embedded_io::ErrorKind::InvalidData,
            std::io::ErrorKind::TimedOut => embedded_io::ErrorKind::TimedOut,
            std::io::ErrorKind::Interrupted => embedded_io::ErrorKind::Interrupted,
            _ => embedded_io::ErrorKind::Other,
        }
    }
}

impl embedded_io::ErrorType for PortWrapper {
    type Error = IoError;
}

impl embedded_io::Read for PortWrapper {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        std::io::Read::read(&mut self.0, buf).map_err(IoError)
    }
}

impl embedded_io::Write for PortWrapper {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        std::io::Write::write(&mut self.0, buf).map_err(IoError)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        std::io::Write::flush(&mut self.0).map_err(IoError)
    }
}

fn main() {
    // Get serial port from command line arg or interactive selection
    let port_name = env::args().nth(1).unwrap_or_else(|| {
        let ports = serialport::available_ports().expect("Failed to enumerate serial ports");

        if ports.is_empty() {
            eprintln!("No serial ports found!");
            std::process::exit(1);
        }

        let port_names: Vec<String> = ports.iter().map(|p| p.port_name.clone()).collect();

        Select::new("Select a serial port:", port_names)
            .prompt()
            .expect("Failed to select port")
    });

    println!("Using port: {}", port_name);

    // 115200 8N1, 1 second read timeout.
    let port = serialport::new(&port_name, BAUD_RATE)
        .timeout(READ_TIMEOUT)
        .open()
        .expect("Failed to open serial port");

    let mut generator: Jds6600<PortWrapper, 64> = Jds6600::new(PortWrapper(port));

    // Configure channel 1 and switch it on.
    generator
        .set_waveform(Channel::One, Waveform::Sine)
        .unwrap();
    generator.set_frequency_hz(Channel::One, 1000.0).unwrap();
    generator.set_amplitude_v(Channel::One, 2.0).unwrap();
    generator.set_offset_v(Channel::One, 0.0).unwrap();
    generator.set_duty_cycle_pct(Channel::One, 50.0).unwrap();
    generator.set_channels(true, false).unwrap();
    println!("Channel 1 configured: sine, 1kHz, 2V, 0V offset, 50% duty");

    // Read everything back.
    let (ch1, ch2) = generator.get_channels().unwrap();
    println!("Channel enable: ch1={}, ch2={}", ch1, ch2);
    println!(
        "Waveform: {}",
        generator.get_waveform(Channel::One).unwrap()
    );
    println!(
        "Frequency: {:.2}Hz",
        generator.get_frequency_hz(Channel::One).unwrap()
    );
    println!(
        "Amplitude: {:.3}V",
        generator.get_amplitude_v(Channel::One).unwrap()
    );
    println!(
        "Offset: {:.2}V",
        generator.get_offset_v(Channel::One).unwrap()
    );
    println!(
        "Duty cycle: {:.1}%",
        generator.get_duty_cycle_pct(Channel::One).unwrap()
    );

    // Dropping the client releases the port.
}
