//! The JDS6600 device client.

use core::fmt;

use crate::{
    error::{Error, Result},
    protocol::{self, Response},
    registers::Register,
    types::{Channel, Waveform},
};
use embedded_io::Error as _;

/// You can create a Jds6600 using any interface which implements
/// [embedded_io::Read] & [embedded_io::Write].
///
/// The client exclusively owns the interface for the lifetime of the session;
/// dropping the client (or calling [`Self::release`]) ends the session and
/// hands the serial handle back to its owner for closing.
///
/// Every method is one synchronous request/response round trip. The protocol
/// allows a single in-flight command, so there is no state held here beyond
/// the interface itself.
pub struct Jds6600<S: embedded_io::Read + embedded_io::Write, const L: usize = 64> {
    interface: S,
}

impl<S: embedded_io::Read + embedded_io::Write, const L: usize> Jds6600<S, L> {
    /// Create a new Jds6600 instance with the given interface.
    pub fn new(interface: S) -> Self {
        Self { interface }
    }

    /// End the session and return the underlying interface.
    pub fn release(self) -> S {
        self.interface
    }

    /// Read the enable state of both channels. `true` means enabled;
    /// channel 1 first.
    pub fn get_channels(&mut self) -> Result<(bool, bool), S::Error> {
        self.read_register(Register::ChannelEnable, protocol::decode_channels)
    }

    /// Enable or disable the channels. `true` enables a channel.
    pub fn set_channels(&mut self, channel1: bool, channel2: bool) -> Result<(), S::Error> {
        self.write_register(
            Register::ChannelEnable,
            protocol::encode_channels(channel1, channel2),
        )
    }

    /// Get the waveform currently configured on the given channel.
    pub fn get_waveform(&mut self, channel: Channel) -> Result<Waveform, S::Error> {
        self.read_register(Register::waveform(channel), protocol::decode_waveform)
    }

    /// Set the waveform for the given channel.
    pub fn set_waveform(&mut self, channel: Channel, waveform: Waveform) -> Result<(), S::Error> {
        self.write_register(Register::waveform(channel), waveform.code())
    }

    /// Return the configured frequency for the given channel, in Hz.
    pub fn get_frequency_hz(&mut self, channel: Channel) -> Result<f64, S::Error> {
        self.read_register(Register::frequency(channel), protocol::decode_frequency)
    }

    /// Set the frequency for the given channel, in Hz.
    ///
    /// Resolution is 0.01Hz; the fractional remainder is truncated.
    pub fn set_frequency_hz(&mut self, channel: Channel, hz: f64) -> Result<(), S::Error> {
        let raw = protocol::encode_frequency(hz);
        // The second field is the reserved magnitude indicator, always 0 on write.
        self.write_register(Register::frequency(channel), format_args!("{raw},0"))
    }

    /// Get the signal amplitude for the given channel, in volts.
    pub fn get_amplitude_v(&mut self, channel: Channel) -> Result<f64, S::Error> {
        self.read_register(Register::amplitude(channel), protocol::decode_amplitude)
    }

    /// Set the signal amplitude for the given channel, in volts.
    ///
    /// Valid range is 1mV to 10V.
    pub fn set_amplitude_v(&mut self, channel: Channel, volts: f64) -> Result<(), S::Error> {
        let millivolts = protocol::encode_amplitude(volts)?;
        self.write_register(Register::amplitude(channel), millivolts)
    }

    /// Get the DC offset for the given channel, in volts.
    pub fn get_offset_v(&mut self, channel: Channel) -> Result<f64, S::Error> {
        self.read_register(Register::offset(channel), protocol::decode_offset)
    }

    /// Set the DC offset for the given channel, in volts.
    ///
    /// Valid range is -9.99V to +9.99V.
    pub fn set_offset_v(&mut self, channel: Channel, volts: f64) -> Result<(), S::Error> {
        let raw = protocol::encode_offset(volts)?;
        self.write_register(Register::offset(channel), raw)
    }

    /// Get the duty cycle for the given channel, in percent.
    pub fn get_duty_cycle_pct(&mut self, channel: Channel) -> Result<f64, S::Error> {
        self.read_register(Register::duty_cycle(channel), protocol::decode_duty_cycle)
    }

    /// Set the duty cycle for the given channel, in percent.
    pub fn set_duty_cycle_pct(&mut self, channel: Channel, percent: f64) -> Result<(), S::Error> {
        let raw = protocol::encode_duty_cycle(percent)?;
        self.write_register(Register::duty_cycle(channel), raw)
    }

    /// Read a register and decode its payload.
    fn read_register<T>(
        &mut self,
        register: Register,
        decode: impl FnOnce(&str) -> Option<T>,
    ) -> Result<T, S::Error> {
        let command =
            protocol::read_command(register.into()).map_err(|_| Error::BufferOverflow)?;
        let line = self.transact(&command)?;
        let line = core::str::from_utf8(&line).map_err(|_| Error::MalformedResponse)?;
        match protocol::parse_response(line.trim()) {
            Response::Payload(payload) => decode(payload).ok_or(Error::MalformedResponse),
            Response::Ack | Response::Empty => Err(Error::MalformedResponse),
        }
    }

    /// Write a register and check the device acknowledged.
    ///
    /// The device answers most writes with `:ok`, but some echo the read form
    /// instead; both count as success. An unparseable reply does not.
    fn write_register(
        &mut self,
        register: Register,
        payload: impl fmt::Display,
    ) -> Result<(), S::Error> {
        let command = protocol::write_command(register.into(), payload)
            .map_err(|_| Error::BufferOverflow)?;
        let line = self.transact(&command)?;
        let line = core::str::from_utf8(&line).map_err(|_| Error::MalformedResponse)?;
        match protocol::parse_response(line.trim()) {
            Response::Ack | Response::Payload(_) => Ok(()),
            Response::Empty => Err(Error::MalformedResponse),
        }
    }

    /// Write one command line and collect the single reply line.
    ///
    /// Reads until a newline arrives. A timeout with nothing received is an
    /// error; a timeout after partial data hands whatever arrived to the
    /// parser.
    fn transact(&mut self, command: &str) -> Result<heapless::Vec<u8, L>, S::Error> {
        self.interface
            .write_all(command.as_bytes())
            .map_err(Error::Serial)?;

        let mut line: heapless::Vec<u8, L> = heapless::Vec::new();
        let mut chunk = [0u8; 8];
        loop {
            match self.interface.read(&mut chunk) {
                // End of stream; let the parser decide what we got.
                Ok(0) => break,
                Ok(bytes_read) => {
                    if line.extend_from_slice(&chunk[..bytes_read]).is_err() {
                        return Err(Error::BufferOverflow);
                    }
                    if line.contains(&b'\n') {
                        break;
                    }
                }
                Err(e) => {
                    match e.kind() {
                        embedded_io::ErrorKind::TimedOut | embedded_io::ErrorKind::Other => {
                            if line.is_empty() {
                                return Err(Error::Timeout);
                            }
                            break;
                        }
                        _ => return Err(Error::Serial(e)),
                    }
                }
            }
        }
        Ok(line)
    }
}
