//! The line-based ASCII protocol spoken by the JDS6600.
//!
//! Everything in this module is pure: command framing, response parsing and
//! the fixed-point value encodings are all free of I/O and state, so they can
//! be tested without a transport.
//!
//! A request line looks like `:w23=100000,0.\n` (write) or `:r20=0.\n` (read).
//! The device replies either `:ok` or an echo of the read form carrying the
//! payload, e.g. `:r20=1,1.`.

use core::fmt::{self, Write};

use crate::error::ValueError;
use crate::types::Waveform;

/// Maximum length of a framed command line.
///
/// The largest payload is a frequency write (20 digit raw value plus the
/// reserved `,0` field), which still fits comfortably.
pub const MAX_COMMAND_LEN: usize = 32;

/// A framed command line, ready to be written to the transport.
pub type Command = heapless::String<MAX_COMMAND_LEN>;

/// The three shapes a device reply can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response<'a> {
    /// The literal `:ok` acknowledgement.
    Ack,
    /// The text between the first `=` and the trailing `.` terminator.
    Payload(&'a str),
    /// Too short or missing `=`; nothing usable in the reply.
    Empty,
}

/// Frame a read command for the given register.
pub fn read_command(register: u8) -> Result<Command, fmt::Error> {
    let mut command = Command::new();
    write!(command, ":r{register}=0.\n")?;
    Ok(command)
}

/// Frame a write command for the given register and payload.
pub fn write_command(register: u8, payload: impl fmt::Display) -> Result<Command, fmt::Error> {
    let mut command = Command::new();
    write!(command, ":w{register}={payload}.\n")?;
    Ok(command)
}

/// Classify a raw reply line (already stripped of its line ending).
pub fn parse_response(line: &str) -> Response<'_> {
    if line == ":ok" {
        return Response::Ack;
    }
    if line.len() > 3 {
        if let Some((_, rest)) = line.split_once('=') {
            // Drop the trailing `.` terminator.
            let mut chars = rest.chars();
            chars.next_back();
            return Response::Payload(chars.as_str());
        }
    }
    Response::Empty
}

/// Encode a pair of channel-enable flags, channel 1 first.
pub fn encode_channels(channel1: bool, channel2: bool) -> &'static str {
    match (channel1, channel2) {
        (false, false) => "0,0",
        (true, false) => "1,0",
        (false, true) => "0,1",
        (true, true) => "1,1",
    }
}

/// Decode a pair of channel-enable flags. `"1"` means enabled.
pub fn decode_channels(payload: &str) -> Option<(bool, bool)> {
    let mut fields = payload.split(',');
    let channel1 = fields.next()? == "1";
    let channel2 = fields.next()? == "1";
    Some((channel1, channel2))
}

/// Decode a waveform from its catalogue code.
pub fn decode_waveform(payload: &str) -> Option<Waveform> {
    Waveform::from_code(payload.parse().ok()?)
}

/// Encode a frequency in Hz as the raw register value (units of 0.01Hz).
///
/// The encoder always uses magnitude indicator `0`; the caller appends the
/// reserved `,0` field when framing the write.
pub fn encode_frequency(hz: f64) -> u64 {
    (hz * 100.0) as u64
}

/// Decode a `raw,magnitude` frequency payload into Hz.
///
/// The magnitude indicator counts how many /1000 scaling steps to apply to
/// the raw value before the final /100.
pub fn decode_frequency(payload: &str) -> Option<f64> {
    let (raw, magnitude) = payload.split_once(',')?;
    let mut frequency: f64 = raw.parse().ok()?;
    let magnitude: u32 = magnitude.parse().ok()?;
    for _ in 0..magnitude {
        frequency /= 1000.0;
    }
    Some(frequency / 100.0)
}

/// Encode an amplitude in volts as millivolts.
pub fn encode_amplitude(volts: f64) -> Result<u32, ValueError> {
    if !(0.001..=10.0).contains(&volts) {
        return Err(ValueError::AmplitudeOutOfRange);
    }
    Ok((volts * 1000.0) as u32)
}

/// Decode a millivolt payload into volts.
pub fn decode_amplitude(payload: &str) -> Option<f64> {
    let millivolts: f64 = payload.parse().ok()?;
    Some(millivolts / 1000.0)
}

/// Encode a DC offset in volts as the biased register value.
///
/// The input is rounded to two decimal places and must lie strictly between
/// -10V and +10V: `1999` => +9.99V, `1000` => 0V, `1` => -9.99V.
pub fn encode_offset(volts: f64) -> Result<u16, ValueError> {
    let centivolts = scaled_round(volts, 100.0);
    if !(-1000 < centivolts && centivolts < 1000) {
        return Err(ValueError::OffsetOutOfRange);
    }
    Ok((centivolts + 1000) as u16)
}

/// Decode a biased offset payload into volts.
pub fn decode_offset(payload: &str) -> Option<f64> {
    let raw: f64 = payload.parse().ok()?;
    Some((raw - 1000.0) / 100.0)
}

/// Encode a duty cycle in percent as tenths of a percent.
///
/// The input is rounded to one decimal place and must lie in 0..=100%.
pub fn encode_duty_cycle(percent: f64) -> Result<u16, ValueError> {
    let tenths = scaled_round(percent, 10.0);
    if !(0..=1000).contains(&tenths) {
        return Err(ValueError::DutyCycleOutOfRange);
    }
    Ok(tenths as u16)
}

/// Decode a tenths-of-a-percent payload into percent.
pub fn decode_duty_cycle(payload: &str) -> Option<f64> {
    let tenths: f64 = payload.parse().ok()?;
    Some(tenths / 10.0)
}

/// Round `value * factor` to the nearest integer, halves away from zero.
///
/// Manual rounding keeps this usable without `std` float intrinsics.
fn scaled_round(value: f64, factor: f64) -> i64 {
    let scaled = value * factor;
    if scaled >= 0.0 {
        (scaled + 0.5) as i64
    } else {
        (scaled - 0.5) as i64
    }
}
