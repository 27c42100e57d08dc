//! Domain types shared between the codec and the device client.

use crate::error::ValueError;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// One of the two independent signal paths of the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Channel {
    One = 1,
    Two = 2,
}

impl Channel {
    /// The channel number as used in register arithmetic.
    pub const fn number(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Channel {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Channel::One),
            2 => Ok(Channel::Two),
            _ => Err(ValueError::InvalidChannel),
        }
    }
}

impl From<Channel> for u8 {
    fn from(value: Channel) -> Self {
        value as u8
    }
}

/// The device's waveform catalogue.
///
/// The discriminant of each variant is the wire-protocol code the device uses
/// for that waveform. The order is part of the wire contract: entries may only
/// ever be appended, never reordered or inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Waveform {
    Sine = 0,
    Square = 1,
    Pulse = 2,
    Triangle = 3,
    PartialSine = 4,
    Cmos = 5,
    Dc = 6,
    HalfWave = 7,
    FullWave = 8,
    PosLadder = 9,
    NegLadder = 10,
    Noise = 11,
    ExpRise = 12,
    ExpDecay = 13,
    MultiTone = 14,
    Sinc = 15,
    Lorenz = 16,
}

impl Waveform {
    /// The wire-protocol code of this waveform.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a waveform by its wire-protocol code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::iter().find(|waveform| waveform.code() == code)
    }

    /// Look up a waveform by its snake_case name, e.g. `"half_wave"`.
    pub fn from_name(name: &str) -> Result<Self, ValueError> {
        name.parse().map_err(|_| ValueError::UnknownWaveform)
    }
}

impl From<Waveform> for u8 {
    fn from(value: Waveform) -> Self {
        value as u8
    }
}
