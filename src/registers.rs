//! This module defines the parameter registers of the JDS6600.
//!
//! Per-channel parameters occupy consecutive registers: the channel 1 register
//! is base + 1 and the channel 2 register is base + 2.

use crate::types::Channel;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    /// __R/W__ - Enable flags for both channels, packed into a single
    /// register as two comma-separated digits (channel 1 first).
    ChannelEnable = 20,
    /// __R/W__ - Channel 1 waveform selection, by catalogue code.
    Waveform1 = 21,
    /// __R/W__ - Channel 2 waveform selection, by catalogue code.
    Waveform2 = 22,
    /// __R/W__ - Channel 1 frequency.
    ///
    /// Value is `raw,magnitude` where raw is in units of 0.01Hz and magnitude
    /// counts /1000 scaling steps. Writes always use magnitude `0`.
    Frequency1 = 23,
    /// __R/W__ - Channel 2 frequency. See [`Register::Frequency1`].
    Frequency2 = 24,
    /// __R/W__ - Channel 1 amplitude, in millivolts.
    Amplitude1 = 25,
    /// __R/W__ - Channel 2 amplitude, in millivolts.
    Amplitude2 = 26,
    /// __R/W__ - Channel 1 DC offset.
    ///
    /// Value is in centivolts biased by 1000: `1999` => +9.99V, `1000` => 0V,
    /// `1` => -9.99V.
    Offset1 = 27,
    /// __R/W__ - Channel 2 DC offset. See [`Register::Offset1`].
    Offset2 = 28,
    /// __R/W__ - Channel 1 duty cycle, in tenths of a percent.
    DutyCycle1 = 29,
    /// __R/W__ - Channel 2 duty cycle, in tenths of a percent.
    DutyCycle2 = 30,
}

impl Register {
    /// Waveform register for the given channel.
    pub const fn waveform(channel: Channel) -> Self {
        match channel {
            Channel::One => Self::Waveform1,
            Channel::Two => Self::Waveform2,
        }
    }

    /// Frequency register for the given channel.
    pub const fn frequency(channel: Channel) -> Self {
        match channel {
            Channel::One => Self::Frequency1,
            Channel::Two => Self::Frequency2,
        }
    }

    /// Amplitude register for the given channel.
    pub const fn amplitude(channel: Channel) -> Self {
        match channel {
            Channel::One => Self::Amplitude1,
            Channel::Two => Self::Amplitude2,
        }
    }

    /// Offset register for the given channel.
    pub const fn offset(channel: Channel) -> Self {
        match channel {
            Channel::One => Self::Offset1,
            Channel::Two => Self::Offset2,
        }
    }

    /// Duty cycle register for the given channel.
    pub const fn duty_cycle(channel: Channel) -> Self {
        match channel {
            Channel::One => Self::DutyCycle1,
            Channel::Two => Self::DutyCycle2,
        }
    }
}

impl From<Register> for u8 {
    fn from(value: Register) -> Self {
        value as u8
    }
}
