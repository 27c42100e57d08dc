//! Our error types for the JDS6600.

use thiserror::Error;

pub type Result<T, I> = core::result::Result<T, Error<I>>;

/// Input validation errors. Raised before any serial I/O takes place.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueError {
    #[error("channel must be 1 or 2")]
    InvalidChannel,
    #[error("waveform is not in the device catalogue")]
    UnknownWaveform,
    #[error("amplitude must be between 1mV and 10V")]
    AmplitudeOutOfRange,
    #[error("offset must be between -9.99V and 9.99V")]
    OffsetOutOfRange,
    #[error("duty cycle must be between 0% and 100%")]
    DutyCycleOutOfRange,
}

/// Custom error type for JDS6600 communications.
#[derive(Error, Debug)]
pub enum Error<I: embedded_io::Error> {
    #[error("serial communication error")]
    Serial(I),
    #[error("no response received before the read timeout")]
    Timeout,
    #[error("command or response exceeded the line buffer")]
    BufferOverflow,
    #[error("malformed response received")]
    MalformedResponse,
    #[error(transparent)]
    Value(#[from] ValueError),
}
