//! This crate provides an interface for communicating with and controlling the
//! JDS6600 series of DDS signal generators / frequency counters.
//!
//! It supports `no-std` environments by use of the `no-std` feature flag.
//!
//! The device speaks a line-based ASCII protocol over serial. Every command is a
//! single request/response round trip: a read (`:r<reg>=0.`) or write
//! (`:w<reg>=<value>.`) line out, one reply line back.
//!
//! The serial port used for device comms should be configured like so:
//! * Baud rate: 115200
//! * Data bits: 8
//! * Stop bits: 1
//! * Parity: None
//! * Read timeout: 1 second

#![cfg_attr(feature = "no-std", no_std)]

pub mod error;
pub mod generator;
pub mod protocol;
pub mod registers;
pub mod types;

#[cfg(test)]
mod mock_serial;
