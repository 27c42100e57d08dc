//! We use this mocking module in unit tests to emulate the serial port of the
//! signal generator.
//!
//! Tests preload the reply line the device would send, run a client operation,
//! then inspect the exact command bytes that were written.

/// Our mock type used to emulate a serial port.
pub struct MockSerial {
    /// Command bytes written to the mock serial port.
    write_buffer: heapless::Vec<u8, 256>,
    /// Pre-configured reply bytes handed out by `read`.
    read_buffer: heapless::Vec<u8, 256>,
    /// Current position in the read buffer.
    read_position: usize,
    /// Flag to simulate write errors.
    should_error_on_write: bool,
    /// Flag to simulate read errors.
    should_error_on_read: bool,
}

#[derive(Debug)]
pub enum MockSerialError {
    /// Simulated buffer overflow.
    BufferOverflow,
    /// Generic simulated error for testing.
    SimulatedError,
    /// No data available; stands in for the port's read timeout.
    WouldBlock,
}

impl core::fmt::Display for MockSerialError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MockSerialError::BufferOverflow => write!(f, "simulated buffer overflow"),
            MockSerialError::SimulatedError => write!(f, "simulated error"),
            MockSerialError::WouldBlock => write!(f, "no data available"),
        }
    }
}

impl core::error::Error for MockSerialError {}

impl embedded_io::Error for MockSerialError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            MockSerialError::BufferOverflow => embedded_io::ErrorKind::OutOfMemory,
            MockSerialError::SimulatedError => embedded_io::ErrorKind::BrokenPipe,
            MockSerialError::WouldBlock => embedded_io::ErrorKind::TimedOut,
        }
    }
}

impl embedded_io::ErrorType for MockSerial {
    type Error = MockSerialError;
}

impl embedded_io::Write for MockSerial {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if self.should_error_on_write {
            return Err(MockSerialError::SimulatedError);
        }

        self.write_buffer
            .extend_from_slice(buf)
            .map_err(|_| MockSerialError::BufferOverflow)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        if self.should_error_on_write {
            return Err(MockSerialError::SimulatedError);
        }
        Ok(())
    }
}

impl embedded_io::Read for MockSerial {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.should_error_on_read {
            return Err(MockSerialError::SimulatedError);
        }

        if self.read_position >= self.read_buffer.len() {
            return Err(MockSerialError::WouldBlock);
        }

        let available = self.read_buffer.len() - self.read_position;
        let bytes_to_read = core::cmp::min(buf.len(), available);
        buf[..bytes_to_read]
            .copy_from_slice(&self.read_buffer[self.read_position..][..bytes_to_read]);

        self.read_position += bytes_to_read;
        Ok(bytes_to_read)
    }
}

impl MockSerial {
    /// Create a new MockSerial instance with empty buffers.
    pub fn new() -> Self {
        Self {
            write_buffer: heapless::Vec::new(),
            read_buffer: heapless::Vec::new(),
            read_position: 0,
            should_error_on_write: false,
            should_error_on_read: false,
        }
    }

    /// Set the reply data that will be returned when `read` is called.
    pub fn set_read_data(&mut self, data: &[u8]) -> Result<(), MockSerialError> {
        self.read_buffer.clear();
        self.read_position = 0;
        self.read_buffer
            .extend_from_slice(data)
            .map_err(|_| MockSerialError::BufferOverflow)
    }

    /// The command bytes that were written to this mock serial port.
    pub fn written_data(&self) -> &[u8] {
        &self.write_buffer
    }

    /// Configure whether write operations should fail with an error.
    pub fn set_write_error(&mut self, should_error: bool) {
        self.should_error_on_write = should_error;
    }

    /// Configure whether read operations should fail with an error.
    pub fn set_read_error(&mut self, should_error: bool) {
        self.should_error_on_read = should_error;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_io::{Read, Write};

    #[test]
    fn write_accumulates_commands() {
        let mut mock = MockSerial::new();
        mock.write(b":r20=0.\n").unwrap();
        mock.write(b":w20=1,1.\n").unwrap();
        assert_eq!(mock.written_data(), b":r20=0.\n:w20=1,1.\n");
    }

    #[test]
    fn read_hands_out_reply_in_chunks() {
        let mut mock = MockSerial::new();
        mock.set_read_data(b":r20=1,1.\n").unwrap();

        let mut chunk = [0u8; 4];
        assert_eq!(mock.read(&mut chunk).unwrap(), 4);
        assert_eq!(&chunk, b":r20");
        assert_eq!(mock.read(&mut chunk).unwrap(), 4);
        assert_eq!(&chunk, b"=1,1");
        assert_eq!(mock.read(&mut chunk).unwrap(), 2);
        assert_eq!(&chunk[..2], b".\n");
    }

    #[test]
    fn read_blocks_when_exhausted() {
        let mut mock = MockSerial::new();
        mock.set_read_data(b":ok\n").unwrap();

        let mut chunk = [0u8; 8];
        assert_eq!(mock.read(&mut chunk).unwrap(), 4);
        assert!(matches!(
            mock.read(&mut chunk),
            Err(MockSerialError::WouldBlock)
        ));
    }

    #[test]
    fn set_read_data_replaces_previous_reply() {
        let mut mock = MockSerial::new();
        mock.set_read_data(b"first\n").unwrap();
        mock.set_read_data(b"second\n").unwrap();

        let mut chunk = [0u8; 16];
        let read = mock.read(&mut chunk).unwrap();
        assert_eq!(&chunk[..read], b"second\n");
    }

    #[test]
    fn error_injection() {
        let mut mock = MockSerial::new();
        mock.set_write_error(true);
        assert!(mock.write(b":r20=0.\n").is_err());
        assert!(mock.written_data().is_empty());

        mock.set_write_error(false);
        mock.set_read_data(b":ok\n").unwrap();
        mock.set_read_error(true);
        let mut chunk = [0u8; 8];
        assert!(matches!(
            mock.read(&mut chunk),
            Err(MockSerialError::SimulatedError)
        ));
    }
}
