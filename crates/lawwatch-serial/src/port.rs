//! The serial port handle and the link abstraction the listener runs against.

use std::io::{self, Read, Write};
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

use crate::line::LineBuffer;

#[derive(Debug, Error)]
pub enum PortError {
    #[error("failed to open serial port {port}: {source}")]
    Open {
        port: String,
        source: serialport::Error,
    },
    #[error("serial I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("device sent non-UTF-8 data: {0}")]
    Decode(#[from] std::str::Utf8Error),
}

/// Bidirectional newline-framed serial link.
///
/// Implemented by [`DevicePort`] for real hardware and by in-memory fakes in
/// listener tests.
pub trait SerialLink {
    /// Poll for the next complete command line.
    ///
    /// Returns `Ok(None)` when no complete line is available yet; a read
    /// timeout counts as no input.
    fn poll_line(&mut self) -> Result<Option<String>, PortError>;

    /// Write one status line, newline-terminated, and flush.
    fn write_line(&mut self, line: &str) -> Result<(), PortError>;
}

/// A real serial device, opened once at startup and held for the process
/// lifetime.
pub struct DevicePort {
    port: Box<dyn serialport::SerialPort>,
    lines: LineBuffer,
}

impl DevicePort {
    /// Open the device at the given path and baud rate.
    ///
    /// The read timeout bounds how long a single poll can block when the
    /// device is silent.
    pub fn open(path: &str, baud: u32, read_timeout: Duration) -> Result<Self, PortError> {
        let port = serialport::new(path, baud)
            .timeout(read_timeout)
            .open()
            .map_err(|source| PortError::Open {
                port: path.to_string(),
                source,
            })?;
        info!(port = %path, baud, "serial port open");
        Ok(Self {
            port,
            lines: LineBuffer::new(),
        })
    }
}

impl SerialLink for DevicePort {
    fn poll_line(&mut self) -> Result<Option<String>, PortError> {
        if let Some(line) = self.lines.next_line()? {
            return Ok(Some(line));
        }

        let mut chunk = [0u8; 256];
        match self.port.read(&mut chunk) {
            Ok(0) => Ok(None),
            Ok(n) => {
                self.lines.extend(&chunk[..n]);
                Ok(self.lines.next_line()?)
            }
            Err(e) if e.kind() == io::ErrorKind::TimedOut => Ok(None),
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => Ok(None),
            Err(e) => Err(PortError::Io(e)),
        }
    }

    fn write_line(&mut self, line: &str) -> Result<(), PortError> {
        debug!(line = %line, "writing status");
        self.port.write_all(line.as_bytes())?;
        self.port.write_all(b"\n")?;
        self.port.flush()?;
        Ok(())
    }
}
