//! Serial link to the device: line framing and the port handle.

pub mod line;
pub mod port;

pub use line::LineBuffer;
pub use port::{DevicePort, PortError, SerialLink};
