mod open_with_retry;
mod serial_port_config;

use std::io::Write;

pub use open_with_retry::{open_with_retry, MAX_OPEN_RETRIES};
pub use serial_port_config::{
    DataBitsConfig, FlowControlConfig, ParityConfig, SerialPortConfig, StopBitsConfig,
};

/// Something that can hand out a writable port, e.g. a serial device.
pub trait PortOpener {
    type Port: Write;
    type Error: std::error::Error + Send + Sync + 'static;

    fn open_port(&mut self) -> std::result::Result<Self::Port, Self::Error>;
}
