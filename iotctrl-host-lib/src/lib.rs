mod config;
mod error;
pub mod native;
pub mod relay;
pub mod serial;

#[cfg(test)]
mod test_utils;

pub use config::{read_binding_config, read_serial_config};
pub use error::{Error, Result};
pub use native::{
    BindingConfig, Dht31Reading, IotCtrl, NativeApi, NativeLibrary, SentinelWidth,
};
pub use relay::{toggle_relay, toggle_relay_from_arg, write_relay_command, RelayState};
pub use serial::{open_with_retry, PortOpener, SerialPortConfig, MAX_OPEN_RETRIES};
