mod binding_config;
mod iotctrl;
mod native_library;

use std::ffi::CStr;
use std::os::raw::c_int;

pub use binding_config::{BindingConfig, SentinelWidth, DEFAULT_LIBRARY_PATH};
pub use iotctrl::IotCtrl;
pub use native_library::NativeLibrary;

/// One measurement of the DHT31 (SHT31) temperature and humidity sensor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dht31Reading {
    pub temp_celsius: f32,
    pub relative_humidity: f32,
}

/// The raw calls exported by libiotctrl. Integer results are widened to `i32`
/// whatever width the library was built with.
pub trait NativeApi {
    fn get_temperature(&self, device_path: &CStr, debug_mode: c_int) -> i32;
    fn control_relay(&self, relay_path: &CStr, turn_on: bool) -> i32;
    /// Reading returned by `get_temperature` when the sensor could not be read.
    fn invalid_temp(&self) -> i32;
    /// Opens the I2C device, reads once and closes it again. Returns the
    /// library's status code (0 on success) with whatever was read, or `None`
    /// when the library was built without the DHT31 driver.
    fn dht31_read(&self, device_path: &CStr) -> Option<(i32, Dht31Reading)>;
}
