use std::ffi::CString;
use std::os::raw::c_int;

use log::debug;

use super::{BindingConfig, Dht31Reading, NativeApi, NativeLibrary};
use crate::{Error, Result};

/// Temperature sensor and relay calls on top of libiotctrl.
///
/// No device handle is kept, every call passes the device path down to the
/// library again.
pub struct IotCtrl<A: NativeApi = NativeLibrary> {
    api: A,
}

impl IotCtrl<NativeLibrary> {
    /// Loads the native library, failing if the file or any symbol is missing.
    pub fn load(config: &BindingConfig) -> Result<Self> {
        Ok(Self::new(NativeLibrary::load(config)?))
    }
}

fn to_c_path(path: &str) -> Result<CString> {
    CString::new(path)
        .map_err(|_| Error::InvalidArgument(format!("path {:?} contains a NUL byte", path)))
}

impl<A: NativeApi> IotCtrl<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Temperature in degree celsius. With `debug_mode` the library prints
    /// diagnostic information of the exchange with the sensor.
    pub fn get_temperature(&self, device_path: &str, debug_mode: bool) -> Result<f64> {
        let device_path = to_c_path(device_path)?;
        let raw = self
            .api
            .get_temperature(&device_path, c_int::from(debug_mode));
        debug!("raw temperature reading from {:?}: {}", device_path, raw);
        if raw == self.api.invalid_temp() {
            return Err(Error::SensorReadFailure);
        }
        Ok(raw as f64 / 10.0)
    }

    /// Reads the DHT31 on the given I2C device, e.g. `/dev/i2c-1`.
    pub fn read_dht31(&self, device_path: &str) -> Result<Dht31Reading> {
        let device_path = to_c_path(device_path)?;
        let (code, reading) = self
            .api
            .dht31_read(&device_path)
            .ok_or_else(|| Error::NativeUnsupported("the DHT31 driver".to_string()))?;
        debug!("dht31 read from {:?} returned {}: {:?}", device_path, code, reading);
        if code != 0 {
            return Err(Error::SensorReadFailure);
        }
        Ok(reading)
    }

    /// Turns the relay on or off and returns the library's result code as is.
    pub fn set_relay(&self, relay_path: &str, state: bool) -> Result<i32> {
        let relay_path = to_c_path(relay_path)?;
        let code = self.api.control_relay(&relay_path, state);
        debug!("control_relay({:?}, {}) returned {}", relay_path, state, code);
        Ok(code)
    }
}
