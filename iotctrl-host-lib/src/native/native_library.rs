use std::ffi::CStr;
use std::os::raw::{c_char, c_int};

use libloading::{Library, Symbol};
use log::debug;

use super::{BindingConfig, Dht31Reading, NativeApi, SentinelWidth};
use crate::{Error, Result};

type ControlRelayFn = unsafe extern "C" fn(*const c_char, bool) -> c_int;
type GetTemperatureI16Fn = unsafe extern "C" fn(*const c_char, c_int) -> i16;
type GetTemperatureIntFn = unsafe extern "C" fn(*const c_char, c_int) -> c_int;

type Dht31InitFn = unsafe extern "C" fn(*const c_char) -> c_int;
type Dht31ReadFn = unsafe extern "C" fn(c_int, *mut f32, *mut f32) -> c_int;
type Dht31DestroyFn = unsafe extern "C" fn(c_int);

struct Dht31Fns {
    init: Dht31InitFn,
    read: Dht31ReadFn,
    destroy: Dht31DestroyFn,
}

enum GetTemperatureFn {
    I16(GetTemperatureI16Fn),
    Int(GetTemperatureIntFn),
}

/// A loaded libiotctrl.
///
/// Symbols are resolved and `invalid_temp` is read once in [`NativeLibrary::load`].
/// The DHT31 functions are optional since older builds do not ship them.
/// The library stays loaded for as long as this value lives.
pub struct NativeLibrary {
    get_temperature: GetTemperatureFn,
    control_relay: ControlRelayFn,
    invalid_temp: i32,
    dht31: Option<Dht31Fns>,
    _library: Library,
}

fn resolve<'lib, T>(library: &'lib Library, name: &str) -> Result<Symbol<'lib, T>> {
    // SAFETY: callers pick `T` to match the libiotctrl headers
    unsafe { library.get::<T>(name.as_bytes()) }.map_err(|source| Error::NativeLibraryLoad {
        what: format!("symbol {}", name),
        source,
    })
}

fn resolve_dht31(library: &Library, config: &BindingConfig) -> Result<Dht31Fns> {
    Ok(Dht31Fns {
        init: *resolve::<Dht31InitFn>(library, &config.symbol_name("dht31_init"))?,
        read: *resolve::<Dht31ReadFn>(library, &config.symbol_name("dht31_read"))?,
        destroy: *resolve::<Dht31DestroyFn>(library, &config.symbol_name("dht31_destroy"))?,
    })
}

impl NativeLibrary {
    pub fn load(config: &BindingConfig) -> Result<Self> {
        debug!("loading {:?}", config);
        // SAFETY: libiotctrl has no initialisers that could break the process
        let library = unsafe { Library::new(&config.library_path) }.map_err(|source| {
            Error::NativeLibraryLoad {
                what: format!("library {}", config.library_path.display()),
                source,
            }
        })?;

        let control_relay: ControlRelayFn =
            *resolve::<ControlRelayFn>(&library, &config.symbol_name("control_relay"))?;

        let get_temperature_name = config.symbol_name("get_temperature");
        let invalid_temp_name = config.symbol_name("invalid_temp");
        let (get_temperature, invalid_temp) = match config.sentinel_width {
            SentinelWidth::I16 => {
                let get_temperature: GetTemperatureI16Fn =
                    *resolve::<GetTemperatureI16Fn>(&library, &get_temperature_name)?;
                let invalid_temp = resolve::<*const i16>(&library, &invalid_temp_name)?;
                // SAFETY: the symbol is a const int16_t
                let invalid_temp = unsafe { **invalid_temp } as i32;
                (GetTemperatureFn::I16(get_temperature), invalid_temp)
            }
            SentinelWidth::Int => {
                let get_temperature: GetTemperatureIntFn =
                    *resolve::<GetTemperatureIntFn>(&library, &get_temperature_name)?;
                let invalid_temp = resolve::<*const c_int>(&library, &invalid_temp_name)?;
                // SAFETY: the symbol is a const int
                let invalid_temp = unsafe { **invalid_temp };
                (GetTemperatureFn::Int(get_temperature), invalid_temp)
            }
        };
        debug!("invalid_temp is {}", invalid_temp);

        let dht31 = resolve_dht31(&library, config);
        if let Err(e) = &dht31 {
            debug!("no DHT31 driver in the library: {}", e);
        }

        Ok(Self {
            get_temperature,
            control_relay,
            invalid_temp,
            dht31: dht31.ok(),
            _library: library,
        })
    }
}

impl NativeApi for NativeLibrary {
    fn get_temperature(&self, device_path: &CStr, debug_mode: c_int) -> i32 {
        // SAFETY: the path outlives the call and the library is still loaded
        unsafe {
            match self.get_temperature {
                GetTemperatureFn::I16(f) => f(device_path.as_ptr(), debug_mode) as i32,
                GetTemperatureFn::Int(f) => f(device_path.as_ptr(), debug_mode),
            }
        }
    }

    fn control_relay(&self, relay_path: &CStr, turn_on: bool) -> i32 {
        // SAFETY: same as above
        unsafe { (self.control_relay)(relay_path.as_ptr(), turn_on) }
    }

    fn invalid_temp(&self) -> i32 {
        self.invalid_temp
    }

    fn dht31_read(&self, device_path: &CStr) -> Option<(i32, Dht31Reading)> {
        let dht31 = self.dht31.as_ref()?;
        let mut reading = Dht31Reading::default();
        // SAFETY: the out pointers point at live locals for the whole call and
        // the fd is only handed back to the library that opened it
        let code = unsafe {
            let fd = (dht31.init)(device_path.as_ptr());
            if fd < 0 {
                return Some((fd, reading));
            }
            let code = (dht31.read)(
                fd,
                &mut reading.temp_celsius,
                &mut reading.relative_humidity,
            );
            (dht31.destroy)(fd);
            code
        };
        Some((code, reading))
    }
}
