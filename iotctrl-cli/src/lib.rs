use std::path::PathBuf;

use anyhow::Result;
use iotctrl_host_lib::{
    read_binding_config, toggle_relay_from_arg, BindingConfig, Dht31Reading, Error, PortOpener,
};
use log::LevelFilter;

pub const MISSING_STATE: &str = "operation not specified";
pub const INVALID_STATE: &str = "operation can either be 0 or 1";

/// `-v` turns on debug logs, `RUST_LOG` still wins over both levels.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

/// Readings are tenths of a degree, so one decimal is exact.
pub fn format_temperature(celsius: f64) -> String {
    format!("{:.1}", celsius)
}

pub fn format_dht31(reading: &Dht31Reading) -> String {
    format!(
        "{:.1} °C, {:.1} %RH",
        reading.temp_celsius, reading.relative_humidity
    )
}

/// Body of `rc`. `Ok(Some(message))` means the state argument was rejected
/// before the port was touched; the caller prints it and exits with status 1.
pub fn run_relay_toggle<O: PortOpener>(
    opener: &mut O,
    state: Option<&str>,
) -> Result<Option<&'static str>> {
    let Some(state) = state else {
        return Ok(Some(MISSING_STATE));
    };
    match toggle_relay_from_arg(opener, state) {
        Ok(()) => Ok(None),
        Err(Error::InvalidArgument(_)) => Ok(Some(INVALID_STATE)),
        Err(e) => Err(e.into()),
    }
}

#[derive(clap::Args, Debug)]
pub struct BindingArgs {
    #[arg(long, help = "binding config file (JSON)")]
    binding_config: Option<PathBuf>,

    #[arg(long, help = "path of libiotctrl, /usr/local/lib/libiotctrl.so by default")]
    library: Option<PathBuf>,

    #[arg(
        long,
        action,
        conflicts_with = "binding_config",
        help = "bind to a build exporting unprefixed symbols with int readings"
    )]
    legacy_symbols: bool,
}

impl BindingArgs {
    pub fn into_config(self) -> Result<BindingConfig> {
        let mut config = match self.binding_config {
            Some(path) => read_binding_config(path)?,
            None if self.legacy_symbols => BindingConfig::legacy(),
            None => BindingConfig::default(),
        };
        if let Some(library) = self.library {
            config = config.with_library_path(library);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::Parser;
    use iotctrl_host_lib::SentinelWidth;
    use std::cell::RefCell;
    use std::io::{self, Write};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct TestOpener {
        unplugged: bool,
        attempts: u32,
        port: SharedBuffer,
    }

    impl PortOpener for TestOpener {
        type Port = SharedBuffer;
        type Error = io::Error;

        fn open_port(&mut self) -> io::Result<SharedBuffer> {
            self.attempts += 1;
            if self.unplugged {
                Err(io::Error::new(io::ErrorKind::NotFound, "no such device"))
            } else {
                Ok(self.port.clone())
            }
        }
    }

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        binding: BindingArgs,
    }

    #[test]
    fn dht31_output() {
        let reading = Dht31Reading {
            temp_celsius: 21.34,
            relative_humidity: 48.04,
        };
        assert_eq!(format_dht31(&reading), "21.3 °C, 48.0 %RH");
    }

    #[test]
    fn rc_rejects_missing_state() {
        let mut opener = TestOpener::default();
        let message = run_relay_toggle(&mut opener, None).unwrap();
        assert_eq!(message, Some(MISSING_STATE));
        assert_eq!(opener.attempts, 0);
    }

    #[test]
    fn rc_rejects_invalid_state_without_io() {
        for arg in ["2", "-1", "on", ""] {
            let mut opener = TestOpener::default();
            let message = run_relay_toggle(&mut opener, Some(arg)).unwrap();
            assert_eq!(message, Some(INVALID_STATE));
            assert_eq!(opener.attempts, 0);
            assert!(opener.port.0.borrow().is_empty());
        }
    }

    #[test]
    fn rc_switches_relay() {
        let mut opener = TestOpener::default();
        assert_eq!(run_relay_toggle(&mut opener, Some("1")).unwrap(), None);
        assert_eq!(*opener.port.0.borrow(), vec![0xA0, 0x01, 0x01, 0xA2]);

        let mut opener = TestOpener::default();
        assert_eq!(run_relay_toggle(&mut opener, Some("0")).unwrap(), None);
        assert_eq!(*opener.port.0.borrow(), vec![0xA0, 0x01, 0x00, 0xA1]);
    }

    #[test]
    fn rc_fails_when_device_never_opens() {
        let mut opener = TestOpener {
            unplugged: true,
            ..Default::default()
        };
        let error = run_relay_toggle(&mut opener, Some("1")).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<Error>(),
            Some(Error::SerialOpenFailure { attempts: 11, .. })
        ));
        assert_eq!(opener.attempts, 11);
    }

    #[test]
    fn legacy_symbols_conflicts_with_binding_config() {
        assert!(TestCli::try_parse_from([
            "tool",
            "--binding-config",
            "binding.json",
            "--legacy-symbols",
        ])
        .is_err());
        assert!(TestCli::try_parse_from(["tool", "--legacy-symbols"]).is_ok());
        assert!(TestCli::try_parse_from(["tool", "--binding-config", "binding.json"]).is_ok());
    }

    #[test]
    fn temperature_has_one_decimal() {
        assert_eq!(format_temperature(235.0 / 10.0), "23.5");
        assert_eq!(format_temperature(200.0 / 10.0), "20.0");
        assert_eq!(format_temperature(-15.0 / 10.0), "-1.5");
    }

    #[test]
    fn binding_args() {
        let config = BindingArgs {
            binding_config: None,
            library: Some("/tmp/libiotctrl.so".into()),
            legacy_symbols: true,
        }
        .into_config()
        .unwrap();
        assert_eq!(config.library_path, PathBuf::from("/tmp/libiotctrl.so"));
        assert_eq!(config.symbol_prefix, "");
        assert_eq!(config.sentinel_width, SentinelWidth::Int);

        let config = BindingArgs {
            binding_config: None,
            library: None,
            legacy_symbols: false,
        }
        .into_config()
        .unwrap();
        assert_eq!(config, BindingConfig::default());
    }
}
