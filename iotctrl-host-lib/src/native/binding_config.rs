use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_LIBRARY_PATH: &str = "/usr/local/lib/libiotctrl.so";

/// Width of the temperature reading and of the exported `invalid_temp`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SentinelWidth {
    I16,
    Int,
}

/// Which build of libiotctrl to bind to.
///
/// Current builds export `iotctrl_get_temperature`, `iotctrl_control_relay`
/// and an `int16_t iotctrl_invalid_temp`. Older builds export the same symbols
/// without the prefix and use plain `int` for the reading and the sentinel,
/// see [`BindingConfig::legacy`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct BindingConfig {
    pub library_path: PathBuf,
    pub symbol_prefix: String,
    pub sentinel_width: SentinelWidth,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            library_path: DEFAULT_LIBRARY_PATH.into(),
            symbol_prefix: "iotctrl_".into(),
            sentinel_width: SentinelWidth::I16,
        }
    }
}

impl BindingConfig {
    pub fn legacy() -> Self {
        Self {
            symbol_prefix: String::new(),
            sentinel_width: SentinelWidth::Int,
            ..Default::default()
        }
    }

    pub fn with_library_path(mut self, library_path: impl Into<PathBuf>) -> Self {
        self.library_path = library_path.into();
        self
    }

    pub fn with_symbol_prefix(mut self, symbol_prefix: impl Into<String>) -> Self {
        self.symbol_prefix = symbol_prefix.into();
        self
    }

    pub fn with_sentinel_width(mut self, sentinel_width: SentinelWidth) -> Self {
        self.sentinel_width = sentinel_width;
        self
    }

    pub fn symbol_name(&self, name: &str) -> String {
        format!("{}{}", self.symbol_prefix, name)
    }
}
