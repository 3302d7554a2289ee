use std::{fs::read_to_string, path::Path};

use serde::de::DeserializeOwned;

use crate::{BindingConfig, Error, Result, SerialPortConfig};

fn read_json_config<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let config = read_to_string(path).map_err(|source| Error::ConfigIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&config).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Fields missing from the file keep their default value.
pub fn read_serial_config<P: AsRef<Path>>(path: P) -> Result<SerialPortConfig> {
    read_json_config(path)
}

pub fn read_binding_config<P: AsRef<Path>>(path: P) -> Result<BindingConfig> {
    read_json_config(path)
}
