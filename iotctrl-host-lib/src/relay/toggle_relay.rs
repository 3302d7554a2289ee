use std::io::Write;

use log::debug;

use super::RelayState;
use crate::serial::{open_with_retry, PortOpener, MAX_OPEN_RETRIES};
use crate::{Error, Result};

/// Writes the command frame for `state` in one go.
///
/// The board never answers, so `Ok` only means the bytes were handed to the
/// OS. It says nothing about whether the relay actually switched.
pub fn write_relay_command<W: Write>(port: &mut W, state: RelayState) -> Result<()> {
    let command = state.command();
    debug!("writing relay command {:02X?}", command);
    port.write_all(command).map_err(Error::SerialWrite)?;
    port.flush().map_err(Error::SerialWrite)?;
    Ok(())
}

pub fn toggle_relay<O: PortOpener>(opener: &mut O, state: RelayState) -> Result<()> {
    let mut port = open_with_retry(opener, MAX_OPEN_RETRIES)?;

    println!("Initializing the device ..");
    write_relay_command(&mut port, state)?;
    println!("Done");

    Ok(())
}

/// Validates `arg` before touching the port, see [`RelayState::from_arg`].
pub fn toggle_relay_from_arg<O: PortOpener>(opener: &mut O, arg: &str) -> Result<()> {
    let state = RelayState::from_arg(arg)?;
    toggle_relay(opener, state)
}
