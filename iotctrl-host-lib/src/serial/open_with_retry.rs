use log::debug;

use super::PortOpener;
use crate::{Error, Result};

/// Retries after the first failed open, so 11 attempts in total.
pub const MAX_OPEN_RETRIES: u32 = 10;

/// Opens the port, retrying right away on failure.
///
/// Every failed attempt prints the error and the half-opened port (if any) is
/// dropped before the next try. Once `max_retries` retries have failed this
/// returns `Error::SerialOpenFailure` instead of handing back an unopened port.
pub fn open_with_retry<O: PortOpener>(opener: &mut O, max_retries: u32) -> Result<O::Port> {
    let mut attempts = 0;
    loop {
        attempts += 1;
        debug!("serial open attempt {}", attempts);
        match opener.open_port() {
            Ok(port) => {
                println!("Opened");
                return Ok(port);
            }
            Err(e) => {
                println!("{}", e);
                if attempts > max_retries {
                    return Err(Error::SerialOpenFailure {
                        attempts,
                        source: Box::new(e),
                    });
                }
            }
        }
    }
}
