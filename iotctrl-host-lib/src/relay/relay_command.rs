use crate::{Error, Result};

pub const RELAY_COMMAND_LEN: usize = 4;

// Fixed by the relay board, the last byte is not computed.
const OFF_COMMAND: [u8; RELAY_COMMAND_LEN] = [0xA0, 0x01, 0x00, 0xA1];
const ON_COMMAND: [u8; RELAY_COMMAND_LEN] = [0xA0, 0x01, 0x01, 0xA2];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayState {
    Off,
    On,
}

impl RelayState {
    /// Parses the command line form of a relay state, only `"0"` and `"1"`
    /// are accepted.
    pub fn from_arg(arg: &str) -> Result<Self> {
        match arg {
            "0" => Ok(RelayState::Off),
            "1" => Ok(RelayState::On),
            _ => Err(Error::InvalidArgument(format!(
                "relay state has to be 0 or 1, got {:?}",
                arg
            ))),
        }
    }

    pub fn is_on(&self) -> bool {
        matches!(self, RelayState::On)
    }

    pub fn command(&self) -> &'static [u8; RELAY_COMMAND_LEN] {
        match self {
            RelayState::Off => &OFF_COMMAND,
            RelayState::On => &ON_COMMAND,
        }
    }
}

impl From<bool> for RelayState {
    fn from(on: bool) -> Self {
        if on {
            RelayState::On
        } else {
            RelayState::Off
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn commands() {
        assert_eq!(RelayState::Off.command(), &[0xA0, 0x01, 0x00, 0xA1]);
        assert_eq!(RelayState::On.command(), &[0xA0, 0x01, 0x01, 0xA2]);
    }

    #[test]
    fn parse_valid_args() {
        assert_eq!(RelayState::from_arg("0").unwrap(), RelayState::Off);
        assert_eq!(RelayState::from_arg("1").unwrap(), RelayState::On);
    }

    #[test]
    fn parse_invalid_args() {
        for arg in ["2", "", "01", " 1", "on", "-1", "true"] {
            assert!(matches!(
                RelayState::from_arg(arg),
                Err(Error::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn from_bool() {
        assert_eq!(RelayState::from(true), RelayState::On);
        assert_eq!(RelayState::from(false), RelayState::Off);
        assert!(RelayState::On.is_on());
        assert!(!RelayState::Off.is_on());
    }
}
