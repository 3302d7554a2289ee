mod relay_command;
mod toggle_relay;

pub use relay_command::{RelayState, RELAY_COMMAND_LEN};
pub use toggle_relay::{toggle_relay, toggle_relay_from_arg, write_relay_command};
