use std::path::PathBuf;
use std::process::exit;

use anyhow::Result;
use clap::Parser;
use iotctrl_cli::{init_logger, run_relay_toggle};
use iotctrl_host_lib::{read_serial_config, SerialPortConfig};

#[derive(Parser)]
#[command(name = "rc")]
#[command(bin_name = "rc")]
#[command(about = "Switch the relay off (0) or on (1) over the serial port")]
struct Cli {
    #[arg(allow_negative_numbers = true)]
    state: Option<String>,

    #[arg(short, long, help = "serial device, /dev/ttyUSB0 by default")]
    device_path: Option<String>,

    #[arg(short, long, help = "serial port config file (JSON)")]
    config: Option<PathBuf>,

    #[arg(short, long, action)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logger(args.verbose);

    let mut config = match args.config {
        Some(path) => read_serial_config(path)?,
        None => SerialPortConfig::default(),
    };
    if let Some(device_path) = args.device_path {
        config.path = device_path;
    }

    if let Some(message) = run_relay_toggle(&mut config, args.state.as_deref())? {
        eprintln!("{}", message);
        exit(1);
    }
    Ok(())
}
