use anyhow::{anyhow, Result};
use clap::Parser;
use iotctrl_cli::{init_logger, BindingArgs};
use iotctrl_host_lib::IotCtrl;

#[derive(Parser)]
#[command(name = "Relay Tool")]
#[command(bin_name = "relay-tool")]
struct Cli {
    #[arg(
        short,
        long,
        help = "The path of the device, typically /dev/ttyUSB0"
    )]
    device_path: String,

    #[arg(long, action, conflicts_with = "off", help = "Turn the switch on")]
    on: bool,

    #[arg(long, action, help = "Turn the switch off (default)")]
    off: bool,

    #[arg(short, long, action)]
    verbose: bool,

    #[command(flatten)]
    binding: BindingArgs,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logger(args.verbose);

    let iotctrl = IotCtrl::load(&args.binding.into_config()?)?;
    let code = iotctrl.set_relay(&args.device_path, args.on && !args.off)?;
    if code != 0 {
        return Err(anyhow!("control_relay failed with code {}", code));
    }
    Ok(())
}
