use anyhow::Result;
use clap::Parser;
use iotctrl_cli::{format_temperature, init_logger, BindingArgs};
use iotctrl_host_lib::IotCtrl;

#[derive(Parser)]
#[command(name = "Temp Sensor Tool")]
#[command(bin_name = "temp-sensor-tool")]
struct Cli {
    #[arg(short, long, help = "path of the device, e.g. /dev/ttyUSB0")]
    device_path: String,

    #[arg(short, long, action, help = "enable verbose mode")]
    verbose: bool,

    #[command(flatten)]
    binding: BindingArgs,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logger(args.verbose);

    let iotctrl = IotCtrl::load(&args.binding.into_config()?)?;
    let celsius = iotctrl.get_temperature(&args.device_path, args.verbose)?;
    println!("{}", format_temperature(celsius));
    Ok(())
}
