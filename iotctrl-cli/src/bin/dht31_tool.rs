use anyhow::Result;
use clap::Parser;
use iotctrl_cli::{format_dht31, init_logger, BindingArgs};
use iotctrl_host_lib::IotCtrl;

#[derive(Parser)]
#[command(name = "DHT31 Tool")]
#[command(bin_name = "dht31-tool")]
#[command(about = "Read temperature and relative humidity from a DHT31 over I2C")]
struct Cli {
    #[arg(short, long, default_value = "/dev/i2c-1", help = "I2C bus of the sensor")]
    device_path: String,

    #[arg(short, long, action)]
    verbose: bool,

    #[command(flatten)]
    binding: BindingArgs,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logger(args.verbose);

    let iotctrl = IotCtrl::load(&args.binding.into_config()?)?;
    let reading = iotctrl.read_dht31(&args.device_path)?;
    println!("{}", format_dht31(&reading));
    Ok(())
}
