use log::debug;
use serde::{Deserialize, Serialize};
use tokio_serial::{DataBits, FlowControl, Parity, SerialPort, StopBits};

use super::PortOpener;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ParityConfig {
    None,
    Odd,
    Even,
}

impl Into<Parity> for ParityConfig {
    fn into(self) -> Parity {
        match self {
            ParityConfig::None => Parity::None,
            ParityConfig::Odd => Parity::Odd,
            ParityConfig::Even => Parity::Even,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub enum DataBitsConfig {
    Five,
    Six,
    Seven,
    Eight,
}

impl TryFrom<u8> for DataBitsConfig {
    type Error = String;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            5 => Ok(DataBitsConfig::Five),
            6 => Ok(DataBitsConfig::Six),
            7 => Ok(DataBitsConfig::Seven),
            8 => Ok(DataBitsConfig::Eight),
            _ => Err(format!("data_bits has to be 5, 6, 7 or 8, got {}", bits)),
        }
    }
}

impl From<DataBitsConfig> for u8 {
    fn from(bits: DataBitsConfig) -> Self {
        match bits {
            DataBitsConfig::Five => 5,
            DataBitsConfig::Six => 6,
            DataBitsConfig::Seven => 7,
            DataBitsConfig::Eight => 8,
        }
    }
}

impl Into<DataBits> for DataBitsConfig {
    fn into(self) -> DataBits {
        match self {
            DataBitsConfig::Five => DataBits::Five,
            DataBitsConfig::Six => DataBits::Six,
            DataBitsConfig::Seven => DataBits::Seven,
            DataBitsConfig::Eight => DataBits::Eight,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub enum StopBitsConfig {
    One,
    Two,
}

impl TryFrom<u8> for StopBitsConfig {
    type Error = String;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            1 => Ok(StopBitsConfig::One),
            2 => Ok(StopBitsConfig::Two),
            _ => Err(format!("stop_bits has to be 1 or 2, got {}", bits)),
        }
    }
}

impl From<StopBitsConfig> for u8 {
    fn from(bits: StopBitsConfig) -> Self {
        match bits {
            StopBitsConfig::One => 1,
            StopBitsConfig::Two => 2,
        }
    }
}

impl Into<StopBits> for StopBitsConfig {
    fn into(self) -> StopBits {
        match self {
            StopBitsConfig::One => StopBits::One,
            StopBitsConfig::Two => StopBits::Two,
        }
    }
}

/// Software is XON/XOFF, hardware is RTS/CTS.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlowControlConfig {
    None,
    Software,
    Hardware,
}

impl Into<FlowControl> for FlowControlConfig {
    fn into(self) -> FlowControl {
        match self {
            FlowControlConfig::None => FlowControl::None,
            FlowControlConfig::Software => FlowControl::Software,
            FlowControlConfig::Hardware => FlowControl::Hardware,
        }
    }
}

/// Serial settings of the relay board. The defaults are what the board
/// expects: `/dev/ttyUSB0`, 9600 8N1 with XON/XOFF and no RTS/CTS.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SerialPortConfig {
    pub path: String,
    pub baud_rate: u32,
    pub parity: ParityConfig,
    pub stop_bits: StopBitsConfig,
    pub data_bits: DataBitsConfig,
    pub flow_control: FlowControlConfig,
}

impl Default for SerialPortConfig {
    fn default() -> Self {
        Self {
            path: "/dev/ttyUSB0".into(),
            baud_rate: 9600,
            parity: ParityConfig::None,
            stop_bits: StopBitsConfig::One,
            data_bits: DataBitsConfig::Eight,
            flow_control: FlowControlConfig::Software,
        }
    }
}

impl PortOpener for SerialPortConfig {
    type Port = Box<dyn SerialPort>;
    type Error = tokio_serial::Error;

    fn open_port(&mut self) -> Result<Self::Port, Self::Error> {
        debug!("opening {} with {:?}", self.path, self);
        tokio_serial::new(self.path.as_str(), self.baud_rate)
            .parity(self.parity.into())
            .stop_bits(self.stop_bits.into())
            .data_bits(self.data_bits.into())
            .flow_control(self.flow_control.into())
            .open()
    }
}
