use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Rejected before any serial or native I/O happens.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to open serial port after {attempts} attempts: {source}")]
    SerialOpenFailure {
        attempts: u32,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to write relay command: {0}")]
    SerialWrite(#[source] std::io::Error),

    /// The native library returned its invalid reading. It may already have
    /// printed the reason to stderr.
    #[error("failed to read temperature (some error messages could be sent to stderr)")]
    SensorReadFailure,

    #[error("failed to load {what} from the native library: {source}")]
    NativeLibraryLoad {
        what: String,
        #[source]
        source: libloading::Error,
    },

    /// An optional part of libiotctrl that the loaded build does not export.
    #[error("the native library was built without {0}")]
    NativeUnsupported(String),

    #[error("failed to read config {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
