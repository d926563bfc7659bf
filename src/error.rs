//! gitmux error type
//!
//! Rendering itself can only fail when the output sink rejects a write. The
//! other variants come from the outer layers (config loading, reading the
//! status snapshot). The binary wraps these in anyhow for context.

use std::io;

use config::ConfigError;

#[derive(Debug)]
pub enum Error {
    /// The output sink rejected the rendered line
    SinkWrite(io::Error),
    /// Configuration could not be loaded or deserialized
    Config(ConfigError),
    /// The status snapshot could not be read
    StatusRead(io::Error),
    /// The status snapshot is not valid JSON for [`crate::Status`]
    StatusParse(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::SinkWrite(e) => write!(f, "Failed to write status line: {e}"),
            Error::Config(e) => write!(f, "Failed to load config: {e}"),
            Error::StatusRead(e) => write!(f, "Failed to read status: {e}"),
            Error::StatusParse(e) => write!(f, "Invalid status: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::SinkWrite(e) | Error::StatusRead(e) => Some(e),
            Error::Config(e) => Some(e),
            Error::StatusParse(e) => Some(e),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        // serde_json reports reader failures as io-category errors
        if e.is_io() {
            Error::StatusRead(e.into())
        } else {
            Error::StatusParse(e)
        }
    }
}
