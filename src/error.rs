//! # Error Types
//!
//! Custom error types for gamepad mapping lookups using `thiserror`.

use thiserror::Error;

/// Main error type for gamepad mapping lookups
#[derive(Debug, Error)]
pub enum MappingError {
    /// Device type is not in the supported device list
    #[error("unknown device type: the gamepad type ({value}) is not known")]
    UnsupportedDeviceType { value: String },

    /// Message type did not normalize to "joy" or "gamepad"
    #[error("invalid message type: the msg_type argument must be \"joy\" or \"gamepad\", passed value was {value}")]
    InvalidMessageType { value: String },

    /// Mode was missing or did not normalize to a mode the device supports
    #[error(
        "invalid mode: the value of mode argument, \"{}\", is invalid for the {device} gamepad",
        .value.as_deref().unwrap_or("None")
    )]
    InvalidMode {
        value: Option<String>,
        device: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for gamepad mapping lookups
pub type Result<T> = std::result::Result<T, MappingError>;
