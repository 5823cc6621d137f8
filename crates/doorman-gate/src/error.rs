//! Gate error types

use thiserror::Error;

/// Errors that can occur during gate operations
///
/// The gate's runtime path is infallible; everything here is configuration.
#[derive(Error, Debug)]
pub enum GateError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read a configuration file
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a configuration file
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Invalid detection configuration
    #[error(transparent)]
    Detector(#[from] doorman_detector::DetectorError),
}
