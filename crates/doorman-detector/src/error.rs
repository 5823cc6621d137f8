//! Detector error types

use thiserror::Error;

/// Errors that can occur while configuring detection
///
/// Inspection itself never fails; only tuning values can be rejected.
#[derive(Error, Debug)]
pub enum DetectorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
