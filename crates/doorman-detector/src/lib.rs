//! Doorman Detector
//!
//! Heuristic automation detection over ambient browser signals.
//!
//! The Inspector provides:
//! - Client-identifier signature matching against known crawler signatures
//! - The engine automation-flag check (`navigator.webdriver`)
//! - Language-list plausibility checking
//! - A weighted headless-profile check over secondary signals
//! - Legacy automation-framework marker probes
//!
//! Inspection is pure and infallible: signals are read, never mutated, and
//! an absent signal counts as absent rather than an error.
//!
//! # Examples
//!
//! ```
//! use doorman_detector::{DetectionConfig, Inspector, Verdict};
//! use doorman_domain::SignalSnapshot;
//!
//! let inspector = Inspector::new(DetectionConfig::default());
//! let inspection = inspector.inspect(&SignalSnapshot::desktop());
//! assert_eq!(inspection.verdict, Verdict::Clear);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod inspector;

pub use config::DetectionConfig;
pub use error::DetectorError;
pub use inspector::{Inspection, Inspector, SuspicionReason, Verdict};
