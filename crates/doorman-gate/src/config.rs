//! Gate configuration
//!
//! Tuning for the reveal timer, interaction thresholds, and the detection
//! heuristics, with TOML file loading and environment-variable overrides.

use crate::GateError;
use doorman_detector::DetectionConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable forcing the build kind ("development" or "production")
pub const ENV_ENVIRONMENT: &str = "DOORMAN_ENV";

/// Environment variable disabling the gate when set to "false"
pub const ENV_BOT_PROTECTION: &str = "DOORMAN_BOT_PROTECTION";

/// Configuration for the visibility gate
///
/// # Examples
///
/// ```
/// use doorman_gate::GateConfig;
/// use std::time::Duration;
///
/// let config = GateConfig::default();
/// assert_eq!(config.reveal_delay(), Duration::from_millis(1000));
/// assert_eq!(config.pointer_move_threshold, 4);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Delay before content is revealed to a visitor that passed detection (ms)
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,

    /// Cumulative pointer-move events required before the pointer channel fires
    ///
    /// Touch and key channels fire on their first event; the pointer channel
    /// intentionally requires more.
    #[serde(default = "default_pointer_move_threshold")]
    pub pointer_move_threshold: u32,

    /// Treat this as a development build (bypasses every heuristic)
    ///
    /// Defaults to the compile-time profile.
    #[serde(default = "default_development_build")]
    pub development_build: bool,

    /// Explicit override that disables the gate entirely
    #[serde(default)]
    pub disabled: bool,

    /// Detection heuristics
    #[serde(default)]
    pub detection: DetectionConfig,
}

fn default_reveal_delay_ms() -> u64 {
    1000
}

fn default_pointer_move_threshold() -> u32 {
    4
}

fn default_development_build() -> bool {
    cfg!(debug_assertions)
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: default_reveal_delay_ms(),
            pointer_move_threshold: default_pointer_move_threshold(),
            development_build: default_development_build(),
            disabled: false,
            detection: DetectionConfig::default(),
        }
    }
}

impl GateConfig {
    /// Production configuration regardless of the compile-time profile
    ///
    /// Useful in tests and for hosts that resolve the environment themselves.
    pub fn production() -> Self {
        Self {
            development_build: false,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, GateError> {
        let contents = std::fs::read_to_string(path)?;
        let config: GateConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment-variable overrides
    ///
    /// `DOORMAN_ENV=development` forces a development build;
    /// `DOORMAN_BOT_PROTECTION=false` disables the gate.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(value) = std::env::var(ENV_ENVIRONMENT) {
            self.development_build = value.eq_ignore_ascii_case("development");
        }
        if let Ok(value) = std::env::var(ENV_BOT_PROTECTION) {
            self.disabled = value.eq_ignore_ascii_case("false");
        }
        self
    }

    /// Reveal delay as a Duration
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Validate tuning values
    pub fn validate(&self) -> Result<(), GateError> {
        if self.pointer_move_threshold == 0 {
            return Err(GateError::Config(
                "pointer_move_threshold must be at least 1".to_string(),
            ));
        }
        self.detection.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GateConfig::default();
        assert_eq!(config.reveal_delay_ms, 1000);
        assert_eq!(config.pointer_move_threshold, 4);
        assert!(!config.disabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_production_config() {
        let config = GateConfig::production();
        assert!(!config.development_build);
        assert!(!config.disabled);
    }

    #[test]
    fn test_duration_conversion() {
        let config = GateConfig {
            reveal_delay_ms: 250,
            ..GateConfig::default()
        };
        assert_eq!(config.reveal_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_zero_pointer_threshold_rejected() {
        let config = GateConfig {
            pointer_move_threshold: 0,
            ..GateConfig::default()
        };
        assert!(matches!(config.validate(), Err(GateError::Config(_))));
    }

    #[test]
    fn test_invalid_detection_config_rejected() {
        let mut config = GateConfig::default();
        config.detection.suspicion_threshold = 0;
        assert!(matches!(config.validate(), Err(GateError::Detector(_))));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = GateConfig::production();
        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: GateConfig = serde_json::from_str(&serialized).unwrap();

        assert_eq!(config.reveal_delay_ms, deserialized.reveal_delay_ms);
        assert_eq!(
            config.pointer_move_threshold,
            deserialized.pointer_move_threshold
        );
        assert_eq!(config.development_build, deserialized.development_build);
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "reveal_delay_ms = 500\npointer_move_threshold = 2\ndevelopment_build = false"
        )
        .unwrap();

        let config = GateConfig::load(file.path()).unwrap();
        assert_eq!(config.reveal_delay_ms, 500);
        assert_eq!(config.pointer_move_threshold, 2);
        assert!(!config.development_build);
        // Unspecified sections take defaults.
        assert!(config.detection.check_signatures);
    }

    #[test]
    fn test_load_missing_file() {
        let result = GateConfig::load(Path::new("/nonexistent/doorman.toml"));
        assert!(matches!(result, Err(GateError::Io(_))));
    }

    #[test]
    fn test_env_overrides() {
        std::env::set_var(ENV_ENVIRONMENT, "development");
        std::env::set_var(ENV_BOT_PROTECTION, "false");

        let config = GateConfig::production().with_env_overrides();
        assert!(config.development_build);
        assert!(config.disabled);

        std::env::set_var(ENV_ENVIRONMENT, "production");
        std::env::set_var(ENV_BOT_PROTECTION, "true");

        let config = GateConfig::default().with_env_overrides();
        assert!(!config.development_build);
        assert!(!config.disabled);

        std::env::remove_var(ENV_ENVIRONMENT);
        std::env::remove_var(ENV_BOT_PROTECTION);
    }
}
