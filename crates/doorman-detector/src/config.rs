//! Detection configuration

use crate::DetectorError;
use serde::{Deserialize, Serialize};

/// Signatures of known crawlers, scrapers, and automation tools
///
/// Matched case-insensitively as substrings of the client identifier.
const KNOWN_SIGNATURES: [&str; 22] = [
    "googlebot",
    "bingbot",
    "slurp",
    "duckduckbot",
    "baiduspider",
    "yandexbot",
    "facebookexternalhit",
    "twitterbot",
    "linkedinbot",
    "whatsapp",
    "applebot",
    "ia_archiver",
    "archive.org_bot",
    "semrushbot",
    "ahrefsbot",
    "mj12bot",
    "bot",
    "crawler",
    "spider",
    "scraper",
    "wget",
    "curl",
];

/// Configuration for the automation heuristics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Enable client-identifier signature matching
    #[serde(default = "default_true")]
    pub check_signatures: bool,

    /// Enable the engine automation-flag check
    #[serde(default = "default_true")]
    pub check_webdriver: bool,

    /// Enable the language-list check
    #[serde(default = "default_true")]
    pub check_languages: bool,

    /// Enable the weighted headless-profile check
    #[serde(default = "default_true")]
    pub check_headless_profile: bool,

    /// Enable legacy automation-framework marker probes
    #[serde(default = "default_true")]
    pub check_automation_markers: bool,

    /// Secondary signals required before the headless-profile check fires
    ///
    /// The secondary signals are: empty language list, absent style object,
    /// zero-length navigation history. Default: 2 of 3.
    #[serde(default = "default_suspicion_threshold")]
    pub suspicion_threshold: usize,

    /// Lower-case substrings matched against the client identifier
    #[serde(default = "default_signatures")]
    pub signatures: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_suspicion_threshold() -> usize {
    2
}

fn default_signatures() -> Vec<String> {
    KNOWN_SIGNATURES.iter().map(|s| s.to_string()).collect()
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            check_signatures: true,
            check_webdriver: true,
            check_languages: true,
            check_headless_profile: true,
            check_automation_markers: true,
            suspicion_threshold: 2,
            signatures: default_signatures(),
        }
    }
}

impl DetectionConfig {
    /// Permissive configuration: declared crawlers only
    ///
    /// Matches client-identifier signatures and the automation flag but
    /// tolerates headless-looking environments.
    pub fn permissive() -> Self {
        Self {
            check_signatures: true,
            check_webdriver: true,
            check_languages: false,
            check_headless_profile: false,
            check_automation_markers: true,
            suspicion_threshold: 3,
            signatures: default_signatures(),
        }
    }

    /// Strict configuration: every check enabled, one secondary signal suffices
    pub fn strict() -> Self {
        Self {
            check_signatures: true,
            check_webdriver: true,
            check_languages: true,
            check_headless_profile: true,
            check_automation_markers: true,
            suspicion_threshold: 1,
            signatures: default_signatures(),
        }
    }

    /// Validate tuning values
    pub fn validate(&self) -> Result<(), DetectorError> {
        if self.check_signatures && self.signatures.is_empty() {
            return Err(DetectorError::Config(
                "signature matching is enabled but the signature list is empty".to_string(),
            ));
        }
        if self.check_headless_profile
            && (self.suspicion_threshold == 0 || self.suspicion_threshold > 3)
        {
            return Err(DetectorError::Config(format!(
                "suspicion_threshold must be between 1 and 3, got {}",
                self.suspicion_threshold
            )));
        }
        Ok(())
    }
}
