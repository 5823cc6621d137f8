//! Automation inspection logic

use crate::DetectionConfig;
use doorman_domain::signals::{AutomationMarker, ClientSignals, EngineMarker};

/// Result of an automation inspection
#[derive(Debug, Clone, PartialEq)]
pub struct Inspection {
    /// Overall verdict
    pub verdict: Verdict,

    /// Which checks fired (empty when clear)
    pub reasons: Vec<SuspicionReason>,
}

impl Inspection {
    /// Whether the visitor was judged automated
    pub fn is_automated(&self) -> bool {
        self.verdict == Verdict::Automated
    }
}

/// Inspection verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The signals look like an automated agent
    Automated,

    /// No heuristic fired
    Clear,
}

/// Reasons a visitor was flagged as automated
#[derive(Debug, Clone, PartialEq)]
pub enum SuspicionReason {
    /// The client identifier contains a known signature
    SignatureMatch {
        /// The signature that matched
        signature: String,
    },

    /// The engine advertises automation (`navigator.webdriver`)
    WebdriverFlag,

    /// The declared language list is empty or absent
    MissingLanguages,

    /// No engine markers and enough secondary signals are present
    HeadlessProfile {
        /// Number of secondary signals present
        suspicious_signals: usize,
    },

    /// A legacy automation-framework marker is present on the global scope
    LegacyAutomationMarker {
        /// The marker found
        marker: AutomationMarker,
    },
}

/// The Inspector evaluates ambient signals against the configured heuristics
pub struct Inspector {
    config: DetectionConfig,
}

impl Inspector {
    /// Create a new Inspector with the given configuration
    pub fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    /// Create an Inspector with default configuration
    pub fn default_config() -> Self {
        Self::new(DetectionConfig::default())
    }

    /// The active configuration
    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Inspect ambient signals for automation
    ///
    /// Checks run in a fixed order and every firing check contributes a
    /// reason; the verdict is `Automated` when any of them fired. Reading a
    /// signal can never fail: absent signals count as absent.
    pub fn inspect<S: ClientSignals>(&self, signals: &S) -> Inspection {
        let mut reasons = Vec::new();

        // 1. Client-identifier signature matching
        if self.config.check_signatures {
            if let Some(reason) = self.match_signature(signals) {
                reasons.push(reason);
            }
        }

        // 2. Engine automation flag
        if self.config.check_webdriver && signals.webdriver() {
            reasons.push(SuspicionReason::WebdriverFlag);
        }

        // 3. Declared language list
        if self.config.check_languages && signals.languages().is_empty() {
            reasons.push(SuspicionReason::MissingLanguages);
        }

        // 4. Weighted headless-profile check
        if self.config.check_headless_profile {
            if let Some(reason) = self.headless_profile(signals) {
                reasons.push(reason);
            }
        }

        // 5. Legacy automation-framework markers
        if self.config.check_automation_markers {
            if let Some(reason) = Self::automation_marker(signals) {
                reasons.push(reason);
            }
        }

        let verdict = if reasons.is_empty() {
            Verdict::Clear
        } else {
            Verdict::Automated
        };

        Inspection { verdict, reasons }
    }

    /// Match the lower-cased client identifier against the signature list
    fn match_signature<S: ClientSignals>(&self, signals: &S) -> Option<SuspicionReason> {
        let user_agent = signals.user_agent().unwrap_or_default().to_lowercase();
        self.config
            .signatures
            .iter()
            .find(|signature| user_agent.contains(signature.as_str()))
            .map(|signature| SuspicionReason::SignatureMatch {
                signature: signature.clone(),
            })
    }

    /// Weighted check for completely headless environments
    ///
    /// Runs only when no engine marker is present and the raw identifier
    /// does not claim Firefox (which exposes none of the probed markers).
    /// At least `suspicion_threshold` secondary signals must hold.
    fn headless_profile<S: ClientSignals>(&self, signals: &S) -> Option<SuspicionReason> {
        let any_engine_marker = EngineMarker::ALL
            .iter()
            .any(|marker| signals.has_engine_marker(*marker));
        let claims_firefox = signals
            .user_agent()
            .is_some_and(|user_agent| user_agent.contains("Firefox"));
        if any_engine_marker || claims_firefox {
            return None;
        }

        let suspicious_signals = [
            signals.languages().is_empty(),
            !signals.has_style_object(),
            signals.history_length() == 0,
        ]
        .iter()
        .filter(|present| **present)
        .count();

        (suspicious_signals >= self.config.suspicion_threshold)
            .then_some(SuspicionReason::HeadlessProfile { suspicious_signals })
    }

    /// Probe the global scope for legacy automation-framework markers
    fn automation_marker<S: ClientSignals>(signals: &S) -> Option<SuspicionReason> {
        AutomationMarker::ALL
            .iter()
            .find(|marker| signals.has_automation_marker(**marker))
            .map(|marker| SuspicionReason::LegacyAutomationMarker { marker: *marker })
    }
}
