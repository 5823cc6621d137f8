//! Rendered output of the gate - placeholder or wrapped content, never both

use crate::Environment;

/// Hint shown beneath the production placeholder
pub const INTERACTION_HINT: &str = "Move your mouse or tap to continue";

/// Minimal placeholder shown while content is withheld
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderView {
    /// Heading text
    pub heading: &'static str,

    /// Hint text, absent in development
    pub hint: Option<&'static str>,
}

impl PlaceholderView {
    /// Placeholder for the given environment
    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Development => Self {
                heading: "Development Mode",
                hint: None,
            },
            Environment::Production => Self {
                heading: "Loading...",
                hint: Some(INTERACTION_HINT),
            },
        }
    }
}

/// What the gate instructs the host to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateView {
    /// Withhold the wrapped content and render the placeholder
    Placeholder(PlaceholderView),

    /// Reveal the wrapped content
    Content,
}

impl GateView {
    /// Whether the wrapped content is shown
    pub fn is_content(&self) -> bool {
        matches!(self, GateView::Content)
    }
}
