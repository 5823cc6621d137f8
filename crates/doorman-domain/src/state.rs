//! Gate state - per-mount classification and reveal tracking

use crate::{Classification, Environment, GateView, PlaceholderView};

/// Per-mount state of the visibility gate
///
/// Created fresh on every mount, mutated only by the one-shot detection pass
/// and by interaction/timer events, discarded on unmount. The wrapped content
/// is displayed only when the visitor is classified human AND the reveal
/// timer (or the development bypass) has fired; the `content_revealed` flag
/// alone records timer elapse and is set even for a still-unclassified
/// visitor.
///
/// # Examples
///
/// ```
/// use doorman_domain::{Classification, Environment, GateState};
///
/// let mut state = GateState::new(Environment::Production);
/// assert_eq!(state.classification(), Classification::Unknown);
///
/// state.mark_human();
/// state.reveal();
/// assert!(state.content_visible());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GateState {
    classification: Classification,
    content_revealed: bool,
    environment: Environment,
}

impl GateState {
    /// Create state for a new mount
    ///
    /// A development mount bypasses the heuristics entirely: the visitor is
    /// classified human and content is revealed immediately.
    pub fn new(environment: Environment) -> Self {
        match environment {
            Environment::Development => Self {
                classification: Classification::Human,
                content_revealed: true,
                environment,
            },
            Environment::Production => Self {
                classification: Classification::Unknown,
                content_revealed: false,
                environment,
            },
        }
    }

    /// Current classification of the visitor
    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// Environment this mount resolved to
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Whether the reveal timer (or the development bypass) has fired
    pub fn content_revealed(&self) -> bool {
        self.content_revealed
    }

    /// Record a bot verdict
    ///
    /// Only an unclassified visitor can be reclassified; a human verdict
    /// never reverts. Returns whether the state changed.
    pub fn mark_bot(&mut self) -> bool {
        if !self.classification.can_transition_to(Classification::Bot) {
            return false;
        }
        let changed = self.classification != Classification::Bot;
        self.classification = Classification::Bot;
        changed
    }

    /// Record a human verdict
    ///
    /// Idempotent once human; ignored after a bot verdict. Returns whether
    /// the state changed.
    pub fn mark_human(&mut self) -> bool {
        if !self.classification.can_transition_to(Classification::Human) {
            return false;
        }
        let changed = self.classification != Classification::Human;
        self.classification = Classification::Human;
        changed
    }

    /// Record reveal-timer elapse
    ///
    /// Sets the reveal flag regardless of interaction, as long as no bot
    /// verdict occurred. Returns whether the state changed.
    pub fn reveal(&mut self) -> bool {
        if self.classification == Classification::Bot {
            return false;
        }
        let changed = !self.content_revealed;
        self.content_revealed = true;
        changed
    }

    /// Whether the wrapped content should be shown
    pub fn content_visible(&self) -> bool {
        self.classification == Classification::Human && self.content_revealed
    }

    /// The view to render for this state
    pub fn view(&self) -> GateView {
        if self.content_visible() {
            GateView::Content
        } else {
            GateView::Placeholder(PlaceholderView::for_environment(self.environment))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_bypass() {
        let state = GateState::new(Environment::Development);
        assert_eq!(state.classification(), Classification::Human);
        assert!(state.content_revealed());
        assert!(state.content_visible());
        assert_eq!(state.view(), GateView::Content);
    }

    #[test]
    fn test_production_initial_state() {
        let state = GateState::new(Environment::Production);
        assert_eq!(state.classification(), Classification::Unknown);
        assert!(!state.content_revealed());
        assert!(!state.content_visible());
    }

    #[test]
    fn test_bot_verdict_is_terminal() {
        let mut state = GateState::new(Environment::Production);
        assert!(state.mark_bot());

        // No interaction or timer can rescue a bot mount.
        assert!(!state.mark_human());
        assert!(!state.reveal());
        assert_eq!(state.classification(), Classification::Bot);
        assert!(!state.content_visible());
    }

    #[test]
    fn test_human_never_reverts() {
        let mut state = GateState::new(Environment::Production);
        assert!(state.mark_human());
        assert!(!state.mark_bot());
        assert!(!state.mark_human()); // idempotent
        assert_eq!(state.classification(), Classification::Human);
    }

    #[test]
    fn test_reveal_without_classification() {
        // Timer elapse with no interaction: revealed but still placeholder.
        let mut state = GateState::new(Environment::Production);
        assert!(state.reveal());
        assert!(state.content_revealed());
        assert!(!state.content_visible());
        assert!(matches!(state.view(), GateView::Placeholder(_)));
    }

    #[test]
    fn test_reveal_then_human_shows_content() {
        let mut state = GateState::new(Environment::Production);
        state.reveal();
        state.mark_human();
        assert_eq!(state.view(), GateView::Content);
    }

    #[test]
    fn test_placeholder_heading_tracks_environment() {
        let state = GateState::new(Environment::Production);
        match state.view() {
            GateView::Placeholder(placeholder) => {
                assert_eq!(placeholder.heading, "Loading...");
            }
            GateView::Content => panic!("Expected placeholder"),
        }
    }
}
