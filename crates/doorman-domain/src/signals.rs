//! Ambient browser signals behind a read-only probe trait
//!
//! The hosting runtime's global surface (client identifier, automation flag,
//! language list, well-known globals) is exposed through [`ClientSignals`] so
//! the detection heuristics stay decoupled from any particular runtime and
//! can be exercised with stubbed probes. An absent signal always reads as
//! empty/false/zero, never as an error.

/// Engine-specific markers real browsers expose on the global scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineMarker {
    /// `window.chrome`
    Chrome,

    /// `window.safari`
    Safari,

    /// `navigator.brave`
    Brave,
}

impl EngineMarker {
    /// Every engine marker the gate probes for
    pub const ALL: [EngineMarker; 3] =
        [EngineMarker::Chrome, EngineMarker::Safari, EngineMarker::Brave];
}

/// Markers left on the global scope by legacy automation frameworks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutomationMarker {
    /// `window.phantom`
    Phantom,

    /// `window.__phantom`
    PhantomShadow,

    /// `window.callPhantom`
    CallPhantom,
}

impl AutomationMarker {
    /// Every legacy automation marker the gate probes for
    pub const ALL: [AutomationMarker; 3] = [
        AutomationMarker::Phantom,
        AutomationMarker::PhantomShadow,
        AutomationMarker::CallPhantom,
    ];
}

/// Read-only view of the ambient signals a hosting runtime exposes
///
/// Implementations must never fail: a signal the runtime does not expose is
/// reported as absent (empty, false, or zero).
pub trait ClientSignals {
    /// Declared client identifier string, if any
    fn user_agent(&self) -> Option<&str>;

    /// Automation flag some engines expose (`navigator.webdriver`)
    fn webdriver(&self) -> bool;

    /// Declared language preference list
    fn languages(&self) -> &[String];

    /// Host name of the current request, if known
    fn hostname(&self) -> Option<&str>;

    /// Length of the navigation history
    fn history_length(&self) -> u32;

    /// Whether the document root carries a style object
    fn has_style_object(&self) -> bool;

    /// Whether an engine marker is present on the global scope
    fn has_engine_marker(&self, marker: EngineMarker) -> bool;

    /// Whether a legacy automation marker is present on the global scope
    fn has_automation_marker(&self, marker: AutomationMarker) -> bool;
}

/// Plain capture of every ambient signal
///
/// `Default` yields the maximally absent profile (no identifier, no
/// languages, no markers), which reads as headless to the heuristics.
///
/// # Examples
///
/// ```
/// use doorman_domain::signals::{ClientSignals, SignalSnapshot};
///
/// let headless = SignalSnapshot::default();
/// assert!(headless.languages().is_empty());
/// assert!(!headless.webdriver());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignalSnapshot {
    /// Client identifier string
    pub user_agent: Option<String>,

    /// Engine automation flag
    pub webdriver: bool,

    /// Declared language preferences
    pub languages: Vec<String>,

    /// Host name of the current request
    pub hostname: Option<String>,

    /// Navigation history length
    pub history_length: u32,

    /// Whether the document root carries a style object
    pub has_style_object: bool,

    /// Engine markers present on the global scope
    pub engine_markers: Vec<EngineMarker>,

    /// Legacy automation markers present on the global scope
    pub automation_markers: Vec<AutomationMarker>,
}

impl SignalSnapshot {
    /// Snapshot resembling an ordinary desktop browser
    pub fn desktop() -> Self {
        Self {
            user_agent: Some(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                    .to_string(),
            ),
            webdriver: false,
            languages: vec!["en-US".to_string()],
            hostname: Some("example.org".to_string()),
            history_length: 2,
            has_style_object: true,
            engine_markers: vec![EngineMarker::Chrome],
            automation_markers: Vec::new(),
        }
    }
}

impl ClientSignals for SignalSnapshot {
    fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    fn webdriver(&self) -> bool {
        self.webdriver
    }

    fn languages(&self) -> &[String] {
        &self.languages
    }

    fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    fn history_length(&self) -> u32 {
        self.history_length
    }

    fn has_style_object(&self) -> bool {
        self.has_style_object
    }

    fn has_engine_marker(&self, marker: EngineMarker) -> bool {
        self.engine_markers.contains(&marker)
    }

    fn has_automation_marker(&self, marker: AutomationMarker) -> bool {
        self.automation_markers.contains(&marker)
    }
}
