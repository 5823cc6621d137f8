//! Classification module - the gate's verdict about the visiting agent

/// Classification of the visiting agent
///
/// Every mount starts at `Unknown`. The detection pass may move it to `Bot`
/// (terminal, content never shown); an interaction event or the development
/// bypass moves it to `Human` (never reverts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// No verdict yet
    Unknown,

    /// Judged to be an automated agent (terminal)
    Bot,

    /// Judged to be a human visitor (never reverts)
    Human,
}

impl Classification {
    /// Get the classification name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Unknown => "unknown",
            Classification::Bot => "bot",
            Classification::Human => "human",
        }
    }

    /// Parse a classification from a string (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "unknown" => Some(Classification::Unknown),
            "bot" => Some(Classification::Bot),
            "human" => Some(Classification::Human),
            _ => None,
        }
    }

    /// Whether this classification admits no further transitions
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Classification::Unknown)
    }

    /// Whether a transition to `next` is allowed
    ///
    /// Only `Unknown` can be reclassified; reaching the same classification
    /// again is an idempotent no-op.
    pub fn can_transition_to(&self, next: Classification) -> bool {
        *self == Classification::Unknown || *self == next
    }
}

impl std::str::FromStr for Classification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid classification: {}", s))
    }
}
