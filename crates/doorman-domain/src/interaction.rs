//! Interaction events the gate listens for

/// Kind of user-interaction event delivered to the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    /// Pointer movement over the page
    PointerMove,

    /// Touch on a touchscreen device
    TouchStart,

    /// Key press
    KeyDown,
}

impl InteractionKind {
    /// Every interaction channel the gate subscribes to
    pub const ALL: [InteractionKind; 3] = [
        InteractionKind::PointerMove,
        InteractionKind::TouchStart,
        InteractionKind::KeyDown,
    ];

    /// Get the channel name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionKind::PointerMove => "pointer-move",
            InteractionKind::TouchStart => "touch-start",
            InteractionKind::KeyDown => "key-down",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_channels_distinct() {
        let names: Vec<&str> = InteractionKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), 3);
        assert!(names.windows(2).all(|pair| pair[0] != pair[1]));
    }
}
