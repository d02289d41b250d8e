//! Keyboard Module - Keyboard event types
//!
//! Events are plain values; routing to the focused surface happens in the
//! card layer. Only Space and Enter carry meaning for surfaces.

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Create empty modifiers
    pub fn none() -> Self {
        Self::default()
    }

    /// Create modifiers with shift
    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }

    /// Create modifiers with ctrl
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", " ", "Enter", "Tab")
    pub key: String,
    pub modifiers: Modifiers,
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key release event
    pub fn release(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Release,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Press or auto-repeat.
    pub fn is_down(&self) -> bool {
        matches!(self.state, KeyState::Press | KeyState::Repeat)
    }

    pub fn is_release(&self) -> bool {
        self.state == KeyState::Release
    }

    /// The activation key this event carries, if any.
    pub fn activation_key(&self) -> Option<ActivationKey> {
        ActivationKey::from_key(&self.key)
    }
}

/// Keys that activate a focused surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivationKey {
    Space,
    Enter,
}

impl ActivationKey {
    /// Map a key name to an activation key. Accepts `" "` and `"Space"`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            " " | "Space" => Some(Self::Space),
            "Enter" => Some(Self::Enter),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Space => " ",
            Self::Enter => "Enter",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_keys() {
        assert_eq!(ActivationKey::from_key(" "), Some(ActivationKey::Space));
        assert_eq!(ActivationKey::from_key("Space"), Some(ActivationKey::Space));
        assert_eq!(ActivationKey::from_key("Enter"), Some(ActivationKey::Enter));
        assert_eq!(ActivationKey::from_key("a"), None);
        assert_eq!(ActivationKey::from_key("Tab"), None);
    }

    #[test]
    fn test_event_states() {
        let press = KeyboardEvent::new("Enter");
        assert!(press.is_down());
        assert!(!press.is_release());
        assert_eq!(press.activation_key(), Some(ActivationKey::Enter));

        let release = KeyboardEvent::release(" ");
        assert!(release.is_release());
        assert!(!release.is_down());

        let repeat = KeyboardEvent {
            state: KeyState::Repeat,
            ..KeyboardEvent::new("x")
        };
        assert!(repeat.is_down());
        assert_eq!(repeat.activation_key(), None);
    }

    #[test]
    fn test_modifiers() {
        assert!(Modifiers::shift().shift);
        assert!(!Modifiers::none().ctrl);
        let ev = KeyboardEvent::with_modifiers("Tab", Modifiers::shift());
        assert!(ev.modifiers.shift);
    }
}
