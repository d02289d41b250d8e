//! Focus System - Keyboard navigation between surfaces
//!
//! Every surface is focusable. The ring keeps them in tab order and cycles
//! with Tab / Shift+Tab, wrapping at both ends.
//!
//! # Example
//!
//! ```ignore
//! use glow_cards::state::focus::FocusRing;
//!
//! let mut ring = FocusRing::new(3);
//! assert_eq!(ring.focus_next(), Some(0));
//! assert_eq!(ring.focus_previous(), Some(2));
//! ```

/// Focus order over `len` surfaces, indexed `0..len`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusRing {
    len: usize,
    focused: Option<usize>,
}

/// Focus moved from `blurred` to `focused`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusChange {
    pub blurred: Option<usize>,
    pub focused: Option<usize>,
}

impl FocusRing {
    pub fn new(len: usize) -> Self {
        Self { len, focused: None }
    }

    /// Currently focused index.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Focus a specific index. Out-of-range indices are ignored.
    pub fn focus(&mut self, index: usize) -> Option<FocusChange> {
        if index >= self.len {
            return None;
        }
        self.set(Some(index))
    }

    /// Drop focus entirely.
    pub fn blur(&mut self) -> Option<FocusChange> {
        self.set(None)
    }

    /// Move to the next index (Tab), wrapping to the first.
    pub fn focus_next(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let next = match self.focused {
            Some(i) => (i + 1) % self.len,
            None => 0,
        };
        self.focused = Some(next);
        self.focused
    }

    /// Move to the previous index (Shift+Tab), wrapping to the last.
    pub fn focus_previous(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let prev = match self.focused {
            Some(0) | None => self.len - 1,
            Some(i) => i - 1,
        };
        self.focused = Some(prev);
        self.focused
    }

    fn set(&mut self, new: Option<usize>) -> Option<FocusChange> {
        if self.focused == new {
            return None;
        }
        let change = FocusChange {
            blurred: self.focused,
            focused: new,
        };
        self.focused = new;
        Some(change)
    }
}

// =============================================================================
// TESTS
// =============================================================================
