//! Mouse Module - Pointer event types and hit testing
//!
//! `PointerEvent` is what the card router consumes; `HitGrid` maps a cell to
//! the surface occupying it in O(1).
//!
//! # Example
//!
//! ```ignore
//! use glow_cards::state::mouse::{HitGrid, PointerEvent, MouseButton};
//!
//! let mut grid = HitGrid::new(80, 24);
//! grid.fill_rect(2, 2, 10, 4, 0);
//! assert_eq!(grid.get(5, 3), Some(0));
//!
//! let down = PointerEvent::down(MouseButton::Left, 5, 3);
//! ```

use super::keyboard::Modifiers;

// =============================================================================
// TYPES
// =============================================================================

/// Pointer action type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Down,
    Up,
    Move,
    Drag,
}

/// Input device behind a pointer event.
///
/// Touch has no hover: a touch press never sets the hovered flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    #[default]
    None,
}

/// Pointer event in terminal cell coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub kind: PointerKind,
    pub button: MouseButton,
    /// Column (0-indexed)
    pub x: u16,
    /// Row (0-indexed)
    pub y: u16,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(action: PointerAction, button: MouseButton, x: u16, y: u16) -> Self {
        Self {
            action,
            kind: PointerKind::Mouse,
            button,
            x,
            y,
            modifiers: Modifiers::default(),
        }
    }

    /// Create a mouse down event
    pub fn down(button: MouseButton, x: u16, y: u16) -> Self {
        Self::new(PointerAction::Down, button, x, y)
    }

    /// Create a mouse up event
    pub fn up(button: MouseButton, x: u16, y: u16) -> Self {
        Self::new(PointerAction::Up, button, x, y)
    }

    /// Create a mouse move event
    pub fn move_to(x: u16, y: u16) -> Self {
        Self::new(PointerAction::Move, MouseButton::None, x, y)
    }

    /// Create a touch start event
    pub fn touch_start(x: u16, y: u16) -> Self {
        Self {
            kind: PointerKind::Touch,
            ..Self::new(PointerAction::Down, MouseButton::None, x, y)
        }
    }

    /// Create a touch end event
    pub fn touch_end(x: u16, y: u16) -> Self {
        Self {
            kind: PointerKind::Touch,
            ..Self::new(PointerAction::Up, MouseButton::None, x, y)
        }
    }

    /// Move or drag: both reposition the pointer.
    pub fn is_motion(&self) -> bool {
        matches!(self.action, PointerAction::Move | PointerAction::Drag)
    }
}

// =============================================================================
// HIT GRID - O(1) Coordinate to Surface Lookup
// =============================================================================

/// A grid for O(1) pointer hit detection.
///
/// Each cell contains the surface index that occupies that position,
/// or `None` if empty.
#[derive(Debug, Clone)]
pub struct HitGrid {
    width: u16,
    height: u16,
    cells: Vec<usize>,
}

impl HitGrid {
    /// Create a new hit grid with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![usize::MAX; size],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the grid, clearing all contents.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let size = width as usize * height as usize;
        self.cells.resize(size, usize::MAX);
        self.clear();
    }

    /// Clear all cells.
    pub fn clear(&mut self) {
        self.cells.fill(usize::MAX);
    }

    /// Fill a rectangle with a surface index. Later fills win.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, index: usize) {
        for dy in 0..height {
            let cy = y.saturating_add(dy);
            if cy >= self.height {
                break;
            }
            for dx in 0..width {
                let cx = x.saturating_add(dx);
                if cx >= self.width {
                    break;
                }
                let idx = cy as usize * self.width as usize + cx as usize;
                if let Some(cell) = self.cells.get_mut(idx) {
                    *cell = index;
                }
            }
        }
    }

    /// Get the surface index at a position.
    pub fn get(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y as usize * self.width as usize + x as usize;
        match self.cells.get(idx).copied() {
            Some(usize::MAX) | None => None,
            Some(value) => Some(value),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
