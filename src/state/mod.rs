//! State Module - Input plumbing
//!
//! - **Keyboard** - Event types, activation keys
//! - **Mouse** - Pointer events, HitGrid
//! - **Focus** - Tab cycling over surfaces
//! - **Input** - crossterm conversion and polling

pub mod focus;
pub mod input;
pub mod keyboard;
pub mod mouse;

pub use focus::{FocusChange, FocusRing};
pub use input::InputEvent;
pub use keyboard::{ActivationKey, KeyState, KeyboardEvent, Modifiers};
pub use mouse::{HitGrid, MouseButton, PointerAction, PointerEvent, PointerKind};
