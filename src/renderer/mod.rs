//! Terminal renderer - the "blind" output layer.
//!
//! The renderer knows only about cells. Surfaces and the card paint into a
//! [`FrameBuffer`]; [`DiffRenderer`] writes the changed cells to the
//! terminal through crossterm.

pub mod buffer;
pub mod diff;
pub mod output;

pub use buffer::{FrameBuffer, char_width, string_width};
pub use diff::DiffRenderer;
pub use output::StatefulCellRenderer;
