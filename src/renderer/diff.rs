//! Differential renderer for fullscreen mode.
//!
//! The DiffRenderer compares the current frame to the previous frame and only
//! outputs cells that have changed. A hover or glow update touches a handful
//! of cells, so most frames are tiny.
//!
//! # Algorithm
//!
//! 1. Wrap output in a synchronized update block
//! 2. For each cell in the new frame:
//!    - If previous frame exists and cell is unchanged: skip
//!    - Otherwise: render cell with StatefulCellRenderer
//! 3. Flush the writer once
//! 4. Store current frame as previous for next comparison

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{Attribute, ResetColor, SetAttribute};
use crossterm::terminal::{
    BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate, EnterAlternateScreen,
    LeaveAlternateScreen,
};

use super::buffer::FrameBuffer;
use super::output::StatefulCellRenderer;

/// Differential renderer for fullscreen mode.
///
/// Keeps track of the previous frame to enable diff-based rendering.
#[derive(Debug, Default)]
pub struct DiffRenderer {
    cell_renderer: StatefulCellRenderer,
    previous: Option<FrameBuffer>,
}

impl DiffRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a frame, outputting only changed cells.
    ///
    /// Returns true if any cells were changed.
    pub fn render<W: Write>(&mut self, out: &mut W, buffer: &FrameBuffer) -> io::Result<bool> {
        let mut has_changes = false;

        queue!(out, BeginSynchronizedUpdate)?;
        self.cell_renderer.reset();

        let same_size = self
            .previous
            .as_ref()
            .is_some_and(|prev| prev.width() == buffer.width() && prev.height() == buffer.height());

        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                let Some(cell) = buffer.get(x, y) else {
                    continue;
                };

                let changed = match &self.previous {
                    Some(prev) if same_size => prev.get(x, y) != Some(cell),
                    _ => true,
                };

                if changed {
                    has_changes = true;
                    self.cell_renderer.render_cell(out, x, y, cell)?;
                }
            }
        }

        queue!(out, EndSynchronizedUpdate)?;
        out.flush()?;

        self.previous = Some(buffer.clone());
        Ok(has_changes)
    }

    /// Invalidate the previous frame. Next render will be a full redraw.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Enter fullscreen mode (alternate screen buffer).
    pub fn enter_fullscreen<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        queue!(out, EnterAlternateScreen, Hide, Clear(ClearType::All), MoveTo(0, 0))?;
        out.flush()?;
        self.invalidate();
        Ok(())
    }

    /// Exit fullscreen mode.
    pub fn exit_fullscreen<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        queue!(out, SetAttribute(Attribute::Reset), ResetColor, Show, LeaveAlternateScreen)?;
        out.flush()
    }
}

// =============================================================================
// Tests
// =============================================================================
