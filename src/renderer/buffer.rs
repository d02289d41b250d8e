//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of Cells that represents what should be displayed
//! on the terminal. Surfaces and card decoration draw into it; the
//! [`DiffRenderer`](super::DiffRenderer) writes it out.
//!
//! - **Flat storage**: `Vec<Cell>` with row-major indexing.
//! - **Clipping**: drawing functions accept an optional `ClipRect`.
//! - **Alpha blending**: translucent backgrounds blend with existing cells, so
//!   glow and shadow layers can be stacked in paint order.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::types::{Attr, BorderStyle, Cell, ClipRect, Rgba};

// =============================================================================
// FrameBuffer
// =============================================================================

/// A 2D buffer of terminal cells.
///
/// Uses flat storage with row-major indexing: `index = y * width + x`
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_background(width, height, Rgba::TERMINAL_DEFAULT)
    }

    /// Create a new buffer with a specific background color.
    pub fn with_background(width: u16, height: u16, bg: Rgba) -> Self {
        let size = width as usize * height as usize;
        let cell = Cell { bg, ..Cell::default() };
        Self {
            width,
            height,
            cells: vec![cell; size],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The full buffer bounds as a ClipRect.
    #[inline]
    pub fn bounds(&self) -> ClipRect {
        ClipRect::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference (None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            self.cells.get(self.index(x, y))
        } else {
            None
        }
    }

    /// Get a mutable cell reference (None if out of bounds).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.cells.get_mut(idx)
        } else {
            None
        }
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Resize the buffer (clears content).
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let size = width as usize * height as usize;
        self.cells.resize(size, Cell::default());
        self.cells.fill(Cell::default());
    }

    /// Rows as plain strings, continuation cells skipped.
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .filter_map(|x| self.get(x, y))
                    .filter(|cell| cell.char != 0)
                    .filter_map(|cell| char::from_u32(cell.char))
                    .collect()
            })
            .collect()
    }

    // =========================================================================
    // Drawing Primitives
    // =========================================================================

    /// Set a single cell with optional clipping.
    ///
    /// Returns true if the cell was set.
    #[allow(clippy::too_many_arguments)]
    pub fn set_cell(
        &mut self,
        x: u16,
        y: u16,
        char: u32,
        fg: Rgba,
        bg: Rgba,
        attrs: Attr,
        clip: Option<&ClipRect>,
    ) -> bool {
        if clip.is_some_and(|clip| !clip.contains(x, y)) {
            return false;
        }
        let Some(cell) = self.get_mut(x, y) else {
            return false;
        };

        cell.char = char;
        cell.fg = fg;
        cell.bg = Rgba::blend(bg, cell.bg);
        cell.attrs = attrs;
        true
    }

    /// Visit every in-bounds, unclipped cell of a rectangle.
    fn for_each_in_rect(
        &mut self,
        area: ClipRect,
        clip: Option<&ClipRect>,
        mut f: impl FnMut(u16, u16, &mut Cell),
    ) {
        let area = match clip {
            Some(clip) => match area.intersect(clip) {
                Some(area) => area,
                None => return,
            },
            None => area,
        };
        let Some(area) = area.intersect(&self.bounds()) else {
            return;
        };

        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                let idx = self.index(x, y);
                if let Some(cell) = self.cells.get_mut(idx) {
                    f(x, y, cell);
                }
            }
        }
    }

    /// Fill a rectangle with a background color, erasing its text.
    pub fn fill_rect(&mut self, area: ClipRect, bg: Rgba, clip: Option<&ClipRect>) {
        self.for_each_in_rect(area, clip, |_, _, cell| {
            cell.bg = Rgba::blend(bg, cell.bg);
            cell.char = b' ' as u32;
            cell.attrs = Attr::NONE;
        });
    }

    /// Blend a color over the background of a rectangle, keeping its text.
    pub fn tint_rect(&mut self, area: ClipRect, color: Rgba, clip: Option<&ClipRect>) {
        self.for_each_in_rect(area, clip, |_, _, cell| {
            cell.bg = Rgba::blend(color, cell.bg);
        });
    }

    /// Blend a per-cell color over a rectangle's background.
    ///
    /// `color_at` receives absolute cell coordinates.
    pub fn tint_rect_with(
        &mut self,
        area: ClipRect,
        clip: Option<&ClipRect>,
        mut color_at: impl FnMut(u16, u16) -> Rgba,
    ) {
        self.for_each_in_rect(area, clip, |x, y, cell| {
            cell.bg = Rgba::blend(color_at(x, y), cell.bg);
        });
    }

    /// Add attributes to every cell of a rectangle.
    pub fn add_attrs(&mut self, area: ClipRect, attrs: Attr, clip: Option<&ClipRect>) {
        self.for_each_in_rect(area, clip, |_, _, cell| {
            cell.attrs |= attrs;
        });
    }

    /// Draw a single character over the existing background.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        char: char,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&ClipRect>,
    ) -> bool {
        let bg = bg.unwrap_or(Rgba::TRANSPARENT);
        self.set_cell(x, y, char as u32, fg, bg, attrs, clip)
    }

    /// Draw text at a position.
    ///
    /// Returns the number of cells used (handles wide characters).
    #[allow(clippy::too_many_arguments)]
    pub fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&ClipRect>,
    ) -> u16 {
        let bg = bg.unwrap_or(Rgba::TRANSPARENT);
        let mut col = x;

        for ch in text.chars() {
            if col >= self.width {
                break;
            }

            let width = char_width(ch) as u16;
            if width == 0 {
                continue;
            }

            if self.set_cell(col, y, ch as u32, fg, bg, attrs, clip) && width == 2 {
                let next_visible = clip.is_none_or(|c| c.contains(col + 1, y));
                if next_visible {
                    if let Some(next) = self.get_mut(col + 1, y) {
                        next.char = 0; // continuation
                        next.fg = fg;
                        next.bg = Rgba::blend(bg, next.bg);
                        next.attrs = attrs;
                    }
                }
            }

            col = col.saturating_add(width);
        }

        col.saturating_sub(x)
    }

    /// Draw text centered within a width.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_text_centered(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        text: &str,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&ClipRect>,
    ) -> u16 {
        let text_width = string_width(text);
        if text_width >= width as usize {
            return self.draw_text(x, y, text, fg, bg, attrs, clip);
        }
        let offset = ((width as usize - text_width) / 2) as u16;
        self.draw_text(x + offset, y, text, fg, bg, attrs, clip)
    }

    /// Draw a border around a rectangle.
    pub fn draw_border(
        &mut self,
        area: ClipRect,
        style: BorderStyle,
        color: Rgba,
        attrs: Attr,
        clip: Option<&ClipRect>,
    ) {
        if area.width < 2 || area.height < 2 || style == BorderStyle::None {
            return;
        }

        let (horiz, vert, tl, tr, br, bl) = style.chars();
        let (x, y) = (area.x, area.y);
        let x2 = x + area.width - 1;
        let y2 = y + area.height - 1;

        self.draw_char(x, y, tl, color, None, attrs, clip);
        self.draw_char(x2, y, tr, color, None, attrs, clip);
        self.draw_char(x2, y2, br, color, None, attrs, clip);
        self.draw_char(x, y2, bl, color, None, attrs, clip);

        for col in (x + 1)..x2 {
            self.draw_char(col, y, horiz, color, None, attrs, clip);
            self.draw_char(col, y2, horiz, color, None, attrs, clip);
        }

        for row in (y + 1)..y2 {
            self.draw_char(x, row, vert, color, None, attrs, clip);
            self.draw_char(x2, row, vert, color, None, attrs, clip);
        }
    }

    /// Draw a horizontal line whose color comes from `fg_at(offset)`.
    pub fn draw_hline_with(
        &mut self,
        x: u16,
        y: u16,
        length: u16,
        char: char,
        clip: Option<&ClipRect>,
        mut fg_at: impl FnMut(u16) -> Rgba,
    ) {
        for offset in 0..length {
            let col = x.saturating_add(offset);
            if col >= self.width {
                break;
            }
            self.draw_char(col, y, char, fg_at(offset), None, Attr::NONE, clip);
        }
    }
}

// =============================================================================
// Character width
// =============================================================================

/// Display width of a character (0, 1 or 2 cells).
#[inline]
pub fn char_width(c: char) -> usize {
    if c.is_control() {
        return 0;
    }
    c.width().unwrap_or(0)
}

/// Display width of a string in cells.
#[inline]
pub fn string_width(s: &str) -> usize {
    s.width()
}

// =============================================================================
// Tests
// =============================================================================
