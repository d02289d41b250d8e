//! Core types for glow-cards.
//!
//! Colors, cell attributes, rectangles, and border styles. Everything the
//! surfaces compute ends up as one of these before it reaches the renderer.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// Alpha 255 = fully opaque, 0 = fully transparent.
/// Special value: r=-1 means "terminal default" (let terminal pick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with a fractional alpha (0.0 - 1.0), CSS `rgba()` style.
    pub const fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        let a = if alpha <= 0.0 {
            0
        } else if alpha >= 1.0 {
            255
        } else {
            (alpha * 255.0 + 0.5) as u8
        };
        Self::new(r, g, b, a)
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    /// Transparent color.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    /// Check if color is fully opaque.
    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Check if color is fully transparent.
    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Same color with alpha scaled by `factor` (0.0 = transparent).
    pub fn fade(self, factor: f32) -> Self {
        if self.is_terminal_default() {
            return self;
        }
        Self {
            a: (self.a as f32 * factor.clamp(0.0, 1.0)).round() as i16,
            ..self
        }
    }

    /// Alpha blend src over dst (Porter-Duff "over" operation).
    ///
    /// Terminal default colors are treated as opaque.
    #[inline]
    pub fn blend(src: Self, dst: Self) -> Self {
        if src.is_opaque() || src.is_terminal_default() {
            return src;
        }

        if src.is_transparent() {
            return dst;
        }

        // Terminal default as dst is treated as opaque black
        let (dr, dg, db, da) = if dst.is_terminal_default() {
            (0i16, 0i16, 0i16, 255i16)
        } else {
            (dst.r, dst.g, dst.b, dst.a)
        };

        let sa = src.a as i32;
        let inv_sa = 255 - sa;

        // out_a = src_a + dst_a * (1 - src_a)
        let out_a = sa + (da as i32 * inv_sa) / 255;

        if out_a == 0 {
            return Self::TRANSPARENT;
        }

        // out_rgb = (src_rgb * src_a + dst_rgb * dst_a * (1 - src_a)) / out_a
        let out_r = ((src.r as i32 * sa) + (dr as i32 * da as i32 * inv_sa / 255)) / out_a;
        let out_g = ((src.g as i32 * sa) + (dg as i32 * da as i32 * inv_sa / 255)) / out_a;
        let out_b = ((src.b as i32 * sa) + (db as i32 * da as i32 * inv_sa / 255)) / out_a;

        Self {
            r: out_r.clamp(0, 255) as i16,
            g: out_g.clamp(0, 255) as i16,
            b: out_b.clamp(0, 255) as i16,
            a: out_a.clamp(0, 255) as i16,
        }
    }

    /// Linear interpolation between two colors.
    #[inline]
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        Self {
            r: ((a.r as f32 * inv_t) + (b.r as f32 * t)) as i16,
            g: ((a.g as f32 * inv_t) + (b.g as f32 * t)) as i16,
            b: ((a.b as f32 * inv_t) + (b.b as f32 * t)) as i16,
            a: ((a.a as f32 * inv_t) + (b.a as f32 * t)) as i16,
        }
    }

    /// Parse a hex color string.
    ///
    /// Supports `#RGB`, `#RRGGBB`, and `#RRGGBBAA`, with or without `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        let nibble = |c: u8| -> Option<u8> {
            match c {
                b'0'..=b'9' => Some(c - b'0'),
                b'a'..=b'f' => Some(c - b'a' + 10),
                b'A'..=b'F' => Some(c - b'A' + 10),
                _ => None,
            }
        };
        let byte = |s: &[u8]| -> Option<u8> { Some(nibble(s[0])? * 16 + nibble(s[1])?) };

        let bytes = hex.as_bytes();
        match bytes.len() {
            3 => {
                let r = nibble(bytes[0])?;
                let g = nibble(bytes[1])?;
                let b = nibble(bytes[2])?;
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => Some(Self::rgb(
                byte(&bytes[0..2])?,
                byte(&bytes[2..4])?,
                byte(&bytes[4..6])?,
            )),
            8 => Some(Self::new(
                byte(&bytes[0..2])?,
                byte(&bytes[2..4])?,
                byte(&bytes[4..6])?,
                byte(&bytes[6..8])?,
            )),
            _ => None,
        }
    }
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 5;
    }
}

// =============================================================================
// Cell - The atomic unit of terminal rendering
// =============================================================================

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Unicode codepoint (32 for space, 0 for a wide-char continuation).
    pub char: u32,
    pub fg: Rgba,
    pub bg: Rgba,
    pub attrs: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: b' ' as u32,
            fg: Rgba::TERMINAL_DEFAULT,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::NONE,
        }
    }
}

// =============================================================================
// ClipRect - integer cell rectangle
// =============================================================================

/// A rectangle in terminal cells. Used for clipping and hit regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClipRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClipRect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Check if a point is inside this rect.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.width as u32
            && (y as u32) < self.y as u32 + self.height as u32
    }

    /// Compute intersection of two rects.
    pub fn intersect(&self, other: &ClipRect) -> Option<ClipRect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.x.saturating_add(self.width).min(other.x.saturating_add(other.width));
        let y2 = self.y.saturating_add(self.height).min(other.y.saturating_add(other.height));

        if x2 > x1 && y2 > y1 {
            Some(ClipRect {
                x: x1,
                y: y1,
                width: x2 - x1,
                height: y2 - y1,
            })
        } else {
            None
        }
    }

    /// Shrink by `amount` cells on every side.
    pub fn inset(&self, amount: u16) -> ClipRect {
        let twice = amount.saturating_mul(2);
        ClipRect {
            x: self.x.saturating_add(amount),
            y: self.y.saturating_add(amount),
            width: self.width.saturating_sub(twice),
            height: self.height.saturating_sub(twice),
        }
    }
}

// =============================================================================
// Rect - floating point bounding box
// =============================================================================

/// A bounding rectangle in client coordinates.
///
/// Client coordinates are cell columns/rows as floats, the terminal analog of
/// a DOM bounding client rect.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// A rect that can be used as a normalization basis.
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

impl From<ClipRect> for Rect {
    fn from(r: ClipRect) -> Self {
        Self::new(r.x as f32, r.y as f32, r.width as f32, r.height as f32)
    }
}

// =============================================================================
// Border Styles
// =============================================================================

/// Border styles used by surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum BorderStyle {
    #[default]
    None = 0,
    /// ─ │ ┌ ┐ └ ┘
    Single = 1,
    /// ─ │ ╭ ╮ ╰ ╯
    Rounded = 3,
    /// ┄ ┆ ╭ ╮ ╰ ╯
    Dashed = 5,
}

impl BorderStyle {
    /// Get the border characters for this style.
    ///
    /// Returns: (horizontal, vertical, top_left, top_right, bottom_right, bottom_left)
    pub const fn chars(&self) -> (char, char, char, char, char, char) {
        match self {
            Self::None => (' ', ' ', ' ', ' ', ' ', ' '),
            Self::Single => ('─', '│', '┌', '┐', '┘', '└'),
            Self::Rounded => ('─', '│', '╭', '╮', '╯', '╰'),
            Self::Dashed => ('┄', '┆', '╭', '╮', '╯', '╰'),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_fractional_alpha() {
        assert_eq!(Rgba::rgba(214, 167, 86, 0.18).a, 46);
        assert_eq!(Rgba::rgba(0, 0, 0, 0.0).a, 0);
        assert_eq!(Rgba::rgba(0, 0, 0, 1.0).a, 255);
        assert_eq!(Rgba::rgba(0, 0, 0, 2.0).a, 255);
    }

    #[test]
    fn test_rgba_blend_opaque_and_transparent() {
        let red = Rgba::rgb(255, 0, 0);
        let blue = Rgba::rgb(0, 0, 255);
        assert_eq!(Rgba::blend(red, blue), red);
        assert_eq!(Rgba::blend(Rgba::TRANSPARENT, blue), blue);
    }

    #[test]
    fn test_rgba_blend_half() {
        let half_white = Rgba::new(255, 255, 255, 128);
        let out = Rgba::blend(half_white, Rgba::BLACK);
        assert!(out.r > 120 && out.r < 135, "r = {}", out.r);
        assert_eq!(out.a, 255);
    }

    #[test]
    fn test_rgba_fade() {
        let c = Rgba::new(10, 20, 30, 200);
        assert_eq!(c.fade(0.5).a, 100);
        assert_eq!(c.fade(0.0).a, 0);
        assert_eq!(Rgba::TERMINAL_DEFAULT.fade(0.5), Rgba::TERMINAL_DEFAULT);
    }

    #[test]
    fn test_rgba_from_hex() {
        assert_eq!(Rgba::from_hex("#3F2D17"), Some(Rgba::rgb(0x3f, 0x2d, 0x17)));
        assert_eq!(Rgba::from_hex("fff"), Some(Rgba::WHITE));
        assert_eq!(Rgba::from_hex("#ff000080"), Some(Rgba::new(255, 0, 0, 128)));
        assert!(Rgba::from_hex("#ggg").is_none());
        assert!(Rgba::from_hex("#ffff").is_none());
        assert!(Rgba::from_hex("").is_none());
    }

    #[test]
    fn test_clip_rect_contains_and_intersect() {
        let r = ClipRect::new(2, 2, 4, 3);
        assert!(r.contains(2, 2));
        assert!(r.contains(5, 4));
        assert!(!r.contains(6, 4));
        assert!(!r.contains(5, 5));

        let other = ClipRect::new(4, 3, 10, 10);
        assert_eq!(r.intersect(&other), Some(ClipRect::new(4, 3, 2, 2)));
        assert_eq!(r.intersect(&ClipRect::new(20, 20, 1, 1)), None);
    }

    #[test]
    fn test_clip_rect_inset() {
        let r = ClipRect::new(0, 0, 10, 4);
        assert_eq!(r.inset(1), ClipRect::new(1, 1, 8, 2));
        assert_eq!(r.inset(3).height, 0);
    }

    #[test]
    fn test_rect_has_area() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).has_area());
        assert!(!Rect::new(0.0, 0.0, 0.0, 1.0).has_area());
        assert!(!Rect::new(0.0, 0.0, f32::NAN, 1.0).has_area());
    }
}
