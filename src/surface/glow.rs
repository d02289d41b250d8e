//! Pointer glow.
//!
//! The pointer position is normalized against the surface bounds and
//! published into a `Signal`; painting reads the latest value and lays a
//! radial gradient over the surface body.

use spark_signals::{Signal, signal};

use super::style::{CELL_HEIGHT_PX, CELL_WIDTH_PX, GlowSpec, SurfaceKind, glow_spec};
use crate::renderer::FrameBuffer;
use crate::types::{ClipRect, Rect, Rgba};

/// Pointer position relative to a surface, `(0,0)` top-left to `(1,1)`
/// bottom-right. Not clamped: a pointer just outside reads slightly out of
/// range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedPointer {
    pub x: f32,
    pub y: f32,
}

impl NormalizedPointer {
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for NormalizedPointer {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Normalize client coordinates against `bounds`.
///
/// `None` when there are no bounds or they have no area.
pub fn normalize(client_x: f32, client_y: f32, bounds: Option<Rect>) -> Option<NormalizedPointer> {
    let bounds = bounds.filter(Rect::has_area)?;
    Some(NormalizedPointer {
        x: (client_x - bounds.left) / bounds.width,
        y: (client_y - bounds.top) / bounds.height,
    })
}

/// Gradient strength at `distance`, where 1.0 is the ellipse radius.
///
/// Linear from 1 at the center to 0 at `fade_stop`.
pub fn falloff(distance: f32, fade_stop: f32) -> f32 {
    if fade_stop <= 0.0 || !distance.is_finite() {
        return 0.0;
    }
    (1.0 - distance / fade_stop).clamp(0.0, 1.0)
}

/// Radial highlight of one surface.
pub struct GlowLayer {
    spec: GlowSpec,
    position: Signal<NormalizedPointer>,
    updates: usize,
}

impl GlowLayer {
    pub fn new(kind: SurfaceKind) -> Self {
        Self {
            spec: glow_spec(kind),
            position: signal(NormalizedPointer::CENTER),
            updates: 0,
        }
    }

    pub fn spec(&self) -> &GlowSpec {
        &self.spec
    }

    /// Latest published position.
    pub fn position(&self) -> NormalizedPointer {
        self.position.get()
    }

    /// The position signal, for reactive consumers.
    pub fn position_signal(&self) -> Signal<NormalizedPointer> {
        self.position.clone()
    }

    /// Number of positions published so far.
    pub fn updates(&self) -> usize {
        self.updates
    }

    pub fn publish(&mut self, pointer: NormalizedPointer) {
        self.position.set(pointer);
        self.updates += 1;
    }

    /// Glow color over the cell at `(col, row)` of a surface occupying `area`.
    pub fn color_at(&self, area: ClipRect, col: u16, row: u16) -> Rgba {
        if area.width == 0 || area.height == 0 {
            return Rgba::TRANSPARENT;
        }
        let center = self.position();
        let width_px = area.width as f32 * CELL_WIDTH_PX;
        let height_px = area.height as f32 * CELL_HEIGHT_PX;

        let cell_x = (col.saturating_sub(area.x) as f32 + 0.5) * CELL_WIDTH_PX;
        let cell_y = (row.saturating_sub(area.y) as f32 + 0.5) * CELL_HEIGHT_PX;
        let dx = (cell_x - center.x * width_px) / self.spec.radius_x;
        let dy = (cell_y - center.y * height_px) / self.spec.radius_y;

        let strength = falloff((dx * dx + dy * dy).sqrt(), self.spec.fade_stop);
        self.spec.color.fade(strength)
    }

    /// Blend the gradient over `area`'s background.
    pub fn paint(&self, buf: &mut FrameBuffer, area: ClipRect, clip: Option<&ClipRect>) {
        buf.tint_rect_with(area, clip, |col, row| self.color_at(area, col, row));
    }
}

// =============================================================================
// TESTS
// =============================================================================
