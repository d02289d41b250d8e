//! Style presets.
//!
//! Every visual property of a surface is a lookup into fixed tables keyed by
//! interaction state, surface kind and variant. [`resolve_style`] is pure;
//! the palettes and glow geometry live here too so all design values sit in
//! one place.

use serde::Deserialize;

use super::state::InteractionState;
use crate::types::{BorderStyle, Rgba};

// =============================================================================
// Keys
// =============================================================================

/// Which kind of surface: a small information tile or a large panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    Tile,
    Panel,
}

/// Background/border treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Solid,
    Dashed,
}

/// Horizontal text alignment inside a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Start,
    Center,
}

// =============================================================================
// Preset values
// =============================================================================

/// Vertical offset (px, negative lifts) and uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate_y: f32,
    pub scale: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self::new(0.0, 1.0);

    pub const fn new(translate_y: f32, scale: f32) -> Self {
        Self { translate_y, scale }
    }

    pub fn is_lifted(&self) -> bool {
        self.translate_y < 0.0
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// One box-shadow layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowLayer {
    pub offset_y: f32,
    pub blur: f32,
    pub color: Rgba,
    pub inset: bool,
}

impl ShadowLayer {
    const fn outer(offset_y: f32, blur: f32, color: Rgba) -> Self {
        Self {
            offset_y,
            blur,
            color,
            inset: false,
        }
    }

    const fn inset(offset_y: f32, color: Rgba) -> Self {
        Self {
            offset_y,
            blur: 0.0,
            color,
            inset: true,
        }
    }
}

/// Which row of the preset table applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowTier {
    Base,
    Hover,
    Active,
}

impl ShadowTier {
    /// Pressed wins over hovered.
    pub fn of(state: InteractionState) -> Self {
        if state.pressed {
            Self::Active
        } else if state.hovered {
            Self::Hover
        } else {
            Self::Base
        }
    }
}

/// Resolved transform and shadow for one state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StylePreset {
    pub tier: ShadowTier,
    pub transform: Transform,
    pub shadow: &'static [ShadowLayer],
}

const TILE_TRANSFORMS: [Transform; 3] = [
    Transform::IDENTITY,
    Transform::new(-2.0, 1.03),
    Transform::new(0.0, 0.985),
];

const PANEL_TRANSFORMS: [Transform; 3] = [
    Transform::IDENTITY,
    Transform::new(-3.0, 1.02),
    Transform::new(0.0, 0.988),
];

const TILE_HIGHLIGHT: ShadowLayer = ShadowLayer::inset(1.0, Rgba::rgba(255, 255, 255, 0.95));

static TILE_SOLID_BASE: [ShadowLayer; 2] = [
    ShadowLayer::outer(8.0, 20.0, Rgba::rgba(120, 53, 15, 0.10)),
    TILE_HIGHLIGHT,
];
static TILE_SOLID_HOVER: [ShadowLayer; 2] = [
    ShadowLayer::outer(12.0, 28.0, Rgba::rgba(124, 45, 18, 0.18)),
    TILE_HIGHLIGHT,
];
static TILE_SOLID_ACTIVE: [ShadowLayer; 2] = [
    ShadowLayer::outer(6.0, 14.0, Rgba::rgba(124, 45, 18, 0.18)),
    ShadowLayer::inset(2.0, Rgba::rgba(0, 0, 0, 0.02)),
];

static TILE_DASHED_BASE: [ShadowLayer; 1] = [ShadowLayer::outer(10.0, 24.0, Rgba::rgba(180, 83, 9, 0.18))];
static TILE_DASHED_HOVER: [ShadowLayer; 1] = [ShadowLayer::outer(14.0, 30.0, Rgba::rgba(180, 83, 9, 0.22))];
static TILE_DASHED_ACTIVE: [ShadowLayer; 1] = [ShadowLayer::outer(8.0, 18.0, Rgba::rgba(180, 83, 9, 0.18))];

static PANEL_BASE: [ShadowLayer; 1] = [ShadowLayer::outer(10.0, 28.0, Rgba::rgba(124, 45, 18, 0.18))];
static PANEL_HOVER: [ShadowLayer; 1] = [ShadowLayer::outer(16.0, 38.0, Rgba::rgba(124, 45, 18, 0.22))];
static PANEL_ACTIVE: [ShadowLayer; 1] = [ShadowLayer::outer(8.0, 20.0, Rgba::rgba(124, 45, 18, 0.20))];

/// Style for a state. Panels ignore `variant`.
pub fn resolve_style(state: InteractionState, kind: SurfaceKind, variant: Variant) -> StylePreset {
    let tier = ShadowTier::of(state);
    let row = match tier {
        ShadowTier::Base => 0,
        ShadowTier::Hover => 1,
        ShadowTier::Active => 2,
    };

    let transform = match kind {
        SurfaceKind::Tile => TILE_TRANSFORMS[row],
        SurfaceKind::Panel => PANEL_TRANSFORMS[row],
    };

    let shadow: &'static [ShadowLayer] = match (kind, variant, tier) {
        (SurfaceKind::Tile, Variant::Solid, ShadowTier::Base) => &TILE_SOLID_BASE,
        (SurfaceKind::Tile, Variant::Solid, ShadowTier::Hover) => &TILE_SOLID_HOVER,
        (SurfaceKind::Tile, Variant::Solid, ShadowTier::Active) => &TILE_SOLID_ACTIVE,
        (SurfaceKind::Tile, Variant::Dashed, ShadowTier::Base) => &TILE_DASHED_BASE,
        (SurfaceKind::Tile, Variant::Dashed, ShadowTier::Hover) => &TILE_DASHED_HOVER,
        (SurfaceKind::Tile, Variant::Dashed, ShadowTier::Active) => &TILE_DASHED_ACTIVE,
        (SurfaceKind::Panel, _, ShadowTier::Base) => &PANEL_BASE,
        (SurfaceKind::Panel, _, ShadowTier::Hover) => &PANEL_HOVER,
        (SurfaceKind::Panel, _, ShadowTier::Active) => &PANEL_ACTIVE,
    };

    StylePreset {
        tier,
        transform,
        shadow,
    }
}

// =============================================================================
// Palette
// =============================================================================

/// Background and border colors of a surface body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Top row background; the body blends down to `background_bottom`.
    pub background_top: Rgba,
    pub background_bottom: Rgba,
    pub border: Rgba,
    pub border_style: BorderStyle,
    /// Ink for titles and labels.
    pub ink: Rgba,
    /// Ink for secondary text.
    pub muted: Rgba,
}

pub const INK: Rgba = Rgba::rgb(0x3f, 0x2d, 0x17);
pub const MUTED_INK: Rgba = Rgba::rgb(0x6b, 0x4e, 0x2e);
pub const GOLD: Rgba = Rgba::rgb(214, 167, 86);
/// Card face color surfaces sit on.
pub const CARD_BACKGROUND: Rgba = Rgba::rgb(0xfc, 0xef, 0xda);

const SOLID_TILE: Palette = Palette {
    background_top: Rgba::rgba(255, 255, 255, 0.85),
    background_bottom: Rgba::rgba(255, 255, 255, 0.85),
    border: Rgba::rgba(214, 167, 86, 0.45),
    border_style: BorderStyle::Rounded,
    ink: INK,
    muted: MUTED_INK,
};

const DASHED_TILE: Palette = Palette {
    background_top: Rgba::rgba(214, 167, 86, 0.18),
    background_bottom: Rgba::rgba(245, 158, 11, 0.12),
    border: Rgba::rgba(214, 167, 86, 0.55),
    border_style: BorderStyle::Dashed,
    ink: INK,
    muted: MUTED_INK,
};

const PANEL: Palette = Palette {
    background_top: Rgba::rgba(214, 167, 86, 0.18),
    background_bottom: Rgba::rgba(245, 158, 11, 0.12),
    border: Rgba::rgba(214, 167, 86, 0.30),
    border_style: BorderStyle::Rounded,
    ink: INK,
    muted: MUTED_INK,
};

/// Inner top highlight of a panel.
pub const PANEL_HIGHLIGHT: Rgba = Rgba::rgba(255, 255, 255, 0.65);

pub fn palette(kind: SurfaceKind, variant: Variant) -> Palette {
    match (kind, variant) {
        (SurfaceKind::Tile, Variant::Solid) => SOLID_TILE,
        (SurfaceKind::Tile, Variant::Dashed) => DASHED_TILE,
        (SurfaceKind::Panel, _) => PANEL,
    }
}

// =============================================================================
// Glow geometry
// =============================================================================

/// Radial highlight parameters, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowSpec {
    pub color: Rgba,
    pub radius_x: f32,
    pub radius_y: f32,
    /// Fraction of the radius where the gradient reaches zero.
    pub fade_stop: f32,
}

pub fn glow_spec(kind: SurfaceKind) -> GlowSpec {
    match kind {
        SurfaceKind::Tile => GlowSpec {
            color: Rgba::rgba(214, 167, 86, 0.18),
            radius_x: 280.0,
            radius_y: 180.0,
            fade_stop: 0.6,
        },
        SurfaceKind::Panel => GlowSpec {
            color: Rgba::rgba(214, 167, 86, 0.14),
            radius_x: 360.0,
            radius_y: 240.0,
            fade_stop: 0.6,
        },
    }
}

/// Pixel size of one terminal cell.
pub const CELL_WIDTH_PX: f32 = 8.0;
pub const CELL_HEIGHT_PX: f32 = 16.0;

/// Shadow offset that earns one row of strip below a surface.
const SHADOW_PX_PER_ROW: f32 = 8.0;
const MAX_SHADOW_ROWS: u16 = 2;

/// Rows of shadow strip painted below a surface for a layer.
pub fn shadow_rows(layer: &ShadowLayer) -> u16 {
    if layer.inset || layer.offset_y <= 0.0 {
        return 0;
    }
    ((layer.offset_y / SHADOW_PX_PER_ROW).ceil() as u16).min(MAX_SHADOW_ROWS)
}

// =============================================================================
// TESTS
// =============================================================================
