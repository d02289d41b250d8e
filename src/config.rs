//! Card configuration.
//!
//! Everything a [`ServiceCard`](crate::card::ServiceCard) shows comes from a
//! `CardConfig`. The defaults reproduce the promotional "CARD A"; a TOML file
//! can override any part of it:
//!
//! ```toml
//! title = "Gift Cards"
//! width = 52
//!
//! [[tiles]]
//! title = "Instant delivery"
//! value = "Email, SMS"
//!
//! [[tiles]]
//! title = "Bundles"
//! variant = "dashed"
//! align = "center"
//! show_colon = false
//!
//! [motion]
//! env_var = "MY_APP_REDUCED_MOTION"
//! ```

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;

use crate::error::{CardError, Result};
use crate::motion::DEFAULT_MOTION_ENV_VAR;
use crate::surface::style::INK;
use crate::surface::{Align, SurfaceProps, Variant};
use crate::types::Rgba;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Text of the pill in the header.
    pub subtitle: String,
    pub corner_label: String,
    pub title: String,
    /// Card width in cells.
    pub width: u16,
    pub tiles: Vec<TileConfig>,
    pub panel: PanelConfig,
    pub features: Vec<FeatureConfig>,
    pub motion: MotionConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TileConfig {
    pub title: String,
    pub value: String,
    pub variant: Variant,
    pub align: Align,
    pub show_colon: bool,
    pub glow: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Glyphs spread evenly around the ring, starting at 3 o'clock.
    pub icons: Vec<String>,
    /// Call-to-action pill text.
    pub cta: String,
    pub glow: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeatureConfig {
    pub glyph: String,
    pub label: String,
    /// `#RRGGBB`
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Environment variable read for the reduced-motion preference.
    pub env_var: String,
}

impl CardConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        debug!(
            "card config: {} tile(s), {} feature(s)",
            config.tiles.len(),
            config.features.len()
        );
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CardError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            subtitle: "Premium".into(),
            corner_label: "CARD A".into(),
            title: "E-Cards".into(),
            width: 64,
            tiles: vec![
                TileConfig::new("Multiple categories", "Finance, games, shopping"),
                TileConfig::new("Global compatibility", "Platforms, apps, websites"),
                TileConfig {
                    variant: Variant::Dashed,
                    align: Align::Center,
                    show_colon: false,
                    ..TileConfig::new("Varied bundles", "")
                },
            ],
            panel: PanelConfig::default(),
            features: vec![
                FeatureConfig::new("◆", "Security", "#B5812E"),
                FeatureConfig::new("ϟ", "Speed", "#B45309"),
                FeatureConfig::new("✔", "Trust", "#CA8A04"),
                FeatureConfig::new("◇", "Quality", "#A16207"),
            ],
            motion: MotionConfig::default(),
        }
    }
}

impl TileConfig {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn to_props(&self) -> SurfaceProps {
        SurfaceProps {
            title: self.title.clone(),
            value: self.value.clone(),
            variant: self.variant,
            align: self.align,
            glow: self.glow,
            show_colon: self.show_colon,
        }
    }
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            value: String::new(),
            variant: Variant::Solid,
            align: Align::Start,
            show_colon: true,
            glow: true,
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            icons: vec!["❖".into(), "#".into(), "%".into()],
            cta: "More ›".into(),
            glow: true,
        }
    }
}

impl FeatureConfig {
    pub fn new(glyph: impl Into<String>, label: impl Into<String>, color: &str) -> Self {
        Self {
            glyph: glyph.into(),
            label: label.into(),
            color: Some(color.to_string()),
        }
    }

    /// Glyph color, falling back to the card ink for missing or bad values.
    pub fn color(&self) -> Rgba {
        match self.color.as_deref() {
            None => INK,
            Some(hex) => Rgba::from_hex(hex).unwrap_or_else(|| {
                warn!("feature {:?}: invalid color {hex:?}", self.label);
                INK
            }),
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            env_var: DEFAULT_MOTION_ENV_VAR.into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
