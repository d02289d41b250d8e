//! Card geometry via Taffy flexbox.
//!
//! The card is a fixed-width column: header row, title, a body row (tile
//! column beside the panel), footer divider and a row of feature badges.
//! Everything is measured in terminal cells.

use taffy::{
    AlignItems, AvailableSpace, Dimension, Display, FlexDirection, LengthPercentage,
    LengthPercentageAuto, NodeId, Size, Style, TaffyTree,
};

use crate::error::Result;
use crate::renderer::string_width;
use crate::types::ClipRect;

/// Panel height floor so the icon ring fits.
pub const PANEL_MIN_HEIGHT: u16 = 13;

/// Absolute cell rectangles of every card part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardLayout {
    pub card: ClipRect,
    pub pill: ClipRect,
    pub divider: ClipRect,
    pub corner: ClipRect,
    pub title: ClipRect,
    /// One per surface, indexed by surface id: tiles first, then the panel.
    pub surfaces: Vec<ClipRect>,
    pub footer_divider: ClipRect,
    pub features: Vec<ClipRect>,
}

impl CardLayout {
    /// The same layout shifted by `(dx, dy)` cells.
    pub fn translated(&self, dx: u16, dy: u16) -> Self {
        let shift = |rect: &ClipRect| {
            ClipRect::new(rect.x.saturating_add(dx), rect.y.saturating_add(dy), rect.width, rect.height)
        };
        Self {
            card: shift(&self.card),
            pill: shift(&self.pill),
            divider: shift(&self.divider),
            corner: shift(&self.corner),
            title: shift(&self.title),
            surfaces: self.surfaces.iter().map(shift).collect(),
            footer_divider: shift(&self.footer_divider),
            features: self.features.iter().map(shift).collect(),
        }
    }
}

/// What the layout needs to know about the content.
#[derive(Debug, Clone)]
pub struct LayoutInput<'a> {
    pub width: u16,
    pub pill_text: &'a str,
    pub corner_text: &'a str,
    pub tile_heights: &'a [u16],
    pub feature_count: usize,
}

// =============================================================================
// Style helpers
// =============================================================================

fn cells(n: f32) -> Dimension {
    Dimension::Length(n)
}

fn gap(width: f32, height: f32) -> Size<LengthPercentage> {
    Size {
        width: LengthPercentage::Length(width),
        height: LengthPercentage::Length(height),
    }
}

fn margin(top: f32, horizontal: f32) -> taffy::Rect<LengthPercentageAuto> {
    taffy::Rect {
        top: LengthPercentageAuto::Length(top),
        bottom: LengthPercentageAuto::Length(0.0),
        left: LengthPercentageAuto::Length(horizontal),
        right: LengthPercentageAuto::Length(horizontal),
    }
}

fn padding(vertical: f32, horizontal: f32) -> taffy::Rect<LengthPercentage> {
    taffy::Rect {
        top: LengthPercentage::Length(vertical),
        bottom: LengthPercentage::Length(vertical),
        left: LengthPercentage::Length(horizontal),
        right: LengthPercentage::Length(horizontal),
    }
}

fn flex(direction: FlexDirection) -> Style {
    Style {
        display: Display::Flex,
        flex_direction: direction,
        ..Default::default()
    }
}

fn row_of_height(height: f32) -> Style {
    Style {
        size: Size {
            width: Dimension::Auto,
            height: cells(height),
        },
        flex_shrink: 0.0,
        ..flex(FlexDirection::Row)
    }
}

// =============================================================================
// Layout
// =============================================================================

/// Compute the card's geometry, placed at `origin`.
pub fn compute_layout(input: &LayoutInput<'_>, origin: (u16, u16)) -> Result<CardLayout> {
    let mut tree: TaffyTree<()> = TaffyTree::new();

    // Header: pill, divider, corner label
    let pill_width = string_width(input.pill_text) as f32 + 4.0;
    let pill = tree.new_leaf(Style {
        size: Size {
            width: cells(pill_width),
            height: cells(1.0),
        },
        flex_shrink: 0.0,
        ..Default::default()
    })?;
    let divider = tree.new_leaf(Style {
        flex_grow: 1.0,
        margin: margin(0.0, 1.0),
        ..row_of_height(1.0)
    })?;
    let corner = tree.new_leaf(Style {
        size: Size {
            width: cells(string_width(input.corner_text) as f32),
            height: cells(1.0),
        },
        flex_shrink: 0.0,
        ..Default::default()
    })?;
    let header = tree.new_with_children(
        Style {
            align_items: Some(AlignItems::Center),
            ..row_of_height(1.0)
        },
        &[pill, divider, corner],
    )?;

    let title = tree.new_leaf(Style {
        margin: margin(1.0, 0.0),
        ..row_of_height(1.0)
    })?;

    // Body: tiles | panel
    let tiles = input
        .tile_heights
        .iter()
        .map(|&height| tree.new_leaf(row_of_height(height as f32)))
        .collect::<std::result::Result<Vec<NodeId>, _>>()?;
    let tile_column = tree.new_with_children(
        Style {
            flex_grow: 1.0,
            flex_basis: cells(0.0),
            gap: gap(0.0, 1.0),
            ..flex(FlexDirection::Column)
        },
        &tiles,
    )?;
    let panel = tree.new_leaf(Style {
        flex_grow: 1.05,
        flex_basis: cells(0.0),
        min_size: Size {
            width: Dimension::Auto,
            height: cells(PANEL_MIN_HEIGHT as f32),
        },
        ..Default::default()
    })?;
    let body = tree.new_with_children(
        Style {
            margin: margin(1.0, 0.0),
            gap: gap(2.0, 0.0),
            align_items: Some(AlignItems::Stretch),
            flex_shrink: 0.0,
            ..flex(FlexDirection::Row)
        },
        &[tile_column, panel],
    )?;

    // Footer: divider, features
    let footer_divider = tree.new_leaf(Style {
        margin: margin(1.0, 0.0),
        ..row_of_height(1.0)
    })?;
    let features = (0..input.feature_count)
        .map(|_| {
            tree.new_leaf(Style {
                flex_grow: 1.0,
                flex_basis: cells(0.0),
                ..row_of_height(2.0)
            })
        })
        .collect::<std::result::Result<Vec<NodeId>, _>>()?;
    let feature_row = tree.new_with_children(
        Style {
            margin: margin(1.0, 0.0),
            gap: gap(1.0, 0.0),
            ..row_of_height(2.0)
        },
        &features,
    )?;

    let root = tree.new_with_children(
        Style {
            size: Size {
                width: cells(input.width as f32),
                height: Dimension::Auto,
            },
            padding: padding(1.0, 2.0),
            ..flex(FlexDirection::Column)
        },
        &[header, title, body, footer_divider, feature_row],
    )?;

    tree.compute_layout(
        root,
        Size {
            width: AvailableSpace::Definite(input.width as f32),
            height: AvailableSpace::MaxContent,
        },
    )?;

    let origin = (origin.0 as f32, origin.1 as f32);
    let place = |chain: &[NodeId]| absolute(&tree, origin, chain);

    let mut surfaces = tiles
        .iter()
        .map(|&tile| place(&[root, body, tile_column, tile]))
        .collect::<Result<Vec<_>>>()?;
    surfaces.push(place(&[root, body, panel])?);

    Ok(CardLayout {
        card: place(&[root])?,
        pill: place(&[root, header, pill])?,
        divider: place(&[root, header, divider])?,
        corner: place(&[root, header, corner])?,
        title: place(&[root, title])?,
        surfaces,
        footer_divider: place(&[root, footer_divider])?,
        features: features
            .iter()
            .map(|&feature| place(&[root, feature_row, feature]))
            .collect::<Result<Vec<_>>>()?,
    })
}

/// Sum locations down a parent chain; size comes from the last node.
fn absolute(tree: &TaffyTree<()>, origin: (f32, f32), chain: &[NodeId]) -> Result<ClipRect> {
    let (mut x, mut y) = origin;
    let mut size = Size::ZERO;
    for &node in chain {
        let layout = tree.layout(node)?;
        x += layout.location.x;
        y += layout.location.y;
        size = layout.size;
    }
    Ok(ClipRect::new(
        x.round().max(0.0) as u16,
        y.round().max(0.0) as u16,
        size.width.round().max(0.0) as u16,
        size.height.round().max(0.0) as u16,
    ))
}

// =============================================================================
// TESTS
// =============================================================================
