//! Static card artwork: frame, header pill, dividers, feature badges and
//! the panel's icon ring.

use std::f32::consts::PI;

use crate::config::{FeatureConfig, PanelConfig};
use crate::renderer::{FrameBuffer, string_width};
use crate::surface::SurfaceContent;
use crate::surface::style::{CARD_BACKGROUND, GOLD, INK};
use crate::types::{Attr, BorderStyle, ClipRect, Rgba};

const FACE_TOP: Rgba = Rgba::rgb(0xff, 0xf8, 0xed);
const FACE_BOTTOM: Rgba = Rgba::rgb(0xf6, 0xe5, 0xcb);
const FRAME: Rgba = Rgba::rgba(181, 129, 46, 0.45);
const PILL_TOP: Rgba = Rgba::rgb(0xff, 0xe9, 0xc2);
const PILL_BOTTOM: Rgba = Rgba::rgb(0xf8, 0xdd, 0xa6);
const AMBER: Rgba = Rgba::rgb(245, 158, 11);
const CORNER_INK: Rgba = Rgba::rgb(156, 163, 175);
const RING: Rgba = Rgba::rgba(214, 167, 86, 0.55);

/// Ring radius in pixels; icons sit slightly outside it.
const RING_RADIUS_PX: f32 = 56.0;
const ICON_RADIUS_PX: f32 = 66.0;
const RING_SCALES: [f32; 3] = [1.0, 1.18, 1.36];

/// Card face with a soft top-to-bottom blend and a rounded frame.
pub fn paint_frame(buf: &mut FrameBuffer, card: ClipRect) {
    let last = card.height.saturating_sub(1).max(1) as f32;
    for row in 0..card.height {
        let color = Rgba::lerp(FACE_TOP, FACE_BOTTOM, row as f32 / last);
        buf.fill_rect(ClipRect::new(card.x, card.y + row, card.width, 1), color, None);
    }
    buf.draw_border(card, BorderStyle::Rounded, Rgba::blend(FRAME, CARD_BACKGROUND), Attr::NONE, None);
}

/// Header pill with centered label.
pub fn paint_pill(buf: &mut FrameBuffer, area: ClipRect, text: &str) {
    buf.fill_rect(area, Rgba::lerp(PILL_TOP, PILL_BOTTOM, 0.5), None);
    buf.draw_text_centered(area.x, area.y, area.width, text, INK, None, Attr::BOLD, None);
}

/// Hairline that fades in from both ends.
pub fn paint_divider(buf: &mut FrameBuffer, area: ClipRect) {
    let length = area.width;
    buf.draw_hline_with(area.x, area.y, length, '─', None, |offset| {
        Rgba::lerp(CARD_BACKGROUND, GOLD, edge_fade(offset, length))
    });
}

/// Thicker footer rule: gold at the ends of the bright section, amber in the middle.
pub fn paint_footer_divider(buf: &mut FrameBuffer, area: ClipRect) {
    let length = area.width;
    buf.draw_hline_with(area.x, area.y, length, '━', None, |offset| {
        let t = edge_fade(offset, length);
        let accent = Rgba::lerp(GOLD, AMBER, t * 0.6);
        Rgba::lerp(CARD_BACKGROUND, accent, t)
    });
}

/// 0 at both ends, 1 in the middle.
fn edge_fade(offset: u16, length: u16) -> f32 {
    if length <= 1 {
        return 1.0;
    }
    let t = offset as f32 / (length - 1) as f32;
    1.0 - (2.0 * t - 1.0).abs()
}

pub fn paint_corner_label(buf: &mut FrameBuffer, area: ClipRect, text: &str) {
    buf.draw_text(area.x, area.y, text, CORNER_INK, None, Attr::BOLD, None);
}

pub fn paint_title(buf: &mut FrameBuffer, area: ClipRect, text: &str) {
    buf.draw_text(area.x, area.y, text, INK, None, Attr::BOLD, Some(&area));
}

/// Glyph over label, both centered.
pub fn paint_feature(buf: &mut FrameBuffer, area: ClipRect, feature: &FeatureConfig) {
    let glyph = format!(" {} ", feature.glyph);
    let badge_width = string_width(&glyph) as u16;
    let badge_x = area.x + area.width.saturating_sub(badge_width) / 2;
    buf.fill_rect(
        ClipRect::new(badge_x, area.y, badge_width, 1),
        Rgba::rgba(255, 255, 255, 0.85),
        None,
    );
    buf.draw_text(badge_x, area.y, &glyph, feature.color(), None, Attr::BOLD, None);
    buf.draw_text_centered(
        area.x,
        area.y.saturating_add(1),
        area.width,
        &feature.label,
        INK,
        None,
        Attr::BOLD,
        Some(&area),
    );
}

// =============================================================================
// Panel content
// =============================================================================

/// Icon ring plus call-to-action, painted inside the panel surface.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelContent {
    icons: Vec<String>,
    cta: String,
}

impl PanelContent {
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            icons: config.icons.clone(),
            cta: config.cta.clone(),
        }
    }

    /// Ring center and pixel-to-cell scale for `area`.
    fn ring_geometry(&self, area: ClipRect) -> (f32, f32, f32) {
        let cx = area.x as f32 + area.width as f32 / 2.0;
        let ring_rows = (area.height.saturating_sub(3)) as f32;
        let cy = area.y as f32 + ring_rows / 2.0;
        // Fit the widest element (icons) in the space above the CTA.
        let fit_x = (area.width as f32 / 2.0 - 2.0) / (ICON_RADIUS_PX / 8.0);
        let fit_y = (ring_rows / 2.0 - 0.5) / (ICON_RADIUS_PX / 16.0);
        let scale = fit_x.min(fit_y).clamp(0.0, 1.0);
        (cx, cy, scale)
    }

    /// Cell where icon `index` lands: evenly spaced clockwise from 3 o'clock.
    pub fn icon_cell(&self, area: ClipRect, index: usize) -> (u16, u16) {
        let (cx, cy, scale) = self.ring_geometry(area);
        let count = self.icons.len().max(1) as f32;
        let angle = index as f32 * 2.0 * PI / count;
        let x = cx + angle.cos() * ICON_RADIUS_PX * scale / 8.0;
        let y = cy + angle.sin() * ICON_RADIUS_PX * scale / 16.0;
        (x.round().max(0.0) as u16, y.round().max(0.0) as u16)
    }

    fn paint_rings(&self, buf: &mut FrameBuffer, area: ClipRect) {
        let (cx, cy, scale) = self.ring_geometry(area);
        for ring_scale in RING_SCALES {
            let rx = RING_RADIUS_PX * ring_scale * scale / 8.0;
            let ry = RING_RADIUS_PX * ring_scale * scale / 16.0;
            let steps = (rx * 8.0).max(12.0) as usize;
            for step in 0..steps {
                let angle = step as f32 * 2.0 * PI / steps as f32;
                let x = (cx + angle.cos() * rx).round();
                let y = (cy + angle.sin() * ry).round();
                if x < 0.0 || y < 0.0 {
                    continue;
                }
                let (x, y) = (x as u16, y as u16);
                if area.contains(x, y) && buf.get(x, y).is_some_and(|c| c.char == b' ' as u32) {
                    buf.draw_char(x, y, '·', Rgba::blend(RING, CARD_BACKGROUND), None, Attr::NONE, Some(&area));
                }
            }
        }
    }
}

impl SurfaceContent for PanelContent {
    fn paint(&self, buf: &mut FrameBuffer, area: ClipRect) {
        if area.width < 5 || area.height < 3 {
            return;
        }

        self.paint_rings(buf, area);

        for (index, glyph) in self.icons.iter().enumerate() {
            let (x, y) = self.icon_cell(area, index);
            let chip = format!(" {glyph} ");
            let chip_x = x.saturating_sub(1);
            let chip_width = string_width(&chip) as u16;
            buf.fill_rect(
                ClipRect::new(chip_x, y, chip_width, 1),
                Rgba::lerp(PILL_TOP, PILL_BOTTOM, 0.5),
                Some(&area),
            );
            buf.draw_text(chip_x, y, &chip, INK, None, Attr::BOLD, Some(&area));
        }

        let cta = format!("  {}  ", self.cta);
        let cta_width = (string_width(&cta) as u16).min(area.width);
        let cta_x = area.x + (area.width - cta_width) / 2;
        let cta_y = area.y + area.height - 1;
        buf.fill_rect(
            ClipRect::new(cta_x, cta_y, cta_width, 1),
            Rgba::lerp(PILL_TOP, PILL_BOTTOM, 0.5),
            Some(&area),
        );
        buf.draw_text(cta_x, cta_y, &cta, INK, None, Attr::BOLD, Some(&area));
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> PanelContent {
        PanelContent::new(&PanelConfig::default())
    }

    #[test]
    fn test_edge_fade() {
        assert_eq!(edge_fade(0, 11), 0.0);
        assert_eq!(edge_fade(5, 11), 1.0);
        assert_eq!(edge_fade(10, 11), 0.0);
        assert_eq!(edge_fade(0, 1), 1.0);
    }

    #[test]
    fn test_icons_are_spread_around_center() {
        let content = panel();
        let area = ClipRect::new(0, 0, 20, 11);
        let (gift_x, gift_y) = content.icon_cell(area, 0);
        let (offers_x, offers_y) = content.icon_cell(area, 1);
        let (discount_x, discount_y) = content.icon_cell(area, 2);

        // 0 degrees: right of center on the center row.
        assert!(gift_x > 10);
        // 120 degrees: lower left; 240 degrees: upper left.
        assert!(offers_x < 10 && offers_y > gift_y);
        assert!(discount_x < 10 && discount_y < gift_y);
        for (x, y) in [(gift_x, gift_y), (offers_x, offers_y), (discount_x, discount_y)] {
            assert!(area.contains(x, y), "({x}, {y})");
        }
    }

    #[test]
    fn test_panel_paints_icons_and_cta() {
        let content = panel();
        let mut buf = FrameBuffer::with_background(22, 13, CARD_BACKGROUND);
        let area = ClipRect::new(1, 1, 20, 11);
        content.paint(&mut buf, area);

        let text = buf.to_lines().join("\n");
        assert!(text.contains('❖'));
        assert!(text.contains('%'));
        assert!(buf.to_lines()[11].contains("More ›"));
        assert!(text.contains('·'));
    }

    #[test]
    fn test_tiny_panel_paints_nothing() {
        let mut buf = FrameBuffer::new(4, 2);
        panel().paint(&mut buf, ClipRect::new(0, 0, 4, 2));
        assert!(buf.to_lines().iter().all(|l| l.trim().is_empty()));
    }

    #[test]
    fn test_feature_badge() {
        let mut buf = FrameBuffer::new(10, 2);
        let feature = FeatureConfig::new("ϟ", "Speed", "#B45309");
        paint_feature(&mut buf, ClipRect::new(0, 0, 10, 2), &feature);
        let lines = buf.to_lines();
        assert!(lines[0].contains('ϟ'));
        assert_eq!(lines[1].trim(), "Speed");
        assert!(buf.cells().iter().any(|c| c.fg == Rgba::rgb(0xb4, 0x53, 0x09)));
    }

    #[test]
    fn test_frame_border() {
        let mut buf = FrameBuffer::new(6, 3);
        paint_frame(&mut buf, ClipRect::new(0, 0, 6, 3));
        assert_eq!(buf.to_lines()[0], "╭────╮");
    }
}
