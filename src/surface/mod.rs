//! PointerGlowSurface - hover/press/glow container
//!
//! A surface wraps opaque content (tile text or any [`SurfaceContent`]) and
//! gives it pointer feedback:
//!
//! - hover lifts and enlarges it, press sinks it ([`style::resolve_style`]);
//! - the pointer position drives a radial glow ([`glow::GlowLayer`]);
//! - Space/Enter and clicks invoke an optional activation callback.
//!
//! Each surface owns its [`InteractionState`] and its own
//! [`ReducedMotionObserver`]. While reduced motion is requested the glow
//! stays where it was last published; hover and press keep working.
//!
//! # Example
//!
//! ```ignore
//! use glow_cards::surface::{PointerGlowSurface, SurfaceProps, SurfaceEvent};
//! use glow_cards::types::Rect;
//!
//! let mut tile = PointerGlowSurface::tile(0, SurfaceProps::titled("Speed", "Instant"));
//! tile.mount(None);
//! tile.set_bounds(Some(Rect::new(0.0, 0.0, 20.0, 4.0)));
//! tile.handle(&SurfaceEvent::PointerEnter);
//! tile.handle(&SurfaceEvent::PointerMove { x: 5.0, y: 1.0 });
//! assert!(tile.state().hovered);
//! ```

pub mod glow;
pub mod state;
pub mod style;

use std::fmt;
use std::rc::Rc;

use log::{debug, trace};

use crate::motion::{MotionQuery, ReducedMotionObserver};
use crate::renderer::FrameBuffer;
use crate::state::keyboard::ActivationKey;
use crate::types::{Attr, ClipRect, Rect, Rgba};

pub use glow::{GlowLayer, NormalizedPointer, normalize};
pub use state::{EventContext, InteractionState, SurfaceEvent, Transition, transition};
pub use style::{
    Align, Palette, ShadowLayer, ShadowTier, StylePreset, SurfaceKind, Transform, Variant,
    resolve_style,
};

// =============================================================================
// TYPES
// =============================================================================

/// Index of a surface within its card.
pub type SurfaceId = usize;

/// What triggered an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationSource {
    Click,
    Keyboard(ActivationKey),
}

/// Passed to the activation callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    pub surface: SurfaceId,
    pub source: ActivationSource,
}

/// Activation callback. Its presence makes a surface a button.
pub type ActivationHandler = Rc<dyn Fn(Activation)>;

/// Accessible role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Button,
    Group,
}

/// Content painted inside a surface's border.
///
/// The surface paints background, glow and border; content draws over the
/// existing background and should not fill it.
pub trait SurfaceContent {
    fn paint(&self, buf: &mut FrameBuffer, area: ClipRect);
}

/// Static inputs of a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceProps {
    pub title: String,
    pub value: String,
    pub variant: Variant,
    pub align: Align,
    /// Enables the glow layer.
    pub glow: bool,
    /// Append `:` to the title.
    pub show_colon: bool,
}

impl Default for SurfaceProps {
    fn default() -> Self {
        Self {
            title: String::new(),
            value: String::new(),
            variant: Variant::Solid,
            align: Align::Start,
            glow: true,
            show_colon: true,
        }
    }
}

impl SurfaceProps {
    pub fn titled(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn glow(mut self, glow: bool) -> Self {
        self.glow = glow;
        self
    }

    pub fn show_colon(mut self, show_colon: bool) -> Self {
        self.show_colon = show_colon;
        self
    }

    /// Text lines a tile renders, empty strings omitted.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(2);
        if !self.title.is_empty() {
            let colon = if self.show_colon { ":" } else { "" };
            lines.push(format!("{}{colon}", self.title));
        }
        if !self.value.is_empty() {
            lines.push(self.value.clone());
        }
        lines
    }
}

/// What a surface did with one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    pub state_changed: bool,
    pub activated: bool,
    pub prevent_default: bool,
    pub glow_moved: bool,
}

// =============================================================================
// SURFACE
// =============================================================================

pub struct PointerGlowSurface {
    id: SurfaceId,
    kind: SurfaceKind,
    props: SurfaceProps,
    on_activate: Option<ActivationHandler>,
    content: Option<Box<dyn SurfaceContent>>,
    state: InteractionState,
    focused: bool,
    bounds: Option<Rect>,
    observer: Option<ReducedMotionObserver>,
    glow: GlowLayer,
}

impl fmt::Debug for PointerGlowSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerGlowSurface")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("props", &self.props)
            .field("state", &self.state)
            .field("focused", &self.focused)
            .field("bounds", &self.bounds)
            .field("interactive", &self.is_interactive())
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

impl PointerGlowSurface {
    pub fn new(id: SurfaceId, kind: SurfaceKind, props: SurfaceProps) -> Self {
        Self {
            id,
            kind,
            props,
            on_activate: None,
            content: None,
            state: InteractionState::IDLE,
            focused: false,
            bounds: None,
            observer: None,
            glow: GlowLayer::new(kind),
        }
    }

    /// A tile rendering `props.title` / `props.value`.
    pub fn tile(id: SurfaceId, props: SurfaceProps) -> Self {
        Self::new(id, SurfaceKind::Tile, props)
    }

    /// A panel wrapping arbitrary content.
    pub fn panel(id: SurfaceId, content: Box<dyn SurfaceContent>) -> Self {
        let mut panel = Self::new(id, SurfaceKind::Panel, SurfaceProps::default());
        panel.content = Some(content);
        panel
    }

    pub fn with_on_activate(mut self, handler: ActivationHandler) -> Self {
        self.on_activate = Some(handler);
        self
    }

    pub fn with_content(mut self, content: Box<dyn SurfaceContent>) -> Self {
        self.content = Some(content);
        self
    }

    pub fn set_on_activate(&mut self, handler: Option<ActivationHandler>) {
        self.on_activate = handler;
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Start observing the reduced-motion preference.
    ///
    /// Remounting tears down the previous observer first.
    pub fn mount(&mut self, motion: Option<&dyn MotionQuery>) {
        if let Some(mut previous) = self.observer.take() {
            previous.teardown();
        }
        let observer = ReducedMotionObserver::mount(motion);
        debug!(
            "surface {} mounted ({:?}, reduced motion: {})",
            self.id,
            self.kind,
            observer.reduced()
        );
        self.observer = Some(observer);
    }

    /// Release the observer and forget geometry and interaction state.
    pub fn unmount(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            observer.teardown();
            debug!("surface {} unmounted", self.id);
        }
        self.bounds = None;
        self.state = InteractionState::IDLE;
        self.focused = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.observer.is_some()
    }

    /// Current laid-out rectangle in client coordinates.
    pub fn set_bounds(&mut self, bounds: Option<Rect>) {
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Feed one event.
    pub fn handle(&mut self, event: &SurfaceEvent) -> EventOutcome {
        match event {
            SurfaceEvent::Focus => self.focused = true,
            SurfaceEvent::Blur => self.focused = false,
            _ => {}
        }

        let ctx = EventContext {
            interactive: self.is_interactive(),
            focused: self.focused,
        };
        let next = transition(self.state, event, ctx);

        let mut outcome = EventOutcome {
            state_changed: next.state != self.state,
            activated: false,
            prevent_default: next.prevent_default,
            glow_moved: false,
        };
        if outcome.state_changed {
            trace!("surface {}: {:?} -> {:?} on {:?}", self.id, self.state, next.state, event);
        }
        self.state = next.state;

        if let SurfaceEvent::PointerMove { x, y } = *event {
            outcome.glow_moved = self.update_glow(x, y);
        }

        if next.activate {
            let source = match *event {
                SurfaceEvent::KeyUp(key) => ActivationSource::Keyboard(key),
                _ => ActivationSource::Click,
            };
            outcome.activated = self.activate(source);
        }

        outcome
    }

    fn update_glow(&mut self, x: f32, y: f32) -> bool {
        if !self.props.glow || !self.is_mounted() || self.reduced_motion() {
            return false;
        }
        // No readable geometry: skip silently.
        let Some(pointer) = normalize(x, y, self.bounds) else {
            return false;
        };
        self.glow.publish(pointer);
        true
    }

    fn activate(&self, source: ActivationSource) -> bool {
        let Some(handler) = self.on_activate.clone() else {
            return false;
        };
        debug!("surface {} activated by {:?}", self.id, source);
        handler(Activation {
            surface: self.id,
            source,
        });
        true
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    pub fn props(&self) -> &SurfaceProps {
        &self.props
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_interactive(&self) -> bool {
        self.on_activate.is_some()
    }

    /// Every surface takes keyboard focus.
    pub fn is_focusable(&self) -> bool {
        true
    }

    /// False when unmounted or when the host has no preference.
    pub fn reduced_motion(&self) -> bool {
        self.observer.as_ref().is_some_and(ReducedMotionObserver::reduced)
    }

    pub fn style(&self) -> StylePreset {
        resolve_style(self.state, self.kind, self.props.variant)
    }

    pub fn glow(&self) -> &GlowLayer {
        &self.glow
    }

    pub fn glow_position(&self) -> NormalizedPointer {
        self.glow.position()
    }

    /// The glow shows only while hovered.
    pub fn glow_visible(&self) -> bool {
        self.props.glow && self.state.hovered
    }

    pub fn role(&self) -> Role {
        if self.is_interactive() {
            Role::Button
        } else {
            Role::Group
        }
    }

    pub fn label(&self) -> String {
        match (self.kind, self.props.title.is_empty()) {
            (SurfaceKind::Tile, false) => format!("Tile: {}", self.props.title),
            (SurfaceKind::Tile, true) => "Information tile".to_string(),
            (SurfaceKind::Panel, false) => format!("Panel: {}", self.props.title),
            (SurfaceKind::Panel, true) => "Interactive panel".to_string(),
        }
    }

    /// Rows a tile needs: its text lines plus the border.
    pub fn preferred_height(&self) -> u16 {
        let lines = self.props.lines().len().max(1) as u16;
        lines + 2
    }

    // -------------------------------------------------------------------------
    // Painting
    // -------------------------------------------------------------------------

    /// Paint into `area`. The shadow strip extends below it.
    pub fn paint(&self, buf: &mut FrameBuffer, area: ClipRect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let preset = self.style();
        let palette = style::palette(self.kind, self.props.variant);

        self.paint_shadow(buf, area, &preset);
        paint_body(buf, area, &palette);

        if self.glow_visible() {
            self.glow.paint(buf, area, None);
        }

        let inner = area.inset(1);
        self.paint_insets(buf, inner, &preset);

        match (&self.content, self.kind) {
            (Some(content), _) => content.paint(buf, inner),
            (None, SurfaceKind::Tile) => self.paint_tile_text(buf, inner, &preset, &palette),
            (None, SurfaceKind::Panel) => {}
        }

        if preset.transform.scale < 1.0 {
            buf.add_attrs(inner, Attr::DIM, None);
        }

        let border = if preset.transform.is_lifted() {
            style::GOLD
        } else {
            Rgba::blend(palette.border, style::CARD_BACKGROUND)
        };
        let border_attrs = if self.focused { Attr::BOLD } else { Attr::NONE };
        buf.draw_border(area, palette.border_style, border, border_attrs, None);
    }

    fn paint_shadow(&self, buf: &mut FrameBuffer, area: ClipRect, preset: &StylePreset) {
        let below = area.y.saturating_add(area.height);
        for layer in preset.shadow.iter().filter(|layer| !layer.inset) {
            for row in 0..style::shadow_rows(layer) {
                let strip = ClipRect::new(
                    area.x.saturating_add(1),
                    below.saturating_add(row),
                    area.width.saturating_sub(1),
                    1,
                );
                buf.tint_rect(strip, layer.color.fade(1.0 / (row + 1) as f32), None);
            }
        }
    }

    fn paint_insets(&self, buf: &mut FrameBuffer, inner: ClipRect, preset: &StylePreset) {
        if inner.height == 0 {
            return;
        }
        let top_row = ClipRect::new(inner.x, inner.y, inner.width, 1);
        for layer in preset.shadow.iter().filter(|layer| layer.inset) {
            buf.tint_rect(top_row, layer.color, None);
        }
        if self.kind == SurfaceKind::Panel {
            buf.tint_rect(top_row, style::PANEL_HIGHLIGHT, None);
        }
    }

    fn paint_tile_text(&self, buf: &mut FrameBuffer, inner: ClipRect, preset: &StylePreset, palette: &Palette) {
        let title_attrs = if preset.transform.scale > 1.0 {
            Attr::BOLD
        } else {
            Attr::NONE
        };
        let has_title = !self.props.title.is_empty();

        for (i, line) in self.props.lines().iter().enumerate() {
            let Some(y) = inner.y.checked_add(i as u16).filter(|y| *y < inner.y.saturating_add(inner.height)) else {
                break;
            };
            let (fg, attrs) = if i == 0 && has_title {
                (palette.ink, title_attrs)
            } else {
                (palette.muted, Attr::NONE)
            };
            match self.props.align {
                Align::Start => {
                    buf.draw_text(inner.x.saturating_add(1), y, line, fg, None, attrs, Some(&inner));
                }
                Align::Center => {
                    buf.draw_text_centered(inner.x, y, inner.width, line, fg, None, attrs, Some(&inner));
                }
            }
        }
    }
}

impl Drop for PointerGlowSurface {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Background rows, blended top to bottom.
fn paint_body(buf: &mut FrameBuffer, area: ClipRect, palette: &Palette) {
    let last = area.height.saturating_sub(1).max(1) as f32;
    for row in 0..area.height {
        let color = Rgba::lerp(palette.background_top, palette.background_bottom, row as f32 / last);
        buf.fill_rect(ClipRect::new(area.x, area.y + row, area.width, 1), color, None);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{MotionSource, UnavailableMotionQuery};
    use crate::state::mouse::PointerKind;
    use std::cell::{Cell, RefCell};

    fn bounds() -> Option<Rect> {
        Some(Rect::new(10.0, 4.0, 20.0, 4.0))
    }

    fn mounted_tile(motion: Option<&dyn MotionQuery>) -> PointerGlowSurface {
        let mut tile = PointerGlowSurface::tile(0, SurfaceProps::titled("Global compatibility", "Platforms"));
        tile.mount(motion);
        tile.set_bounds(bounds());
        tile
    }

    fn counter() -> (ActivationHandler, Rc<Cell<usize>>) {
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let handler: ActivationHandler = Rc::new(move |_| count_clone.set(count_clone.get() + 1));
        (handler, count)
    }

    #[test]
    fn test_move_publishes_normalized_pointer() {
        let mut tile = mounted_tile(None);
        let outcome = tile.handle(&SurfaceEvent::PointerMove { x: 10.0, y: 4.0 });
        assert!(outcome.glow_moved);
        assert_eq!(tile.glow_position(), NormalizedPointer::new(0.0, 0.0));

        tile.handle(&SurfaceEvent::PointerMove { x: 30.0, y: 8.0 });
        assert_eq!(tile.glow_position(), NormalizedPointer::new(1.0, 1.0));
    }

    #[test]
    fn test_move_without_bounds_is_noop() {
        let mut tile = mounted_tile(None);
        tile.set_bounds(None);
        let outcome = tile.handle(&SurfaceEvent::PointerMove { x: 1.0, y: 1.0 });
        assert!(!outcome.glow_moved);
        assert_eq!(tile.glow_position(), NormalizedPointer::CENTER);

        tile.set_bounds(Some(Rect::new(0.0, 0.0, 0.0, 0.0)));
        assert!(!tile.handle(&SurfaceEvent::PointerMove { x: 1.0, y: 1.0 }).glow_moved);
    }

    #[test]
    fn test_move_before_mount_is_noop() {
        let mut tile = PointerGlowSurface::tile(0, SurfaceProps::default());
        tile.set_bounds(bounds());
        assert!(!tile.handle(&SurfaceEvent::PointerMove { x: 12.0, y: 5.0 }).glow_moved);
    }

    #[test]
    fn test_glow_disabled() {
        let mut panel = PointerGlowSurface::new(1, SurfaceKind::Panel, SurfaceProps::default().glow(false));
        panel.mount(None);
        panel.set_bounds(bounds());
        panel.handle(&SurfaceEvent::PointerEnter);
        assert!(!panel.handle(&SurfaceEvent::PointerMove { x: 12.0, y: 5.0 }).glow_moved);
        assert!(!panel.glow_visible());
    }

    #[test]
    fn test_reduced_at_mount_blocks_glow() {
        let source = MotionSource::new(true);
        let mut tile = mounted_tile(Some(&source));
        for i in 0..50 {
            tile.handle(&SurfaceEvent::PointerMove { x: 10.0 + i as f32 * 0.3, y: 5.0 });
        }
        assert_eq!(tile.glow().updates(), 0);
        assert_eq!(tile.glow_position(), NormalizedPointer::CENTER);
    }

    #[test]
    fn test_reduced_after_mount_freezes_glow() {
        let source = MotionSource::new(false);
        let mut tile = mounted_tile(Some(&source));
        tile.handle(&SurfaceEvent::PointerMove { x: 15.0, y: 5.0 });
        let frozen = tile.glow_position();

        source.set_reduced(true);
        tile.handle(&SurfaceEvent::PointerMove { x: 25.0, y: 7.0 });
        assert_eq!(tile.glow_position(), frozen);

        // Hover and press still work.
        tile.handle(&SurfaceEvent::PointerEnter);
        tile.handle(&SurfaceEvent::PointerDown(PointerKind::Mouse));
        assert!(tile.state().pressed);

        source.set_reduced(false);
        tile.handle(&SurfaceEvent::PointerMove { x: 25.0, y: 7.0 });
        assert_ne!(tile.glow_position(), frozen);
    }

    #[test]
    fn test_unavailable_motion_allows_glow() {
        let query = UnavailableMotionQuery;
        let mut tile = mounted_tile(Some(&query));
        assert!(!tile.reduced_motion());
        assert!(tile.handle(&SurfaceEvent::PointerMove { x: 12.0, y: 5.0 }).glow_moved);
    }

    #[test]
    fn test_focus_enter_activates_once() {
        let (handler, count) = counter();
        let mut tile = mounted_tile(None).with_on_activate(handler);
        tile.handle(&SurfaceEvent::Focus);
        let down = tile.handle(&SurfaceEvent::KeyDown(ActivationKey::Enter));
        assert!(down.prevent_default);
        assert!(tile.state().pressed);

        let up = tile.handle(&SurfaceEvent::KeyUp(ActivationKey::Enter));
        assert!(up.activated);
        assert_eq!(count.get(), 1);
        assert!(!tile.state().pressed);
    }

    #[test]
    fn test_keys_need_focus() {
        let (handler, count) = counter();
        let mut tile = mounted_tile(None).with_on_activate(handler);
        tile.handle(&SurfaceEvent::KeyDown(ActivationKey::Space));
        tile.handle(&SurfaceEvent::KeyUp(ActivationKey::Space));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_activation_reports_source() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        let mut tile = mounted_tile(None)
            .with_on_activate(Rc::new(move |activation| seen_clone.borrow_mut().push(activation)));
        tile.handle(&SurfaceEvent::Click);
        tile.handle(&SurfaceEvent::Focus);
        tile.handle(&SurfaceEvent::KeyUp(ActivationKey::Space));

        assert_eq!(
            *seen.borrow(),
            vec![
                Activation { surface: 0, source: ActivationSource::Click },
                Activation { surface: 0, source: ActivationSource::Keyboard(ActivationKey::Space) },
            ]
        );
    }

    #[test]
    fn test_dashed_scenario() {
        let (handler, count) = counter();
        let props = SurfaceProps::titled("Varied bundles", "")
            .variant(Variant::Dashed)
            .align(Align::Center)
            .show_colon(false);
        let mut tile = PointerGlowSurface::tile(2, props);
        tile.mount(None);
        tile.set_bounds(bounds());
        // The handler is installed but no click is dispatched.
        tile.set_on_activate(Some(handler));

        tile.handle(&SurfaceEvent::PointerEnter);
        tile.handle(&SurfaceEvent::PointerMove { x: 16.0, y: 6.8 });
        tile.handle(&SurfaceEvent::PointerDown(PointerKind::Mouse));
        tile.handle(&SurfaceEvent::PointerUp(PointerKind::Mouse));
        tile.handle(&SurfaceEvent::PointerLeave);

        assert_eq!(tile.state(), InteractionState::IDLE);
        let style = tile.style();
        assert_eq!(style.tier, ShadowTier::Base);
        assert_eq!(style, resolve_style(InteractionState::IDLE, SurfaceKind::Tile, Variant::Dashed));
        assert_eq!(count.get(), 0);

        let pos = tile.glow_position();
        assert!((pos.x - 0.3).abs() < 1e-5 && (pos.y - 0.7).abs() < 1e-5);
    }

    #[test]
    fn test_role_and_label() {
        let mut tile = PointerGlowSurface::tile(0, SurfaceProps::titled("Speed", ""));
        assert_eq!(tile.role(), Role::Group);
        assert_eq!(tile.label(), "Tile: Speed");
        assert!(tile.is_focusable());

        let (handler, _) = counter();
        tile.set_on_activate(Some(handler));
        assert_eq!(tile.role(), Role::Button);

        let anonymous = PointerGlowSurface::tile(1, SurfaceProps::default());
        assert_eq!(anonymous.label(), "Information tile");

        let panel = PointerGlowSurface::new(2, SurfaceKind::Panel, SurfaceProps::default());
        assert_eq!(panel.label(), "Interactive panel");
    }

    #[test]
    fn test_unmount_releases_observer() {
        let source = MotionSource::new(false);
        let mut tile = mounted_tile(Some(&source));
        assert_eq!(source.listener_count(), 1);

        tile.mount(Some(&source));
        assert_eq!(source.listener_count(), 1);

        tile.unmount();
        assert_eq!(source.listener_count(), 0);
        assert!(tile.bounds().is_none());

        let another = mounted_tile(Some(&source));
        assert_eq!(source.listener_count(), 1);
        drop(another);
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn test_lines() {
        assert_eq!(SurfaceProps::titled("A", "B").lines(), vec!["A:", "B"]);
        assert_eq!(SurfaceProps::titled("A", "").show_colon(false).lines(), vec!["A"]);
        assert_eq!(SurfaceProps::titled("", "B").lines(), vec!["B"]);
    }

    #[test]
    fn test_paint_tile() {
        let mut buf = FrameBuffer::with_background(24, 8, style::CARD_BACKGROUND);
        let mut tile = PointerGlowSurface::tile(0, SurfaceProps::titled("Speed", "Instant"));
        tile.mount(None);
        let area = ClipRect::new(0, 0, 20, 4);
        tile.paint(&mut buf, area);

        let lines = buf.to_lines();
        assert!(lines[0].starts_with('╭'));
        assert!(lines[1].contains("Speed:"));
        assert!(lines[2].contains("Instant"));
        assert!(lines[3].starts_with('╰'));

        // Shadow strip below the tile.
        let below = buf.get(5, 4).map(|c| c.bg).unwrap_or_default();
        assert_ne!(below, style::CARD_BACKGROUND);
    }

    #[test]
    fn test_paint_hover_bolds_title_and_press_dims() {
        let area = ClipRect::new(0, 0, 20, 4);
        let mut tile = PointerGlowSurface::tile(0, SurfaceProps::titled("Speed", "Instant"));
        tile.mount(None);

        tile.handle(&SurfaceEvent::PointerEnter);
        let mut buf = FrameBuffer::new(24, 8);
        tile.paint(&mut buf, area);
        assert!(buf.get(2, 1).is_some_and(|c| c.attrs.contains(Attr::BOLD)));
        assert_eq!(buf.get(0, 0).map(|c| c.fg), Some(style::GOLD));

        tile.handle(&SurfaceEvent::PointerDown(PointerKind::Mouse));
        let mut buf = FrameBuffer::new(24, 8);
        tile.paint(&mut buf, area);
        assert!(buf.get(2, 2).is_some_and(|c| c.attrs.contains(Attr::DIM)));
    }
}
