//! ServiceCard - the composed card
//!
//! Owns the surfaces (tiles first, then the panel), lays them out, and turns
//! raw terminal input into [`SurfaceEvent`]s:
//!
//! - pointer motion yields enter/leave pairs plus moves for the surface under
//!   the pointer;
//! - a press and release over the same surface with the same button is a
//!   click;
//! - Tab / Shift+Tab cycle focus, Space/Enter go to the focused surface.
//!
//! Terminals that cannot report key releases get a release synthesized right
//! after each activation key press.

pub mod decoration;
pub mod layout;

use log::{debug, trace};

use crate::config::CardConfig;
use crate::error::Result;
use crate::motion::MotionQuery;
use crate::renderer::FrameBuffer;
use crate::state::focus::{FocusChange, FocusRing};
use crate::state::input::InputEvent;
use crate::state::keyboard::{KeyState, KeyboardEvent};
use crate::state::mouse::{HitGrid, MouseButton, PointerAction, PointerEvent, PointerKind};
use crate::surface::{
    ActivationHandler, EventOutcome, PointerGlowSurface, SurfaceEvent, SurfaceId, SurfaceKind,
    SurfaceProps,
};
use crate::types::Rect;

use decoration::PanelContent;
use layout::{CardLayout, LayoutInput, compute_layout};

pub struct ServiceCard {
    config: CardConfig,
    surfaces: Vec<PointerGlowSurface>,
    layout: CardLayout,
    hit_grid: HitGrid,
    focus: FocusRing,
    hovered: Option<SurfaceId>,
    pressed: Option<(SurfaceId, MouseButton)>,
    synthesize_key_release: bool,
    viewport: (u16, u16),
}

impl ServiceCard {
    /// Build, mount and lay out the card for a `viewport` of (columns, rows).
    pub fn new(
        config: CardConfig,
        motion: Option<&dyn MotionQuery>,
        viewport: (u16, u16),
    ) -> Result<Self> {
        let mut surfaces: Vec<PointerGlowSurface> = config
            .tiles
            .iter()
            .enumerate()
            .map(|(id, tile)| PointerGlowSurface::tile(id, tile.to_props()))
            .collect();
        let panel_props = SurfaceProps::default().glow(config.panel.glow);
        surfaces.push(
            PointerGlowSurface::new(surfaces.len(), SurfaceKind::Panel, panel_props)
                .with_content(Box::new(PanelContent::new(&config.panel))),
        );
        for surface in &mut surfaces {
            surface.mount(motion);
        }

        let mut card = Self {
            focus: FocusRing::new(surfaces.len()),
            config,
            surfaces,
            layout: CardLayout::default(),
            hit_grid: HitGrid::new(viewport.0, viewport.1),
            hovered: None,
            pressed: None,
            synthesize_key_release: true,
            viewport,
        };
        card.relayout()?;
        Ok(card)
    }

    /// Install (or clear) the activation callback on every surface.
    pub fn set_on_activate(&mut self, handler: Option<ActivationHandler>) {
        for surface in &mut self.surfaces {
            surface.set_on_activate(handler.clone());
        }
    }

    /// Follow each activation key press with a release.
    ///
    /// Turn this off when the terminal reports key releases itself.
    pub fn set_synthesize_key_release(&mut self, synthesize: bool) {
        self.synthesize_key_release = synthesize;
    }

    pub fn synthesize_key_release(&self) -> bool {
        self.synthesize_key_release
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    pub fn resize(&mut self, width: u16, height: u16) -> Result<()> {
        self.viewport = (width, height);
        self.hit_grid.resize(width, height);
        self.relayout()
    }

    /// Recompute geometry, centering the card in the viewport.
    pub fn relayout(&mut self) -> Result<()> {
        let tile_heights: Vec<u16> = self
            .surfaces
            .iter()
            .filter(|surface| surface.kind() == SurfaceKind::Tile)
            .map(PointerGlowSurface::preferred_height)
            .collect();
        let input = LayoutInput {
            width: self.config.width,
            pill_text: &self.config.subtitle,
            corner_text: &self.config.corner_label,
            tile_heights: &tile_heights,
            feature_count: self.config.features.len(),
        };
        let layout = compute_layout(&input, (0, 0))?;
        let dx = self.viewport.0.saturating_sub(layout.card.width) / 2;
        let dy = self.viewport.1.saturating_sub(layout.card.height) / 2;
        self.layout = layout.translated(dx, dy);

        self.hit_grid.clear();
        for (surface, rect) in self.surfaces.iter_mut().zip(&self.layout.surfaces) {
            surface.set_bounds(Some(Rect::from(*rect)));
            self.hit_grid.fill_rect(rect.x, rect.y, rect.width, rect.height, surface.id());
        }
        debug!(
            "card laid out at ({}, {}) {}x{} in {}x{}",
            self.layout.card.x,
            self.layout.card.y,
            self.layout.card.width,
            self.layout.card.height,
            self.viewport.0,
            self.viewport.1
        );
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Input routing
    // -------------------------------------------------------------------------

    /// Route one input event. Returns true when something visible changed.
    pub fn handle_input(&mut self, event: &InputEvent) -> Result<bool> {
        match event {
            InputEvent::Pointer(pointer) => Ok(self.route_pointer(pointer)),
            InputEvent::Key(key) => Ok(self.route_key(key)),
            InputEvent::Resize(width, height) => {
                self.resize(*width, *height)?;
                Ok(true)
            }
            InputEvent::None => Ok(false),
        }
    }

    pub fn route_pointer(&mut self, event: &PointerEvent) -> bool {
        let hit = self.hit_grid.get(event.x, event.y);
        let mut changed = false;

        match event.action {
            PointerAction::Move | PointerAction::Drag => {
                if event.kind == PointerKind::Mouse {
                    changed |= self.update_hover(hit);
                }
                if let Some(id) = hit {
                    let moved = SurfaceEvent::PointerMove {
                        x: event.x as f32,
                        y: event.y as f32,
                    };
                    changed |= self.dispatch(id, &moved).glow_moved;
                }
            }
            PointerAction::Down => {
                if event.kind == PointerKind::Mouse {
                    changed |= self.update_hover(hit);
                }
                changed |= match hit {
                    Some(id) => self.focus_surface(id),
                    None => self.blur(),
                };
                if let Some(id) = hit {
                    changed |= self.dispatch(id, &SurfaceEvent::PointerDown(event.kind)).state_changed;
                    self.pressed = Some((id, event.button));
                } else {
                    self.pressed = None;
                }
            }
            PointerAction::Up => {
                let pressed = self.pressed.take();
                // A touch release goes to the surface the touch started on.
                let target = match (event.kind, pressed) {
                    (PointerKind::Touch, Some((id, _))) => Some(id),
                    _ => hit,
                };
                if let Some(id) = target {
                    changed |= self.dispatch(id, &SurfaceEvent::PointerUp(event.kind)).state_changed;
                }
                if let Some((id, button)) = pressed {
                    if hit == Some(id) && button == event.button {
                        changed |= self.dispatch(id, &SurfaceEvent::Click).activated;
                    }
                }
            }
        }
        changed
    }

    pub fn route_key(&mut self, event: &KeyboardEvent) -> bool {
        if event.key == "Tab" {
            if !event.is_down() {
                return false;
            }
            let previous = self.focus.focused();
            let next = if event.modifiers.shift {
                self.focus.focus_previous()
            } else {
                self.focus.focus_next()
            };
            if next == previous {
                return false;
            }
            self.apply_focus_change(FocusChange {
                blurred: previous,
                focused: next,
            });
            return true;
        }

        let (Some(key), Some(id)) = (event.activation_key(), self.focus.focused()) else {
            return false;
        };

        let mut changed = false;
        match event.state {
            KeyState::Press | KeyState::Repeat => {
                changed |= self.dispatch(id, &SurfaceEvent::KeyDown(key)).state_changed;
                if self.synthesize_key_release && event.state == KeyState::Press {
                    trace!("synthesized release of {:?}", key);
                    let up = self.dispatch(id, &SurfaceEvent::KeyUp(key));
                    changed |= up.state_changed || up.activated;
                }
            }
            KeyState::Release if !self.synthesize_key_release => {
                let up = self.dispatch(id, &SurfaceEvent::KeyUp(key));
                changed |= up.state_changed || up.activated;
            }
            KeyState::Release => {}
        }
        changed
    }

    fn dispatch(&mut self, id: SurfaceId, event: &SurfaceEvent) -> EventOutcome {
        match self.surfaces.get_mut(id) {
            Some(surface) => surface.handle(event),
            None => EventOutcome::default(),
        }
    }

    fn update_hover(&mut self, hit: Option<SurfaceId>) -> bool {
        if hit == self.hovered {
            return false;
        }
        if let Some(previous) = self.hovered {
            self.dispatch(previous, &SurfaceEvent::PointerLeave);
        }
        if let Some(next) = hit {
            self.dispatch(next, &SurfaceEvent::PointerEnter);
        }
        trace!("hover {:?} -> {:?}", self.hovered, hit);
        self.hovered = hit;
        true
    }

    fn focus_surface(&mut self, id: SurfaceId) -> bool {
        match self.focus.focus(id) {
            Some(change) => {
                self.apply_focus_change(change);
                true
            }
            None => false,
        }
    }

    fn blur(&mut self) -> bool {
        match self.focus.blur() {
            Some(change) => {
                self.apply_focus_change(change);
                true
            }
            None => false,
        }
    }

    fn apply_focus_change(&mut self, change: FocusChange) {
        if let Some(blurred) = change.blurred {
            self.dispatch(blurred, &SurfaceEvent::Blur);
        }
        if let Some(focused) = change.focused {
            self.dispatch(focused, &SurfaceEvent::Focus);
        }
        debug!("focus {:?} -> {:?}", change.blurred, change.focused);
    }

    // -------------------------------------------------------------------------
    // Painting
    // -------------------------------------------------------------------------

    pub fn paint(&self, buf: &mut FrameBuffer) {
        let layout = &self.layout;
        decoration::paint_frame(buf, layout.card);
        decoration::paint_pill(buf, layout.pill, &self.config.subtitle);
        decoration::paint_divider(buf, layout.divider);
        decoration::paint_corner_label(buf, layout.corner, &self.config.corner_label);
        decoration::paint_title(buf, layout.title, &self.config.title);

        for (surface, area) in self.surfaces.iter().zip(&layout.surfaces) {
            surface.paint(buf, *area);
        }

        decoration::paint_footer_divider(buf, layout.footer_divider);
        for (feature, area) in self.config.features.iter().zip(&layout.features) {
            decoration::paint_feature(buf, *area, feature);
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn layout(&self) -> &CardLayout {
        &self.layout
    }

    pub fn surfaces(&self) -> &[PointerGlowSurface] {
        &self.surfaces
    }

    pub fn surface(&self, id: SurfaceId) -> Option<&PointerGlowSurface> {
        self.surfaces.get(id)
    }

    pub fn panel(&self) -> Option<&PointerGlowSurface> {
        self.surfaces.last()
    }

    pub fn hovered(&self) -> Option<SurfaceId> {
        self.hovered
    }

    pub fn focused(&self) -> Option<SurfaceId> {
        self.focus.focused()
    }

    pub fn surface_at(&self, x: u16, y: u16) -> Option<SurfaceId> {
        self.hit_grid.get(x, y)
    }

    pub fn viewport(&self) -> (u16, u16) {
        self.viewport
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::MotionSource;
    use crate::state::keyboard::{ActivationKey, Modifiers};
    use crate::surface::{Activation, ActivationSource, InteractionState};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn card() -> ServiceCard {
        ServiceCard::new(CardConfig::default(), None, (80, 30)).unwrap()
    }

    fn recorder(card: &mut ServiceCard) -> Rc<RefCell<Vec<Activation>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        card.set_on_activate(Some(Rc::new(move |activation| seen_clone.borrow_mut().push(activation))));
        seen
    }

    /// A cell inside surface `id`.
    fn inside(card: &ServiceCard, id: SurfaceId) -> (u16, u16) {
        let rect = card.layout().surfaces[id];
        (rect.x + 2, rect.y + 1)
    }

    fn outside(card: &ServiceCard) -> (u16, u16) {
        (card.layout().card.x, card.layout().card.y)
    }

    #[test]
    fn test_surfaces_and_centering() {
        let card = card();
        assert_eq!(card.surfaces().len(), 4);
        assert_eq!(card.panel().map(|p| p.kind()), Some(SurfaceKind::Panel));
        let layout = card.layout();
        assert_eq!(layout.card.x, (80 - 64) / 2);
        assert!(card.surfaces().iter().all(|s| s.is_mounted() && s.bounds().is_some()));
    }

    #[test]
    fn test_hit_grid_matches_layout() {
        let card = card();
        for id in 0..4 {
            let (x, y) = inside(&card, id);
            assert_eq!(card.surface_at(x, y), Some(id));
        }
        let (x, y) = outside(&card);
        assert_eq!(card.surface_at(x, y), None);
    }

    #[test]
    fn test_hover_moves_between_surfaces() {
        let mut card = card();
        let (x0, y0) = inside(&card, 0);
        let (x1, y1) = inside(&card, 1);

        assert!(card.route_pointer(&PointerEvent::move_to(x0, y0)));
        assert_eq!(card.hovered(), Some(0));
        assert!(card.surfaces()[0].state().hovered);

        card.route_pointer(&PointerEvent::move_to(x1, y1));
        assert_eq!(card.hovered(), Some(1));
        assert_eq!(card.surfaces()[0].state(), InteractionState::IDLE);
        assert!(card.surfaces()[1].state().hovered);

        let (ox, oy) = outside(&card);
        card.route_pointer(&PointerEvent::move_to(ox, oy));
        assert_eq!(card.hovered(), None);
        assert_eq!(card.surfaces()[1].state(), InteractionState::IDLE);
    }

    #[test]
    fn test_move_publishes_glow_on_hit_surface() {
        let mut card = card();
        let rect = card.layout().surfaces[0];
        card.route_pointer(&PointerEvent::move_to(rect.x, rect.y));
        let pos = card.surfaces()[0].glow_position();
        assert_eq!((pos.x, pos.y), (0.0, 0.0));
        assert_eq!(card.surfaces()[1].glow().updates(), 0);
    }

    #[test]
    fn test_click_same_surface() {
        let mut card = card();
        let seen = recorder(&mut card);
        let (x, y) = inside(&card, 0);

        card.route_pointer(&PointerEvent::down(MouseButton::Left, x, y));
        assert!(card.surfaces()[0].state().pressed);
        assert_eq!(card.focused(), Some(0));
        card.route_pointer(&PointerEvent::up(MouseButton::Left, x, y));

        assert!(!card.surfaces()[0].state().pressed);
        assert!(card.surfaces()[0].state().hovered);
        assert_eq!(
            *seen.borrow(),
            vec![Activation { surface: 0, source: ActivationSource::Click }]
        );
    }

    #[test]
    fn test_release_elsewhere_is_not_a_click() {
        let mut card = card();
        let seen = recorder(&mut card);
        let (x0, y0) = inside(&card, 0);
        let (x1, y1) = inside(&card, 1);

        card.route_pointer(&PointerEvent::down(MouseButton::Left, x0, y0));
        card.route_pointer(&PointerEvent::new(PointerAction::Drag, MouseButton::Left, x1, y1));
        card.route_pointer(&PointerEvent::up(MouseButton::Left, x1, y1));

        assert!(seen.borrow().is_empty());
        assert_eq!(card.surfaces()[0].state(), InteractionState::IDLE);
    }

    #[test]
    fn test_touch_does_not_hover() {
        let mut card = card();
        let seen = recorder(&mut card);
        let (x, y) = inside(&card, 3);

        card.route_pointer(&PointerEvent::touch_start(x, y));
        let state = card.surfaces()[3].state();
        assert!(state.pressed && !state.hovered);
        assert_eq!(card.hovered(), None);

        card.route_pointer(&PointerEvent::touch_end(x, y));
        assert_eq!(card.surfaces()[3].state(), InteractionState::IDLE);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_down_on_empty_space_blurs() {
        let mut card = card();
        let (x, y) = inside(&card, 2);
        card.route_pointer(&PointerEvent::down(MouseButton::Left, x, y));
        assert!(card.surfaces()[2].is_focused());

        let (ox, oy) = outside(&card);
        card.route_pointer(&PointerEvent::down(MouseButton::Left, ox, oy));
        assert_eq!(card.focused(), None);
        assert!(!card.surfaces()[2].is_focused());
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut card = card();
        assert!(card.route_key(&KeyboardEvent::new("Tab")));
        assert_eq!(card.focused(), Some(0));
        card.route_key(&KeyboardEvent::new("Tab"));
        assert_eq!(card.focused(), Some(1));
        assert!(!card.surfaces()[0].is_focused());
        assert!(card.surfaces()[1].is_focused());

        card.route_key(&KeyboardEvent::with_modifiers("Tab", Modifiers::shift()));
        card.route_key(&KeyboardEvent::with_modifiers("Tab", Modifiers::shift()));
        assert_eq!(card.focused(), Some(3));
        assert!(!card.route_key(&KeyboardEvent::release("Tab")));
    }

    #[test]
    fn test_enter_with_synthesized_release() {
        let mut card = card();
        let seen = recorder(&mut card);
        card.route_key(&KeyboardEvent::new("Tab"));

        assert!(card.route_key(&KeyboardEvent::new("Enter")));
        assert!(!card.surfaces()[0].state().pressed);
        assert_eq!(
            *seen.borrow(),
            vec![Activation {
                surface: 0,
                source: ActivationSource::Keyboard(ActivationKey::Enter)
            }]
        );
    }

    #[test]
    fn test_space_with_reported_release() {
        let mut card = card();
        let seen = recorder(&mut card);
        card.set_synthesize_key_release(false);
        card.route_key(&KeyboardEvent::new("Tab"));

        card.route_key(&KeyboardEvent::new(" "));
        assert!(card.surfaces()[0].state().pressed);
        assert!(seen.borrow().is_empty());

        card.route_key(&KeyboardEvent::release(" "));
        assert!(!card.surfaces()[0].state().pressed);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_keys_without_focus_or_handler() {
        let mut card = card();
        assert!(!card.route_key(&KeyboardEvent::new("Enter")));

        card.route_key(&KeyboardEvent::new("Tab"));
        // No handler: the key is not consumed and nothing is pressed.
        assert!(!card.route_key(&KeyboardEvent::new("Enter")));
        assert!(!card.surfaces()[0].state().pressed);
    }

    #[test]
    fn test_resize_recenters() {
        let mut card = card();
        let before = card.layout().surfaces[0];
        assert!(card.handle_input(&InputEvent::Resize(100, 40)).unwrap());
        let after = card.layout().surfaces[0];
        assert_eq!(after.x, before.x + 10);
        assert_eq!(card.viewport(), (100, 40));
        let (x, y) = inside(&card, 0);
        assert_eq!(card.surface_at(x, y), Some(0));
    }

    #[test]
    fn test_reduced_motion_shared_by_surfaces() {
        let source = MotionSource::new(false);
        let mut card = ServiceCard::new(CardConfig::default(), Some(&source), (80, 30)).unwrap();
        assert_eq!(source.listener_count(), 4);

        source.set_reduced(true);
        assert!(card.surfaces().iter().all(PointerGlowSurface::reduced_motion));
        let (x, y) = inside(&card, 0);
        card.route_pointer(&PointerEvent::move_to(x, y));
        assert_eq!(card.surfaces()[0].glow().updates(), 0);

        drop(card);
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn test_paint_whole_card() {
        let card = card();
        let mut buf = FrameBuffer::new(80, 30);
        card.paint(&mut buf);
        let text = buf.to_lines().join("\n");
        for expected in ["Premium", "CARD A", "E-Cards", "Multiple categories:", "Varied bundles", "More ›", "Security", "Quality"] {
            assert!(text.contains(expected), "missing {expected:?}");
        }
        assert!(!text.contains("Varied bundles:"));
    }
}
