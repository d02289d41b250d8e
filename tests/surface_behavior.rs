//! Surface behavior through the public API: interaction sequences, glow
//! tracking and the reduced-motion preference.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glow_cards::motion::MotionListener;
use glow_cards::surface::style::Transform;
use glow_cards::surface::ShadowTier;
use glow_cards::surface::state::replay;
use glow_cards::{
    ActivationKey, EventContext, InteractionState, MotionError, MotionQuery, MotionSource,
    NormalizedPointer, PointerGlowSurface, PointerKind, Rect, ReducedMotionObserver,
    SurfaceEvent, SurfaceKind, SurfaceProps, Unsubscribe, Variant, resolve_style,
};

fn bounds() -> Option<Rect> {
    Some(Rect::new(4.0, 2.0, 40.0, 10.0))
}

fn tile(props: SurfaceProps, motion: Option<&dyn MotionQuery>) -> PointerGlowSurface {
    let mut tile = PointerGlowSurface::tile(0, props);
    tile.mount(motion);
    tile.set_bounds(bounds());
    tile
}

fn counted(surface: &mut PointerGlowSurface) -> Rc<Cell<usize>> {
    let count = Rc::new(Cell::new(0));
    let count_clone = count.clone();
    surface.set_on_activate(Some(Rc::new(move |_| count_clone.set(count_clone.get() + 1))));
    count
}

#[test]
fn enter_then_leave_is_idle() {
    let mut surface = tile(SurfaceProps::titled("Speed", ""), None);
    surface.handle(&SurfaceEvent::PointerEnter);
    assert_eq!(surface.style().tier, ShadowTier::Hover);
    surface.handle(&SurfaceEvent::PointerLeave);
    assert_eq!(surface.state(), InteractionState::IDLE);
    assert_eq!(surface.style().transform, Transform::IDENTITY);
}

#[test]
fn leaving_while_pressed_clears_press() {
    let mut surface = tile(SurfaceProps::default(), None);
    surface.handle(&SurfaceEvent::PointerEnter);
    surface.handle(&SurfaceEvent::PointerDown(PointerKind::Mouse));
    assert_eq!(surface.style().tier, ShadowTier::Active);
    surface.handle(&SurfaceEvent::PointerLeave);
    assert!(!surface.state().pressed);
}

#[test]
fn corners_normalize_to_unit_square() {
    let mut surface = tile(SurfaceProps::default(), None);
    surface.handle(&SurfaceEvent::PointerMove { x: 4.0, y: 2.0 });
    assert_eq!(surface.glow_position(), NormalizedPointer::new(0.0, 0.0));
    surface.handle(&SurfaceEvent::PointerMove { x: 44.0, y: 12.0 });
    assert_eq!(surface.glow_position(), NormalizedPointer::new(1.0, 1.0));
}

#[test]
fn focused_enter_activates_once() {
    let mut surface = tile(SurfaceProps::default(), None);
    let count = counted(&mut surface);
    for event in [
        SurfaceEvent::Focus,
        SurfaceEvent::KeyDown(ActivationKey::Enter),
        SurfaceEvent::KeyUp(ActivationKey::Enter),
    ] {
        surface.handle(&event);
    }
    assert_eq!(count.get(), 1);
    assert!(!surface.state().pressed);
}

#[test]
fn keyboard_and_click_both_activate() {
    let mut surface = tile(SurfaceProps::default(), None);
    let count = counted(&mut surface);
    surface.handle(&SurfaceEvent::Focus);
    surface.handle(&SurfaceEvent::KeyDown(ActivationKey::Space));
    surface.handle(&SurfaceEvent::KeyUp(ActivationKey::Space));
    surface.handle(&SurfaceEvent::Click);
    assert_eq!(count.get(), 2);
}

#[test]
fn replay_matches_live_surface() {
    let events = [
        SurfaceEvent::PointerEnter,
        SurfaceEvent::PointerMove { x: 16.0, y: 9.0 },
        SurfaceEvent::PointerDown(PointerKind::Mouse),
        SurfaceEvent::PointerUp(PointerKind::Mouse),
        SurfaceEvent::PointerLeave,
    ];
    let (state, activations) = replay(
        InteractionState::IDLE,
        &events,
        EventContext { interactive: true, focused: false },
    );
    assert_eq!(state, InteractionState::IDLE);
    assert_eq!(activations, 0);
    assert_eq!(
        resolve_style(state, SurfaceKind::Tile, Variant::Dashed),
        resolve_style(InteractionState::IDLE, SurfaceKind::Tile, Variant::Dashed)
    );
}

#[test]
fn reduced_motion_freezes_glow_but_not_hover() {
    let source = MotionSource::new(false);
    let mut surface = tile(SurfaceProps::default(), Some(&source));
    surface.handle(&SurfaceEvent::PointerEnter);
    surface.handle(&SurfaceEvent::PointerMove { x: 14.0, y: 4.0 });
    let before = surface.glow().updates();

    source.set_reduced(true);
    for step in 0..20 {
        surface.handle(&SurfaceEvent::PointerMove { x: 5.0 + step as f32, y: 7.0 });
    }
    assert_eq!(surface.glow().updates(), before);
    assert!(surface.state().hovered);
    assert!(surface.glow_visible());
}

#[test]
fn panel_ignores_variant() {
    let hovered = InteractionState { hovered: true, pressed: false };
    assert_eq!(
        resolve_style(hovered, SurfaceKind::Panel, Variant::Solid),
        resolve_style(hovered, SurfaceKind::Panel, Variant::Dashed)
    );
}

/// Counts subscribe/unsubscribe calls.
#[derive(Default)]
struct Tally {
    subscribed: Rc<Cell<usize>>,
    released: Rc<Cell<usize>>,
    listeners: RefCell<Vec<MotionListener>>,
}

impl MotionQuery for Tally {
    fn matches(&self) -> Result<bool, MotionError> {
        Ok(false)
    }

    fn subscribe(&self, listener: MotionListener) -> Result<Unsubscribe, MotionError> {
        self.subscribed.set(self.subscribed.get() + 1);
        self.listeners.borrow_mut().push(listener);
        let released = self.released.clone();
        Ok(Box::new(move || {
            released.set(released.get() + 1);
            Ok(())
        }))
    }
}

#[test]
fn observer_releases_subscription_exactly_once() {
    let query = Tally::default();
    let mut observer = ReducedMotionObserver::mount(Some(&query));
    assert_eq!(query.subscribed.get(), 1);

    for listener in query.listeners.borrow().iter() {
        listener(true);
    }
    assert!(observer.reduced());

    observer.teardown();
    observer.teardown();
    drop(observer);
    assert_eq!(query.released.get(), 1);
}
