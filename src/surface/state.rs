//! Interaction state machine.
//!
//! `transition` is a pure function from the current state and one event to
//! the next state, plus what the surface should do about it (activate,
//! swallow the key's default action). Surfaces own one `InteractionState`
//! each and mutate it only through this function.

use crate::state::keyboard::ActivationKey;
use crate::state::mouse::PointerKind;

/// Hover and press flags of one surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub hovered: bool,
    pub pressed: bool,
}

impl InteractionState {
    pub const IDLE: Self = Self {
        hovered: false,
        pressed: false,
    };
}

/// Everything a surface reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceEvent {
    PointerEnter,
    PointerLeave,
    PointerDown(PointerKind),
    PointerUp(PointerKind),
    /// Pointer position in client coordinates.
    PointerMove { x: f32, y: f32 },
    KeyDown(ActivationKey),
    KeyUp(ActivationKey),
    Click,
    Focus,
    Blur,
}

/// Gates for keyboard handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventContext {
    /// An activation callback is installed.
    pub interactive: bool,
    pub focused: bool,
}

/// Result of feeding one event to [`transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: InteractionState,
    /// Invoke the activation callback once.
    pub activate: bool,
    /// The key event was consumed.
    pub prevent_default: bool,
}

impl Transition {
    fn to(state: InteractionState) -> Self {
        Self {
            state,
            activate: false,
            prevent_default: false,
        }
    }
}

/// Compute the next interaction state.
pub fn transition(state: InteractionState, event: &SurfaceEvent, ctx: EventContext) -> Transition {
    let keys_enabled = ctx.interactive && ctx.focused;

    match *event {
        SurfaceEvent::PointerEnter => Transition::to(InteractionState {
            hovered: true,
            ..state
        }),
        SurfaceEvent::PointerLeave => Transition::to(InteractionState::IDLE),
        // A mouse button can only go down over the surface.
        SurfaceEvent::PointerDown(PointerKind::Mouse) => Transition::to(InteractionState {
            hovered: true,
            pressed: true,
        }),
        SurfaceEvent::PointerDown(PointerKind::Touch) => Transition::to(InteractionState {
            pressed: true,
            ..state
        }),
        SurfaceEvent::PointerUp(_) => Transition::to(InteractionState {
            pressed: false,
            ..state
        }),
        SurfaceEvent::PointerMove { .. } | SurfaceEvent::Focus => Transition::to(state),
        SurfaceEvent::KeyDown(_) if keys_enabled => Transition {
            state: InteractionState {
                pressed: true,
                ..state
            },
            activate: false,
            prevent_default: true,
        },
        SurfaceEvent::KeyUp(_) if keys_enabled => Transition {
            state: InteractionState {
                pressed: false,
                ..state
            },
            activate: true,
            prevent_default: true,
        },
        SurfaceEvent::KeyDown(_) | SurfaceEvent::KeyUp(_) => Transition::to(state),
        SurfaceEvent::Click => Transition {
            state,
            activate: ctx.interactive,
            prevent_default: false,
        },
        SurfaceEvent::Blur => Transition::to(InteractionState {
            pressed: false,
            ..state
        }),
    }
}

/// Run a sequence of events from `start`, returning the final state and the
/// number of activations.
pub fn replay<'a>(
    start: InteractionState,
    events: impl IntoIterator<Item = &'a SurfaceEvent>,
    ctx: EventContext,
) -> (InteractionState, usize) {
    let mut ctx = ctx;
    events.into_iter().fold((start, 0), |(state, activations), event| {
        match event {
            SurfaceEvent::Focus => ctx.focused = true,
            SurfaceEvent::Blur => ctx.focused = false,
            _ => {}
        }
        let next = transition(state, event, ctx);
        (next.state, activations + usize::from(next.activate))
    })
}

// =============================================================================
// TESTS
// =============================================================================
