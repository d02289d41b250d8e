//! # glow-cards
//!
//! Decorative "service card" widgets for terminal UIs: tiles and panels that
//! lift on hover, sink on press and carry a radial glow that follows the
//! mouse.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! the live glow position and reduced-motion flag, and on taffy for card
//! layout.
//!
//! ## Architecture
//!
//! ```text
//! crossterm event → InputEvent → ServiceCard routing → SurfaceEvent
//!                 → transition(state, event) → resolve_style → FrameBuffer → DiffRenderer
//! ```
//!
//! Each [`PointerGlowSurface`] owns its interaction state and its own
//! [`ReducedMotionObserver`]; the card only translates raw input into surface
//! events and paints the static artwork around them.
//!
//! ## Modules
//!
//! - [`types`] - Colors, cells, rectangles
//! - [`surface`] - The surface, its state machine, style presets and glow
//! - [`motion`] - Reduced-motion query and observer
//! - [`card`] - Composition, layout and input routing
//! - [`renderer`] - Frame buffer and terminal output
//! - [`runtime`] - Full-screen event loop

pub mod card;
pub mod config;
pub mod error;
pub mod logger;
pub mod motion;
pub mod renderer;
pub mod runtime;
pub mod state;
pub mod surface;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use card::ServiceCard;
pub use card::decoration::PanelContent;
pub use config::{CardConfig, FeatureConfig, MotionConfig, PanelConfig, TileConfig};
pub use error::{CardError, MotionError, Result};

pub use motion::{
    EnvMotionQuery, MotionListener, MotionQuery, MotionSource, ReducedMotionObserver,
    UnavailableMotionQuery, Unsubscribe,
};

pub use renderer::{DiffRenderer, FrameBuffer};

pub use runtime::{RunOptions, run};

pub use state::{
    ActivationKey, FocusRing, HitGrid, InputEvent, KeyState, KeyboardEvent, Modifiers,
    MouseButton, PointerAction, PointerEvent, PointerKind,
};

pub use surface::{
    Activation, ActivationHandler, ActivationSource, Align, EventContext, EventOutcome,
    GlowLayer, InteractionState, NormalizedPointer, PointerGlowSurface, Role, StylePreset,
    SurfaceContent, SurfaceEvent, SurfaceId, SurfaceKind, SurfaceProps, Transition, Variant,
    normalize, resolve_style, transition,
};
