//! Reduced-motion preference.
//!
//! The preference is an injectable capability: a [`MotionQuery`] answers
//! "is reduced motion requested?" and accepts change listeners. Each
//! surface mounts its own [`ReducedMotionObserver`] over a shared query and
//! reads a live boolean from it.
//!
//! Two stock queries are provided:
//!
//! - [`MotionSource`] - an in-process switch, flipped by the host (a key
//!   binding, a settings screen) or by tests;
//! - [`EnvMotionQuery`] - reads an environment variable, re-read on
//!   [`EnvMotionQuery::refresh`].
//!
//! A host with no such signal mounts observers with `None`; they report
//! "motion allowed" and never subscribe.
//!
//! # Example
//!
//! ```ignore
//! use glow_cards::motion::{MotionSource, ReducedMotionObserver};
//!
//! let source = MotionSource::new(false);
//! let observer = ReducedMotionObserver::mount(Some(&source));
//! source.set_reduced(true);
//! assert!(observer.reduced());
//! drop(observer); // unsubscribes
//! assert_eq!(source.listener_count(), 0);
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, trace, warn};
use spark_signals::{Signal, signal};

use crate::error::MotionError;

/// Default environment variable read by [`EnvMotionQuery`].
pub const DEFAULT_MOTION_ENV_VAR: &str = "GLOW_CARDS_REDUCED_MOTION";

/// Called with the new preference whenever it changes.
pub type MotionListener = Rc<dyn Fn(bool)>;

/// Releases a subscription. Call at most once.
pub type Unsubscribe = Box<dyn FnOnce() -> Result<(), MotionError>>;

/// Source of the "prefers reduced motion" signal.
pub trait MotionQuery {
    /// Current preference. `Err(Unavailable)` when the host has no signal.
    fn matches(&self) -> Result<bool, MotionError>;

    /// Register a change listener.
    fn subscribe(&self, listener: MotionListener) -> Result<Unsubscribe, MotionError>;
}

// =============================================================================
// MotionSource - in-process switch
// =============================================================================

struct SourceInner {
    reduced: bool,
    listeners: Vec<(usize, MotionListener)>,
    next_id: usize,
}

/// Shared, host-controlled reduced-motion switch.
///
/// Clones share the same state. Listeners fire only when the value changes.
#[derive(Clone)]
pub struct MotionSource {
    inner: Rc<RefCell<SourceInner>>,
}

impl Default for MotionSource {
    fn default() -> Self {
        Self::new(false)
    }
}

impl MotionSource {
    pub fn new(reduced: bool) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SourceInner {
                reduced,
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    pub fn reduced(&self) -> bool {
        self.inner.borrow().reduced
    }

    /// Set the preference and notify listeners if it changed.
    pub fn set_reduced(&self, reduced: bool) {
        let listeners: Vec<MotionListener> = {
            let mut inner = self.inner.borrow_mut();
            if inner.reduced == reduced {
                return;
            }
            inner.reduced = reduced;
            inner.listeners.iter().map(|(_, l)| l.clone()).collect()
        };

        debug!("reduced motion -> {reduced}, notifying {} listener(s)", listeners.len());
        // Notify outside the borrow so listeners may query the source.
        for listener in listeners {
            listener(reduced);
        }
    }

    /// Flip the preference. Returns the new value.
    pub fn toggle(&self) -> bool {
        let next = !self.reduced();
        self.set_reduced(next);
        next
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl MotionQuery for MotionSource {
    fn matches(&self) -> Result<bool, MotionError> {
        Ok(self.reduced())
    }

    fn subscribe(&self, listener: MotionListener) -> Result<Unsubscribe, MotionError> {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, listener));
            id
        };

        let weak: Weak<RefCell<SourceInner>> = Rc::downgrade(&self.inner);
        Ok(Box::new(move || {
            // Source already gone: nothing left to release.
            let Some(inner) = weak.upgrade() else {
                return Ok(());
            };
            let mut inner = inner.borrow_mut();
            let before = inner.listeners.len();
            inner.listeners.retain(|(listener_id, _)| *listener_id != id);
            if inner.listeners.len() == before {
                return Err(MotionError::Unsubscribe(format!("listener {id} is not registered")));
            }
            Ok(())
        }))
    }
}

// =============================================================================
// EnvMotionQuery - environment variable
// =============================================================================

/// Whether an environment value requests reduced motion.
///
/// Truthy: `1`, `true`, `yes`, `on`, `reduce` (case-insensitive).
pub fn parse_motion_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "reduce"
    )
}

/// Reads the preference from an environment variable.
///
/// An unset variable means no preference (motion allowed). Environment
/// variables have no change notification, so the host calls
/// [`refresh`](Self::refresh) when it wants the value re-read.
pub struct EnvMotionQuery {
    var: String,
    source: MotionSource,
}

impl EnvMotionQuery {
    pub fn new(var: impl Into<String>) -> Self {
        let var = var.into();
        let source = MotionSource::new(Self::read(&var));
        Self { var, source }
    }

    pub fn var(&self) -> &str {
        &self.var
    }

    /// The backing source. Setting it overrides the variable until the next
    /// refresh.
    pub fn source(&self) -> &MotionSource {
        &self.source
    }

    /// Re-read the variable, notifying subscribers if it changed.
    pub fn refresh(&self) -> bool {
        let reduced = Self::read(&self.var);
        self.source.set_reduced(reduced);
        reduced
    }

    fn read(var: &str) -> bool {
        std::env::var(var).map(|v| parse_motion_flag(&v)).unwrap_or(false)
    }
}

impl Default for EnvMotionQuery {
    fn default() -> Self {
        Self::new(DEFAULT_MOTION_ENV_VAR)
    }
}

impl MotionQuery for EnvMotionQuery {
    /// The last value read or set. Does not touch the variable.
    fn matches(&self) -> Result<bool, MotionError> {
        Ok(self.source.reduced())
    }

    fn subscribe(&self, listener: MotionListener) -> Result<Unsubscribe, MotionError> {
        self.source.subscribe(listener)
    }
}

/// A host with no reduced-motion signal at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableMotionQuery;

impl MotionQuery for UnavailableMotionQuery {
    fn matches(&self) -> Result<bool, MotionError> {
        Err(MotionError::Unavailable)
    }

    fn subscribe(&self, _listener: MotionListener) -> Result<Unsubscribe, MotionError> {
        Err(MotionError::Unavailable)
    }
}

// =============================================================================
// ReducedMotionObserver
// =============================================================================

/// Live view of the reduced-motion preference for one surface.
///
/// Holds at most one subscription, released exactly once by
/// [`teardown`](Self::teardown) or on drop. No failure in the query ever
/// reaches the caller: an unavailable query reads as "motion allowed",
/// subscription errors leave the initial value in place.
pub struct ReducedMotionObserver {
    reduced: Signal<bool>,
    unsubscribe: Option<Unsubscribe>,
}

impl ReducedMotionObserver {
    /// Read the current preference and subscribe to changes.
    pub fn mount(query: Option<&dyn MotionQuery>) -> Self {
        let reduced = signal(false);

        let Some(query) = query else {
            trace!("no reduced-motion query; motion allowed");
            return Self { reduced, unsubscribe: None };
        };

        match query.matches() {
            Ok(value) => {
                reduced.set(value);
            }
            Err(err) => {
                debug!("{err}; motion allowed");
                return Self { reduced, unsubscribe: None };
            }
        }

        let sink = reduced.clone();
        let listener: MotionListener = Rc::new(move |value| {
            sink.set(value);
        });
        let unsubscribe = match query.subscribe(listener) {
            Ok(unsubscribe) => Some(unsubscribe),
            Err(err) => {
                warn!("{err}; reduced-motion changes will not be observed");
                None
            }
        };

        Self { reduced, unsubscribe }
    }

    /// Whether reduced motion is currently requested.
    pub fn reduced(&self) -> bool {
        self.reduced.get()
    }

    /// The underlying signal, for reactive consumers.
    pub fn signal(&self) -> Signal<bool> {
        self.reduced.clone()
    }

    pub fn is_subscribed(&self) -> bool {
        self.unsubscribe.is_some()
    }

    /// Release the subscription. Later calls are no-ops.
    pub fn teardown(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            if let Err(err) = unsubscribe() {
                warn!("{err}");
            }
        }
    }
}

impl Drop for ReducedMotionObserver {
    fn drop(&mut self) {
        self.teardown();
    }
}

// =============================================================================
// TESTS
// =============================================================================
