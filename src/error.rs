//! Error types.
//!
//! Surfaces themselves never fail: pointer geometry and motion signal
//! problems degrade silently. These errors cover the outer layers (terminal
//! I/O, layout, configuration) and the motion query capability, whose
//! failures the observer logs and swallows.

use thiserror::Error;

/// Errors from the card and runtime layers.
#[derive(Debug, Error)]
pub enum CardError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("layout computation failed: {0}")]
    Layout(#[from] taffy::TaffyError),

    #[error("invalid card config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("cannot read card config {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors reported by a [`MotionQuery`](crate::motion::MotionQuery).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MotionError {
    /// The host offers no reduced-motion signal.
    #[error("reduced-motion query is not available")]
    Unavailable,

    #[error("cannot subscribe to reduced-motion changes: {0}")]
    Subscribe(String),

    #[error("cannot unsubscribe from reduced-motion changes: {0}")]
    Unsubscribe(String),
}

pub type Result<T, E = CardError> = std::result::Result<T, E>;
