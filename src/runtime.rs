//! Terminal runtime - raw mode, event loop, rendering.
//!
//! `run` takes over the terminal, shows a [`ServiceCard`] centered on the
//! alternate screen and routes mouse and keyboard input to it until the user
//! quits. The terminal is restored on every exit path, including errors.
//!
//! Keys handled here rather than by the card:
//!
//! - `q`, `Esc`, `Ctrl+C` quit;
//! - `m` toggles the reduced-motion preference;
//! - `r` re-reads the reduced-motion environment variable.

use std::cell::Cell;
use std::io::{self, Stdout};
use std::rc::Rc;
use std::time::Duration;

use crossterm::terminal;
use log::{LevelFilter, debug, info};

use crate::card::ServiceCard;
use crate::config::CardConfig;
use crate::error::Result;
use crate::logger;
use crate::motion::{EnvMotionQuery, MotionQuery};
use crate::renderer::{DiffRenderer, FrameBuffer};
use crate::state::input::{self, InputEvent};
use crate::state::keyboard::KeyboardEvent;
use crate::surface::Activation;
use crate::types::{Attr, Rgba};

const STATUS_INK: Rgba = Rgba::rgb(156, 163, 175);

/// Knobs for [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// How long one poll waits for input.
    pub poll_interval: Duration,
    /// Used when `RUST_LOG` is unset.
    pub log_level: LevelFilter,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(16),
            log_level: LevelFilter::Info,
        }
    }
}

/// What the runtime does with a key before the card sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    Quit,
    ToggleMotion,
    RefreshMotion,
}

impl HostCommand {
    pub fn from_key(event: &KeyboardEvent) -> Option<Self> {
        if !event.is_down() {
            return None;
        }
        match event.key.as_str() {
            "c" if event.modifiers.ctrl => Some(Self::Quit),
            "q" | "Escape" => Some(Self::Quit),
            "m" => Some(Self::ToggleMotion),
            "r" => Some(Self::RefreshMotion),
            _ => None,
        }
    }
}

// =============================================================================
// Terminal session
// =============================================================================

/// Raw mode, alternate screen, mouse capture. Undone on drop.
struct TerminalSession {
    out: Stdout,
    renderer: DiffRenderer,
    key_release: bool,
    active: bool,
}

impl TerminalSession {
    fn start() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut session = Self {
            out: io::stdout(),
            renderer: DiffRenderer::new(),
            key_release: false,
            active: true,
        };
        session.renderer.enter_fullscreen(&mut session.out)?;
        input::enable_mouse()?;
        session.key_release = input::enable_key_release_reporting();
        debug!("terminal session started (key release reporting: {})", session.key_release);
        Ok(session)
    }

    fn draw(&mut self, buf: &FrameBuffer) -> io::Result<bool> {
        self.renderer.render(&mut self.out, buf)
    }

    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        if self.key_release {
            let _ = input::disable_key_release_reporting();
        }
        let _ = input::disable_mouse();
        self.renderer.exit_fullscreen(&mut self.out)?;
        terminal::disable_raw_mode()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

// =============================================================================
// Event loop
// =============================================================================

/// Show the card until the user quits.
pub fn run(config: CardConfig, options: RunOptions) -> Result<()> {
    logger::init(options.log_level);

    let motion = EnvMotionQuery::new(config.motion.env_var.clone());
    let viewport = terminal::size()?;
    let mut card = ServiceCard::new(config, Some(&motion), viewport)?;

    let activations = Rc::new(Cell::new(0usize));
    let counter = activations.clone();
    card.set_on_activate(Some(Rc::new(move |activation: Activation| {
        counter.set(counter.get() + 1);
        info!("surface {} activated ({:?})", activation.surface, activation.source);
    })));

    let mut session = TerminalSession::start()?;
    card.set_synthesize_key_release(!session.key_release);
    info!("Tab moves focus, Space/Enter activates, m toggles reduced motion, q quits");

    let mut dirty = true;
    loop {
        if dirty {
            let frame = render_frame(&card, &motion, activations.get());
            session.draw(&frame)?;
            dirty = false;
        }

        let Some(event) = input::poll_event(options.poll_interval)? else {
            continue;
        };

        if let InputEvent::Key(key) = &event {
            match HostCommand::from_key(key) {
                Some(HostCommand::Quit) => break,
                Some(HostCommand::ToggleMotion) => {
                    let reduced = motion.source().toggle();
                    info!("reduced motion {}", if reduced { "on" } else { "off" });
                    dirty = true;
                    continue;
                }
                Some(HostCommand::RefreshMotion) => {
                    let reduced = motion.refresh();
                    info!("{} re-read: reduced motion {}", motion.var(), if reduced { "on" } else { "off" });
                    dirty = true;
                    continue;
                }
                None => {}
            }
        }

        if matches!(event, InputEvent::Resize(..)) {
            session.renderer.invalidate();
        }
        dirty |= card.handle_input(&event)?;
    }

    session.restore()?;
    Ok(())
}

/// Paint the card plus the status row into a fresh frame.
pub fn render_frame(card: &ServiceCard, motion: &dyn MotionQuery, activations: usize) -> FrameBuffer {
    let (width, height) = card.viewport();
    let mut buf = FrameBuffer::new(width, height);
    card.paint(&mut buf);

    if height == 0 {
        return buf;
    }
    let reduced = motion.matches().unwrap_or(false);
    let mut status = format!(
        " reduced motion: {}  activations: {activations}",
        if reduced { "on" } else { "off" }
    );
    if let Some(entry) = logger::last() {
        status.push_str("  | ");
        status.push_str(&entry.msg);
    }
    buf.draw_text(0, height - 1, &status, STATUS_INK, None, Attr::DIM, None);
    buf
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{MotionSource, ReducedMotionObserver};
    use crate::state::keyboard::Modifiers;

    #[test]
    fn test_host_commands() {
        assert_eq!(HostCommand::from_key(&KeyboardEvent::new("q")), Some(HostCommand::Quit));
        assert_eq!(HostCommand::from_key(&KeyboardEvent::new("Escape")), Some(HostCommand::Quit));
        assert_eq!(
            HostCommand::from_key(&KeyboardEvent::with_modifiers("c", Modifiers::ctrl())),
            Some(HostCommand::Quit)
        );
        assert_eq!(HostCommand::from_key(&KeyboardEvent::new("c")), None);
        assert_eq!(HostCommand::from_key(&KeyboardEvent::new("m")), Some(HostCommand::ToggleMotion));
        assert_eq!(HostCommand::from_key(&KeyboardEvent::release("q")), None);
        assert_eq!(HostCommand::from_key(&KeyboardEvent::new("Enter")), None);
    }

    #[test]
    fn test_toggle_survives_render_frame() {
        let motion = EnvMotionQuery::new("GLOW_CARDS_TEST_VARIABLE_THAT_IS_NEVER_SET");
        let observer = ReducedMotionObserver::mount(Some(&motion));
        motion.source().toggle();
        let card = ServiceCard::new(CardConfig::default(), Some(&motion), (80, 30)).unwrap();

        let frame = render_frame(&card, &motion, 0);
        assert!(frame.to_lines()[29].contains("reduced motion: on"));
        assert!(observer.reduced());
        assert!(motion.source().reduced());
        assert!(card.surfaces().iter().all(|surface| surface.reduced_motion()));
    }

    #[test]
    fn test_render_frame_status_row() {
        let source = MotionSource::new(true);
        let card = ServiceCard::new(CardConfig::default(), Some(&source), (80, 30)).unwrap();
        let frame = render_frame(&card, &source, 3);
        let lines = frame.to_lines();
        assert!(lines[29].contains("reduced motion: on"));
        assert!(lines[29].contains("activations: 3"));
        assert!(lines.iter().any(|line| line.contains("E-Cards")));
    }

    #[test]
    fn test_default_options() {
        let options = RunOptions::default();
        assert_eq!(options.poll_interval, Duration::from_millis(16));
        assert_eq!(options.log_level, LevelFilter::Info);
    }
}
