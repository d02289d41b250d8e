//! Bounded in-memory logger.
//!
//! A full-screen terminal UI cannot print log lines to stderr without
//! tearing the frame, so records go to a ring buffer the host can display
//! (the demo shows the latest line in its status row). Set
//! `GLOW_CARDS_LOG_STDERR=1` to mirror records to stderr as well, and
//! `RUST_LOG` to pick the level.

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

const MAX_LOG_LINES: usize = 500;

/// One captured log record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub msg: String,
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:>5}] {}: {}", self.level, self.target, self.msg)
    }
}

static LOGS: Mutex<VecDeque<LogEntry>> = Mutex::new(VecDeque::new());

struct BufferLogger {
    mirror_stderr: bool,
}

impl Log for BufferLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = LogEntry {
            level: record.level(),
            target: record.target().to_string(),
            msg: record.args().to_string(),
        };

        if self.mirror_stderr {
            eprintln!("{entry}");
        }

        push_entry(entry);
    }

    fn flush(&self) {}
}

fn push_entry(entry: LogEntry) {
    if let Ok(mut buf) = LOGS.lock() {
        buf.push_back(entry);
        if buf.len() > MAX_LOG_LINES {
            buf.pop_front();
        }
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

fn level_from_env() -> Option<LevelFilter> {
    let val = std::env::var("RUST_LOG").ok()?;
    let v = val.to_lowercase();
    if v.contains("trace") {
        Some(LevelFilter::Trace)
    } else if v.contains("debug") {
        Some(LevelFilter::Debug)
    } else if v.contains("info") {
        Some(LevelFilter::Info)
    } else if v.contains("warn") {
        Some(LevelFilter::Warn)
    } else if v.contains("error") {
        Some(LevelFilter::Error)
    } else if v.contains("off") {
        Some(LevelFilter::Off)
    } else {
        None
    }
}

/// Install the buffer logger. `RUST_LOG` overrides `default_level`.
///
/// Safe to call more than once; later calls only adjust the level.
pub fn init(default_level: LevelFilter) {
    let _ = log::set_boxed_logger(Box::new(BufferLogger {
        mirror_stderr: env_flag("GLOW_CARDS_LOG_STDERR"),
    }));
    let level = level_from_env().unwrap_or(default_level);
    log::set_max_level(level);
    log::debug!("buffer logger initialized at level {level}");
}

/// The most recent `n` entries, oldest first.
pub fn recent(n: usize) -> Vec<LogEntry> {
    match LOGS.lock() {
        Ok(buf) => buf.iter().skip(buf.len().saturating_sub(n)).cloned().collect(),
        Err(_) => Vec::new(),
    }
}

/// The latest entry, if any.
pub fn last() -> Option<LogEntry> {
    LOGS.lock().ok().and_then(|buf| buf.back().cloned())
}

pub fn len() -> usize {
    LOGS.lock().map(|buf| buf.len()).unwrap_or(0)
}

pub fn clear() {
    if let Ok(mut buf) = LOGS.lock() {
        buf.clear();
    }
}
