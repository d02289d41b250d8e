//! Service Card Example - the full card in your terminal
//!
//! - Move the mouse over tiles and the panel to see the lift and the glow
//! - Click, or Tab to a surface and press Space/Enter, to activate it
//! - `m` toggles reduced motion, `q` quits
//!
//! Pass a TOML file path to replace the default content.
//!
//! Run with: cargo run --example service_card -- [card.toml]

use std::process::ExitCode;

use glow_cards::{CardConfig, RunOptions, run};

fn main() -> ExitCode {
    let config = match std::env::args().nth(1) {
        Some(path) => match CardConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => CardConfig::default(),
    };

    match run(config, RunOptions::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
