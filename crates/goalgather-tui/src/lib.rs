//! Full-screen terminal UI for GoalGather.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr, stdout};

use anyhow::Result;
use goalgather_core::config::Config;
use goalgather_core::fixtures::Fixtures;
pub use runtime::TuiRuntime;

/// Runs the interactive app until the user quits.
pub async fn run_app(config: &Config, fixtures: Fixtures) -> Result<()> {
    if !stdout().is_terminal() || !stderr().is_terminal() {
        anyhow::bail!(
            "GoalGather needs an interactive terminal.\n\
             Use `goalgather events` or `goalgather live` for plain output."
        );
    }

    let mut err = stderr();
    writeln!(err, "⚽ GoalGather")?;
    writeln!(
        err,
        "{} events, {} live matches loaded",
        fixtures.events.len(),
        fixtures.live_matches.len()
    )?;
    err.flush()?;

    tracing::info!(skip_welcome = config.skip_welcome, "Starting TUI");
    let mut runtime = TuiRuntime::new(config.clone(), fixtures)?;
    runtime.run()?;
    drop(runtime);

    writeln!(stderr(), "Goodbye!")?;
    Ok(())
}
