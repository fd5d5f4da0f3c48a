//! Interactive app launcher.

use anyhow::Result;
use goalgather_core::config::Config;

#[cfg(feature = "tui")]
pub async fn run(config: &Config) -> Result<()> {
    use anyhow::Context;

    let fixtures = goalgather_core::fixtures::Fixtures::demo();
    goalgather_tui::run_app(config, fixtures)
        .await
        .context("interactive app failed")
}

#[cfg(not(feature = "tui"))]
pub async fn run(_config: &Config) -> Result<()> {
    anyhow::bail!("TUI support is disabled in this build (feature \"tui\").")
}
