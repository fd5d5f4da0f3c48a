//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use goalgather_core::config::{self, Config};
use goalgather_core::logging;

mod commands;

#[derive(Parser)]
#[command(name = "goalgather")]
#[command(version = "0.1")]
#[command(about = "Never watch the match alone: find fans, join match chats, follow live scores")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Open the main app directly, skipping the welcome screen
    #[arg(long, env = "GOALGATHER_SKIP_WELCOME")]
    skip_welcome: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// List events near you
    Events {
        /// Free-text search over teams, league, venue and location
        #[arg(short, long, default_value = "")]
        query: String,

        /// Venue type: all, stadium, bar or screening
        #[arg(long, default_value = "all")]
        venue: String,

        /// Only show events from this league
        #[arg(long)]
        league: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show live and upcoming match scores
    Live {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Generate a fresh config from Rust defaults (for xtask)
    Generate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(dispatch(cli))
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        command,
        skip_welcome,
    } = cli;

    // default to the interactive app
    let Some(command) = command else {
        let mut config = Config::load().context("load config")?;
        config.skip_welcome |= skip_welcome;
        // Keep the guard alive so buffered log lines are flushed on exit.
        let _guard = logging::init_file(&config::paths::logs_dir(), &config.log_filter)?;
        return commands::app::run(&config).await;
    };

    match command {
        Commands::Events {
            query,
            venue,
            league,
            json,
        } => {
            init_command_logging()?;
            commands::events::run(&commands::events::EventsArgs {
                query: &query,
                venue: &venue,
                league: league.as_deref(),
                json,
            })
        }
        Commands::Live { json } => {
            init_command_logging()?;
            commands::live::run(json)
        }

        // Config commands must work even when the existing file is broken.
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Generate => commands::config::generate(),
        },
    }
}

/// Installs the stderr logger used by one-shot commands. Also surfaces a
/// broken config file before any output is printed.
fn init_command_logging() -> Result<()> {
    let config = Config::load().context("load config")?;
    logging::init_stderr(&config.log_filter)
}
