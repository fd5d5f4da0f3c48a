//! Configuration management for GoalGather.
//!
//! Loads configuration from ${GOALGATHER_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::filter::VenueFilter;

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Recursively merges items from source table into target table.
fn merge_items(target: &mut toml_edit::Table, source: &toml_edit::Table) {
    use toml_edit::Item;

    for (key, value) in source.iter() {
        match value {
            Item::Value(v) => {
                target[key] = Item::Value(v.clone());
            }
            Item::Table(src_table) => {
                if let Some(Item::Table(target_table)) = target.get_mut(key) {
                    merge_items(target_table, src_table);
                } else {
                    target[key] = Item::Table(src_table.clone());
                }
            }
            Item::ArrayOfTables(src_arr) => {
                target[key] = Item::ArrayOfTables(src_arr.clone());
            }
            Item::None => {}
        }
    }
}

pub mod paths {
    //! Path resolution for GoalGather configuration and data directories.
    //!
    //! GOALGATHER_HOME resolution order:
    //! 1. GOALGATHER_HOME environment variable (if set)
    //! 2. ~/.config/goalgather (default)
    //! 3. ./.goalgather when no home directory can be determined

    use std::path::PathBuf;

    pub const HOME_ENV: &str = "GOALGATHER_HOME";

    pub fn goalgather_home() -> PathBuf {
        if let Ok(home) = std::env::var(HOME_ENV)
            && !home.trim().is_empty()
        {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".goalgather"),
            |h| h.join(".config").join("goalgather"),
        )
    }

    pub fn config_path() -> PathBuf {
        goalgather_home().join("config.toml")
    }

    pub fn logs_dir() -> PathBuf {
        goalgather_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Open the main shell directly instead of the welcome screen.
    pub skip_welcome: bool,

    /// Simulated sign-in latency.
    pub auth_delay_ms: u64,

    /// Author name for locally created messages and posts.
    pub display_name: String,

    /// Directory of pre-fetched images.
    pub image_cache_dir: Option<PathBuf>,

    /// Tracing filter used when GOALGATHER_LOG is unset.
    pub log_filter: String,

    /// Venue chip pre-selected on the search screen.
    pub default_venue: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip_welcome: false,
            auth_delay_ms: Self::DEFAULT_AUTH_DELAY_MS,
            display_name: Self::DEFAULT_DISPLAY_NAME.to_string(),
            image_cache_dir: None,
            log_filter: Self::DEFAULT_LOG_FILTER.to_string(),
            default_venue: "all".to_string(),
        }
    }
}

impl Config {
    const DEFAULT_AUTH_DELAY_MS: u64 = 1500;
    const DEFAULT_DISPLAY_NAME: &str = "You";
    const DEFAULT_LOG_FILTER: &str = "info";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config: Config = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?
        } else {
            Config::default()
        };
        config
            .venue_filter()
            .with_context(|| format!("Invalid default_venue in {}", path.display()))?;
        Ok(config)
    }

    pub fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.auth_delay_ms)
    }

    /// Author name, falling back to the default when blank.
    pub fn effective_display_name(&self) -> &str {
        let trimmed = self.display_name.trim();
        if trimmed.is_empty() {
            Self::DEFAULT_DISPLAY_NAME
        } else {
            trimmed
        }
    }

    pub fn venue_filter(&self) -> Result<VenueFilter> {
        self.default_venue
            .parse::<VenueFilter>()
            .map_err(anyhow::Error::msg)
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Generates a fresh config TOML from Rust defaults.
    ///
    /// Used by `xtask update-default-config` to keep `default_config.toml`
    /// in sync with [`Config::default`]. Comments come from the embedded
    /// template, values from the defaults.
    pub fn generate() -> Result<String> {
        use toml_edit::DocumentMut;

        let generated_toml = toml::to_string(&Config::default())
            .context("Failed to serialize default config to TOML")?;

        let mut doc: DocumentMut = default_config_template()
            .parse()
            .context("Failed to parse default config template")?;
        let generated_doc: DocumentMut = generated_toml
            .parse()
            .context("Failed to parse generated config")?;

        merge_items(doc.as_table_mut(), generated_doc.as_table());

        Ok(doc.to_string())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;
    use crate::models::VenueType;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nonexistent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.auth_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "skip_welcome = true\ndefault_venue = \"bar\"\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert!(config.skip_welcome);
        assert_eq!(config.display_name, "You");
        assert_eq!(
            config.venue_filter().unwrap(),
            VenueFilter::Only(VenueType::Bar)
        );
    }

    #[test]
    fn test_load_rejects_unknown_venue() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "default_venue = \"arena\"\n").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(format!("{err:#}").contains("arena"));
    }

    #[test]
    fn test_load_reports_parse_errors_with_path() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "auth_delay_ms = \"soon\"\n").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_init_creates_config_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# GoalGather Configuration"));
        assert!(contents.contains("# image_cache_dir ="));
        assert_eq!(Config::load_from(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "").unwrap();

        assert!(Config::init(&config_path).is_err());
    }

    #[test]
    fn test_generate_keeps_comments_and_defaults() {
        let generated = Config::generate().unwrap();
        assert!(generated.contains("# Simulated sign-in latency"));
        assert!(generated.contains("# image_cache_dir ="));
        let parsed: Config = toml::from_str(&generated).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_blank_display_name_falls_back() {
        let config = Config {
            display_name: "  ".into(),
            ..Default::default()
        };
        assert_eq!(config.effective_display_name(), "You");
    }
}
