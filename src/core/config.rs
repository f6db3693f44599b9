//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.menagerie/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::catalog::Catalog;
use crate::core::state::DEFAULT_INITIAL_IDS;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MenagerieConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub initial_animals: Option<Vec<u32>>,
    pub open_detail_on_launch: Option<bool>,
    pub search_prompt: Option<String>,
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SEARCH_PROMPT: &str = "Search Animals";
pub const DEFAULT_LOG_FILE: &str = "menagerie.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub initial_ids: Vec<u32>,
    pub open_detail_on_launch: bool,
    pub search_prompt: String,
    pub log_level: LevelFilter,
}

/// Values taken from command-line flags. `None` means "not given".
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub initial_ids: Option<Vec<u32>>,
    pub no_detail: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.menagerie/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".menagerie").join("config.toml"))
}

/// Load config from `~/.menagerie/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MenagerieConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MenagerieConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MenagerieConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MenagerieConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<MenagerieConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<MenagerieConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Menagerie Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# initial_animals = [1, 2, 3]        # Catalog ids listed at startup
# open_detail_on_launch = true       # Open the first animal's detail view
# search_prompt = "Search Animals"
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &MenagerieConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading env vars through `env` instead of the process.
pub fn resolve_with_env(
    config: &MenagerieConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Initial list: CLI → env → config → default
    let requested = cli
        .initial_ids
        .clone()
        .or_else(|| {
            env("MENAGERIE_INITIAL").and_then(|raw| match parse_id_list(&raw) {
                Some(ids) => Some(ids),
                None => {
                    warn!("Ignoring malformed MENAGERIE_INITIAL {:?}", raw);
                    None
                }
            })
        })
        .or_else(|| config.general.initial_animals.clone())
        .unwrap_or_else(|| DEFAULT_INITIAL_IDS.to_vec());
    let initial_ids = known_ids(requested);

    // Detail on launch: CLI flag can only turn it off
    let open_detail_on_launch =
        !cli.no_detail && config.general.open_detail_on_launch.unwrap_or(true);

    let search_prompt = config
        .general
        .search_prompt
        .clone()
        .unwrap_or_else(|| DEFAULT_SEARCH_PROMPT.to_string());

    // Log level: env → config → default
    let log_level = env("MENAGERIE_LOG_LEVEL")
        .or_else(|| config.general.log_level.clone())
        .and_then(|raw| match raw.parse::<LevelFilter>() {
            Ok(level) => Some(level),
            Err(_) => {
                warn!("Ignoring unknown log level {:?}", raw);
                None
            }
        })
        .unwrap_or(LevelFilter::Debug);

    ResolvedConfig {
        initial_ids,
        open_detail_on_launch,
        search_prompt,
        log_level,
    }
}

/// Parses `"1, 2,3"` into ids. Returns `None` if any entry is not a number.
pub fn parse_id_list(raw: &str) -> Option<Vec<u32>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().ok())
        .collect()
}

/// Drops ids the catalog doesn't know, with a warning for each.
fn known_ids(ids: Vec<u32>) -> Vec<u32> {
    let catalog = Catalog::builtin();
    ids.into_iter()
        .filter(|&id| {
            let known = catalog.get(id).is_some();
            if !known {
                warn!("Skipping unknown animal id {} in initial list", id);
            }
            known
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Resolve without looking at the real process environment.
    fn resolve_clean(config: &MenagerieConfig, cli: &CliOverrides) -> ResolvedConfig {
        resolve_with_env(config, cli, |_| None)
    }

    #[test]
    fn test_default_config_parses() {
        let config = MenagerieConfig::default();
        assert!(config.general.initial_animals.is_none());
        assert!(config.general.search_prompt.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = MenagerieConfig::default();
        let resolved = resolve_clean(&config, &CliOverrides::default());
        assert_eq!(resolved.initial_ids, vec![1, 2, 3]);
        assert!(resolved.open_detail_on_launch);
        assert_eq!(resolved.search_prompt, DEFAULT_SEARCH_PROMPT);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = MenagerieConfig {
            general: GeneralConfig {
                initial_animals: Some(vec![4, 5]),
                open_detail_on_launch: Some(false),
                search_prompt: Some("Find a critter".to_string()),
                log_level: Some("info".to_string()),
            },
        };
        let resolved = resolve_clean(&config, &CliOverrides::default());
        assert_eq!(resolved.initial_ids, vec![4, 5]);
        assert!(!resolved.open_detail_on_launch);
        assert_eq!(resolved.search_prompt, "Find a critter");
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = MenagerieConfig {
            general: GeneralConfig {
                initial_animals: Some(vec![4, 5]),
                open_detail_on_launch: Some(true),
                ..Default::default()
            },
        };
        let cli = CliOverrides {
            initial_ids: Some(vec![9]),
            no_detail: true,
        };
        let resolved = resolve_clean(&config, &cli);
        assert_eq!(resolved.initial_ids, vec![9]);
        assert!(!resolved.open_detail_on_launch);
    }

    #[test]
    fn test_resolve_drops_unknown_ids() {
        let cli = CliOverrides {
            initial_ids: Some(vec![1, 42, 3]),
            no_detail: false,
        };
        let resolved = resolve_clean(&MenagerieConfig::default(), &cli);
        assert_eq!(resolved.initial_ids, vec![1, 3]);
    }

    #[test]
    fn test_parse_id_list() {
        assert_eq!(parse_id_list("1, 2,3"), Some(vec![1, 2, 3]));
        assert_eq!(parse_id_list(""), Some(vec![]));
        assert_eq!(parse_id_list("1,cat"), None);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
initial_animals = [2, 6]
open_detail_on_launch = false
search_prompt = "Look up"
log_level = "warn"
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.general.initial_animals, Some(vec![2, 6]));
        assert_eq!(config.general.open_detail_on_launch, Some(false));
        assert_eq!(config.general.search_prompt.as_deref(), Some("Look up"));
        assert_eq!(config.general.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
search_prompt = "Animals"
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.general.search_prompt.as_deref(), Some("Animals"));
        assert!(config.general.initial_animals.is_none());
        assert!(config.general.open_detail_on_launch.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_config("[general]\ninitial_animals = \"one\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config_from(Path::new("/nonexistent/menagerie/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_env_initial_beats_config() {
        let config = MenagerieConfig {
            general: GeneralConfig {
                initial_animals: Some(vec![4, 5]),
                ..Default::default()
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), |key| {
            (key == "MENAGERIE_INITIAL").then(|| "7, 8".to_string())
        });
        assert_eq!(resolved.initial_ids, vec![7, 8]);
    }

    #[test]
    fn test_malformed_env_initial_falls_back_to_config() {
        let config = MenagerieConfig {
            general: GeneralConfig {
                initial_animals: Some(vec![6]),
                ..Default::default()
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), |key| {
            (key == "MENAGERIE_INITIAL").then(|| "1,cat".to_string())
        });
        assert_eq!(resolved.initial_ids, vec![6]);
    }

    #[test]
    fn test_env_log_level() {
        let resolved = resolve_with_env(&MenagerieConfig::default(), &CliOverrides::default(), |key| {
            (key == "MENAGERIE_LOG_LEVEL").then(|| "warn".to_string())
        });
        assert_eq!(resolved.log_level, LevelFilter::Warn);

        let resolved = resolve_with_env(&MenagerieConfig::default(), &CliOverrides::default(), |key| {
            (key == "MENAGERIE_LOG_LEVEL").then(|| "loud".to_string())
        });
        assert_eq!(resolved.log_level, LevelFilter::Debug);
    }
}
