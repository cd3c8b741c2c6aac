//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.greenthumb/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Problems hit while loading. The logger isn't up yet, so `main` reports them.
    #[serde(skip)]
    pub warnings: Vec<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub store_name: Option<String>,
    pub currency_symbol: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_STORE_NAME: &str = "GreenThumb Gardens";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
pub const DEFAULT_LOG_FILE: &str = "greenthumb.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub store_name: String,
    pub currency_symbol: String,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    /// Everything that fell back to a default and should be reported.
    pub warnings: Vec<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            store_name: DEFAULT_STORE_NAME.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            warnings: Vec::new(),
        }
    }
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

/// Returns the path to `~/.greenthumb/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".greenthumb").join("config.toml"))
}

/// Load config from `path`, or from `~/.greenthumb/config.toml` when `None`.
///
/// If the default file doesn't exist, generates a commented-out default and
/// returns `StoreConfig::default()`. An explicitly given path that doesn't
/// exist is an I/O error. A malformed file returns `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<StoreConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => {
                if !p.exists() {
                    let mut config = StoreConfig::default();
                    if let Err(e) = generate_default_config(&p) {
                        config
                            .warnings
                            .push(format!("Failed to write default config to {}: {e}", p.display()));
                    }
                    return Ok(config);
                }
                p
            }
            None => {
                let mut config = StoreConfig::default();
                config
                    .warnings
                    .push("Could not determine home directory, using default config".to_string());
                return Ok(config);
            }
        },
    };

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<StoreConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# GreenThumb Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# store_name = "GreenThumb Gardens"   # Or set GREENTHUMB_STORE_NAME
# currency_symbol = "$"               # Or set GREENTHUMB_CURRENCY

# [logging]
# level = "debug"                     # "off", "error", "warn", "info", "debug", "trace"
# file = "greenthumb.log"             # Relative to the working directory
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)?;
    info!("Generated default config at {}", path.display());
    Ok(())
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_log_level` comes from `--log-level` (None = not specified). Values
/// that can't be used land in `ResolvedConfig::warnings` next to the ones
/// `load_config` collected.
pub fn resolve(config: &StoreConfig, cli_log_level: Option<&str>) -> ResolvedConfig {
    resolve_with(config, cli_log_level, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an injectable environment lookup.
pub fn resolve_with(
    config: &StoreConfig,
    cli_log_level: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Store name: env → config → default
    let store_name = env("GREENTHUMB_STORE_NAME")
        .or_else(|| config.general.store_name.clone())
        .unwrap_or_else(|| DEFAULT_STORE_NAME.to_string());

    // Currency symbol: env → config → default
    let currency_symbol = env("GREENTHUMB_CURRENCY")
        .or_else(|| config.general.currency_symbol.clone())
        .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string());

    let mut warnings = config.warnings.clone();

    // Log level: CLI → env → config → default
    let log_level = cli_log_level
        .map(|s| s.to_string())
        .or_else(|| env("GREENTHUMB_LOG_LEVEL"))
        .or_else(|| config.logging.level.clone())
        .and_then(|level| match level.parse::<LevelFilter>() {
            Ok(filter) => Some(filter),
            Err(_) => {
                warnings.push(format!(
                    "Unknown log level '{level}', using {DEFAULT_LOG_LEVEL}"
                ));
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config
        .logging
        .file
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        store_name,
        currency_symbol,
        log_level,
        log_file,
        warnings,
    }
}
