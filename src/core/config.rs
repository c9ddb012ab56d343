//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.pocketcalc/config.toml` unless `--config` points
//! elsewhere. If the default file is missing on first run, a commented-out
//! default is generated so users can discover all options.

use log::{Level, LevelFilter};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct CalcConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub show_keypad: Option<bool>,
    pub poll_interval_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;
pub const MIN_POLL_INTERVAL_MS: u64 = 10;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE: &str = "pocketcalc.log";

pub const ENV_LOG_LEVEL: &str = "POCKETCALC_LOG_LEVEL";
pub const ENV_LOG_FILE: &str = "POCKETCALC_LOG_FILE";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub show_keypad: bool,
    pub poll_interval: Duration,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

/// Values taken from command-line flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub show_keypad: Option<bool>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown log level {0:?} (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.pocketcalc/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".pocketcalc").join("config.toml"))
}

/// A message produced while loading. Loading runs before the logger exists,
/// so notes are carried back to `main` and emitted once it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadNote {
    pub level: Level,
    pub message: String,
}

impl LoadNote {
    fn info(message: String) -> Self {
        Self {
            level: Level::Info,
            message,
        }
    }

    fn warn(message: String) -> Self {
        Self {
            level: Level::Warn,
            message,
        }
    }

    /// Emits the note through the `log` facade.
    pub fn emit(&self) {
        log::log!(self.level, "{}", self.message);
    }
}

#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: CalcConfig,
    pub notes: Vec<LoadNote>,
}

/// Load config from `explicit` if given, otherwise from the default path.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    load_config_from(explicit, config_path())
}

/// Same as [`load_config`] with the default location passed in.
///
/// An explicit path must exist. A missing default file is generated and
/// `CalcConfig::default()` returned; failing to generate it is only a
/// warning. A malformed file is `ConfigError::Parse` either way.
pub fn load_config_from(
    explicit: Option<&Path>,
    default_path: Option<PathBuf>,
) -> Result<LoadedConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let Some(path) = default_path else {
        return Ok(LoadedConfig {
            config: CalcConfig::default(),
            notes: vec![LoadNote::warn(
                "Could not determine home directory, using default config".to_string(),
            )],
        });
    };

    if !path.exists() {
        let mut notes = vec![LoadNote::info(format!(
            "No config file found, generating default at {}",
            path.display()
        ))];
        if let Err(e) = generate_default_config(&path) {
            notes.push(LoadNote::warn(format!(
                "Failed to write default config to {}: {}",
                path.display(),
                e
            )));
        }
        return Ok(LoadedConfig {
            config: CalcConfig::default(),
            notes,
        });
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(LoadedConfig {
        config,
        notes: vec![LoadNote::info(format!(
            "Loaded config from {}",
            path.display()
        ))],
    })
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# pocketcalc configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# show_keypad = true          # Or pass --no-keypad
# poll_interval_ms = 250      # How long the event loop waits for input

# [logging]
# level = "info"              # "off", "error", "warn", "info", "debug", "trace"
# file = "pocketcalc.log"     # Or set POCKETCALC_LOG_FILE
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_CONFIG_CONTENT)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &CalcConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env(
    config: &CalcConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    // Keypad: CLI → config → default
    let show_keypad = cli
        .show_keypad
        .or(config.general.show_keypad)
        .unwrap_or(true);

    let poll_interval_ms = config
        .general
        .poll_interval_ms
        .unwrap_or(DEFAULT_POLL_INTERVAL_MS)
        .max(MIN_POLL_INTERVAL_MS);

    // Log level: CLI → env → config → default
    let log_level = match cli
        .log_level
        .clone()
        .or_else(|| env(ENV_LOG_LEVEL))
        .or_else(|| config.logging.level.clone())
    {
        Some(level) => parse_log_level(&level)?,
        None => DEFAULT_LOG_LEVEL,
    };

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env(ENV_LOG_FILE).map(PathBuf::from))
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    Ok(ResolvedConfig {
        show_keypad,
        poll_interval: Duration::from_millis(poll_interval_ms),
        log_level,
        log_file,
    })
}

fn parse_log_level(level: &str) -> Result<LevelFilter, ConfigError> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))
}
