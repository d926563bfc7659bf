//! Config path management.
//!
//! Determines which config file to read, honoring the CLI flag and the
//! `GITMUX_CONFIG_PATH` environment variable before the platform default.

use std::path::PathBuf;

use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "GITMUX_CONFIG_PATH";

/// Where the config comes from, and whether it has to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigPath {
    /// Named on the command line or in `GITMUX_CONFIG_PATH`: must exist
    Explicit(PathBuf),
    /// Platform default location: skipped when missing
    Default(PathBuf),
}

impl ConfigPath {
    pub fn path(&self) -> &std::path::Path {
        match self {
            ConfigPath::Explicit(path) | ConfigPath::Default(path) => path,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, ConfigPath::Explicit(_))
    }
}

/// Resolve the config file path.
///
/// Priority:
/// 1. CLI `--config` flag
/// 2. `GITMUX_CONFIG_PATH` environment variable
/// 3. Platform config dir: `gitmux/config.toml` under `$XDG_CONFIG_HOME`
///    (or `~/.config`) on Unix, `%APPDATA%` on Windows
pub fn resolve_config_path(cli_path: Option<PathBuf>) -> Option<ConfigPath> {
    if let Some(path) = cli_path {
        return Some(ConfigPath::Explicit(path));
    }

    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return Some(ConfigPath::Explicit(PathBuf::from(path)));
    }

    let strategy = choose_base_strategy().ok()?;
    Some(ConfigPath::Default(
        strategy.config_dir().join("gitmux").join("config.toml"),
    ))
}
