//! gitmux configuration.
//!
//! The config decides what the status line shows (`layout`), how each part
//! looks (`styles`, `symbols`) and a few rendering switches (`options`).
//!
//! # Example
//!
//! ```toml
//! layout = ["branch", "..", "remote-branch", "divergence", " - ", "flags"]
//!
//! [styles]
//! branch = "#[fg=white,bold]"
//! modified = "#[fg=red,bold]"
//!
//! [symbols]
//! branch = "⎇ "
//! clean = "✔"
//!
//! [options]
//! branch_max_len = 24
//! branch_trim = "center"
//! ellipsis = "…"
//! ```
//!
//! Every key is optional; missing keys keep their defaults. Sources are
//! layered in this order (later overrides earlier):
//! 1. Defaults ([`Config::default`])
//! 2. Config file (see [`path::resolve_config_path`])
//! 3. Environment variables: `GITMUX_` prefix, `__` between sections,
//!    e.g. `GITMUX_OPTIONS__BRANCH_MAX_LEN=24`

mod fields;
mod layout;
pub mod path;

use config::{ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Deserializer, Serialize};

use crate::truncate::{Direction, WidthMode};

pub use fields::{Field, Flag, Styles, Symbols, render_field};
pub use layout::{LayoutItem, parse_layout};
pub use path::{ConfigPath, resolve_config_path};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Parts of the status line, in order
    pub layout: Vec<LayoutItem>,
    pub styles: Styles,
    pub symbols: Symbols,
    pub options: Options,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: parse_layout(&["branch", "..", "remote-branch", "divergence", " - ", "flags"]),
            styles: Styles::default(),
            symbols: Symbols::default(),
            options: Options::default(),
        }
    }
}

/// Rendering switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Maximum length of branch names; 0 or negative disables truncation
    #[serde(deserialize_with = "deserialize_max_len")]
    pub branch_max_len: usize,
    /// Which end of a long branch name is kept
    pub branch_trim: Direction,
    /// Inserted where a branch name was cut
    pub ellipsis: String,
    /// How `branch_max_len` is measured
    pub width_mode: WidthMode,
    /// Never show the clean flag
    pub hide_clean: bool,
    /// Show flag symbols without their counts
    pub flags_without_count: bool,
    /// Put a space between the behind and ahead counts
    pub divergence_space: bool,
    /// Show ahead before behind
    pub swap_divergence: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            branch_max_len: 0,
            branch_trim: Direction::Right,
            ellipsis: "…".to_string(),
            width_mode: WidthMode::Chars,
            hide_clean: false,
            flags_without_count: false,
            divergence_space: false,
            swap_divergence: false,
        }
    }
}

/// Accepts any integer; zero and negative lengths mean "no limit".
fn deserialize_max_len<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    let len = i64::deserialize(deserializer)?;
    if len <= 0 {
        return Ok(0);
    }
    Ok(usize::try_from(len).unwrap_or(usize::MAX))
}

impl Config {
    /// Load configuration from the config file and environment variables.
    ///
    /// `path` is usually the result of [`resolve_config_path`]. An explicit
    /// path that does not exist is an error; a missing default file is not.
    pub fn load(path: Option<&ConfigPath>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, Environment::with_prefix("GITMUX"))
    }

    fn load_with_env(path: Option<&ConfigPath>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(config_path) = path {
            let file = config_path.path();
            if config_path.is_required() || file.exists() {
                log::debug!("Loading config from {}", file.display());
                builder = builder.add_source(
                    File::from(file)
                        .format(FileFormat::Toml)
                        .required(config_path.is_required()),
                );
            } else {
                log::debug!("No config at {}, using defaults", file.display());
            }
        }

        builder = builder.add_source(
            env.prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        log::debug!(
            "Layout: [{}]",
            config
                .layout
                .iter()
                .map(|item| format!("{:?}", item.as_str()))
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(config)
    }

    /// Parse configuration from TOML text, without consulting the environment.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        config::Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Serialize to TOML, as printed by `gitmux --print-config`.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }
}
