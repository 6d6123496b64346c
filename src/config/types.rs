//! Configuration data model.
//!
//! Every section is optional in the file; missing values take the defaults
//! from `config::defaults`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::color::Color;
use crate::toggle::ColorPair;

use super::defaults::{DEFAULT_LOG_LEVEL, DEFAULT_NOTIFY_TIMEOUT_MS};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub colors: ColorsConfig,
    pub notify: NotifyConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
    pub state: StateConfig,
}

/// The two background endpoints.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ColorsConfig {
    pub light: Color,
    pub dark: Color,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            light: Color::LIGHT,
            dark: Color::DARK,
        }
    }
}

impl ColorsConfig {
    pub fn pair(&self) -> ColorPair {
        ColorPair {
            light: self.light,
            dark: self.dark,
        }
    }
}

/// Setting-change broadcast options.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct NotifyConfig {
    /// Per-window broadcast timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_NOTIFY_TIMEOUT_MS,
        }
    }
}

impl NotifyConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Terminal output options.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Style the error prefix when stderr is a terminal.
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Diagnostic logging options.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `warn` or `themeflip=debug`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Location of the simulated preference store on platforms without a
/// registry.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct StateConfig {
    pub path: Option<PathBuf>,
}
