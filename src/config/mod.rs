//! Configuration loading from an optional TOML file.
//!
//! The tools take no flags of their own and read no tool-specific environment
//! variables (not even `RUST_LOG`), so there is a single source:
//! `$CONFIG_DIR/themeflip/themeflip.toml` (e.g.
//! `%APPDATA%\themeflip\themeflip.toml` on Windows,
//! `~/.config/themeflip/themeflip.toml` on Linux). `dirs` resolves that root
//! from the usual platform variables (`%APPDATA%`, `$HOME`, `$XDG_CONFIG_HOME`).
//! When the file is absent the built-in defaults apply.

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

mod defaults;
mod types;

use defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, STATE_FILE_NAME};
pub use types::{
    ColorsConfig, Config, DisplayConfig, LoggingConfig, NotifyConfig, StateConfig,
};

/// Load configuration from the per-user config directory.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from_sources(|path| std::fs::read_to_string(path), dirs::config_dir)
}

fn load_config_from_sources<FRead, FRoot>(
    read_file: FRead,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let Some(path) = config_root().map(|dir| config_path_in(&dir)) else {
        return Ok(Config::default());
    };
    let text = match read_file(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(source) => return Err(ConfigError::Read { path, source }),
    };
    parse_config(&text)
}

/// Parse and validate config text.
pub fn parse_config(text: &str) -> Result<Config, ConfigError> {
    let mut config: Config = toml::from_str(text)?;
    normalize(&mut config);
    validate(&config)?;
    Ok(config)
}

fn normalize(config: &mut Config) {
    config.notify.timeout_ms = config.notify.timeout_ms.max(1);
    config.logging.level = config.logging.level.trim().to_string();
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.colors.light == config.colors.dark {
        return Err(ConfigError::Value {
            field: "colors",
            reason: format!(
                "light and dark are both `{}`; the toggle needs two distinct colors",
                config.colors.light
            ),
        });
    }
    if config.logging.level.is_empty() {
        return Err(ConfigError::Value {
            field: "logging.level",
            reason: "cannot be empty".to_string(),
        });
    }
    if let Err(err) = tracing_subscriber::EnvFilter::try_new(&config.logging.level) {
        return Err(ConfigError::Value {
            field: "logging.level",
            reason: format!("`{}` is not a filter directive: {err}", config.logging.level),
        });
    }
    Ok(())
}

fn config_path_in(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Return the per-user config path, when the platform has a config root.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| config_path_in(&dir))
}

/// Resolve the simulated preference state file: the configured path, or
/// `$DATA_LOCAL_DIR/themeflip/state.toml`.
pub fn state_file_path(config: &Config) -> Result<PathBuf, ConfigError> {
    state_file_path_with(config, dirs::data_local_dir)
}

fn state_file_path_with<FRoot>(config: &Config, data_root: FRoot) -> Result<PathBuf, ConfigError>
where
    FRoot: Fn() -> Option<PathBuf>,
{
    if let Some(path) = &config.state.path {
        return Ok(path.clone());
    }
    data_root()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(STATE_FILE_NAME))
        .ok_or(ConfigError::NoStateDir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use std::collections::HashMap;

    fn load_with(files: HashMap<PathBuf, String>) -> Result<Config, ConfigError> {
        load_config_from_sources(
            |path| {
                files.get(path).cloned().ok_or_else(|| {
                    std::io::Error::new(std::io::ErrorKind::NotFound, "missing")
                })
            },
            || Some(PathBuf::from("/cfg")),
        )
    }

    #[test]
    fn missing_file_uses_defaults() {
        let config = load_with(HashMap::new()).expect("load");
        assert_eq!(config, Config::default());
        assert_eq!(config.colors.light, Color::rgb(187, 187, 187));
        assert_eq!(config.colors.dark, Color::rgb(0, 0, 0));
        assert_eq!(config.notify.timeout_ms, 200);
        assert_eq!(config.logging.level, "warn");
        assert!(config.display.color);
    }

    #[test]
    fn no_config_root_uses_defaults() {
        let config = load_config_from_sources(
            |_| panic!("no file should be read"),
            || None,
        )
        .expect("load");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_file_from_themeflip_directory() {
        let mut files = HashMap::new();
        files.insert(
            PathBuf::from("/cfg/themeflip/themeflip.toml"),
            "[colors]\nlight = [240, 240, 240]\n\n[notify]\ntimeout_ms = 500\n".to_string(),
        );
        let config = load_with(files).expect("load");
        assert_eq!(config.colors.light, Color::rgb(240, 240, 240));
        assert_eq!(config.colors.dark, Color::DARK);
        assert_eq!(config.notify.timeout_ms, 500);
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let err = load_config_from_sources(
            |_| Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied")),
            || Some(PathBuf::from("/cfg")),
        )
        .expect_err("must fail");
        assert!(matches!(err, ConfigError::Read { .. }), "got: {err}");
        assert!(
            err.to_string()
                .starts_with("cannot read /cfg/themeflip/themeflip.toml"),
            "got: {err}"
        );
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let err = parse_config("[colors\nlight = 1").expect_err("must fail");
        assert!(matches!(err, ConfigError::Parse(_)), "got: {err}");
    }

    #[test]
    fn identical_colors_are_rejected() {
        let err = parse_config("[colors]\nlight = [0, 0, 0]\n").expect_err("must fail");
        assert!(err.to_string().contains("two distinct colors"), "got: {err}");
    }

    #[test]
    fn zero_timeout_is_clamped() {
        let config = parse_config("[notify]\ntimeout_ms = 0\n").expect("parse");
        assert_eq!(config.notify.timeout_ms, 1);
    }

    #[test]
    fn invalid_log_level_is_rejected() {
        let err = parse_config("[logging]\nlevel = \"themeflip=loud\"\n").expect_err("must fail");
        assert!(err.to_string().contains("logging.level"), "got: {err}");
    }

    #[test]
    fn state_path_prefers_configured_value() {
        let config = parse_config("[state]\npath = \"/tmp/custom.toml\"\n").expect("parse");
        let path = state_file_path_with(&config, || Some(PathBuf::from("/data"))).expect("path");
        assert_eq!(path, PathBuf::from("/tmp/custom.toml"));
    }

    #[test]
    fn state_path_defaults_under_data_dir() {
        let path = state_file_path_with(&Config::default(), || Some(PathBuf::from("/data")))
            .expect("path");
        assert_eq!(path, PathBuf::from("/data/themeflip/state.toml"));
        let err = state_file_path_with(&Config::default(), || None).expect_err("no data dir");
        assert!(matches!(err, ConfigError::NoStateDir), "got: {err}");
    }
}
