//! Shared entry point for the toggle binaries.
//!
//! Every tool follows the same shape: load config, install logging, build the
//! platform adapters, run one workflow, print one line, exit 0 or 1.

use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use crate::config::{default_config_path, load_config, Config};
use crate::error::ToggleError;
use crate::logging;
use crate::platform::Platform;
use crate::render::Renderer;
use crate::runner::{toggle_background, toggle_mode, toggle_theme};

/// Which binary is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// `toggle-desktop-background`
    DesktopBackground,
    /// `toggle-light-theme`
    LightTheme,
    /// `toggle-light-dark-mode`
    LightDarkMode,
}

/// Why argument parsing did not produce arguments.
#[derive(Debug)]
pub(crate) enum ArgsRejected {
    /// `--help` or `--version`: clap prints it and exits 0.
    Informational(clap::Error),
    /// Anything else clap refused.
    Usage(ToggleError),
}

/// Parse the process arguments into `A`.
///
/// `--help` and `--version` print and exit 0. Any other rejected argument is
/// reported on stderr and yields exit code 1, like every other failure.
pub fn parse_args<A: Parser>() -> Result<A, ExitCode> {
    parse_args_from(std::env::args_os()).map_err(|rejected| match rejected {
        ArgsRejected::Informational(err) => err.exit(),
        ArgsRejected::Usage(err) => {
            Renderer::new(true).error(&err);
            ExitCode::FAILURE
        }
    })
}

pub(crate) fn parse_args_from<A, I, T>(args: I) -> Result<A, ArgsRejected>
where
    A: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    A::try_parse_from(args).map_err(|err| {
        if err.use_stderr() {
            ArgsRejected::Usage(ToggleError::Usage(usage_message(&err)))
        } else {
            ArgsRejected::Informational(err)
        }
    })
}

/// First line of clap's report without its own `error:` prefix; the renderer
/// adds one.
fn usage_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).trim().to_string()
}

/// Run `tool` against the native platform and map the outcome to an exit code.
pub fn run(tool: Tool) -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            let renderer = Renderer::new(true);
            renderer.error(&ToggleError::from(err));
            if let Some(path) = default_config_path() {
                eprintln!("config file: {}", path.display());
            }
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config.logging);
    let renderer = Renderer::new(config.display.color);

    let outcome = Platform::native(&config)
        .map_err(ToggleError::from)
        .and_then(|platform| execute(tool, &platform, &config));
    match outcome {
        Ok(line) => {
            renderer.confirm(&line);
            ExitCode::SUCCESS
        }
        Err(err) => {
            renderer.error(&err);
            ExitCode::FAILURE
        }
    }
}

/// Run `tool` against `platform` and return the confirmation line.
pub fn execute(tool: Tool, platform: &Platform, config: &Config) -> Result<String, ToggleError> {
    debug!(?tool, "running toggle");
    let colors = config.colors.pair();
    let line = match tool {
        Tool::DesktopBackground => {
            toggle_background(platform.desktop.as_ref(), &colors)?.to_string()
        }
        Tool::LightTheme => {
            toggle_theme(platform.store.as_ref(), platform.broadcaster.as_ref())?.to_string()
        }
        Tool::LightDarkMode => toggle_mode(
            platform.store.as_ref(),
            platform.broadcaster.as_ref(),
            platform.desktop.as_ref(),
            &colors,
        )?
        .to_string(),
    };
    Ok(line)
}
