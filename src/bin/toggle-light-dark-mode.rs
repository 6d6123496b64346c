//! Toggle the light/dark theme and set a matching desktop background.

use clap::Parser;
use std::process::ExitCode;
use themeflip::build_info;
use themeflip::cli::{parse_args, run, Tool};

/// Toggle the light/dark theme, then set the solid desktop background to the
/// color matching the new theme.
#[derive(Debug, Parser)]
#[command(
    name = "toggle-light-dark-mode",
    version = build_info::VERSION,
    long_version = build_info::LONG_VERSION
)]
struct Args {}

fn main() -> ExitCode {
    match parse_args::<Args>() {
        Ok(_args) => run(Tool::LightDarkMode),
        Err(code) => code,
    }
}
