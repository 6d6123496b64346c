//! Flip the solid desktop background between the light and dark colors.

use clap::Parser;
use std::process::ExitCode;
use themeflip::build_info;
use themeflip::cli::{parse_args, run, Tool};

/// Flip the solid desktop background between the configured light and dark
/// colors. Any other current color switches to light.
#[derive(Debug, Parser)]
#[command(
    name = "toggle-desktop-background",
    version = build_info::VERSION,
    long_version = build_info::LONG_VERSION
)]
struct Args {}

fn main() -> ExitCode {
    match parse_args::<Args>() {
        Ok(_args) => run(Tool::DesktopBackground),
        Err(code) => code,
    }
}
