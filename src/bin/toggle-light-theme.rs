//! Toggle the Windows light/dark theme flags.

use clap::Parser;
use std::process::ExitCode;
use themeflip::build_info;
use themeflip::cli::{parse_args, run, Tool};

/// Toggle the apps and system light-theme flags together and notify the desktop
/// session. A mixed state switches to light.
#[derive(Debug, Parser)]
#[command(
    name = "toggle-light-theme",
    version = build_info::VERSION,
    long_version = build_info::LONG_VERSION
)]
struct Args {}

fn main() -> ExitCode {
    match parse_args::<Args>() {
        Ok(_args) => run(Tool::LightTheme),
        Err(code) => code,
    }
}
