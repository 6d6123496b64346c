//! Compile-time build metadata exposed through `--version`.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Commit the binaries were built from, or `unknown` outside a checkout.
pub const COMMIT: &str = env!("THEMEFLIP_COMMIT");

/// Long `--version` text shared by every tool.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("THEMEFLIP_COMMIT"),
    ")"
);
