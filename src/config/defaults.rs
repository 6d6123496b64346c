//! Default configuration constants.

/// Config directory name under the platform config root.
pub(super) const CONFIG_DIR_NAME: &str = "themeflip";
/// Config file name inside [`CONFIG_DIR_NAME`].
pub(super) const CONFIG_FILE_NAME: &str = "themeflip.toml";
/// Simulated preference state file name (non-Windows only).
pub(super) const STATE_FILE_NAME: &str = "state.toml";
/// Per-window timeout for setting-change broadcasts.
pub(super) const DEFAULT_NOTIFY_TIMEOUT_MS: u64 = 200;
/// Default tracing filter directive.
pub(super) const DEFAULT_LOG_LEVEL: &str = "warn";
