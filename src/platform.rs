//! Adapter set for the running platform.

use crate::config::Config;
use crate::error::ConfigError;
use crate::notify::SettingBroadcaster;
use crate::prefs::KeyValueStore;
use crate::shell::DesktopBackground;

/// Preference store, desktop shell, and session broadcaster used by a run.
pub struct Platform {
    pub store: Box<dyn KeyValueStore>,
    pub desktop: Box<dyn DesktopBackground>,
    pub broadcaster: Box<dyn SettingBroadcaster>,
}

impl Platform {
    /// Registry, `IDesktopWallpaper`, and `WM_SETTINGCHANGE`.
    #[cfg(windows)]
    pub fn native(config: &Config) -> Result<Self, ConfigError> {
        use crate::notify::session::SessionBroadcaster;
        use crate::prefs::registry::RegistryStore;
        use crate::shell::wallpaper::ShellWallpaper;

        Ok(Self {
            store: Box::new(RegistryStore::current_user()),
            desktop: Box::new(ShellWallpaper::new()),
            broadcaster: Box::new(SessionBroadcaster::new(config.notify.timeout())),
        })
    }

    /// File-backed simulation of the Windows state.
    #[cfg(not(windows))]
    pub fn native(config: &Config) -> Result<Self, ConfigError> {
        let path = crate::config::state_file_path(config)?;
        tracing::debug!(path = %path.display(), "using simulated preference state");
        Ok(Self::simulated(&path))
    }

    /// Preferences and desktop both stored in the TOML file at `path`.
    pub fn simulated(path: &std::path::Path) -> Self {
        use crate::notify::LoggingBroadcaster;
        use crate::prefs::file::FileStore;
        use crate::shell::simulated::SimulatedDesktop;

        let store = FileStore::new(path);
        Self {
            store: Box::new(store.clone()),
            desktop: Box::new(SimulatedDesktop::new(store)),
            broadcaster: Box::new(LoggingBroadcaster),
        }
    }
}
