//! Typed access to the per-user preference store.
//!
//! The store itself is a [`KeyValueStore`]: the registry on Windows, a TOML
//! document elsewhere, or an in-memory map in tests. [`Preferences`] layers the
//! theme flag semantics on top: fixed path, fixed keys, nonzero-is-true, and
//! light-by-default.

use tracing::debug;

use crate::error::PersistenceError;
use crate::toggle::ThemeState;

pub mod file;
pub mod memory;
#[cfg(windows)]
pub mod registry;

/// Registry path (under the current user) holding the theme flags.
pub const PERSONALIZE_PATH: &str = r"Software\Microsoft\Windows\CurrentVersion\Themes\Personalize";
/// Flag for application surfaces.
pub const APPS_USE_LIGHT_THEME: &str = "AppsUseLightTheme";
/// Flag for taskbar/start/system surfaces.
pub const SYSTEM_USES_LIGHT_THEME: &str = "SystemUsesLightTheme";

/// Value used when a flag is missing or malformed.
const DEFAULT_FLAG: bool = true;

/// Hierarchical key/value store of small integers.
pub trait KeyValueStore {
    /// Read `key` under `path`.
    ///
    /// Returns `default` when the path or key is absent or the stored value is
    /// not an integer of the expected width. Errors are reserved for stores
    /// that exist but cannot be read.
    fn read_int(&self, path: &str, key: &str, default: u32) -> Result<u32, PersistenceError>;

    /// Write `value` to `key`, creating `path` first when needed.
    fn write_int(&self, path: &str, key: &str, value: u32) -> Result<(), PersistenceError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn read_int(&self, path: &str, key: &str, default: u32) -> Result<u32, PersistenceError> {
        (**self).read_int(path, key, default)
    }

    fn write_int(&self, path: &str, key: &str, value: u32) -> Result<(), PersistenceError> {
        (**self).write_int(path, key, value)
    }
}

/// Theme flag accessor over a [`KeyValueStore`].
pub struct Preferences<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> Preferences<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Read one flag, normalizing nonzero to `true` and absent to light.
    pub fn read_flag(&self, key: &str) -> Result<bool, PersistenceError> {
        let raw = self
            .store
            .read_int(PERSONALIZE_PATH, key, u32::from(DEFAULT_FLAG))?;
        debug!(key, raw, "read theme flag");
        Ok(raw != 0)
    }

    /// Store one flag as 0/1.
    pub fn write_flag(&self, key: &str, value: bool) -> Result<(), PersistenceError> {
        debug!(key, value, "write theme flag");
        self.store.write_int(PERSONALIZE_PATH, key, u32::from(value))
    }

    /// Read both flags, apps first.
    pub fn read_theme(&self) -> Result<ThemeState, PersistenceError> {
        let apps_light = self.read_flag(APPS_USE_LIGHT_THEME)?;
        let system_light = self.read_flag(SYSTEM_USES_LIGHT_THEME)?;
        Ok(ThemeState::new(apps_light, system_light))
    }

    /// Write both flags, apps first. Not transactional: if the second write
    /// fails the first one stays applied.
    pub fn write_theme(&self, state: ThemeState) -> Result<(), PersistenceError> {
        self.write_flag(APPS_USE_LIGHT_THEME, state.apps_light)?;
        self.write_flag(SYSTEM_USES_LIGHT_THEME, state.system_light)
    }
}
