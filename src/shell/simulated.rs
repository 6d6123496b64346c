//! Shell stand-in that keeps the desktop state in a [`KeyValueStore`].
//!
//! Used on platforms without the Windows wallpaper interface so the tools
//! still run end-to-end, and by tests.

use tracing::debug;

use crate::color::Color;
use crate::error::{PersistenceError, ShellInteropError};
use crate::prefs::KeyValueStore;

use super::DesktopBackground;

/// Store path of the simulated desktop.
pub const DESKTOP_PATH: &str = r"Software\themeflip\SimulatedDesktop";
/// Packed `0x00BBGGRR` background color.
pub const BACKGROUND_COLOR: &str = "BackgroundColor";
/// 1 while an image wallpaper is shown.
pub const IMAGE_WALLPAPER: &str = "ImageWallpaper";

/// Desktop whose background lives in a key/value store.
#[derive(Debug)]
pub struct SimulatedDesktop<S> {
    store: S,
}

impl<S: KeyValueStore> SimulatedDesktop<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn image_wallpaper_shown(&self) -> Result<bool, ShellInteropError> {
        let raw = self
            .store
            .read_int(DESKTOP_PATH, IMAGE_WALLPAPER, 0)
            .map_err(|err| store_failure("GetWallpaper", err))?;
        Ok(raw != 0)
    }
}

fn store_failure(call: &'static str, err: PersistenceError) -> ShellInteropError {
    ShellInteropError::CallFailed {
        call,
        detail: err.to_string(),
    }
}

impl<S: KeyValueStore> DesktopBackground for SimulatedDesktop<S> {
    fn background_color(&self) -> Result<Color, ShellInteropError> {
        let packed = self
            .store
            .read_int(DESKTOP_PATH, BACKGROUND_COLOR, Color::DARK.packed())
            .map_err(|err| store_failure("GetBackgroundColor", err))?;
        Ok(Color::from_packed(packed))
    }

    fn clear_wallpaper(&self) -> Result<(), ShellInteropError> {
        if self.image_wallpaper_shown()? {
            debug!("simulated desktop: removing image wallpaper");
        } else {
            debug!("simulated desktop: no image wallpaper to remove");
        }
        self.store
            .write_int(DESKTOP_PATH, IMAGE_WALLPAPER, 0)
            .map_err(|err| store_failure("SetWallpaper", err))
    }

    fn set_background_color(&self, color: Color) -> Result<(), ShellInteropError> {
        debug!(%color, "simulated desktop: setting background color");
        self.store
            .write_int(DESKTOP_PATH, BACKGROUND_COLOR, color.packed())
            .map_err(|err| store_failure("SetBackgroundColor", err))
    }
}
