//! Desktop background access through the shell's wallpaper interface.
//!
//! The visible change is asynchronous; nothing here waits for the desktop to
//! repaint.

use crate::color::Color;
use crate::error::ShellInteropError;

pub mod simulated;
#[cfg(windows)]
pub mod wallpaper;

/// The subset of the shell wallpaper interface the tools use.
pub trait DesktopBackground {
    /// Currently configured solid color.
    fn background_color(&self) -> Result<Color, ShellInteropError>;

    /// Remove any image wallpaper so the solid color is displayed.
    fn clear_wallpaper(&self) -> Result<(), ShellInteropError>;

    /// Store the solid color without touching the wallpaper.
    fn set_background_color(&self, color: Color) -> Result<(), ShellInteropError>;

    /// Switch to solid-color mode showing `color`.
    ///
    /// The wallpaper must be cleared first; the shell ignores the color while
    /// an image is active.
    fn set_solid_background(&self, color: Color) -> Result<(), ShellInteropError> {
        self.clear_wallpaper()?;
        self.set_background_color(color)
    }
}
