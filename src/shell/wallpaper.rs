//! Native adapter over the `IDesktopWallpaper` COM interface (Windows 8+).
//!
//! Each call enters a short-lived single-threaded apartment and creates the
//! shell object, so tools that never touch the background never load COM.

use tracing::debug;
use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::COLORREF;
use windows::Win32::System::Com::{
    CoCreateInstance, CoInitializeEx, CoUninitialize, CLSCTX_ALL, COINIT_APARTMENTTHREADED,
};
use windows::Win32::UI::Shell::{DesktopWallpaper, IDesktopWallpaper};

use crate::color::Color;
use crate::error::ShellInteropError;

use super::DesktopBackground;

/// COM apartment held for the lifetime of one shell session.
struct ComApartment;

impl ComApartment {
    fn enter() -> Result<Self, ShellInteropError> {
        unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) }
            .ok()
            .map_err(|err| ShellInteropError::Unavailable(format!("COM initialization: {err}")))?;
        Ok(Self)
    }
}

impl Drop for ComApartment {
    fn drop(&mut self) {
        unsafe { CoUninitialize() };
    }
}

/// A connected wallpaper object. Field order matters: the interface is
/// released before the apartment is torn down.
struct Session {
    wallpaper: IDesktopWallpaper,
    _apartment: ComApartment,
}

impl Session {
    fn open() -> Result<Self, ShellInteropError> {
        let apartment = ComApartment::enter()?;
        let wallpaper: IDesktopWallpaper =
            unsafe { CoCreateInstance(&DesktopWallpaper, None, CLSCTX_ALL) }.map_err(|err| {
                ShellInteropError::Unavailable(format!("create DesktopWallpaper: {err}"))
            })?;
        Ok(Self {
            wallpaper,
            _apartment: apartment,
        })
    }

    fn clear_wallpaper(&self) -> Result<(), ShellInteropError> {
        unsafe { self.wallpaper.SetWallpaper(PCWSTR::null(), w!("")) }.map_err(|err| {
            ShellInteropError::CallFailed {
                call: "SetWallpaper",
                detail: err.to_string(),
            }
        })
    }

    fn set_background_color(&self, color: Color) -> Result<(), ShellInteropError> {
        unsafe { self.wallpaper.SetBackgroundColor(COLORREF(color.packed())) }.map_err(|err| {
            ShellInteropError::CallFailed {
                call: "SetBackgroundColor",
                detail: err.to_string(),
            }
        })
    }
}

/// The real desktop shell.
#[derive(Debug, Default)]
pub struct ShellWallpaper;

impl ShellWallpaper {
    pub fn new() -> Self {
        Self
    }
}

impl DesktopBackground for ShellWallpaper {
    fn background_color(&self) -> Result<Color, ShellInteropError> {
        let session = Session::open()?;
        let packed = unsafe { session.wallpaper.GetBackgroundColor() }.map_err(|err| {
            ShellInteropError::CallFailed {
                call: "GetBackgroundColor",
                detail: err.to_string(),
            }
        })?;
        debug!(packed = packed.0, "read desktop background");
        Ok(Color::from_packed(packed.0))
    }

    fn clear_wallpaper(&self) -> Result<(), ShellInteropError> {
        Session::open()?.clear_wallpaper()
    }

    fn set_background_color(&self, color: Color) -> Result<(), ShellInteropError> {
        Session::open()?.set_background_color(color)
    }

    fn set_solid_background(&self, color: Color) -> Result<(), ShellInteropError> {
        let session = Session::open()?;
        session.clear_wallpaper()?;
        session.set_background_color(color)?;
        debug!(%color, "requested solid desktop background");
        Ok(())
    }
}
