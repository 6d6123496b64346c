//! `WM_SETTINGCHANGE` broadcast to all top-level windows.

use std::time::Duration;

use tracing::debug;
use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    SendMessageTimeoutW, HWND_BROADCAST, SMTO_ABORTIFHUNG, WM_SETTINGCHANGE,
};

use super::SettingBroadcaster;

/// Sends each notification with abort-if-hung semantics and a per-window
/// timeout; hung receivers are skipped.
#[derive(Debug, Clone)]
pub struct SessionBroadcaster {
    timeout: Duration,
}

impl SessionBroadcaster {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl SettingBroadcaster for SessionBroadcaster {
    fn broadcast(&self, area: &str) {
        let wide: Vec<u16> = area.encode_utf16().chain(std::iter::once(0)).collect();
        let timeout_ms = u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX);
        let result = unsafe {
            SendMessageTimeoutW(
                HWND_BROADCAST,
                WM_SETTINGCHANGE,
                WPARAM(0),
                LPARAM(wide.as_ptr() as isize),
                SMTO_ABORTIFHUNG,
                timeout_ms,
                None,
            )
        };
        if result.0 == 0 {
            debug!(area, timeout_ms, "setting change broadcast abandoned");
        } else {
            debug!(area, "broadcast setting change");
        }
    }
}
