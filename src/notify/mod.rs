//! Best-effort "setting changed" broadcast to the desktop session.
//!
//! A broadcast has no observable outcome: [`SettingBroadcaster::broadcast`]
//! returns `()`, and adapters log rather than report failures. Preference
//! writes are already durable by the time a broadcast is sent.

use tracing::debug;

#[cfg(windows)]
pub mod session;

/// Setting areas announced after the theme flags change, in send order.
pub const THEME_CHANGE_AREAS: [&str; 2] = ["ImmersiveColorSet", "UserPreferencesMask"];

/// Fire-and-forget sink for setting-change notifications.
pub trait SettingBroadcaster {
    /// Announce that `area` changed.
    fn broadcast(&self, area: &str);
}

/// Announce a theme change to every listener.
pub fn broadcast_theme_change(broadcaster: &dyn SettingBroadcaster) {
    for area in THEME_CHANGE_AREAS {
        broadcaster.broadcast(area);
    }
}

/// Broadcaster for sessions without a native window system: records the
/// notification as a debug event and nothing else.
#[derive(Debug, Default)]
pub struct LoggingBroadcaster;

impl SettingBroadcaster for LoggingBroadcaster {
    fn broadcast(&self, area: &str) {
        debug!(area, "setting change (no session to notify)");
    }
}
