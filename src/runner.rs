//! The three toggle workflows.
//!
//! Each workflow is one linear pass: read, decide, write, notify. Nothing is
//! retried, and a failure at any step aborts the rest. In particular the
//! change broadcast is only sent after both theme flags were written.

use std::fmt;

use tracing::info;

use crate::color::Color;
use crate::error::{PersistenceError, ShellInteropError, ToggleError};
use crate::notify::{broadcast_theme_change, SettingBroadcaster};
use crate::prefs::{KeyValueStore, Preferences};
use crate::shell::DesktopBackground;
use crate::toggle::{ColorPair, Theme, ThemeState};

/// Result of the standalone background toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundChange {
    pub previous: Color,
    pub applied: Color,
}

impl fmt::Display for BackgroundChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Set desktop to {}", self.applied)
    }
}

/// Result of the theme toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeChange {
    pub previous: ThemeState,
    pub applied: Theme,
}

impl fmt::Display for ThemeChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Set theme: {}", self.applied)
    }
}

/// Result of the combined theme and background toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChange {
    pub theme: ThemeChange,
    pub background: Color,
}

impl fmt::Display for ModeChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.theme.applied {
            Theme::Light => f.write_str("Set: Light theme + light desktop background"),
            Theme::Dark => f.write_str("Set: Dark theme + dark desktop background"),
        }
    }
}

/// Flip the solid background between the two endpoints.
pub fn toggle_background(
    desktop: &dyn DesktopBackground,
    colors: &ColorPair,
) -> Result<BackgroundChange, ShellInteropError> {
    let previous = desktop.background_color()?;
    let applied = colors.next_background(previous);
    desktop.set_solid_background(applied)?;
    info!(%previous, %applied, "toggled desktop background");
    Ok(BackgroundChange { previous, applied })
}

/// Flip both theme flags together and announce the change.
pub fn toggle_theme(
    store: &dyn KeyValueStore,
    broadcaster: &dyn SettingBroadcaster,
) -> Result<ThemeChange, PersistenceError> {
    let prefs = Preferences::new(store);
    let previous = prefs.read_theme()?;
    let applied = previous.toggled();
    prefs.write_theme(applied.state())?;
    broadcast_theme_change(broadcaster);
    info!(
        apps_light = previous.apps_light,
        system_light = previous.system_light,
        %applied,
        "toggled theme"
    );
    Ok(ThemeChange { previous, applied })
}

/// Toggle the theme, then set the background to the matching endpoint. The
/// previous background is never consulted.
pub fn toggle_mode(
    store: &dyn KeyValueStore,
    broadcaster: &dyn SettingBroadcaster,
    desktop: &dyn DesktopBackground,
    colors: &ColorPair,
) -> Result<ModeChange, ToggleError> {
    let theme = toggle_theme(store, broadcaster)?;
    let background = colors.for_theme(theme.applied);
    desktop.set_solid_background(background)?;
    info!(%background, "matched desktop background to theme");
    Ok(ModeChange { theme, background })
}
