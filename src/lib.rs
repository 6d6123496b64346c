//! themeflip — command-line toggles for the desktop light/dark appearance.
//!
//! Three binaries share this library:
//!
//! - `toggle-desktop-background` flips the solid desktop color between a light
//!   and a dark endpoint.
//! - `toggle-light-theme` flips the "apps use light theme" and "system uses
//!   light theme" preference flags together and notifies the session.
//! - `toggle-light-dark-mode` does both, choosing the background that matches
//!   the new theme.
//!
//! The OS is reached through three small capabilities
//! ([`prefs::KeyValueStore`], [`shell::DesktopBackground`],
//! [`notify::SettingBroadcaster`]) so the workflows in [`runner`] run
//! unchanged against the Windows registry and shell, a file-backed
//! simulation, or in-memory fakes.
//!
//! ```
//! use themeflip::notify::LoggingBroadcaster;
//! use themeflip::prefs::memory::MemoryStore;
//! use themeflip::runner::toggle_theme;
//! use themeflip::toggle::Theme;
//!
//! let store = MemoryStore::new();
//! let change = toggle_theme(&store, &LoggingBroadcaster).unwrap();
//! assert_eq!(change.applied, Theme::Dark);
//! ```

pub mod build_info;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod notify;
pub mod platform;
pub mod prefs;
pub mod render;
pub mod runner;
pub mod shell;
#[cfg(test)]
pub mod testsupport;
pub mod toggle;
