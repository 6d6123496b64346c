//! Pure toggle rules for the theme flags and the background color.
//!
//! Nothing here performs I/O. Both rules are intentionally asymmetric: a mixed
//! theme collapses to light, and an unrecognized background becomes the light
//! color.

use std::fmt;

use crate::color::Color;

/// Uniform light/dark appearance written by every toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Both flags set to this theme.
    pub const fn state(self) -> ThemeState {
        let light = matches!(self, Theme::Light);
        ThemeState {
            apps_light: light,
            system_light: light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("Light"),
            Theme::Dark => f.write_str("Dark"),
        }
    }
}

/// The two persisted "uses light theme" flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThemeState {
    pub apps_light: bool,
    pub system_light: bool,
}

impl ThemeState {
    pub const fn new(apps_light: bool, system_light: bool) -> Self {
        Self {
            apps_light,
            system_light,
        }
    }

    /// Next theme: dark only when both flags are currently light.
    pub const fn toggled(self) -> Theme {
        if self.apps_light && self.system_light {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// The two background endpoints the tools switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub light: Color,
    pub dark: Color,
}

impl Default for ColorPair {
    fn default() -> Self {
        Self {
            light: Color::LIGHT,
            dark: Color::DARK,
        }
    }
}

impl ColorPair {
    /// Standalone rule: exact packed-value match against the endpoints,
    /// anything unrecognized becomes `light`.
    pub fn next_background(&self, current: Color) -> Color {
        let current = current.packed();
        if current == self.light.packed() {
            self.dark
        } else {
            self.light
        }
    }

    /// Combined rule: the color follows the new theme, never the old color.
    pub fn for_theme(&self, theme: Theme) -> Color {
        match theme {
            Theme::Light => self.light,
            Theme::Dark => self.dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_light_toggles_to_dark() {
        assert_eq!(ThemeState::new(true, true).toggled(), Theme::Dark);
    }

    #[test]
    fn every_other_pair_toggles_to_light() {
        for state in [
            ThemeState::new(false, false),
            ThemeState::new(true, false),
            ThemeState::new(false, true),
        ] {
            assert_eq!(state.toggled(), Theme::Light, "state: {state:?}");
        }
    }

    #[test]
    fn mixed_state_collapses_to_light_light() {
        assert_eq!(
            ThemeState::new(true, false).toggled().state(),
            ThemeState::new(true, true)
        );
    }

    #[test]
    fn toggling_twice_restores_uniform_states() {
        let light = ThemeState::new(true, true);
        assert_eq!(light.toggled().state().toggled().state(), light);

        let dark = ThemeState::new(false, false);
        assert_eq!(dark.toggled().state().toggled().state(), dark);
    }

    #[test]
    fn theme_state_sets_both_flags() {
        assert_eq!(Theme::Dark.state(), ThemeState::new(false, false));
        assert_eq!(Theme::Light.state(), ThemeState::new(true, true));
        assert_eq!(Theme::Light.to_string(), "Light");
    }

    #[test]
    fn light_background_toggles_to_dark_and_back() {
        let pair = ColorPair::default();
        assert_eq!(pair.next_background(Color::LIGHT), Color::DARK);
        assert_eq!(pair.next_background(Color::DARK), Color::LIGHT);
    }

    #[test]
    fn unrecognized_background_becomes_light() {
        let pair = ColorPair::default();
        assert_eq!(pair.next_background(Color::rgb(10, 20, 30)), Color::LIGHT);
        assert_eq!(pair.next_background(Color::rgb(187, 187, 186)), Color::LIGHT);
    }

    #[test]
    fn theme_color_ignores_previous_background() {
        let pair = ColorPair {
            light: Color::rgb(240, 240, 240),
            dark: Color::rgb(16, 16, 16),
        };
        assert_eq!(pair.for_theme(Theme::Light), Color::rgb(240, 240, 240));
        assert_eq!(pair.for_theme(Theme::Dark), Color::rgb(16, 16, 16));
    }

    #[cfg(feature = "fuzz-tests")]
    mod fuzz {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn second_toggle_always_reaches_a_uniform_cycle(apps in any::<bool>(), system in any::<bool>()) {
                let first = ThemeState::new(apps, system).toggled();
                let second = first.state().toggled();
                prop_assert_ne!(first, second);
                prop_assert_eq!(second.state().toggled(), first);
            }

            #[test]
            fn only_the_light_endpoint_maps_to_dark(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                let pair = ColorPair::default();
                let current = Color::rgb(r, g, b);
                let expected = if current == pair.light { pair.dark } else { pair.light };
                prop_assert_eq!(pair.next_background(current), expected);
            }
        }
    }
}
