// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Visual styling and color configuration.
//!
//! This module defines the application's color palettes and provides
//! utilities for converting colors to the hexadecimal strings frontends
//! use for styling. The selected palette is the one piece of state the
//! player persists between sessions, keyed by [`ThemeId::key`].

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Converts the color into a CSS-style hexadecimal string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Identifier for one of the built-in palettes.
///
/// The wire form used for persistence is [`ThemeId::key`]; unknown keys
/// fall back to the default palette on load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeId {
    #[default]
    Default,
    OceanBlue,
    PurpleRain,
    Monochrome,
    ForestGreen,
}

impl ThemeId {
    pub const ALL: [ThemeId; 5] = [
        ThemeId::Default,
        ThemeId::OceanBlue,
        ThemeId::PurpleRain,
        ThemeId::Monochrome,
        ThemeId::ForestGreen,
    ];

    /// Stable string key used to persist the selected theme.
    pub fn key(self) -> &'static str {
        match self {
            ThemeId::Default => "default",
            ThemeId::OceanBlue => "blue",
            ThemeId::PurpleRain => "purple",
            ThemeId::Monochrome => "black",
            ThemeId::ForestGreen => "green",
        }
    }

    /// Resolves a persisted key back to a theme identifier.
    pub fn from_key(key: &str) -> Option<ThemeId> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }

    pub fn palette(self) -> Theme {
        match self {
            ThemeId::Default => Theme::default_theme(),
            ThemeId::OceanBlue => Theme::ocean_blue(),
            ThemeId::PurpleRain => Theme::purple_rain(),
            ThemeId::Monochrome => Theme::monochrome(),
            ThemeId::ForestGreen => Theme::forest_green(),
        }
    }
}

/// A color palette applied across the player UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background_colour: Rgb,
    pub accent_colour: Rgb,
    pub accent_light_colour: Rgb,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub const fn default_theme() -> Self {
        Self {
            name: "Default",
            background_colour: Rgb(10, 10, 15),
            accent_colour: Rgb(255, 77, 109),
            accent_light_colour: Rgb(255, 127, 153),
        }
    }

    pub const fn ocean_blue() -> Self {
        Self {
            name: "Ocean Blue",
            background_colour: Rgb(10, 15, 26),
            accent_colour: Rgb(77, 158, 255),
            accent_light_colour: Rgb(127, 179, 255),
        }
    }

    pub const fn purple_rain() -> Self {
        Self {
            name: "Purple Rain",
            background_colour: Rgb(15, 10, 26),
            accent_colour: Rgb(157, 78, 255),
            accent_light_colour: Rgb(179, 127, 255),
        }
    }

    pub const fn monochrome() -> Self {
        Self {
            name: "Monochrome",
            background_colour: Rgb(15, 10, 26),
            accent_colour: Rgb(130, 128, 134),
            accent_light_colour: Rgb(216, 216, 218),
        }
    }

    pub const fn forest_green() -> Self {
        Self {
            name: "Forest Green",
            background_colour: Rgb(10, 26, 15),
            accent_colour: Rgb(77, 255, 109),
            accent_light_colour: Rgb(127, 255, 153),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for id in ThemeId::ALL {
            assert_eq!(ThemeId::from_key(id.key()), Some(id));
        }
    }

    #[test]
    fn unknown_key_resolves_to_none() {
        assert_eq!(ThemeId::from_key("neon"), None);
        assert_eq!(ThemeId::from_key(""), None);
    }

    #[test]
    fn converts_colours_to_hex() {
        assert_eq!(Rgb(255, 77, 109).to_hex(), "#ff4d6d");
        assert_eq!(Rgb(10, 10, 15).to_hex(), "#0a0a0f");
    }

    #[test]
    fn palettes_are_distinct() {
        let accents: Vec<Rgb> = ThemeId::ALL
            .into_iter()
            .map(|id| id.palette().accent_colour)
            .collect();

        for (i, a) in accents.iter().enumerate() {
            for b in &accents[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
