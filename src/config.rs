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

//! Application configuration and preference persistence.
//!
//! The player persists exactly one preference, the selected theme key.
//! The core reads and writes it through the [`PrefStore`] seam so the
//! storage backend stays swappable; [`ConfyStore`] is the on-disk
//! implementation and [`MemoryStore`] backs tests and ephemeral embeds.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "jamroom";

/// Preference key for the persisted theme identifier.
pub const THEME_KEY: &str = "theme";

/// An opaque key-value preference store.
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub version: u32,
    pub theme: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            theme: "default".to_string(),
        }
    }
}

/// Preference store backed by the platform configuration directory.
pub struct ConfyStore {
    config: AppConfig,
}

impl ConfyStore {
    /// Loads the stored configuration, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load() -> Self {
        Self {
            config: confy::load(CONFIG_NAME, None).unwrap_or_default(),
        }
    }
}

impl PrefStore for ConfyStore {
    fn get(&self, key: &str) -> Option<String> {
        (key == THEME_KEY).then(|| self.config.theme.clone())
    }

    fn set(&mut self, key: &str, value: &str) {
        if key == THEME_KEY {
            self.config.theme = value.to_string();
            confy::store(CONFIG_NAME, None, &self.config).ok();
        }
    }
}

/// In-memory preference store; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_selects_default_theme() {
        let config = AppConfig::default();

        assert_eq!(config.version, 1);
        assert_eq!(config.theme, "default");
    }

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(THEME_KEY), None);

        store.set(THEME_KEY, "purple");

        assert_eq!(store.get(THEME_KEY), Some("purple".to_string()));
    }

    #[test]
    fn confy_store_only_serves_the_theme_key() {
        let store = ConfyStore {
            config: AppConfig::default(),
        };

        assert_eq!(store.get(THEME_KEY), Some("default".to_string()));
        assert_eq!(store.get("volume"), None);
    }
}
