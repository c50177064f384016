//! Persisted user settings, currently just the light/dark theme flag.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Key the theme flag is stored under; the value is `"true"` or `"false"`.
pub const DARK_MODE_KEY: &str = "darkMode";

pub const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn from_dark(dark: bool) -> Theme {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        })
    }
}

/// String key/value persistence for settings.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Settings kept as a flat TOML table on disk.
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store living next to `config.toml`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SETTINGS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        toml::from_str(&data).with_context(|| format!("parsing {}", self.path.display()))
    }
}

impl SettingsStore for TomlSettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_table()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut table = self.read_table()?;
        table.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating settings dir {}", parent.display()))?;
        }
        let data = toml::to_string(&table)?;
        fs::write(&self.path, data).with_context(|| format!("writing {}", self.path.display()))?;
        tracing::debug!(key, value, "settings updated");
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    values: BTreeMap<String, String>,
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stored flag wins; with nothing stored, follow the system preference.
pub fn load_theme(store: &impl SettingsStore, system_prefers_dark: bool) -> Result<Theme> {
    let theme = match store.get(DARK_MODE_KEY)? {
        Some(value) => Theme::from_dark(value == "true"),
        None => Theme::from_dark(system_prefers_dark),
    };
    Ok(theme)
}

pub fn set_theme(store: &mut impl SettingsStore, theme: Theme) -> Result<()> {
    store.set(DARK_MODE_KEY, if theme.is_dark() { "true" } else { "false" })
}

/// Flip the current theme and persist the result.
pub fn toggle_theme(store: &mut impl SettingsStore, system_prefers_dark: bool) -> Result<Theme> {
    let next = load_theme(store, system_prefers_dark)?.toggled();
    set_theme(store, next)?;
    Ok(next)
}
