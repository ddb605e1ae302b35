//! Theme controller - the process-wide light/dark flag
//!
//! Two states, one transition. The controller initializes from the
//! persisted preference (or the configured default), and `toggle` persists
//! first, then flips, then notifies every subscriber with the same value -
//! subscribers never observe a half-applied theme, and in-memory state
//! never diverges from storage.
//!
//! The emitted page script keeps the browser side of this contract using
//! `localStorage` under the same key.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// The well-known preference key, shared with the page script
pub const THEME_KEY: &str = "folio.theme";

/// Preference file name under the user config directory
const PREFS_FILE: &str = "preferences.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a persisted value; anything unrecognized is `None`
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable key-value storage for preferences
///
/// Implementations:
/// - `FilePreferenceStore` - TOML file in the user config directory
/// - `MemoryPreferenceStore` - in-memory for testing
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> FolioResult<()>;
}

/// Notified with the new theme after every toggle
pub type ThemeSubscriber<'a> = Box<dyn FnMut(Theme) + 'a>;

/// The explicit theme context passed down to whatever renders
pub struct ThemeController<'a, S: PreferenceStore> {
    store: S,
    current: Theme,
    subscribers: Vec<ThemeSubscriber<'a>>,
}

impl<'a, S: PreferenceStore> ThemeController<'a, S> {
    /// Initialize from the persisted preference, falling back to `default`
    pub fn init(store: S, default: Theme) -> Self {
        let current = store
            .get(THEME_KEY)
            .and_then(|v| Theme::parse(&v))
            .unwrap_or(default);
        Self {
            store,
            current,
            subscribers: Vec::new(),
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(Theme) + 'a) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Flip the theme, persist it, and notify all subscribers
    ///
    /// On a persistence failure the state is left unchanged and nobody is
    /// notified.
    pub fn toggle(&mut self) -> FolioResult<Theme> {
        let next = self.current.flipped();
        self.store.set(THEME_KEY, next.as_str())?;
        self.current = next;
        for subscriber in &mut self.subscribers {
            subscriber(next);
        }
        Ok(next)
    }
}

/// TOML-file preference store
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Open (or lazily create) the store at the default location,
    /// `<user config dir>/folio/preferences.toml`
    pub fn open_default() -> FolioResult<Self> {
        let base = dirs::config_dir().ok_or_else(|| FolioError::PersistPreference {
            path: PathBuf::from(PREFS_FILE),
            message: "could not determine user config directory".to_string(),
        })?;
        Self::open(base.join("folio").join(PREFS_FILE))
    }

    /// Open the store at an explicit path (tests, --config overrides)
    pub fn open(path: PathBuf) -> FolioResult<Self> {
        let values = if path.exists() {
            let content = fs::read_to_string(&path)?;
            toml::from_str(&content).map_err(|e| FolioError::PersistPreference {
                path: path.clone(),
                message: e.to_string(),
            })?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> FolioResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(&self.values).map_err(|e| FolioError::PersistPreference {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> FolioResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// In-memory store for tests
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> FolioResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
