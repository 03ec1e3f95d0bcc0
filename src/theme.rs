//! Session-wide theme state.
//!
//! `ThemeStore` is the single source of truth for the active [`Theme`]. It is
//! owned by the composition root (the terminal `AppState` or a web request)
//! and never stored in a global. Components either receive a style scope
//! derived from [`ThemeStore::theme`] or register an observer through
//! [`ThemeStore::subscribe`] and drop it again with
//! [`ThemeStore::unsubscribe`] when they unmount.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;

/// The binary light/dark visual mode applied across all components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light mode (the default)
    #[default]
    Light,
    /// Dark mode
    Dark,
}

impl Theme {
    /// Returns the complementary theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns true for [`Theme::Dark`].
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Lowercase identifier used in config files, query strings and CSS.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Label shown on the theme toggle control.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "☀ Light",
            Self::Dark => "☾ Dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => anyhow::bail!("Unknown theme '{other}' (expected 'light' or 'dark')"),
        }
    }
}

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Storage for the theme preference across sessions.
///
/// Nothing is persisted unless a store is built with
/// [`ThemeStore::with_persistence`].
pub trait ThemePersistence {
    /// Returns the stored theme, or `None` if nothing was stored yet.
    fn load(&self) -> Result<Option<Theme>>;

    /// Stores the theme.
    fn save(&mut self, theme: Theme) -> Result<()>;
}

type Observer = Box<dyn FnMut(Theme)>;

/// Owner of the active theme and its observers.
pub struct ThemeStore {
    theme: Theme,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
    persistence: Option<Box<dyn ThemePersistence>>,
}

impl ThemeStore {
    /// Creates a session-only store starting at `initial`.
    #[must_use]
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: initial,
            observers: Vec::new(),
            next_id: 0,
            persistence: None,
        }
    }

    /// Creates a store seeded from `persistence`, saving every toggle back.
    ///
    /// Falls back to `fallback` when nothing is stored or loading fails.
    #[must_use]
    pub fn with_persistence(persistence: Box<dyn ThemePersistence>, fallback: Theme) -> Self {
        let initial = match persistence.load() {
            Ok(Some(theme)) => theme,
            Ok(None) => fallback,
            Err(e) => {
                warn!("Failed to load stored theme, using {fallback}: {e:#}");
                fallback
            }
        };

        Self::new(initial).persisting(persistence)
    }

    /// Saves every later change to `persistence` without loading from it.
    ///
    /// Used when the initial theme is an explicit override that must not
    /// replace the stored preference.
    #[must_use]
    pub fn persisting(mut self, persistence: Box<dyn ThemePersistence>) -> Self {
        self.persistence = Some(persistence);
        self
    }

    /// Returns the active theme.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the theme and notifies every observer.
    pub fn toggle_theme(&mut self) {
        self.apply(self.theme.toggled());
    }

    /// Sets the theme explicitly. Observers only hear about actual changes.
    pub fn set_theme(&mut self, theme: Theme) {
        if theme != self.theme {
            self.apply(theme);
        }
    }

    /// Registers an observer called with the new theme after each change.
    pub fn subscribe(&mut self, observer: impl FnMut(Theme) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Number of live observers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    fn apply(&mut self, theme: Theme) {
        debug!(from = %self.theme, to = %theme, "theme changed");
        self.theme = theme;

        if let Some(persistence) = self.persistence.as_mut() {
            if let Err(e) = persistence.save(theme) {
                warn!("Failed to persist theme: {e:#}");
            }
        }

        for (_, observer) in &mut self.observers {
            observer(theme);
        }
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.theme)
            .field("observers", &self.observers.len())
            .field("persistent", &self.persistence.is_some())
            .finish()
    }
}

/// Persists the theme as `ui.last_theme` in the application config file.
///
/// The file is re-read before every write so edits made while the app runs
/// are kept.
#[derive(Debug, Clone)]
pub struct ConfigThemePersistence {
    path: PathBuf,
}

impl ConfigThemePersistence {
    /// Persistence backed by the config file at `path`.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Persistence backed by the default platform config file.
    pub fn from_default_location() -> Result<Self> {
        Ok(Self::new(Config::config_file_path()?))
    }
}

impl ThemePersistence for ConfigThemePersistence {
    fn load(&self) -> Result<Option<Theme>> {
        Ok(Config::load_from(&self.path)?.ui.last_theme)
    }

    fn save(&mut self, theme: Theme) -> Result<()> {
        let mut config = Config::load_from(&self.path)?;
        config.ui.last_theme = Some(theme);
        config.save_to(&self.path)
    }
}
