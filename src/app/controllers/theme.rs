//! Light/dark display mode and its persisted preference.
//!
//! The controller is the only writer of the display mode. The UI reads it
//! through [`ThemeController::display_mode`] and repaints.

use tracing::{info, warn};

use crate::app::infrastructure::preferences::PreferenceStore;

/// Name of the preference store holding the theme flag
pub const THEME_STORE_NAME: &str = "ThemePrefs";
/// Key of the theme flag inside the store
pub const DARK_MODE_KEY: &str = "isDarkMode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

pub struct ThemeController<S: PreferenceStore> {
    store: S,
    mode: DisplayMode,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Starts in light mode until [`initialize`](Self::initialize) reads the store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            mode: DisplayMode::Light,
        }
    }

    /// Read the persisted flag (default light), apply it and return it so a
    /// reflecting switch can be synced without firing its callback.
    pub fn initialize(&mut self) -> bool {
        let is_dark = self.store.get_bool(DARK_MODE_KEY, false);
        self.mode = DisplayMode::from_dark(is_dark);
        info!("Theme initialized: {:?}", self.mode);
        is_dark
    }

    /// Apply `is_dark` and write it through. The write happens even when the
    /// value is unchanged; a failed write is logged and the new mode still applies.
    pub fn toggle(&mut self, is_dark: bool) {
        self.mode = DisplayMode::from_dark(is_dark);
        if let Err(e) = self.store.put_bool(DARK_MODE_KEY, is_dark) {
            warn!("Failed to persist theme preference: {}", e);
        }
        info!("Theme set to {:?}", self.mode);
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back, e.g. to reopen it as a fresh process would.
    pub fn into_store(self) -> S {
        self.store
    }
}
