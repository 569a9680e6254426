//! Light/dark theme preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage::PreferenceStore;

/// Storage key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "portfolio-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Toggle button glyph: the sun offers a way out of dark mode, the moon a
    /// way into it.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "☀",
            Self::Light => "☾",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
}

impl ThemeState {
    /// Read the stored preference, falling back to light.
    pub fn load(store: &impl PreferenceStore) -> Self {
        let theme = store
            .load(STORAGE_KEY)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default();
        Self { theme }
    }

    /// Flip the theme and persist it. A failed write is logged and otherwise
    /// ignored; the in-memory theme still changes.
    pub fn toggle(&mut self, store: &impl PreferenceStore) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = store.save(STORAGE_KEY, self.theme.as_str()) {
            log::warn!("theme preference not saved: {e}");
        }
        self.theme
    }
}
