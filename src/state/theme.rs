//! Light/dark theme preference.
//!
//! Dark is the default. A stored preference (`localStorage.theme`) pins the
//! theme; without one the page follows system color-scheme changes.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage::KeyValueStore;

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    const fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeState {
    dark: bool,
    preference: Option<Theme>,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            dark: true,
            preference: None,
        }
    }
}

impl ThemeState {
    /// Read the stored preference; unknown values count as none.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let preference = store.get(THEME_KEY).as_deref().and_then(Theme::parse);
        Self {
            dark: preference.is_none_or(|t| t == Theme::Dark),
            preference,
        }
    }

    pub fn is_dark(self) -> bool {
        self.dark
    }

    pub fn preference(self) -> Option<Theme> {
        self.preference
    }

    /// Flip the theme and store the choice.
    pub fn toggle(&mut self, store: &impl KeyValueStore) {
        self.dark = !self.dark;
        let theme = Theme::from_dark(self.dark);
        self.preference = Some(theme);
        store.set(THEME_KEY, theme.as_str());
    }

    /// Follow a system change unless a preference is stored. Returns
    /// whether the applied theme changed.
    pub fn on_system_change(&mut self, prefers_dark: bool) -> bool {
        if self.preference.is_some() || self.dark == prefers_dark {
            return false;
        }
        self.dark = prefers_dark;
        true
    }

    /// Forget the stored preference and adopt the system scheme now.
    pub fn use_system(&mut self, store: &impl KeyValueStore, prefers_dark: bool) {
        store.remove(THEME_KEY);
        self.preference = None;
        self.dark = prefers_dark;
    }
}
