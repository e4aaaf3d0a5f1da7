//! Day/night theme cycle.

use std::fmt;
use std::str::FromStr;

use dioxus::logger::tracing;

use super::prefs::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Follow the system colour scheme.
    #[default]
    Auto,
    Day,
    Night,
}

impl Theme {
    /// Next theme in the `auto → day → night → auto` cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::Auto => Theme::Day,
            Theme::Day => Theme::Night,
            Theme::Night => Theme::Auto,
        }
    }

    /// Value written to the `data-theme` attribute and to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Auto => "auto",
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}`")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "auto" => Ok(Theme::Auto),
            "day" => Ok(Theme::Day),
            "night" => Ok(Theme::Night),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Where the active theme becomes visible (the document root on the web).
pub trait ThemeSurface {
    fn apply(&self, theme: Theme);
}

pub struct ThemeController<S, T> {
    store: S,
    surface: T,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore, T: ThemeSurface> ThemeController<S, T> {
    /// Restore the persisted theme (default [`Theme::Auto`]) and apply it.
    pub fn init(store: S, surface: T, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = match store.get(&key) {
            Some(raw) => raw.parse().unwrap_or_else(|err: UnknownTheme| {
                tracing::warn!("[theme] ignoring stored value: {err}");
                Theme::default()
            }),
            None => Theme::default(),
        };
        surface.apply(current);
        Self {
            store,
            surface,
            key,
            current,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Advance one step, apply and persist. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.next();
        self.surface.apply(self.current);
        if let Err(err) = self.store.set(&self.key, self.current.as_str()) {
            tracing::warn!("[theme] could not persist `{}`: {err}", self.current);
        }
        self.current
    }
}
