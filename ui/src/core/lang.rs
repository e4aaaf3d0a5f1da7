//! Supported site languages.

use std::fmt;
use std::str::FromStr;

use dioxus::logger::tracing;
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use super::prefs::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    En,
    Es,
    Fr,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::Ru, Language::En, Language::Es, Language::Fr];

    /// Code used in translation documents, `data-lang` controls and storage.
    pub fn code(self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
        }
    }

    /// Native name shown on the language switcher.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Ru => "Русский",
            Language::En => "English",
            Language::Es => "Español",
            Language::Fr => "Français",
        }
    }

    pub fn identifier(self) -> LanguageIdentifier {
        // Codes are plain ISO 639-1 subtags.
        self.code()
            .parse()
            .unwrap_or_else(|_| LanguageIdentifier::default())
    }

    /// First supported language among `requested` (e.g. `navigator.languages`).
    pub fn negotiate<'a, I>(requested: I) -> Option<Language>
    where
        I: IntoIterator<Item = &'a LanguageIdentifier>,
    {
        requested
            .into_iter()
            .find_map(|id| id.language.as_str().parse().ok())
    }

    /// Language to start with: a valid stored preference wins over the
    /// requested languages, which win over `default`.
    pub fn restore(
        stored: Option<&str>,
        requested: &[LanguageIdentifier],
        default: Language,
    ) -> Language {
        stored
            .and_then(|raw| raw.parse().ok())
            .or_else(|| Language::negotiate(requested))
            .unwrap_or(default)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code `{0}`")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        // Accept region-qualified tags such as `fr-CA`.
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == primary)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// Where the active language becomes visible (`<html lang>` on the web).
pub trait LanguageSurface {
    fn show_language(&self, lang: Language);
}

/// Show `lang` on `surface` and persist it under `key`.
pub fn switch_language<S, D>(store: &S, surface: &D, key: &str, lang: Language)
where
    S: PreferenceStore,
    D: LanguageSurface,
{
    surface.show_language(lang);
    if let Err(err) = store.set(key, lang.code()) {
        tracing::warn!("[i18n] could not persist language: {err}");
    }
}
