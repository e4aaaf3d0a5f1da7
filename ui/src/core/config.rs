//! Site-wide configuration shared through the Dioxus context.

use serde::Deserialize;

use super::lang::Language;

/// Static description of the site: which pages exist, where shared
/// resources live and how preferences are namespaced.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Page shown when the location carries no fragment.
    pub default_page: String,
    /// Pages listed in the header navigation, in display order.
    pub nav_pages: Vec<String>,
    /// Page whose fragment hosts the calendar containers.
    pub calendar_page: String,
    /// Common (header/footer) translation document.
    pub common_translations: String,
    /// Prefix for persisted preference keys of this page family.
    pub storage_namespace: String,
    pub default_language: Language,
}

impl SiteConfig {
    pub fn theme_key(&self) -> String {
        format!("{}.theme", self.storage_namespace)
    }

    pub fn language_key(&self) -> String {
        format!("{}.lang", self.storage_namespace)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_page: "home".into(),
            nav_pages: vec!["home".into(), "about".into(), "calendar".into()],
            calendar_page: "calendar".into(),
            common_translations: "menu.json".into(),
            storage_namespace: "almanac".into(),
            default_language: Language::Ru,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_namespaced() {
        let cfg = SiteConfig {
            storage_namespace: "archive".into(),
            ..SiteConfig::default()
        };
        assert_eq!(cfg.theme_key(), "archive.theme");
        assert_eq!(cfg.language_key(), "archive.lang");
    }

    #[test]
    fn defaults_to_russian_home_page() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.default_language, Language::Ru);
        assert_eq!(cfg.default_page, "home");
    }

    #[test]
    fn partial_document_falls_back_to_defaults() {
        let cfg: SiteConfig =
            serde_json::from_str(r#"{ "default_page": "about", "default_language": "fr" }"#).unwrap();
        assert_eq!(cfg.default_page, "about");
        assert_eq!(cfg.default_language, Language::Fr);
        assert_eq!(cfg.common_translations, "menu.json");
    }
}
