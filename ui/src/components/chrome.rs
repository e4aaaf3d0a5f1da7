//! Header/footer text: Fluent defaults overridden by the common table.

use std::collections::HashMap;

use crate::core::config::SiteConfig;
use crate::core::lang::Language;
use crate::i18n;
use crate::translations::{apply_translations, TextSlot, TranslationTable};

/// Resolved chrome strings for one language.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChromeText {
    texts: HashMap<String, String>,
}

impl ChromeText {
    pub fn resolve(config: &SiteConfig, lang: Language, common: &TranslationTable) -> Self {
        let mut slots = vec![
            TextSlot::new("site.title", i18n::message(lang, "site-title")),
            TextSlot::new("site.tagline", i18n::message(lang, "site-tagline")),
            TextSlot::new("footer.note", i18n::message(lang, "footer-note")),
        ];
        slots.extend(config.nav_pages.iter().map(|page| {
            TextSlot::new(format!("nav.{page}"), i18n::message(lang, &format!("nav-{page}")))
        }));

        apply_translations(&mut slots, common, lang);

        Self {
            texts: slots.into_iter().map(|slot| (slot.key, slot.text)).collect(),
        }
    }

    /// Text for `key`, or the key itself when nothing provides it.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.texts.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn nav_label(&self, page: &str) -> &str {
        self.texts
            .get(&format!("nav.{page}"))
            .map(String::as_str)
            .unwrap_or_default()
    }
}
