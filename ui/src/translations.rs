//! Fetched translation tables and the applier that rewrites tagged text.
//!
//! Documents look like
//! ```json
//! { "en": { "title": "Welcome", "nav": { "home": "Home" } },
//!   "fr": { "title": "Bienvenue" } }
//! ```
//! One level of nesting is accepted and flattened to `outer.inner` keys.

use std::collections::HashMap;

use dioxus::logger::tracing;
use serde_json::Value;

use crate::core::lang::Language;

/// Attribute marking an element whose text comes from a translation table.
pub const KEY_ATTRIBUTE: &str = "data-i18n";

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("translation document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("translation document must be an object keyed by language code")]
    Shape,
}

/// language code → key → display string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationTable {
    by_language: HashMap<String, HashMap<String, String>>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(raw: &str) -> Result<Self, TranslationError> {
        let doc: Value = serde_json::from_str(raw)?;
        let Value::Object(languages) = doc else {
            return Err(TranslationError::Shape);
        };

        let mut by_language = HashMap::with_capacity(languages.len());
        for (code, entries) in languages {
            let Value::Object(entries) = entries else {
                tracing::debug!("[i18n] skipping non-object section `{code}`");
                continue;
            };
            let mut flat = HashMap::with_capacity(entries.len());
            for (key, value) in entries {
                match value {
                    Value::String(text) => {
                        flat.insert(key, text);
                    }
                    Value::Object(nested) => {
                        for (inner, value) in nested {
                            if let Value::String(text) = value {
                                flat.insert(format!("{key}.{inner}"), text);
                            }
                        }
                    }
                    _ => {}
                }
            }
            by_language.insert(code.to_ascii_lowercase(), flat);
        }
        Ok(Self { by_language })
    }

    pub fn insert(&mut self, lang: Language, key: impl Into<String>, text: impl Into<String>) {
        self.by_language
            .entry(lang.code().to_string())
            .or_default()
            .insert(key.into(), text.into());
    }

    /// Text for `key` in `lang`, `None` when either is absent.
    pub fn lookup(&self, lang: Language, key: &str) -> Option<&str> {
        self.by_language
            .get(lang.code())
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.by_language.values().all(HashMap::is_empty)
    }
}

/// Something carrying an optional translation key and replaceable text.
pub trait TranslationTarget {
    fn translation_key(&self) -> Option<String>;

    fn set_text(&mut self, text: &str);
}

/// Rewrite every target whose key is present in `table` for `lang`; targets
/// with unknown keys keep their current text. Returns the rewrite count.
pub fn apply_translations<'a, T, I>(targets: I, table: &TranslationTable, lang: Language) -> usize
where
    T: TranslationTarget + 'a,
    I: IntoIterator<Item = &'a mut T>,
{
    let mut applied = 0;
    for target in targets {
        let Some(key) = target.translation_key() else {
            continue;
        };
        if let Some(text) = table.lookup(lang, &key) {
            target.set_text(text);
            applied += 1;
        }
    }
    applied
}

/// A piece of Rust-rendered chrome text (header/footer).
#[derive(Debug, Clone, PartialEq)]
pub struct TextSlot {
    pub key: String,
    pub text: String,
}

impl TextSlot {
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
        }
    }
}

impl TranslationTarget for TextSlot {
    fn translation_key(&self) -> Option<String> {
        Some(self.key.clone())
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "en": { "title": "Welcome", "nav": { "home": "Home", "about": "About" } },
        "ru": { "title": "Добро пожаловать" },
        "fr": 42
    }"#;

    #[test]
    fn parses_flat_and_nested_keys() {
        let table = TranslationTable::from_json(DOC).unwrap();
        assert_eq!(table.lookup(Language::En, "title"), Some("Welcome"));
        assert_eq!(table.lookup(Language::En, "nav.about"), Some("About"));
        assert_eq!(table.lookup(Language::Ru, "title"), Some("Добро пожаловать"));
        assert_eq!(table.lookup(Language::Ru, "nav.home"), None);
        assert_eq!(table.lookup(Language::Fr, "title"), None);
    }

    #[test]
    fn rejects_non_object_documents() {
        assert!(matches!(
            TranslationTable::from_json("[1, 2]"),
            Err(TranslationError::Shape)
        ));
        assert!(matches!(
            TranslationTable::from_json("{ nope"),
            Err(TranslationError::Json(_))
        ));
    }

    #[test]
    fn applier_rewrites_known_keys_and_leaves_the_rest() {
        let table = TranslationTable::from_json(DOC).unwrap();
        let mut slots = vec![
            TextSlot::new("title", "Default title"),
            TextSlot::new("missing", "Keep me"),
            TextSlot::new("nav.home", "Start"),
        ];

        let applied = apply_translations(&mut slots, &table, Language::En);
        assert_eq!(applied, 2);
        assert_eq!(slots[0].text, "Welcome");
        assert_eq!(slots[1].text, "Keep me");
        assert_eq!(slots[2].text, "Home");

        // Switching language rewrites only what the new table provides.
        let applied = apply_translations(&mut slots, &table, Language::Ru);
        assert_eq!(applied, 1);
        assert_eq!(slots[0].text, "Добро пожаловать");
        assert_eq!(slots[2].text, "Home");
    }

    #[test]
    fn empty_table_is_a_no_op() {
        let mut slots = vec![TextSlot::new("title", "Default")];
        assert_eq!(
            apply_translations(&mut slots, &TranslationTable::new(), Language::Es),
            0
        );
        assert_eq!(slots[0].text, "Default");
    }
}
