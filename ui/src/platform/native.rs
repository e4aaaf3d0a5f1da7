//! Native stand-ins: no location, no DOM, fragments read from disk.

use dioxus::logger::tracing;

use crate::calendar::YearDefinition;
use crate::core::lang::{Language, LanguageSurface};
use crate::core::prefs::MemoryStore;
use crate::core::theme::{Theme, ThemeSurface};
use crate::router::DirSource;
use crate::translations::TranslationTable;

pub type SiteSource = DirSource;
pub type SiteStore = MemoryStore;

/// Fragments served from `public/` relative to the working directory.
pub fn site_source() -> SiteSource {
    DirSource::new("public")
}

pub fn site_store() -> SiteStore {
    MemoryStore::new()
}

pub fn current_hash() -> String {
    String::new()
}

pub fn set_hash(hash: &str) {
    tracing::debug!("[platform] set_hash({hash}) ignored outside the browser");
}

pub fn on_hash_change(_handler: impl FnMut(String) + 'static) {}

pub fn scroll_to_top() {}

pub fn translate_region(_region: &str, _table: &TranslationTable, _lang: Language) -> usize {
    0
}

pub fn mount_calendars(_region: &str, _years: &[YearDefinition], _lang: Language) -> usize {
    0
}

pub fn install_tab_switching() {}

pub fn observe_reveal(_region: &str) {}

#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

impl ThemeSurface for DocumentRoot {
    fn apply(&self, theme: Theme) {
        tracing::debug!("[theme] {theme}");
    }
}

impl LanguageSurface for DocumentRoot {
    fn show_language(&self, lang: Language) {
        tracing::debug!("[i18n] document language {lang}");
    }
}
