//! Localization of the Rust-rendered chrome (header, footer, error view,
//! calendar labels).
//!
//! Fetched page fragments carry their own JSON translation tables (see
//! [`crate::translations`]); this module only covers strings owned by the
//! application itself. It wires together:
//! - `i18n-embed` (bundle selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en/almanac_ui.ftl   (fallback/reference)
//!   ru/almanac_ui.ftl
//!   es/almanac_ui.ftl
//!   fr/almanac_ui.ftl
//! ```
//!
//! Every supported [`Language`] gets its own loader so that any language can
//! be rendered without switching a global selection:
//! ```ignore
//! use ui::core::lang::Language;
//! let label = ui::t!(Language::Fr, "nav-home");
//! ```
use std::collections::HashMap;

use dioxus::logger::tracing;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::lang::Language;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Translation macro bound to one language's loader.
/// Examples:
///     t!(lang, "nav-home")
///     t!(lang, "error-body", page = "contacts")
#[macro_export]
macro_rules! t {
    ($lang:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key)
    };
    ($lang:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "almanac_ui";

const FALLBACK: Language = Language::En;

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

static LOADERS: Lazy<HashMap<Language, FluentLanguageLoader>> = Lazy::new(|| {
    Language::ALL
        .into_iter()
        .map(|lang| (lang, build_loader(lang)))
        .collect()
});

static FALLBACK_LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(FALLBACK));

fn build_loader(lang: Language) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, FALLBACK.identifier());
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[lang.identifier()]) {
        tracing::warn!("[i18n] Failed loading `{lang}` ({err}); continuing with fallback");
    }
    loader
}

/// Loader for `lang`; messages missing in that locale resolve to English.
pub fn loader(lang: Language) -> &'static FluentLanguageLoader {
    LOADERS.get(&lang).unwrap_or(&FALLBACK_LOADER)
}

/// Runtime (unchecked) lookup for computed message ids such as `month-3`.
pub fn message(lang: Language, id: &str) -> String {
    loader(lang).get(id)
}

/// List available (embedded) locale folders.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Languages the browser (or OS) asks for, most preferred first.
#[cfg(target_arch = "wasm32")]
pub fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
