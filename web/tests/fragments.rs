#![cfg(test)]
//! Static checks on what the web crate ships next to the bundle: the global
//! theme and the per-page fragment triples under `public/`.

use std::fs;
use std::path::PathBuf;

const THEME_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/main.css"));

const LANGUAGES: &[&str] = &["ru", "en", "es", "fr"];

/// Selectors the Rust-rendered markup relies on.
const REQUIRED_SELECTORS: &[&str] = &[
    ":root",
    ":root[data-theme=\"night\"]",
    ":root[data-theme=\"auto\"]",
    "@media (prefers-color-scheme: dark)",
    "body {",
    ".content {",
    ".page-error",
    ".button--primary",
    "[data-tab-panel].active",
    "[data-reveal].revealed",
    ".calendar-month--short",
    ".calendar-month__count--short",
    ".calendar-day--weekend",
    ".calendar-day--holiday",
    "@media (max-width: 720px)",
];

fn public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

fn read_json(path: PathBuf) -> serde_json::Value {
    let raw = fs::read_to_string(&path).unwrap_or_else(|err| panic!("{}: {err}", path.display()));
    serde_json::from_str(&raw).unwrap_or_else(|err| panic!("{}: {err}", path.display()))
}

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();
    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens in main.css:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn every_navigation_page_ships_its_fragment_triple() {
    for page in &ui::core::config::SiteConfig::default().nav_pages {
        for ext in ["html", "css", "json"] {
            let path = public_dir().join(page).join(format!("{page}.{ext}"));
            assert!(path.is_file(), "missing {}", path.display());
        }
    }
}

#[test]
fn translation_documents_cover_every_language() {
    let config = ui::core::config::SiteConfig::default();
    let mut docs: Vec<PathBuf> = config
        .nav_pages
        .iter()
        .map(|page| public_dir().join(page).join(format!("{page}.json")))
        .collect();
    docs.push(public_dir().join(&config.common_translations));

    for path in docs {
        let doc = read_json(path.clone());
        for lang in LANGUAGES {
            assert!(
                doc.get(lang).is_some_and(|section| section.is_object()),
                "{} has no `{lang}` section",
                path.display()
            );
        }
    }
}

#[test]
fn fragment_keys_exist_in_the_fallback_language() {
    for page in &ui::core::config::SiteConfig::default().nav_pages {
        let html = fs::read_to_string(public_dir().join(page).join(format!("{page}.html")))
            .unwrap_or_else(|err| panic!("{page}: {err}"));
        let table = ui::translations::TranslationTable::from_json(
            &fs::read_to_string(public_dir().join(page).join(format!("{page}.json"))).unwrap(),
        )
        .unwrap();

        for chunk in html.split("data-i18n=\"").skip(1) {
            let key = chunk.split('"').next().unwrap_or_default();
            assert!(
                table.lookup(ui::core::lang::Language::En, key).is_some(),
                "{page}: key `{key}` has no English text"
            );
        }
    }
}
