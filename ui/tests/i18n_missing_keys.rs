use std::collections::{BTreeSet, HashSet};

/// Translation completeness test.
/// Ensures every non‑fallback locale provides *at least* the keys present
/// in the fallback (en) `almanac_ui.ftl`.
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
///
/// If you add a new locale:
/// 1. Create `ui/i18n/<locale>/almanac_ui.ftl`
/// 2. Copy all keys from `en/almanac_ui.ftl`
/// 3. Add a `Language` variant and register the file below.
#[test]
fn all_locales_have_all_fallback_keys() {
    const EN: &str = include_str!("../i18n/en/almanac_ui.ftl");
    const RU: &str = include_str!("../i18n/ru/almanac_ui.ftl");
    const ES: &str = include_str!("../i18n/es/almanac_ui.ftl");
    const FR: &str = include_str!("../i18n/fr/almanac_ui.ftl");

    let fallback_keys = extract_keys(EN);
    assert!(!fallback_keys.is_empty(), "Fallback (en) contains no keys.");
    assert_no_dup_keys(EN, "en");

    let locales: &[(&str, &str)] = &[("ru", RU), ("es", ES), ("fr", FR)];

    let mut failures = Vec::new();
    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let missing: BTreeSet<&String> = fallback_keys.difference(&keys).collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en, then translate.",
            failures.join("\n\n")
        );
    }
}

/// Month, weekday and holiday ids are looked up at runtime, so `fl!`
/// cannot check them at compile time.
#[test]
fn computed_calendar_ids_exist_in_fallback() {
    let keys = extract_keys(include_str!("../i18n/en/almanac_ui.ftl"));
    let config = ui::core::config::SiteConfig::default();
    let computed = (1..=12)
        .map(|n| format!("month-{n}"))
        .chain((1..=7).map(|n| format!("weekday-{n}")))
        .chain(ui::calendar::HOLIDAY_TAGS.iter().map(|tag| format!("holiday-{tag}")))
        .chain(config.nav_pages.iter().map(|p| format!("nav-{p}")));
    let missing: Vec<String> = computed.filter(|id| !keys.contains(id)).collect();
    assert!(missing.is_empty(), "missing computed ids: {missing:?}");
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    let mut keys = HashSet::new();

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            if is_message_id(key) {
                keys.insert(key.to_string());
            }
        }
    }

    keys
}

fn is_message_id(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('-')
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Assert no duplicate key definitions in a single FTL file (rudimentary).
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for line in src.lines() {
        let raw = line;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            if is_message_id(key) && !seen.insert(key.to_string()) {
                dups.insert(format!("{key}  (line: \"{raw}\")"));
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
