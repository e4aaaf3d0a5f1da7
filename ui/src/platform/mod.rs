//! Thin adapters between the pure core and the host environment.
//!
//! On `wasm32` these talk to the browser (location hash, `localStorage`,
//! `fetch`, DOM mutation). Native builds get inert stand-ins so the shared
//! crate still compiles and tests run without a browser.

use crate::calendar::{render_year, CalendarLabels, YearDefinition};
use crate::core::lang::Language;
use crate::router::PageId;

#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
pub use web::*;

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(not(target_arch = "wasm32"))]
pub use native::*;

/// Id of the element hosting fetched page fragments.
pub const CONTENT_REGION: &str = "content";

/// Point the location at `page`; the hash-change listener does the loading.
pub fn navigate(page: &PageId) {
    set_hash(&page.hash());
}

/// Render every year for `lang` as `(year id, markup)` pairs.
pub fn calendar_markup(years: &[YearDefinition], lang: Language) -> Vec<(String, String)> {
    let labels = CalendarLabels::localized(lang);
    years
        .iter()
        .map(|year| {
            let view = render_year(year, &labels);
            (year.id().to_string(), view.to_html(&labels))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::builtin_years;

    #[test]
    fn markup_is_produced_per_year() {
        let years = builtin_years().unwrap();
        let markup = calendar_markup(&years, Language::Ru);
        let ids: Vec<&str> = markup.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["year0", "year1"]);
        assert!(markup[0].1.contains(r#"<span class="calendar-month__name">Декабрь</span>"#));
        assert!(markup[0].1.contains("55 дней (короткий)"));
        assert!(markup[1].1.contains(r#"data-year="year1""#));
    }
}
