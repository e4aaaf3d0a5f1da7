use dioxus::logger::tracing;

use super::page::PageId;
use super::source::{FetchError, FragmentSource};
use crate::translations::TranslationTable;

/// Outcome of the primary HTML fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum PageBody {
    Html(String),
    Failed(FetchError),
}

/// Everything fetched for one navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct PageFragment {
    pub page: PageId,
    pub body: PageBody,
    /// Page stylesheet; `None` when it is missing or unreachable.
    pub css: Option<String>,
    /// Page-scoped translations; empty when missing or malformed.
    pub translations: TranslationTable,
}

impl PageFragment {
    pub fn is_failed(&self) -> bool {
        matches!(self.body, PageBody::Failed(_))
    }
}

/// Fetch the HTML, CSS and translation resources of `page`.
///
/// Only the HTML fetch is fatal: when it fails the other two are not
/// requested. CSS and translation failures degrade to an unstyled or
/// untranslated page.
pub async fn load_fragment<S: FragmentSource>(source: &S, page: &PageId) -> PageFragment {
    let resources = page.resources();

    let html = match source.fetch_text(&resources.html).await {
        Ok(html) => html,
        Err(err) => {
            tracing::error!("[router] failed loading page `{page}`: {err}");
            return PageFragment {
                page: page.clone(),
                body: PageBody::Failed(err),
                css: None,
                translations: TranslationTable::new(),
            };
        }
    };

    let css = match source.fetch_text(&resources.css).await {
        Ok(css) => Some(css),
        Err(err) => {
            tracing::debug!("[router] no stylesheet for `{page}`: {err}");
            None
        }
    };

    let translations = load_translations(source, &resources.json).await;

    PageFragment {
        page: page.clone(),
        body: PageBody::Html(html),
        css,
        translations,
    }
}

/// Fetch and parse a translation document; any failure yields an empty table.
pub async fn load_translations<S: FragmentSource>(source: &S, path: &str) -> TranslationTable {
    let raw = match source.fetch_text(path).await {
        Ok(raw) => raw,
        Err(err) => {
            tracing::debug!("[i18n] no translations at `{path}`: {err}");
            return TranslationTable::new();
        }
    };
    TranslationTable::from_json(&raw).unwrap_or_else(|err| {
        tracing::warn!("[i18n] ignoring `{path}`: {err}");
        TranslationTable::new()
    })
}
