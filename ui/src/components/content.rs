use dioxus::prelude::*;

use crate::core::lang::Language;
use crate::platform::CONTENT_REGION;
use crate::router::{ContentState, PageId, PageStyle};
use crate::t;

/// Localized copy of the error view shown when a page fails to load.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorCopy {
    pub title: String,
    pub body: String,
    pub back_label: String,
    pub back_href: String,
}

impl ErrorCopy {
    pub fn new(page: &PageId, home: &PageId, language: Language) -> Self {
        Self {
            title: t!(language, "error-title"),
            body: t!(language, "error-body", page = page.as_str()),
            back_label: t!(language, "error-back"),
            back_href: home.hash(),
        }
    }
}

/// The region fetched fragments are swapped into, plus the current page's
/// injected `<style>` (at most one at a time, tagged with its page id).
#[component]
pub fn ContentRegion(
    content: ContentState,
    style: Option<PageStyle>,
    language: Language,
    home: PageId,
) -> Element {
    rsx! {
        if let Some(sheet) = style {
            style { "data-page": "{sheet.page}", "{sheet.css}" }
        }
        main { id: CONTENT_REGION, class: "content",
            {match content {
                ContentState::Loading(page) => rsx! {
                    p { class: "content__loading", "data-page": "{page}", {t!(language, "content-loading")} }
                },
                ContentState::Ready { page, html } => rsx! {
                    div {
                        class: "page page-{page}",
                        "data-page": "{page}",
                        dangerous_inner_html: "{html}",
                    }
                },
                ContentState::Failed { page, .. } => rsx! {
                    ErrorView { copy: ErrorCopy::new(&page, &home, language), page }
                },
            }}
        }
    }
}

#[component]
pub fn ErrorView(copy: ErrorCopy, page: PageId) -> Element {
    rsx! {
        section { class: "page page-error", "data-page": "{page}",
            h1 { "{copy.title}" }
            p { "{copy.body}" }
            a { class: "button button--primary", href: "{copy.back_href}", "{copy.back_label}" }
        }
    }
}
