//! Browser adapters built on `web-sys`.

use std::cell::RefCell;

use dioxus::logger::tracing;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, Response, Window};

use super::calendar_markup;
use crate::calendar::{YearDefinition, CONTAINER_ATTRIBUTE};
use crate::core::lang::{Language, LanguageSurface};
use crate::core::prefs::{PrefError, PreferenceStore};
use crate::core::theme::{Theme, ThemeSurface};
use crate::router::{FetchError, FragmentSource};
use crate::translations::{apply_translations, TranslationTable, TranslationTarget, KEY_ATTRIBUTE};

pub type SiteSource = HttpSource;
pub type SiteStore = LocalStore;

const REVEALED_CLASS: &str = "revealed";
const ACTIVE_CLASS: &str = "active";

fn window() -> Option<Window> {
    web_sys::window()
}

fn document() -> Option<Document> {
    window()?.document()
}

fn select_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn site_source() -> SiteSource {
    HttpSource
}

pub fn site_store() -> SiteStore {
    LocalStore
}

/// `fetch()` relative to the page URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpSource;

impl FragmentSource for HttpSource {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let network = |reason: String| FetchError::Network {
            path: path.to_string(),
            reason,
        };
        let body = || FetchError::Body {
            path: path.to_string(),
        };

        let window = window().ok_or_else(|| network("no window".into()))?;
        let value = JsFuture::from(window.fetch_with_str(path))
            .await
            .map_err(|err| network(format!("{err:?}")))?;
        let response: Response = value.dyn_into().map_err(|_| body())?;
        if !response.ok() {
            return Err(FetchError::Status {
                path: path.to_string(),
                status: response.status(),
            });
        }
        let text = response.text().map_err(|_| body())?;
        JsFuture::from(text)
            .await
            .ok()
            .and_then(|value| value.as_string())
            .ok_or_else(body)
    }
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefError> {
        let storage = Self::storage().ok_or(PrefError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| PrefError::Rejected {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }
}

/// `data-theme` on `<html>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

impl ThemeSurface for DocumentRoot {
    fn apply(&self, theme: Theme) {
        let Some(root) = document().and_then(|doc| doc.document_element()) else {
            return;
        };
        if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
            tracing::warn!("[theme] could not apply {theme}: {err:?}");
        }
    }
}

/// `lang` on `<html>`.
impl LanguageSurface for DocumentRoot {
    fn show_language(&self, lang: Language) {
        if let Some(root) = document().and_then(|doc| doc.document_element()) {
            if let Err(err) = root.set_attribute("lang", lang.code()) {
                tracing::warn!("[i18n] could not set document language {lang}: {err:?}");
            }
        }
    }
}

pub fn current_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

pub fn set_hash(hash: &str) {
    let Some(window) = window() else {
        return;
    };
    if let Err(err) = window.location().set_hash(hash) {
        tracing::warn!("[router] could not set location hash `{hash}`: {err:?}");
    }
}

/// Call `handler` with the new hash on every `hashchange` event.
pub fn on_hash_change(mut handler: impl FnMut(String) + 'static) {
    let Some(window) = window() else {
        return;
    };
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        handler(current_hash());
    });
    if let Err(err) =
        window.add_event_listener_with_callback("hashchange", callback.as_ref().unchecked_ref())
    {
        tracing::error!("[router] hashchange listener not installed: {err:?}");
    }
    // Lives as long as the page.
    callback.forget();
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

struct DomTarget(Element);

impl TranslationTarget for DomTarget {
    fn translation_key(&self) -> Option<String> {
        self.0.get_attribute(KEY_ATTRIBUTE)
    }

    fn set_text(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// Apply `table` to every `[data-i18n]` element inside `#region`.
pub fn translate_region(region: &str, table: &TranslationTable, lang: Language) -> usize {
    let mut targets: Vec<DomTarget> = select_all(&format!("#{region} [{KEY_ATTRIBUTE}]"))
        .into_iter()
        .map(DomTarget)
        .collect();
    apply_translations(&mut targets, table, lang)
}

/// Replace the contents of each year's container inside `#region`.
pub fn mount_calendars(region: &str, years: &[YearDefinition], lang: Language) -> usize {
    let mut mounted = 0;
    for (id, html) in calendar_markup(years, lang) {
        let containers = select_all(&format!("#{region} [{CONTAINER_ATTRIBUTE}=\"{id}\"]"));
        if containers.is_empty() {
            tracing::warn!("[calendar] no container for `{id}`; skipping");
            continue;
        }
        for container in containers {
            container.set_inner_html(&html);
            mounted += 1;
        }
    }
    mounted
}

/// One delegated click listener activating `[data-tab]` controls and their
/// `[data-tab-panel]` inside the enclosing `[data-tabs]` group.
pub fn install_tab_switching() {
    let Some(document) = document() else {
        return;
    };
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        let Some(control) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("[data-tab]").ok().flatten())
        else {
            return;
        };
        let Some(group) = control.closest("[data-tabs]").ok().flatten() else {
            return;
        };
        let Some(name) = control.get_attribute("data-tab") else {
            return;
        };
        activate_tab(&group, &name);
    });
    if let Err(err) =
        document.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
    {
        tracing::warn!("[tabs] click listener not installed: {err:?}");
    }
    callback.forget();
}

fn activate_tab(group: &Element, name: &str) {
    for (selector, attribute) in [("[data-tab]", "data-tab"), ("[data-tab-panel]", "data-tab-panel")] {
        let Ok(list) = group.query_selector_all(selector) else {
            continue;
        };
        for el in (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
        {
            let active = el.get_attribute(attribute).as_deref() == Some(name);
            let _ = el.class_list().toggle_with_force(ACTIVE_CLASS, active);
        }
    }
}

thread_local! {
    static REVEAL_OBSERVER: RefCell<Option<IntersectionObserver>> = const { RefCell::new(None) };
}

fn reveal_observer() -> Option<IntersectionObserver> {
    REVEAL_OBSERVER.with(|slot| {
        if let Some(observer) = slot.borrow().as_ref() {
            return Some(observer.clone());
        }
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let target = entry.target();
                        let _ = target.class_list().add_1(REVEALED_CLASS);
                        observer.unobserve(&target);
                    }
                }
            },
        );
        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|err| tracing::warn!("[reveal] observer unavailable: {err:?}"))
            .ok()?;
        callback.forget();
        *slot.borrow_mut() = Some(observer.clone());
        Some(observer)
    })
}

/// Start watching the `[data-reveal]` elements of `#region`.
pub fn observe_reveal(region: &str) {
    let Some(observer) = reveal_observer() else {
        return;
    };
    for el in select_all(&format!("#{region} [data-reveal]:not(.{REVEALED_CLASS})")) {
        observer.observe(&el);
    }
}
