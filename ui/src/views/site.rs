use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing;
use dioxus::prelude::*;
use futures_channel::mpsc;
use futures_util::StreamExt;

use crate::calendar::builtin_years;
use crate::components::{AppFooter, AppHeader, ChromeText, ContentRegion};
use crate::core::config::SiteConfig;
use crate::core::lang::{switch_language, Language, LanguageSurface};
use crate::core::prefs::PreferenceStore;
use crate::core::theme::ThemeController;
use crate::i18n;
use crate::platform::{self, DocumentRoot, SiteStore, CONTENT_REGION};
use crate::router::{
    load_fragment, load_translations, ContentState, FragmentSource, PageId, Session,
};

type Theming = Rc<RefCell<ThemeController<Rc<SiteStore>, DocumentRoot>>>;

/// One navigation: start, fetch, and commit unless a newer one started.
async fn load_page<S: FragmentSource>(mut session: Signal<Session>, source: &S, page: PageId) {
    let ticket = session.write().begin_navigation(page);
    let fragment = load_fragment(source, ticket.page()).await;
    if session.write().commit(&ticket, fragment) {
        platform::scroll_to_top();
    } else {
        tracing::debug!("[router] discarded stale result for `{}`", ticket.page());
    }
}

/// The whole site: chrome around a hash-routed content region.
#[component]
pub fn Site(config: SiteConfig) -> Element {
    let store = use_hook(|| Rc::new(platform::site_store()));
    let source = use_hook(|| Rc::new(platform::site_source()));
    let years = use_hook(|| {
        Rc::new(builtin_years().unwrap_or_else(|err| {
            tracing::error!("[calendar] {err}");
            Vec::new()
        }))
    });

    let mut session = use_signal({
        let store = store.clone();
        let config = config.clone();
        move || {
            let stored = store.get(&config.language_key());
            let language = Language::restore(
                stored.as_deref(),
                &i18n::requested_languages(),
                config.default_language,
            );
            DocumentRoot.show_language(language);
            Session::new(PageId::from_hash("", &config.default_page), language)
        }
    });

    let theming: Theming = use_hook({
        let store = store.clone();
        let key = config.theme_key();
        move || Rc::new(RefCell::new(ThemeController::init(store, DocumentRoot, key)))
    });
    let mut theme = use_signal({
        let theming = theming.clone();
        move || theming.borrow().current()
    });

    // Hash changes feed a channel drained by one task; navigations run
    // concurrently and the session drops superseded results.
    use_hook({
        let source = source.clone();
        let config = config.clone();
        move || {
            let (tx, rx) = mpsc::unbounded::<PageId>();
            let default_page = config.default_page.clone();
            let _ = tx.unbounded_send(PageId::from_hash(&platform::current_hash(), &default_page));
            platform::on_hash_change(move |hash| {
                let _ = tx.unbounded_send(PageId::from_hash(&hash, &default_page));
            });
            platform::install_tab_switching();

            let common = config.common_translations.clone();
            let common_source = source.clone();
            spawn(async move {
                let table = load_translations(&*common_source, &common).await;
                session.write().set_common_translations(table);
            });

            spawn(async move {
                rx.for_each_concurrent(None, |page| {
                    let source = source.clone();
                    async move { load_page(session, &*source, page).await }
                })
                .await;
            });
        }
    });

    // Runs after the content region is in the DOM: page translations,
    // calendars and reveal observers for the current language.
    use_effect({
        let years = years.clone();
        let calendar_page = config.calendar_page.clone();
        move || {
            let state = session.read();
            let ContentState::Ready { page, .. } = state.content() else {
                return;
            };
            let lang = state.language();
            let applied =
                platform::translate_region(CONTENT_REGION, state.page_translations(), lang);
            tracing::debug!("[i18n] {applied} content strings for `{page}` in {lang}");
            if page.as_str() == calendar_page {
                platform::mount_calendars(CONTENT_REGION, &years, lang);
            }
            platform::observe_reveal(CONTENT_REGION);
        }
    });

    let on_language = {
        let store = store.clone();
        let source = source.clone();
        let config = config.clone();
        move |lang: Language| {
            if !session.write().set_language(lang) {
                return;
            }
            switch_language(&*store, &DocumentRoot, &config.language_key(), lang);
            // Common chrome strings are reloaded for every switch.
            let source = source.clone();
            let common = config.common_translations.clone();
            spawn(async move {
                let table = load_translations(&*source, &common).await;
                session.write().set_common_translations(table);
            });
        }
    };

    let on_theme = move |_: ()| {
        let next = theming.borrow_mut().toggle();
        theme.set(next);
    };

    let (language, current_page, default_page, content, style, chrome) = {
        let state = session.read();
        (
            state.language(),
            state.current_page().clone(),
            state.default_page().clone(),
            state.content().clone(),
            state.style().cloned(),
            ChromeText::resolve(&config, state.language(), state.common_translations()),
        )
    };

    #[cfg(debug_assertions)]
    tracing::debug!("[i18n] Site render lang={language} page={current_page}");

    let title = chrome.get("site.title").to_string();

    rsx! {
        document::Title { "{title}" }
        AppHeader {
            pages: config.nav_pages.clone(),
            current_page,
            default_page: default_page.clone(),
            language,
            theme: theme(),
            chrome: chrome.clone(),
            on_language,
            on_theme,
        }
        ContentRegion { content, style, language, home: default_page }
        AppFooter { chrome }
    }
}
