use super::loader::{PageBody, PageFragment};
use super::page::PageId;
use super::source::FetchError;
use crate::core::lang::Language;
use crate::translations::TranslationTable;

/// Proof that a navigation was started; only the most recent ticket can
/// commit its fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTicket {
    seq: u64,
    page: PageId,
}

impl NavigationTicket {
    pub fn page(&self) -> &PageId {
        &self.page
    }
}

/// What the content region shows. Never empty: before the first fragment
/// arrives it shows a loading state.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentState {
    Loading(PageId),
    Ready { page: PageId, html: String },
    Failed { page: PageId, error: FetchError },
}

impl ContentState {
    pub fn page(&self) -> &PageId {
        match self {
            ContentState::Loading(page)
            | ContentState::Ready { page, .. }
            | ContentState::Failed { page, .. } => page,
        }
    }
}

/// The stylesheet injected for the current page, tagged with its page id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStyle {
    pub page: PageId,
    pub css: String,
}

/// Per-tab navigation state: current page, active language, injected style
/// and both translation tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    default_page: PageId,
    current: PageId,
    language: Language,
    latest: u64,
    content: ContentState,
    style: Option<PageStyle>,
    page_translations: TranslationTable,
    common_translations: TranslationTable,
    revision: u64,
}

impl Session {
    pub fn new(default_page: PageId, language: Language) -> Self {
        Self {
            current: default_page.clone(),
            content: ContentState::Loading(default_page.clone()),
            default_page,
            language,
            latest: 0,
            style: None,
            page_translations: TranslationTable::new(),
            common_translations: TranslationTable::new(),
            revision: 0,
        }
    }

    /// Start loading `page`: mark it active, drop the previous page's style
    /// and supersede any navigation still in flight.
    pub fn begin_navigation(&mut self, page: PageId) -> NavigationTicket {
        self.latest += 1;
        self.current = page.clone();
        self.style = None;
        self.page_translations = TranslationTable::new();
        self.content = ContentState::Loading(page.clone());
        self.revision += 1;
        NavigationTicket {
            seq: self.latest,
            page,
        }
    }

    pub fn is_latest(&self, ticket: &NavigationTicket) -> bool {
        ticket.seq == self.latest
    }

    /// Install `fragment` if `ticket` is still the latest navigation.
    /// Returns `false` (and changes nothing) for superseded navigations.
    pub fn commit(&mut self, ticket: &NavigationTicket, fragment: PageFragment) -> bool {
        if !self.is_latest(ticket) || fragment.page != ticket.page {
            return false;
        }
        let PageFragment {
            page,
            body,
            css,
            translations,
        } = fragment;

        self.content = match body {
            PageBody::Html(html) => ContentState::Ready {
                page: page.clone(),
                html,
            },
            PageBody::Failed(error) => ContentState::Failed {
                page: page.clone(),
                error,
            },
        };
        self.style = css.map(|css| PageStyle { page, css });
        self.page_translations = translations;
        self.revision += 1;
        true
    }

    /// Switch the active language. Returns `false` when it was already active.
    pub fn set_language(&mut self, language: Language) -> bool {
        if self.language == language {
            return false;
        }
        self.language = language;
        self.revision += 1;
        true
    }

    pub fn set_common_translations(&mut self, table: TranslationTable) {
        self.common_translations = table;
        self.revision += 1;
    }

    pub fn default_page(&self) -> &PageId {
        &self.default_page
    }

    pub fn current_page(&self) -> &PageId {
        &self.current
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn content(&self) -> &ContentState {
        &self.content
    }

    pub fn style(&self) -> Option<&PageStyle> {
        self.style.as_ref()
    }

    pub fn page_translations(&self) -> &TranslationTable {
        &self.page_translations
    }

    pub fn common_translations(&self) -> &TranslationTable {
        &self.common_translations
    }

    /// Bumped whenever something the content region depends on changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{load_fragment, StaticSource};
    use futures::executor::block_on;

    fn source() -> StaticSource {
        StaticSource::new()
            .with("home/home.html", "<p>home</p>")
            .with("home/home.css", ".home {}")
            .with("about/about.html", "<p>about</p>")
            .with("about/about.json", r#"{ "en": { "title": "About us" } }"#)
    }

    fn session() -> Session {
        Session::new(PageId::default(), Language::En)
    }

    #[test]
    fn navigation_installs_content_style_and_translations() {
        let mut session = session();
        let ticket = session.begin_navigation(PageId::new("home"));
        let fragment = block_on(load_fragment(&source(), ticket.page()));
        assert!(session.commit(&ticket, fragment));

        assert_eq!(
            session.content(),
            &ContentState::Ready {
                page: PageId::new("home"),
                html: "<p>home</p>".into()
            }
        );
        let style = session.style().unwrap();
        assert_eq!(style.page, PageId::new("home"));
        assert_eq!(style.css, ".home {}");
    }

    #[test]
    fn starting_a_navigation_clears_the_previous_style() {
        let mut session = session();
        let ticket = session.begin_navigation(PageId::new("home"));
        session.commit(&ticket, block_on(load_fragment(&source(), ticket.page())));
        assert!(session.style().is_some());

        session.begin_navigation(PageId::new("about"));
        assert!(session.style().is_none());
        assert_eq!(session.content(), &ContentState::Loading(PageId::new("about")));
        assert_eq!(session.current_page().as_str(), "about");
    }

    #[test]
    fn stale_navigation_cannot_overwrite_newer_content() {
        let mut session = session();
        let slow = session.begin_navigation(PageId::new("home"));
        let fast = session.begin_navigation(PageId::new("about"));

        let about = block_on(load_fragment(&source(), fast.page()));
        assert!(session.commit(&fast, about));

        let home = block_on(load_fragment(&source(), slow.page()));
        assert!(!session.commit(&slow, home));
        assert_eq!(session.content().page().as_str(), "about");
        assert!(session.style().is_none());
        assert_eq!(
            session.page_translations().lookup(Language::En, "title"),
            Some("About us")
        );
    }

    #[test]
    fn unknown_page_yields_failed_content() {
        let mut session = session();
        let ticket = session.begin_navigation(PageId::new("contacts"));
        let fragment = block_on(load_fragment(&source(), ticket.page()));
        assert!(session.commit(&ticket, fragment));
        match session.content() {
            ContentState::Failed { page, error } => {
                assert_eq!(page.as_str(), "contacts");
                assert!(matches!(error, FetchError::Status { status: 404, .. }));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn language_switch_bumps_revision_once() {
        let mut session = session();
        let before = session.revision();
        assert!(session.set_language(Language::Ru));
        assert!(!session.set_language(Language::Ru));
        assert_eq!(session.revision(), before + 1);
        assert_eq!(session.language(), Language::Ru);
    }
}
