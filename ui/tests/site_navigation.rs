//! Drives the router against the fragment files shipped with the web crate.

use futures::executor::block_on;

use ui::core::config::SiteConfig;
use ui::core::lang::Language;
use ui::router::{load_fragment, load_translations, ContentState, DirSource, PageId, Session};

fn public_dir() -> DirSource {
    DirSource::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../web/public"))
}

fn navigate(session: &mut Session, page: &str) -> bool {
    let ticket = session.begin_navigation(PageId::new(page));
    let fragment = block_on(load_fragment(&public_dir(), ticket.page()));
    session.commit(&ticket, fragment)
}

#[test]
fn every_navigation_page_loads_with_style_and_translations() {
    let config = SiteConfig::default();
    for page in &config.nav_pages {
        let mut session = Session::new(PageId::new(config.default_page.as_str()), Language::En);
        assert!(navigate(&mut session, page));
        assert!(
            matches!(session.content(), ContentState::Ready { .. }),
            "{page} did not load"
        );
        assert_eq!(session.style().map(|s| s.page.as_str()), Some(page.as_str()));
        for lang in Language::ALL {
            assert!(
                session.page_translations().lookup(lang, "title").is_some()
                    || session.page_translations().lookup(lang, "hero.title").is_some(),
                "{page} has no title for {lang}"
            );
        }
    }
}

#[test]
fn unknown_page_shows_the_error_view() {
    let mut session = Session::new(PageId::default(), Language::Fr);
    assert!(navigate(&mut session, "contacts"));
    match session.content() {
        ContentState::Failed { page, .. } => assert_eq!(page.as_str(), "contacts"),
        other => panic!("expected error view, got {other:?}"),
    }
    assert!(session.style().is_none());
}

#[test]
fn calendar_fragment_hosts_both_years() {
    let mut session = Session::new(PageId::default(), Language::En);
    navigate(&mut session, "calendar");
    let ContentState::Ready { html, .. } = session.content() else {
        panic!("calendar page failed to load");
    };
    for year in ui::calendar::builtin_years().unwrap() {
        let container = format!(r#"{}="{}""#, ui::calendar::CONTAINER_ATTRIBUTE, year.id());
        assert!(html.contains(&container), "missing container for {}", year.id());
    }
}

#[test]
fn common_table_covers_navigation_in_every_language() {
    let config = SiteConfig::default();
    let common = block_on(load_translations(&public_dir(), &config.common_translations));
    for lang in Language::ALL {
        for page in &config.nav_pages {
            assert!(
                common.lookup(lang, &format!("nav.{page}")).is_some(),
                "menu.json lacks nav.{page} for {lang}"
            );
        }
    }
}
