use dioxus::prelude::*;

use crate::components::ChromeText;
use crate::core::lang::Language;
use crate::core::theme::Theme;
use crate::platform;
use crate::router::PageId;
use crate::t;

// Header stylesheet (shared by every platform crate)
const HEADER_CSS: Asset = asset!("/assets/styling/header.css");

/// Site header: brand, page navigation, language switcher and theme toggle.
///
/// Navigation links are plain `#page` anchors; the browser updates the
/// location hash and the site's hash-change listener performs the load.
/// On narrow screens the link list collapses behind a menu button that
/// closes again once a link is followed.
#[component]
pub fn AppHeader(
    pages: Vec<String>,
    current_page: PageId,
    default_page: PageId,
    language: Language,
    theme: Theme,
    chrome: ChromeText,
    on_language: EventHandler<Language>,
    on_theme: EventHandler<()>,
) -> Element {
    let mut menu_open = use_signal(|| false);

    let theme_label = match theme {
        Theme::Auto => t!(language, "theme-auto"),
        Theme::Day => t!(language, "theme-day"),
        Theme::Night => t!(language, "theme-night"),
    };
    let links_class = if menu_open() {
        "navbar__links navbar__links--open"
    } else {
        "navbar__links"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }

        header { id: "site-header", class: "navbar",
            div { class: "navbar__inner",
                // Brand
                div { class: "navbar__brand",
                    button {
                        class: "navbar__brand-link",
                        r#type: "button",
                        onclick: move |_| {
                            menu_open.set(false);
                            platform::navigate(&default_page);
                        },
                        span { class: "navbar__brand-mark", "data-i18n": "site.title", {chrome.get("site.title").to_string()} }
                    }
                    span { class: "navbar__brand-subtitle", "data-i18n": "site.tagline", {chrome.get("site.tagline").to_string()} }
                }

                button {
                    class: "navbar__menu-toggle",
                    r#type: "button",
                    aria_expanded: "{menu_open()}",
                    onclick: move |_| menu_open.set(!menu_open()),
                    {t!(language, "nav-menu-toggle")}
                }

                nav { class: "{links_class}",
                    for page in pages.iter() {
                        a {
                            key: "{page}",
                            class: if current_page.as_str() == page.as_str() { "navbar__link navbar__link--active" } else { "navbar__link" },
                            href: "#{page}",
                            "data-page": "{page}",
                            "data-i18n": "nav.{page}",
                            onclick: move |_| menu_open.set(false),
                            {chrome.nav_label(page).to_string()}
                        }
                    }
                }

                div { class: "navbar__controls",
                    div { class: "navbar__locale", role: "group", aria_label: t!(language, "nav-language-label"),
                        for lang in Language::ALL {
                            button {
                                key: "{lang}",
                                class: if lang == language { "navbar__lang navbar__lang--active" } else { "navbar__lang" },
                                r#type: "button",
                                "data-lang": "{lang}",
                                title: lang.native_name(),
                                onclick: move |_| on_language.call(lang),
                                "{lang.code().to_uppercase()}"
                            }
                        }
                    }
                    button {
                        class: "navbar__theme",
                        r#type: "button",
                        "data-theme-state": "{theme}",
                        title: t!(language, "theme-toggle-label"),
                        onclick: move |_| on_theme.call(()),
                        "{theme_label}"
                    }
                }
            }
        }
    }
}
