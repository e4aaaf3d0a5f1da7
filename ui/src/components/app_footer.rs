use dioxus::prelude::*;

use crate::components::ChromeText;

#[component]
pub fn AppFooter(chrome: ChromeText) -> Element {
    rsx! {
        footer { id: "site-footer", class: "footer",
            p { class: "footer__note", "data-i18n": "footer.note", {chrome.get("footer.note").to_string()} }
        }
    }
}
