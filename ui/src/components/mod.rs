//! Shared Dioxus components.

mod app_footer;
mod app_header;
mod chrome;
mod content;

pub use app_footer::AppFooter;
pub use app_header::AppHeader;
pub use chrome::ChromeText;
pub use content::{ContentRegion, ErrorCopy, ErrorView};
