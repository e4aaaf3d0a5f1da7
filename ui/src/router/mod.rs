//! Hash-based fragment routing.
//!
//! A page id `p` maps to three resources (`p/p.html`, `p/p.css`,
//! `p/p.json`). Navigating writes `#p` into the location; the hash-change
//! listener turns that into a [`Session::begin_navigation`] →
//! [`load_fragment`] → [`Session::commit`] sequence. Only the latest
//! navigation may commit, so a slow response for a page the user already
//! left can never overwrite the current content.

mod loader;
mod page;
mod session;
mod source;

pub use loader::{load_fragment, load_translations, PageBody, PageFragment};
pub use page::{PageId, PageResources};
pub use session::{ContentState, NavigationTicket, PageStyle, Session};
pub use source::{FetchError, FragmentSource, StaticSource};

#[cfg(not(target_arch = "wasm32"))]
pub use source::DirSource;
