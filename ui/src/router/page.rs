use std::fmt;

/// Page used when the location has no (usable) fragment.
pub const DEFAULT_PAGE: &str = "home";

/// Route key of one page, e.g. `calendar`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(String);

impl PageId {
    /// Normalize a raw location fragment (`#calendar`, `#/calendar/`, `""`).
    /// Absent or empty input resolves to `default`.
    pub fn from_hash(raw: &str, default: &str) -> Self {
        let trimmed = raw.trim().trim_start_matches('#').trim_matches('/').trim();
        if trimmed.is_empty() {
            Self(default.to_string())
        } else {
            Self(trimmed.to_string())
        }
    }

    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::from_hash(&id, DEFAULT_PAGE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Location fragment referencing this page.
    pub fn hash(&self) -> String {
        format!("#{}", self.0)
    }

    pub fn resources(&self) -> PageResources {
        PageResources::for_page(self)
    }
}

impl Default for PageId {
    fn default() -> Self {
        Self(DEFAULT_PAGE.to_string())
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Paths of the three fragment resources for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResources {
    pub html: String,
    pub css: String,
    pub json: String,
}

impl PageResources {
    pub fn for_page(page: &PageId) -> Self {
        let id = page.as_str();
        Self {
            html: format!("{id}/{id}.html"),
            css: format!("{id}/{id}.css"),
            json: format!("{id}/{id}.json"),
        }
    }
}
