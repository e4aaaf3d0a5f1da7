//! Platform-agnostic building blocks: site configuration, languages,
//! persisted preferences and the theme cycle.

pub mod config;
pub mod lang;
pub mod prefs;
pub mod theme;
