//! Shared UI crate for the Almanac site. Routing, translation, theme and
//! calendar logic live here together with the Dioxus components built on
//! them; platform crates only launch [`views::Site`].

pub mod calendar;
pub mod components;
pub mod core;
pub mod i18n;
pub mod platform;
pub mod router;
pub mod translations;
pub mod views;
