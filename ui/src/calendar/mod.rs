//! The almanac calendar: two hand-kept years of 55/56-day months.
//!
//! [`render_year`] turns a [`YearDefinition`] plus localized
//! [`CalendarLabels`] into a [`YearView`] tree; [`YearView::to_html`] is the
//! thin adapter producing the markup injected into calendar containers.

mod data;
mod markup;
mod render;

pub use data::{builtin_years, CalendarError, HolidayMap, YearDefinition, LONG_MONTH, SHORT_MONTH};
pub use render::{
    render_month_days, render_year, CalendarLabels, DayCell, MonthView, QuarterView, YearView,
    HOLIDAY_TAGS,
};

/// Attribute carrying the year id on a calendar container in page fragments.
pub const CONTAINER_ATTRIBUTE: &str = "data-calendar-year";
