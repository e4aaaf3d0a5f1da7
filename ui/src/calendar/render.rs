use std::collections::HashMap;

use super::data::{HolidayMap, YearDefinition, SHORT_MONTH};
use crate::core::lang::Language;
use crate::i18n;

const DAYS_PER_WEEK: u32 = 7;
const MONTHS_PER_QUARTER: usize = 3;

/// Holiday tags used in the year data, each with a `holiday-{tag}` message.
pub const HOLIDAY_TAGS: [&str; 3] = ["newyear", "equinox", "solstice"];

/// Localized strings the renderer needs; everything numeric stays as is.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarLabels {
    pub months: [String; 12],
    pub weekdays: [String; 7],
    pub quarters: [String; 4],
    pub short_suffix: String,
    /// Unit shown after a month's day count.
    pub days: String,
    /// holiday tag → display name.
    pub holidays: HashMap<String, String>,
}

impl CalendarLabels {
    pub fn localized(lang: Language) -> Self {
        let months = std::array::from_fn(|i| i18n::message(lang, &format!("month-{}", i + 1)));
        let weekdays = std::array::from_fn(|i| i18n::message(lang, &format!("weekday-{}", i + 1)));
        let quarters = std::array::from_fn(|i| {
            let number = i + 1;
            crate::t!(lang, "calendar-quarter", number = number)
        });
        let holidays = HOLIDAY_TAGS
            .into_iter()
            .map(|tag| (tag.to_string(), i18n::message(lang, &format!("holiday-{tag}"))))
            .collect();

        Self {
            months,
            weekdays,
            quarters,
            short_suffix: crate::t!(lang, "calendar-short-suffix"),
            days: crate::t!(lang, "calendar-days"),
            holidays,
        }
    }

    pub fn holiday_name<'a>(&'a self, tag: &'a str) -> &'a str {
        self.holidays.get(tag).map(String::as_str).unwrap_or(tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    /// 1-based day of the month.
    pub day: u32,
    /// 0 (first day of the week) ..= 6.
    pub weekday: u32,
    pub weekend: bool,
    pub holiday: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthView {
    pub index: usize,
    pub name: String,
    /// Name plus the short suffix when the month is short.
    pub title: String,
    pub day_count: u32,
    /// `56 days`, or `55 days (short)` for a short month.
    pub count_label: String,
    pub short: bool,
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuarterView {
    /// 1-based.
    pub number: usize,
    pub title: String,
    pub months: Vec<MonthView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YearView {
    pub id: String,
    pub weekdays: [String; 7],
    pub quarters: Vec<QuarterView>,
}

impl YearView {
    pub fn months(&self) -> impl Iterator<Item = &MonthView> {
        self.quarters.iter().flat_map(|q| q.months.iter())
    }

    pub fn total_days(&self) -> u32 {
        self.months().map(|m| m.days.len() as u32).sum()
    }
}

/// Lay out `year` as 4 quarters of 3 months with localized headers.
pub fn render_year(year: &YearDefinition, labels: &CalendarLabels) -> YearView {
    let months: Vec<MonthView> = year
        .months()
        .iter()
        .enumerate()
        .map(|(index, &day_count)| {
            let short = day_count == SHORT_MONTH;
            let name = labels.months[index].clone();
            let (title, count_label) = if short {
                (
                    format!("{name} {}", labels.short_suffix),
                    format!("{day_count} {} {}", labels.days, labels.short_suffix),
                )
            } else {
                (name.clone(), format!("{day_count} {}", labels.days))
            };
            MonthView {
                index,
                name,
                title,
                day_count,
                count_label,
                short,
                days: render_month_days(index, day_count, year.holidays()),
            }
        })
        .collect();

    let quarters = months
        .chunks(MONTHS_PER_QUARTER)
        .enumerate()
        .map(|(i, chunk)| QuarterView {
            number: i + 1,
            title: labels.quarters[i].clone(),
            months: chunk.to_vec(),
        })
        .collect();

    YearView {
        id: year.id().to_string(),
        weekdays: labels.weekdays.clone(),
        quarters,
    }
}

/// Day cells `1..=day_count` of one month, in order.
pub fn render_month_days(month_index: usize, day_count: u32, holidays: &HolidayMap) -> Vec<DayCell> {
    let month_holidays = holidays.get(&month_index);
    (1..=day_count)
        .map(|day| {
            let weekday = (day - 1) % DAYS_PER_WEEK;
            DayCell {
                day,
                weekday,
                weekend: weekday >= 5,
                holiday: month_holidays.and_then(|days| days.get(&day)).cloned(),
            }
        })
        .collect()
}
