use std::collections::BTreeMap;

use serde::Deserialize;

pub const LONG_MONTH: u32 = 56;
pub const SHORT_MONTH: u32 = 55;

const MONTHS_PER_YEAR: usize = 12;

/// month index (0-based) → day (1-based) → holiday tag.
pub type HolidayMap = BTreeMap<usize, BTreeMap<u32, String>>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("year `{id}` has {count} months, expected 12")]
    MonthCount { id: String, count: usize },
    #[error("year `{id}`: month {month} has {days} days, expected 55 or 56")]
    MonthLength { id: String, month: usize, days: u32 },
    #[error("year `{id}` declares {declared} days but its months sum to {actual}")]
    Length { id: String, declared: u32, actual: u32 },
    #[error("year `{id}`: holiday `{tag}` on month {month} day {day} is outside the calendar")]
    Holiday {
        id: String,
        month: usize,
        day: u32,
        tag: String,
    },
    #[error("calendar data is malformed: {0}")]
    Data(String),
}

#[derive(Deserialize)]
struct RawYear {
    id: String,
    length: u32,
    months: Vec<u32>,
    #[serde(default)]
    holidays: HolidayMap,
}

/// One fixed calendar year. Validated on construction and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawYear")]
pub struct YearDefinition {
    id: String,
    length: u32,
    months: [u32; MONTHS_PER_YEAR],
    holidays: HolidayMap,
}

impl YearDefinition {
    pub fn new(
        id: impl Into<String>,
        length: u32,
        months: &[u32],
        holidays: HolidayMap,
    ) -> Result<Self, CalendarError> {
        let id = id.into();
        let months: [u32; MONTHS_PER_YEAR] =
            months.try_into().map_err(|_| CalendarError::MonthCount {
                id: id.clone(),
                count: months.len(),
            })?;

        if let Some((month, &days)) = months
            .iter()
            .enumerate()
            .find(|(_, &days)| days != LONG_MONTH && days != SHORT_MONTH)
        {
            return Err(CalendarError::MonthLength { id, month, days });
        }

        let actual: u32 = months.iter().sum();
        if actual != length {
            return Err(CalendarError::Length {
                id,
                declared: length,
                actual,
            });
        }

        for (&month, days) in &holidays {
            for (&day, tag) in days {
                let in_range = months.get(month).is_some_and(|&len| (1..=len).contains(&day));
                if !in_range {
                    return Err(CalendarError::Holiday {
                        id,
                        month,
                        day,
                        tag: tag.clone(),
                    });
                }
            }
        }

        Ok(Self {
            id,
            length,
            months,
            holidays,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Declared year length; always equal to the sum of the month lengths.
    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn months(&self) -> &[u32; MONTHS_PER_YEAR] {
        &self.months
    }

    pub fn holidays(&self) -> &HolidayMap {
        &self.holidays
    }

    pub fn total_days(&self) -> u32 {
        self.months.iter().sum()
    }

    pub fn holiday(&self, month: usize, day: u32) -> Option<&str> {
        self.holidays
            .get(&month)
            .and_then(|days| days.get(&day))
            .map(String::as_str)
    }
}

impl TryFrom<RawYear> for YearDefinition {
    type Error = CalendarError;

    fn try_from(raw: RawYear) -> Result<Self, Self::Error> {
        Self::new(raw.id, raw.length, &raw.months, raw.holidays)
    }
}

const BUILTIN_YEARS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/years.json"));

/// The two years shown on the calendar page.
pub fn builtin_years() -> Result<Vec<YearDefinition>, CalendarError> {
    serde_json::from_str(BUILTIN_YEARS).map_err(|err| CalendarError::Data(err.to_string()))
}
