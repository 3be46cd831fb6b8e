use chrono::{Datelike, Days, NaiveDate};

use crate::error::DateError;

/// Format of the native date input and of the predictor's `date` field.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// First date the predictor accepts.
pub fn min_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Last date the predictor accepts.
pub fn max_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 12, 31).unwrap_or(NaiveDate::MAX)
}

/// Calendar date a prediction is requested for.
///
/// Purely a calendar date: no time zone is attached, so the year, month and
/// day sent to the predictor are exactly the ones the user picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TargetDate(NaiveDate);

impl TargetDate {
    pub fn new(date: NaiveDate) -> Result<Self, DateError> {
        let (min, max) = (min_date(), max_date());
        if date < min || date > max {
            return Err(DateError::OutOfRange { date, min, max });
        }
        Ok(Self(date))
    }

    /// Parses the value of an `<input type="date">`, i.e. `YYYY-MM-DD`.
    pub fn parse_iso(input: &str) -> Result<Self, DateError> {
        let date = NaiveDate::parse_from_str(input.trim(), ISO_FORMAT)
            .map_err(|_| DateError::Malformed(input.to_string()))?;
        Self::new(date)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn iso(&self) -> String {
        self.0.format(ISO_FORMAT).to_string()
    }
}

/// Quick-pick chips next to the date input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePreset {
    Today,
    Tomorrow,
    NextWeek,
}

impl DatePreset {
    pub const ALL: [DatePreset; 3] = [DatePreset::Today, DatePreset::Tomorrow, DatePreset::NextWeek];

    pub fn days_ahead(&self) -> u64 {
        match self {
            DatePreset::Today => 0,
            DatePreset::Tomorrow => 1,
            DatePreset::NextWeek => 7,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DatePreset::Today => "Today",
            DatePreset::Tomorrow => "Tom.",
            DatePreset::NextWeek => "+7d",
        }
    }

    /// The preset's date as the ISO string the date input holds.
    pub fn resolve(&self, today: NaiveDate) -> String {
        today
            .checked_add_days(Days::new(self.days_ahead()))
            .unwrap_or(today)
            .format(ISO_FORMAT)
            .to_string()
    }
}
