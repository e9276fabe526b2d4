use chrono::{NaiveDate, TimeZone, Utc};
use std::fmt;

use super::error::{CalendarError, CalendarResult};

pub const DEFAULT_DATE_FORMAT: &str = "%B %-d, %Y";

/// The calendar day currently on screen. Has no time-of-day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SelectedDate(NaiveDate);

impl SelectedDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today as seen from `tz`.
    pub fn today<Tz: TimeZone>(tz: &Tz) -> Self {
        Self(Utc::now().with_timezone(tz).date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn next(self) -> CalendarResult<Self> {
        self.0
            .succ_opt()
            .map(Self)
            .ok_or(CalendarError::DateOutOfRange {
                date: self.0,
                direction: "forward",
            })
    }

    pub fn previous(self) -> CalendarResult<Self> {
        self.0
            .pred_opt()
            .map(Self)
            .ok_or(CalendarError::DateOutOfRange {
                date: self.0,
                direction: "backward",
            })
    }

    /// Label text such as "June 2, 2018" for the default format.
    pub fn label(&self, format: &str) -> String {
        self.0.format(format).to_string()
    }
}

impl From<NaiveDate> for SelectedDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for SelectedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label(DEFAULT_DATE_FORMAT))
    }
}
