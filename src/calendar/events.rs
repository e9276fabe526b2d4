use chrono::{DateTime, Duration, FixedOffset, LocalResult, NaiveDate, TimeZone};

use super::error::{CalendarError, CalendarResult};
use super::store::CalendarStore;

/// An event as read from the calendar store. Never constructed or changed by
/// the view itself, only projected into display records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub title: Option<String>,
    pub start: Option<DateTime<FixedOffset>>,
    pub end: Option<DateTime<FixedOffset>>,
    pub is_all_day: bool,
    pub location: Option<String>,
    pub calendar_name: String,
}

/// Half-open query window `[start, end)` covering one local calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl DayWindow {
    /// From the start of `date` to the start of the following day, in `tz`.
    pub fn for_date<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> CalendarResult<Self> {
        let next = date.succ_opt().ok_or(CalendarError::DateOutOfRange {
            date,
            direction: "forward",
        })?;

        Ok(Self {
            start: start_of_day(date, tz)?,
            end: start_of_day(next, tz)?,
        })
    }

    pub fn contains(&self, instant: &DateTime<FixedOffset>) -> bool {
        self.start <= *instant && *instant < self.end
    }

    /// Whether `[start, end)` intersects the window. Zero-length ranges count
    /// when their instant falls inside.
    pub fn overlaps(&self, start: &DateTime<FixedOffset>, end: &DateTime<FixedOffset>) -> bool {
        if start == end {
            return self.contains(start);
        }
        *start < self.end && self.start < *end
    }

    pub fn duration(&self) -> Duration {
        self.end.signed_duration_since(self.start)
    }
}

/// First instant of `date` in `tz`.
///
/// Midnight can be skipped or repeated by a DST transition. A repeated
/// midnight resolves to the earlier instant; a skipped one to the first
/// valid hour after it.
pub fn start_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> CalendarResult<DateTime<FixedOffset>> {
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or(CalendarError::NonexistentLocalTime(date))?;

    let start = match tz.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => (1..=3)
            .filter_map(|hours| tz.from_local_datetime(&(midnight + Duration::hours(hours))).earliest())
            .next(),
    };

    start
        .map(|dt| dt.fixed_offset())
        .ok_or(CalendarError::NonexistentLocalTime(date))
}

/// Converts seconds since the Unix epoch, as calendar stores report them, to
/// an instant in `tz`. Sub-second precision is kept. Non-finite or
/// unrepresentable values give `None`.
pub fn from_unix_seconds<Tz: TimeZone>(seconds: f64, tz: &Tz) -> Option<DateTime<FixedOffset>> {
    if !seconds.is_finite() || seconds.abs() > i64::MAX as f64 {
        return None;
    }
    let whole = seconds.floor();
    let nanos = (((seconds - whole) * 1e9) as u32).min(999_999_999);
    DateTime::from_timestamp(whole as i64, nanos).map(|utc| utc.with_timezone(tz).fixed_offset())
}

/// Seconds since the Unix epoch, including the fractional part.
pub fn to_unix_seconds(instant: &DateTime<FixedOffset>) -> f64 {
    instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) / 1e9
}

/// Every event in every calendar that intersects `window`, in the order the
/// store returns them.
pub fn query_events<S: CalendarStore>(store: &S, window: &DayWindow) -> Vec<CalendarEvent> {
    let calendars = store.calendars();
    let events = store.events(window, &calendars);
    tracing::debug!(
        start = %window.start,
        end = %window.end,
        count = events.len(),
        "fetched events for day"
    );
    events
}
