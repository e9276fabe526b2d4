use chrono::{DateTime, FixedOffset};
use std::borrow::Cow;

use super::events::CalendarEvent;

pub const DEFAULT_TIME_FORMAT: &str = "%-I:%M %p";
pub const DEFAULT_ALL_DAY_LABEL: &str = "All Day";

/// Render-ready projection of one [`CalendarEvent`]. Built fresh on every
/// refresh and thrown away once rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDisplayRecord {
    pub title: String,
    pub time: EventTime,
    pub location: Option<String>,
    pub calendar: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventTime {
    AllDay,
    Range { start: String, end: String },
}

#[derive(Debug, Clone)]
pub struct EventFormatter {
    time_format: String,
    all_day_label: String,
}

impl Default for EventFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_FORMAT, DEFAULT_ALL_DAY_LABEL)
    }
}

impl EventFormatter {
    pub fn new(time_format: impl Into<String>, all_day_label: impl Into<String>) -> Self {
        Self {
            time_format: time_format.into(),
            all_day_label: all_day_label.into(),
        }
    }

    /// Returns `None` for events without a title or a start time; those are
    /// skipped rather than shown blank.
    pub fn format(&self, event: &CalendarEvent) -> Option<EventDisplayRecord> {
        let Some(title) = event.title.as_deref().filter(|t| !t.trim().is_empty()) else {
            tracing::debug!(calendar = %event.calendar_name, "skipping untitled event");
            return None;
        };
        let Some(start) = event.start else {
            tracing::debug!(title, "skipping event without a start time");
            return None;
        };
        let end = event.end.unwrap_or(start);

        let time = if event.is_all_day {
            EventTime::AllDay
        } else {
            EventTime::Range {
                start: self.format_time(&start),
                end: self.format_time(&end),
            }
        };

        Some(EventDisplayRecord {
            title: title.to_string(),
            time,
            location: event
                .location
                .as_deref()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string),
            calendar: event.calendar_name.clone(),
        })
    }

    /// One text block per event, closed by a blank separator line.
    pub fn render(&self, record: &EventDisplayRecord) -> String {
        let mut output = format!("{}\n", record.title);

        match &record.time {
            EventTime::AllDay => {
                output.push_str(&self.all_day_label);
                output.push('\n');
            }
            EventTime::Range { start, end } => {
                output.push_str(&format!("{start} - {end}\n"));
            }
        }

        if let Some(location) = &record.location {
            output.push_str(location);
            output.push('\n');
        }

        output.push_str(&record.calendar);
        output.push_str("\n\n");
        output
    }

    pub fn format_time(&self, dt: &DateTime<FixedOffset>) -> String {
        dt.format(&self.time_format).to_string()
    }
}

pub fn truncate_title(title: &str, max_len: usize) -> Cow<'_, str> {
    if title.chars().count() <= max_len {
        Cow::Borrowed(title)
    } else {
        let mut truncated: String = title.chars().take(max_len.saturating_sub(1)).collect();
        truncated.push('…');
        Cow::Owned(truncated)
    }
}
