use chrono::NaiveDate;
use thiserror::Error;

use super::permission::PERMISSION_DENIED_LINES;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("{} {}", PERMISSION_DENIED_LINES[0], PERMISSION_DENIED_LINES[1])]
    AccessDenied,
    #[error("Calendar event store unavailable")]
    StoreUnavailable,
    #[error("Unable to step {direction} from {date}: date out of range")]
    DateOutOfRange {
        date: NaiveDate,
        direction: &'static str,
    },
    #[error("No valid local start of day exists for {0}")]
    NonexistentLocalTime(NaiveDate),
}

pub type CalendarResult<T> = Result<T, CalendarError>;
