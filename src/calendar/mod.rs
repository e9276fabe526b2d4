pub mod date;
pub mod error;
pub mod events;
pub mod formatting;
pub mod permission;
pub mod store;

pub use date::SelectedDate;
pub use error::{CalendarError, CalendarResult};
pub use events::{from_unix_seconds, query_events, to_unix_seconds, CalendarEvent, DayWindow};
pub use formatting::{EventDisplayRecord, EventFormatter, EventTime};
pub use permission::{Gate, PERMISSION_DENIED_LINES};
pub use store::{AccessRequest, AccessResponder, AuthorizationStatus, CalendarStore};
