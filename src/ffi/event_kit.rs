use chrono::{DateTime, FixedOffset, Local};
use objc2::rc::Retained;
use objc2_event_kit::{EKAuthorizationStatus, EKCalendar, EKEntityType, EKEvent, EKEventStore};
use objc2_foundation::{MainThreadMarker, NSArray, NSDate};
use std::sync::{Arc, Mutex};

use crate::calendar::{
    from_unix_seconds, to_unix_seconds, AccessRequest, AccessResponder, AuthorizationStatus,
    CalendarEvent, CalendarStore, DayWindow,
};

/// The system calendar store, read through EventKit.
pub struct EventKitStore {
    store: Retained<EKEventStore>,
}

impl EventKitStore {
    pub fn new(mtm: MainThreadMarker) -> Self {
        Self {
            store: init_event_store(mtm),
        }
    }
}

impl CalendarStore for EventKitStore {
    type Calendars = Retained<NSArray<EKCalendar>>;

    fn authorization_status(&self) -> AuthorizationStatus {
        let status = unsafe { EKEventStore::authorizationStatusForEntityType(EKEntityType::Event) };
        match status {
            EKAuthorizationStatus::NotDetermined => AuthorizationStatus::NotDetermined,
            EKAuthorizationStatus::FullAccess => AuthorizationStatus::Authorized,
            EKAuthorizationStatus::Restricted => AuthorizationStatus::Restricted,
            // Write-only access cannot read events.
            _ => AuthorizationStatus::Denied,
        }
    }

    fn request_access(&self) -> AccessRequest {
        request_calendar_access(&self.store)
    }

    fn calendars(&self) -> Self::Calendars {
        unsafe { self.store.calendarsForEntityType(EKEntityType::Event) }
    }

    fn events(&self, window: &DayWindow, calendars: &Self::Calendars) -> Vec<CalendarEvent> {
        let start = to_ns_date(&window.start);
        let end = to_ns_date(&window.end);
        fetch_events(&self.store, &start, &end, calendars)
            .iter()
            .map(|event| parse_event(event))
            .collect()
    }
}

pub fn init_event_store(mtm: MainThreadMarker) -> Retained<EKEventStore> {
    unsafe { EKEventStore::init(mtm.alloc::<EKEventStore>()) }
}

/// Starts a full-access request. EventKit answers on a queue of its own; the
/// returned future is the only thing the completion block touches.
pub fn request_calendar_access(store: &EKEventStore) -> AccessRequest {
    use block2::StackBlock;

    let (responder, request) = AccessRequest::channel();
    let responder: Arc<Mutex<Option<AccessResponder>>> = Arc::new(Mutex::new(Some(responder)));

    unsafe {
        store.requestFullAccessToEventsWithCompletion(&StackBlock::new(
            move |granted: objc2::runtime::Bool, error: *mut objc2_foundation::NSError| {
                if !error.is_null() {
                    tracing::warn!("calendar access request reported an error");
                }
                let pending = responder.lock().ok().and_then(|mut slot| slot.take());
                if let Some(pending) = pending {
                    pending.respond(granted.as_bool());
                }
            },
        ) as *const _ as *mut _);
    }

    request
}

fn fetch_events(
    store: &EKEventStore,
    start: &NSDate,
    end: &NSDate,
    calendars: &NSArray<EKCalendar>,
) -> Vec<Retained<EKEvent>> {
    unsafe {
        let predicate =
            store.predicateForEventsWithStartDate_endDate_calendars(start, end, Some(calendars));
        store.eventsMatchingPredicate(&predicate).to_vec()
    }
}

fn parse_event(event: &EKEvent) -> CalendarEvent {
    let (start_date, end_date, title, location, calendar, is_all_day) = unsafe {
        (
            event.startDate(),
            event.endDate(),
            event.title(),
            event.location(),
            event.calendar(),
            event.isAllDay(),
        )
    };

    CalendarEvent {
        title: Some(title.to_string()),
        start: from_ns_date(&start_date),
        end: from_ns_date(&end_date),
        is_all_day,
        location: location.map(|l| l.to_string()),
        calendar_name: calendar
            .map(|c| unsafe { c.title() }.to_string())
            .unwrap_or_default(),
    }
}

fn to_ns_date(dt: &DateTime<FixedOffset>) -> Retained<NSDate> {
    NSDate::dateWithTimeIntervalSince1970(to_unix_seconds(dt))
}

fn from_ns_date(date: &NSDate) -> Option<DateTime<FixedOffset>> {
    from_unix_seconds(date.timeIntervalSince1970(), &Local)
}
