#![allow(dead_code)]

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use dayview::calendar::{
    AccessRequest, AccessResponder, AuthorizationStatus, CalendarEvent, CalendarStore, DayWindow,
};
use std::cell::{Cell, RefCell};

/// How the fake answers an access request.
#[derive(Debug, Clone, Copy)]
pub enum AccessAnswer {
    Immediately(bool),
    /// Keep the responder so the test can answer later, from any thread.
    Later,
}

/// In-memory calendar store that records how it was used.
pub struct FakeStore {
    pub status: Cell<AuthorizationStatus>,
    pub answer: AccessAnswer,
    pub events: Vec<CalendarEvent>,
    pub responder: RefCell<Option<AccessResponder>>,
    pub request_calls: Cell<usize>,
    pub calendar_calls: Cell<usize>,
    pub query_calls: Cell<usize>,
    pub windows: RefCell<Vec<DayWindow>>,
}

impl FakeStore {
    pub fn new(status: AuthorizationStatus, events: Vec<CalendarEvent>) -> Self {
        Self {
            status: Cell::new(status),
            answer: AccessAnswer::Immediately(true),
            events,
            responder: RefCell::new(None),
            request_calls: Cell::new(0),
            calendar_calls: Cell::new(0),
            query_calls: Cell::new(0),
            windows: RefCell::new(Vec::new()),
        }
    }

    pub fn authorized(events: Vec<CalendarEvent>) -> Self {
        Self::new(AuthorizationStatus::Authorized, events)
    }

    pub fn answering(mut self, answer: AccessAnswer) -> Self {
        self.answer = answer;
        self
    }

    pub fn take_responder(&self) -> AccessResponder {
        self.responder
            .borrow_mut()
            .take()
            .expect("no access request in flight")
    }
}

impl CalendarStore for FakeStore {
    type Calendars = Vec<String>;

    fn authorization_status(&self) -> AuthorizationStatus {
        self.status.get()
    }

    fn request_access(&self) -> AccessRequest {
        self.request_calls.set(self.request_calls.get() + 1);
        match self.answer {
            AccessAnswer::Immediately(granted) => {
                self.status.set(if granted {
                    AuthorizationStatus::Authorized
                } else {
                    AuthorizationStatus::Denied
                });
                AccessRequest::resolved(granted)
            }
            AccessAnswer::Later => {
                let (responder, request) = AccessRequest::channel();
                *self.responder.borrow_mut() = Some(responder);
                request
            }
        }
    }

    fn calendars(&self) -> Vec<String> {
        self.calendar_calls.set(self.calendar_calls.get() + 1);
        let mut names: Vec<String> = Vec::new();
        for event in &self.events {
            if !names.contains(&event.calendar_name) {
                names.push(event.calendar_name.clone());
            }
        }
        names
    }

    fn events(&self, window: &DayWindow, calendars: &Vec<String>) -> Vec<CalendarEvent> {
        self.query_calls.set(self.query_calls.get() + 1);
        self.windows.borrow_mut().push(*window);
        self.events
            .iter()
            .filter(|e| calendars.contains(&e.calendar_name))
            .filter(|e| match (e.start, e.end.or(e.start)) {
                (Some(start), Some(end)) => window.overlaps(&start, &end),
                _ => true,
            })
            .cloned()
            .collect()
    }
}

pub fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(date: NaiveDate, h: u32, min: u32) -> DateTime<FixedOffset> {
    utc()
        .from_local_datetime(&date.and_hms_opt(h, min, 0).unwrap())
        .unwrap()
}

pub fn timed(title: &str, date: NaiveDate, start: (u32, u32), end: (u32, u32)) -> CalendarEvent {
    CalendarEvent {
        title: Some(title.to_string()),
        start: Some(at(date, start.0, start.1)),
        end: Some(at(date, end.0, end.1)),
        is_all_day: false,
        location: None,
        calendar_name: "Work".to_string(),
    }
}

pub fn all_day(title: &str, date: NaiveDate, calendar: &str) -> CalendarEvent {
    CalendarEvent {
        title: Some(title.to_string()),
        start: Some(at(date, 0, 0)),
        end: Some(at(date, 23, 59)),
        is_all_day: true,
        location: None,
        calendar_name: calendar.to_string(),
    }
}
