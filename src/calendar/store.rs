use futures::channel::oneshot;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use super::events::{CalendarEvent, DayWindow};

/// Read authorization as reported by the calendar store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationStatus {
    NotDetermined,
    Authorized,
    Denied,
    Restricted,
}

/// Read-only access to a calendar store.
///
/// The platform store (EventKit on macOS) and the fakes used in tests both
/// sit behind this trait, so nothing above it holds a process-wide handle.
pub trait CalendarStore {
    /// Whatever the store needs to scope an event fetch to a set of calendars.
    type Calendars;

    fn authorization_status(&self) -> AuthorizationStatus;

    /// Asks the user for read access. Resolves to `true` when granted.
    fn request_access(&self) -> AccessRequest;

    /// Every calendar that can hold events.
    fn calendars(&self) -> Self::Calendars;

    /// Events in `calendars` whose time range intersects `window`, in store order.
    fn events(&self, window: &DayWindow, calendars: &Self::Calendars) -> Vec<CalendarEvent>;
}

/// Pending answer to an access request.
///
/// The matching [`AccessResponder`] may fire from any thread; whoever awaits
/// this future decides which context the continuation runs on.
#[derive(Debug)]
pub struct AccessRequest {
    rx: oneshot::Receiver<bool>,
}

/// Sending half of an [`AccessRequest`].
#[derive(Debug)]
pub struct AccessResponder {
    tx: oneshot::Sender<bool>,
}

impl AccessRequest {
    pub fn channel() -> (AccessResponder, AccessRequest) {
        let (tx, rx) = oneshot::channel();
        (AccessResponder { tx }, AccessRequest { rx })
    }

    /// A request that has already been answered.
    pub fn resolved(granted: bool) -> Self {
        let (responder, request) = Self::channel();
        responder.respond(granted);
        request
    }
}

impl AccessResponder {
    pub fn respond(self, granted: bool) {
        if self.tx.send(granted).is_err() {
            tracing::debug!("access request dropped before the store answered");
        }
    }
}

impl Future for AccessRequest {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        // A responder dropped without answering counts as a refusal.
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|answer| answer.unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::FutureExt;

    #[test]
    fn resolved_request_is_ready_immediately() {
        assert_eq!(AccessRequest::resolved(true).now_or_never(), Some(true));
        assert_eq!(AccessRequest::resolved(false).now_or_never(), Some(false));
    }

    #[test]
    fn request_stays_pending_until_answered() {
        let (responder, mut request) = AccessRequest::channel();
        assert_eq!((&mut request).now_or_never(), None);

        responder.respond(true);
        assert_eq!(request.now_or_never(), Some(true));
    }

    #[test]
    fn answer_from_another_thread_is_delivered() {
        let (responder, request) = AccessRequest::channel();
        let handle = std::thread::spawn(move || responder.respond(true));

        assert!(block_on(request));
        handle.join().unwrap();
    }

    #[test]
    fn dropped_responder_means_denied() {
        let (responder, request) = AccessRequest::channel();
        drop(responder);
        assert!(!block_on(request));
    }
}
