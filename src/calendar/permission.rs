use super::store::{AccessRequest, AuthorizationStatus, CalendarStore};

/// Guidance shown when read access is refused, one line per menu item.
pub const PERMISSION_DENIED_LINES: [&str; 2] = [
    "Calendar access denied.",
    "Grant access in System Settings > Privacy & Security > Calendars.",
];

/// Outcome of checking read access before a query.
#[derive(Debug)]
pub enum Gate {
    Proceed,
    /// The user has not decided yet; a request is now in flight.
    Request(AccessRequest),
    Deny,
}

/// Consults the store's current status, asking for access when undecided.
/// Nothing is remembered here; the store's own status is the only record.
pub fn check<S: CalendarStore>(store: &S) -> Gate {
    match store.authorization_status() {
        AuthorizationStatus::Authorized => Gate::Proceed,
        AuthorizationStatus::NotDetermined => {
            tracing::info!("requesting calendar access");
            Gate::Request(store.request_access())
        }
        status @ (AuthorizationStatus::Denied | AuthorizationStatus::Restricted) => {
            tracing::warn!(?status, "calendar access unavailable");
            Gate::Deny
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarError;

    #[test]
    fn every_guidance_line_is_a_full_sentence() {
        for line in PERMISSION_DENIED_LINES {
            assert!(line.ends_with('.'), "{line:?}");
            assert!(!line.contains(". "), "{line:?}");
        }
    }

    #[test]
    fn access_denied_error_carries_the_guidance() {
        assert_eq!(
            CalendarError::AccessDenied.to_string(),
            PERMISSION_DENIED_LINES.join(" ")
        );
    }
}
