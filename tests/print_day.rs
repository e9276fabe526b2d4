mod common;

use common::{all_day, day, timed, utc, AccessAnswer, FakeStore};
use dayview::calendar::{AuthorizationStatus, CalendarError, SelectedDate};
use dayview::config::Config;
use dayview::error::AppError;
use dayview::print::print_day;
use dayview::view::ViewOptions;

#[test]
fn prints_label_and_events() {
    let june2 = day(2018, 6, 2);
    let store = FakeStore::authorized(vec![
        all_day("Birthday", june2, "Family"),
        timed("Standup", june2, (9, 0), (9, 15)),
    ]);

    let mut out = Vec::new();
    print_day(store, utc(), SelectedDate::new(june2), ViewOptions::default(), &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "June 2, 2018\n\nBirthday\nAll Day\nFamily\n\nStandup\n9:00 AM - 9:15 AM\nWork\n\n"
    );
}

#[test]
fn waits_for_an_undecided_answer() {
    let june2 = day(2018, 6, 2);
    let store = FakeStore::new(
        AuthorizationStatus::NotDetermined,
        vec![timed("Standup", june2, (9, 0), (9, 15))],
    )
    .answering(AccessAnswer::Immediately(true));

    let mut out = Vec::new();
    print_day(store, utc(), SelectedDate::new(june2), ViewOptions::default(), &mut out).unwrap();
    assert!(String::from_utf8(out).unwrap().contains("Standup\n"));
}

#[test]
fn denied_access_is_an_error_and_prints_nothing() {
    let june2 = day(2018, 6, 2);
    let store = FakeStore::new(AuthorizationStatus::Denied, vec![]);

    let mut out = Vec::new();
    let err = print_day(store, utc(), SelectedDate::new(june2), ViewOptions::default(), &mut out)
        .unwrap_err();

    assert!(matches!(err, AppError::Calendar(CalendarError::AccessDenied)));
    assert!(out.is_empty());
    assert_eq!(
        err.to_string(),
        "Calendar access denied. Grant access in System Settings > Privacy & Security > Calendars."
    );
}

#[test]
fn configured_formats_reach_the_output() {
    let config = Config::parse(
        r#"
[display]
time_format = "%H:%M"
date_format = "%Y-%m-%d"
"#,
    )
    .unwrap();
    let june2 = day(2018, 6, 2);
    let store = FakeStore::authorized(vec![timed("Review", june2, (14, 0), (14, 30))]);

    let mut out = Vec::new();
    print_day(store, utc(), SelectedDate::new(june2), config.view_options(), &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "2018-06-02\n\nReview\n14:00 - 14:30\nWork\n\n"
    );
}
