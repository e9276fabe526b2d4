use chrono::TimeZone;
use futures::executor::block_on;
use std::io::Write;

use crate::calendar::{CalendarError, CalendarStore, SelectedDate};
use crate::error::AppResult;
use crate::view::{Activation, DayView, TerminalSurface, ViewOptions};

/// Resolves access, renders `date` and writes it to `out`. A refusal is
/// returned as [`CalendarError::AccessDenied`], whose message is the guidance.
///
/// The terminal owns no run loop, so the calling thread waits for the access
/// answer and then applies it itself.
pub fn print_day<S, Tz, W>(
    store: S,
    tz: Tz,
    date: SelectedDate,
    options: ViewOptions,
    out: &mut W,
) -> AppResult<()>
where
    S: CalendarStore,
    Tz: TimeZone,
    W: Write,
{
    let mut view =
        DayView::with_timezone(store, TerminalSurface::default(), tz, date).with_options(options);

    match block_on(view.activate_and_wait())? {
        Activation::Denied => Err(CalendarError::AccessDenied.into()),
        _ => {
            view.surface().flush_to(out)?;
            Ok(())
        }
    }
}
