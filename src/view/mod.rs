pub mod surface;

use chrono::{Local, TimeZone};
use tracing::{debug, info};

use crate::calendar::date::DEFAULT_DATE_FORMAT;
use crate::calendar::{
    permission, query_events, AccessRequest, AuthorizationStatus, CalendarResult, CalendarStore,
    DayWindow, EventFormatter, Gate, SelectedDate,
};

pub use surface::{
    DateLabel, PermissionNotice, TerminalSurface, TextBuffer, TextSurface, ViewSurface,
};

/// Where the view stands after the permission gate has been consulted.
#[derive(Debug)]
pub enum Activation {
    Loaded,
    Denied,
    /// Awaiting the user's answer. Pass the result to
    /// [`DayView::complete_access`] from the context that owns the view.
    Pending(AccessRequest),
}

#[derive(Debug, Clone)]
pub struct ViewOptions {
    pub formatter: EventFormatter,
    pub date_format: String,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            formatter: EventFormatter::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// One day of events, steppable a day at a time.
///
/// Owns the selected date and the surface it draws on; both are only touched
/// from whichever single context drives the view.
pub struct DayView<S, V, Tz = Local>
where
    Tz: TimeZone,
{
    store: S,
    surface: V,
    tz: Tz,
    selected: SelectedDate,
    options: ViewOptions,
}

impl<S: CalendarStore, V: ViewSurface> DayView<S, V, Local> {
    /// A view on today in the local zone.
    pub fn new(store: S, surface: V) -> Self {
        Self::with_timezone(store, surface, Local, SelectedDate::today(&Local))
    }
}

impl<S, V, Tz> DayView<S, V, Tz>
where
    S: CalendarStore,
    V: ViewSurface,
    Tz: TimeZone,
{
    pub fn with_timezone(store: S, surface: V, tz: Tz, selected: SelectedDate) -> Self {
        Self {
            store,
            surface,
            tz,
            selected,
            options: ViewOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ViewOptions) -> Self {
        self.options = options;
        self
    }

    pub fn selected_date(&self) -> SelectedDate {
        self.selected
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    pub fn window(&self) -> CalendarResult<DayWindow> {
        DayWindow::for_date(self.selected.date(), &self.tz)
    }

    /// Runs the permission gate and loads the day if access is already held.
    pub fn activate(&mut self) -> CalendarResult<Activation> {
        match permission::check(&self.store) {
            Gate::Proceed => {
                self.render(true)?;
                Ok(Activation::Loaded)
            }
            Gate::Request(request) => {
                self.render(false)?;
                Ok(Activation::Pending(request))
            }
            Gate::Deny => {
                self.render(false)?;
                self.surface.permission_denied();
                Ok(Activation::Denied)
            }
        }
    }

    /// Continuation of an access request. Must run on the context that owns
    /// the view, never on the thread the store answered from.
    pub fn complete_access(&mut self, granted: bool) -> CalendarResult<Activation> {
        if granted {
            info!("calendar access granted");
            self.render(true)?;
            Ok(Activation::Loaded)
        } else {
            info!("calendar access refused");
            self.surface.permission_denied();
            Ok(Activation::Denied)
        }
    }

    /// [`activate`](Self::activate), then wait for and apply the user's answer.
    /// The continuation runs wherever this future is polled.
    pub async fn activate_and_wait(&mut self) -> CalendarResult<Activation> {
        match self.activate()? {
            Activation::Pending(request) => {
                let granted = request.await;
                self.complete_access(granted)
            }
            settled => Ok(settled),
        }
    }

    pub fn next_day(&mut self) -> CalendarResult<usize> {
        let date = self.selected.next()?;
        self.change_date(date)
    }

    pub fn previous_day(&mut self) -> CalendarResult<usize> {
        let date = self.selected.previous()?;
        self.change_date(date)
    }

    pub fn change_date(&mut self, date: SelectedDate) -> CalendarResult<usize> {
        self.selected = date;
        self.refresh()
    }

    /// Clears the text and re-renders the selected day. Queries only while
    /// the store reports read access; a refused store gets the notice again.
    pub fn refresh(&mut self) -> CalendarResult<usize> {
        match self.store.authorization_status() {
            AuthorizationStatus::Authorized => self.render(true),
            AuthorizationStatus::NotDetermined => self.render(false),
            AuthorizationStatus::Denied | AuthorizationStatus::Restricted => {
                let rendered = self.render(false)?;
                self.surface.permission_denied();
                Ok(rendered)
            }
        }
    }

    fn render(&mut self, query: bool) -> CalendarResult<usize> {
        let window = self.window()?;

        self.surface
            .set_text(&self.selected.label(&self.options.date_format));
        self.surface.clear();

        if !query {
            debug!(date = %self.selected, "no calendar access, skipping query");
            return Ok(0);
        }

        let formatter = &self.options.formatter;
        let mut rendered = 0;
        for event in query_events(&self.store, &window) {
            if let Some(record) = formatter.format(&event) {
                self.surface.append(&formatter.render(&record));
                rendered += 1;
            }
        }

        info!(date = %self.selected, rendered, "rendered day");
        Ok(rendered)
    }
}
