mod builder;
mod delegate;
mod observers;

pub use builder::MenuBuilder;
pub use delegate::{MenuDayView, MenuDelegate};

use chrono::Local;
use objc2_app_kit::{
    NSApplication, NSApplicationActivationPolicy, NSStatusBar, NSVariableStatusItemLength,
};
use objc2_foundation::MainThreadMarker;

use crate::calendar::SelectedDate;
use crate::config::Config;
use crate::error::AppResult;
use crate::ffi::event_kit::EventKitStore;
use crate::view::{DayView, TextBuffer};

/// Runs the status bar app until the user quits.
pub fn run(mtm: MainThreadMarker, config: &Config, date: Option<SelectedDate>) -> AppResult<()> {
    let app = NSApplication::sharedApplication(mtm);
    app.setActivationPolicy(NSApplicationActivationPolicy::Accessory);

    let store = EventKitStore::new(mtm);
    let selected = date.unwrap_or_else(|| SelectedDate::today(&Local));
    let view = DayView::with_timezone(store, TextBuffer::default(), Local, selected)
        .with_options(config.view_options());

    let status_item =
        NSStatusBar::systemStatusBar().statusItemWithLength(NSVariableStatusItemLength);

    let delegate = MenuDelegate::new(mtm, view, status_item, config.menu.max_line_length);
    delegate.activate();
    observers::observe_system_notifs(&delegate);

    tracing::info!(date = %selected, "menu bar ready");
    app.run();
    Ok(())
}
