use futures::FutureExt;
use objc2::rc::Retained;
use objc2::{define_class, msg_send, DefinedClass, MainThreadOnly};
use objc2_app_kit::{NSMenuItem, NSStatusItem};
use objc2_foundation::{MainThreadMarker, NSNotification, NSObject, NSString, NSTimeInterval, NSTimer};
use std::cell::RefCell;
use tracing::error;

use crate::calendar::{AccessRequest, CalendarError};
use crate::ffi::event_kit::EventKitStore;
use crate::ffi::foundation;
use crate::view::{Activation, DayView, TextBuffer};

use super::builder::MenuBuilder;

const ACCESS_POLL_INTERVAL: NSTimeInterval = 0.1;

pub type MenuDayView = DayView<EventKitStore, TextBuffer>;

pub struct Ivars {
    mtm: MainThreadMarker,
    view: RefCell<MenuDayView>,
    pending_access: RefCell<Option<AccessRequest>>,
    access_timer: RefCell<Option<Retained<NSTimer>>>,
    status_item: Retained<NSStatusItem>,
    max_line_length: usize,
}

define_class!(
    #[unsafe(super(NSObject))]
    #[thread_kind = MainThreadOnly]
    #[ivars = Ivars]
    #[name = "DayViewMenuDelegate"]
    pub struct MenuDelegate;

    impl MenuDelegate {
        #[unsafe(method(previousDay:))]
        fn previous_day(&self, _sender: &NSMenuItem) {
            let result = self.ivars().view.borrow_mut().previous_day();
            self.settle(result.map(|_| ()));
        }

        #[unsafe(method(nextDay:))]
        fn next_day(&self, _sender: &NSMenuItem) {
            let result = self.ivars().view.borrow_mut().next_day();
            self.settle(result.map(|_| ()));
        }

        #[unsafe(method(eventStoreChanged:))]
        fn event_store_changed(&self, _notification: &NSNotification) {
            tracing::debug!("calendar store changed");
            let result = self.ivars().view.borrow_mut().refresh();
            self.settle(result.map(|_| ()));
        }

        #[unsafe(method(didWakeNotification:))]
        fn did_wake_notification(&self, _notification: &NSNotification) {
            tracing::debug!("system woke");
            let result = self.ivars().view.borrow_mut().refresh();
            self.settle(result.map(|_| ()));
        }

        #[unsafe(method(pollAccess:))]
        fn poll_access(&self, _timer: &NSTimer) {
            let answer = self
                .ivars()
                .pending_access
                .borrow_mut()
                .as_mut()
                .and_then(|request| request.now_or_never());

            if let Some(granted) = answer {
                self.stop_polling();
                let result = self.ivars().view.borrow_mut().complete_access(granted);
                self.settle(result.map(|_| ()));
            }
        }
    }
);

impl MenuDelegate {
    pub fn new(
        mtm: MainThreadMarker,
        view: MenuDayView,
        status_item: Retained<NSStatusItem>,
        max_line_length: usize,
    ) -> Retained<Self> {
        let this = mtm.alloc::<Self>();
        let this = this.set_ivars(Ivars {
            mtm,
            view: RefCell::new(view),
            pending_access: RefCell::new(None),
            access_timer: RefCell::new(None),
            status_item,
            max_line_length,
        });
        unsafe { msg_send![super(this), init] }
    }

    /// Runs the permission gate. A pending request is polled from the main
    /// run loop so its continuation lands back on this thread.
    pub fn activate(&self) {
        let activation = self.ivars().view.borrow_mut().activate();
        match activation {
            Ok(Activation::Pending(request)) => {
                *self.ivars().pending_access.borrow_mut() = Some(request);
                let timer = foundation::schedule_repeating_timer(
                    ACCESS_POLL_INTERVAL,
                    self,
                    objc2::sel!(pollAccess:),
                );
                *self.ivars().access_timer.borrow_mut() = Some(timer);
                self.redraw();
            }
            other => self.settle(other.map(|_| ())),
        }
    }

    fn stop_polling(&self) {
        self.ivars().pending_access.borrow_mut().take();
        if let Some(timer) = self.ivars().access_timer.borrow_mut().take() {
            unsafe { timer.invalidate() };
        }
    }

    fn settle(&self, result: Result<(), CalendarError>) {
        match result {
            Ok(()) => self.redraw(),
            Err(e) => fatal(e),
        }
    }

    /// Rebuilds the status item's title and menu from the view's buffer.
    pub fn redraw(&self) {
        let ivars = self.ivars();
        let view = ivars.view.borrow();
        let buffer = view.surface();

        if let Some(button) = ivars.status_item.button(ivars.mtm) {
            button.setTitle(&NSString::from_str(buffer.label()));
        }

        let menu = MenuBuilder::new(buffer, self, ivars.max_line_length, ivars.mtm).build();
        ivars.status_item.setMenu(Some(&menu));
    }
}

/// Calendar arithmetic failures end the app.
fn fatal(err: CalendarError) -> ! {
    error!("{err}");
    eprintln!("Error: {err}");
    std::process::exit(1);
}
