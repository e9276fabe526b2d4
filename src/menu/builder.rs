use objc2::rc::Retained;
use objc2_app_kit::{NSMenu, NSMenuItem};
use objc2_foundation::{ns_string, MainThreadMarker};

use crate::calendar::formatting::truncate_title;
use crate::calendar::PERMISSION_DENIED_LINES;
use crate::ffi::app_kit;
use crate::view::TextBuffer;

use super::delegate::MenuDelegate;

/// Turns the view's text buffer into a status bar menu. Each line of text
/// becomes a disabled item; the blank line closing an event block becomes a
/// separator.
pub struct MenuBuilder<'a> {
    buffer: &'a TextBuffer,
    delegate: &'a MenuDelegate,
    max_line_length: usize,
    mtm: MainThreadMarker,
}

impl<'a> MenuBuilder<'a> {
    pub fn new(
        buffer: &'a TextBuffer,
        delegate: &'a MenuDelegate,
        max_line_length: usize,
        mtm: MainThreadMarker,
    ) -> Self {
        Self {
            buffer,
            delegate,
            max_line_length,
            mtm,
        }
    }

    pub fn build(self) -> Retained<NSMenu> {
        let menu = app_kit::init_menu(self.mtm, ns_string!(""));

        self.add_navigation(&menu);
        menu.addItem(&NSMenuItem::separatorItem(self.mtm));

        if self.buffer.is_denied() {
            self.add_permission_notice(&menu);
            menu.addItem(&NSMenuItem::separatorItem(self.mtm));
        } else if self.buffer.text().is_empty() {
            self.add_empty_state(&menu);
            menu.addItem(&NSMenuItem::separatorItem(self.mtm));
        } else {
            self.add_event_lines(&menu);
        }

        self.add_quit_item(&menu);
        menu
    }

    fn add_navigation(&self, menu: &NSMenu) {
        let previous = app_kit::init_menu_item(
            self.mtm,
            ns_string!("Previous Day"),
            Some(objc2::sel!(previousDay:)),
            ns_string!("["),
        );
        app_kit::set_menu_item_target(&previous, Some(self.delegate));
        menu.addItem(&previous);

        let next = app_kit::init_menu_item(
            self.mtm,
            ns_string!("Next Day"),
            Some(objc2::sel!(nextDay:)),
            ns_string!("]"),
        );
        app_kit::set_menu_item_target(&next, Some(self.delegate));
        menu.addItem(&next);
    }

    fn add_permission_notice(&self, menu: &NSMenu) {
        for line in PERMISSION_DENIED_LINES {
            let text = truncate_title(line, self.max_line_length);
            menu.addItem(&app_kit::init_label_item(self.mtm, &text));
        }
    }

    fn add_empty_state(&self, menu: &NSMenu) {
        let item = app_kit::init_menu_item(self.mtm, ns_string!("No events"), None, ns_string!(""));
        item.setEnabled(false);
        menu.addItem(&item);
    }

    fn add_event_lines(&self, menu: &NSMenu) {
        for line in self.buffer.lines() {
            if line.is_empty() {
                menu.addItem(&NSMenuItem::separatorItem(self.mtm));
            } else {
                let text = truncate_title(line, self.max_line_length);
                menu.addItem(&app_kit::init_label_item(self.mtm, &text));
            }
        }
    }

    fn add_quit_item(&self, menu: &NSMenu) {
        let quit_item = app_kit::init_menu_item(
            self.mtm,
            ns_string!("Quit"),
            Some(objc2::sel!(terminate:)),
            ns_string!("q"),
        );
        menu.addItem(&quit_item);
    }
}
