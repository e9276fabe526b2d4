use objc2::rc::Retained;
use objc2::runtime::{AnyObject, Sel};
use objc2_app_kit::{NSMenu, NSMenuItem};
use objc2_foundation::{ns_string, MainThreadMarker, NSString};

pub fn init_menu(mtm: MainThreadMarker, title: &NSString) -> Retained<NSMenu> {
    NSMenu::initWithTitle(mtm.alloc(), title)
}

pub fn init_menu_item(
    mtm: MainThreadMarker,
    title: &NSString,
    action: Option<Sel>,
    key_equivalent: &NSString,
) -> Retained<NSMenuItem> {
    unsafe { NSMenuItem::initWithTitle_action_keyEquivalent(mtm.alloc(), title, action, key_equivalent) }
}

/// A greyed-out line of text.
pub fn init_label_item(mtm: MainThreadMarker, text: &str) -> Retained<NSMenuItem> {
    let item = init_menu_item(mtm, &NSString::from_str(text), None, ns_string!(""));
    item.setEnabled(false);
    item
}

pub fn set_menu_item_target<T>(item: &NSMenuItem, target: Option<&T>)
where
    T: objc2::Message,
{
    unsafe {
        let target_anyobject = target.map(|t| {
            let ptr: *const T = t as *const T;
            &*(ptr as *const AnyObject)
        });
        item.setTarget(target_anyobject);
    }
}
