use objc2::rc::Retained;
use objc2::runtime::{AnyObject, Sel};
use objc2_foundation::{NSNotificationCenter, NSString, NSTimeInterval, NSTimer};

pub fn add_observer<T>(
    notification_center: &NSNotificationCenter,
    observer: &Retained<T>,
    selector: Sel,
    name: Option<&NSString>,
    object: Option<&AnyObject>,
) where
    T: objc2::Message,
{
    unsafe {
        let observer_ptr: *const T = Retained::as_ptr(observer);
        let observer_anyobject = observer_ptr as *const AnyObject;
        notification_center.addObserver_selector_name_object(&*observer_anyobject, selector, name, object);
    }
}

/// Repeating timer on the current (main) run loop that sends `selector` to `target`.
pub fn schedule_repeating_timer<T>(
    interval: NSTimeInterval,
    target: &T,
    selector: Sel,
) -> Retained<NSTimer>
where
    T: objc2::Message,
{
    unsafe {
        let target_anyobject = &*(target as *const T as *const AnyObject);
        NSTimer::scheduledTimerWithTimeInterval_target_selector_userInfo_repeats(
            interval,
            target_anyobject,
            selector,
            None,
            true,
        )
    }
}
