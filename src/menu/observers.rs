use objc2::rc::Retained;
use objc2_app_kit::NSWorkspace;
use objc2_foundation::{ns_string, NSNotificationCenter, NSString};

use crate::ffi::foundation;

use super::delegate::MenuDelegate;

#[derive(Debug, Clone, Copy)]
pub enum SystemNotification {
    EventStoreChanged,
    WorkspaceDidWake,
}

impl SystemNotification {
    const ALL: [Self; 2] = [Self::EventStoreChanged, Self::WorkspaceDidWake];

    fn name(&self) -> &'static NSString {
        match self {
            Self::EventStoreChanged => ns_string!("EKEventStoreChangedNotification"),
            Self::WorkspaceDidWake => ns_string!("NSWorkspaceDidWakeNotification"),
        }
    }

    fn selector(&self) -> objc2::runtime::Sel {
        match self {
            Self::EventStoreChanged => objc2::sel!(eventStoreChanged:),
            Self::WorkspaceDidWake => objc2::sel!(didWakeNotification:),
        }
    }

    /// Workspace notifications are only posted on the workspace's own center.
    fn center(&self) -> Retained<NSNotificationCenter> {
        match self {
            Self::EventStoreChanged => NSNotificationCenter::defaultCenter(),
            Self::WorkspaceDidWake => NSWorkspace::sharedWorkspace().notificationCenter(),
        }
    }
}

pub fn observe_system_notifs(delegate: &Retained<MenuDelegate>) {
    for notification in SystemNotification::ALL {
        foundation::add_observer(
            &notification.center(),
            delegate,
            notification.selector(),
            Some(notification.name()),
            None,
        );
    }
}
