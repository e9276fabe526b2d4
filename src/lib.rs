pub mod args;
pub mod calendar;
pub mod config;
pub mod error;
pub mod logging;
pub mod print;
pub mod view;

#[cfg(target_os = "macos")]
pub mod ffi;
#[cfg(target_os = "macos")]
pub mod menu;
