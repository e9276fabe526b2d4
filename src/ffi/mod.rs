pub mod app_kit;
pub mod event_kit;
pub mod foundation;
