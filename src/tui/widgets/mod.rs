pub mod calendar;
pub mod date_selector;
pub mod dial;
pub mod header;
pub mod prayers;
pub mod statusbar;
