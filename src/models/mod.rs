pub mod alarm;
pub mod board;
pub mod date_cursor;
pub mod prayer;

pub use alarm::AlarmType;
pub use board::PrayerBoard;
pub use date_cursor::DateCursor;
pub use prayer::{Prayer, PrayerType};
