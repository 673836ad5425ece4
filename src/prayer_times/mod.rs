pub mod schedule;

pub use schedule::{DialSnapshot, PrayerSchedule, mock_snapshot};
