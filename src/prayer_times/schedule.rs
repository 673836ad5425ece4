use anyhow::{Context, Result, anyhow};
use chrono::{NaiveTime, Timelike};
use serde::Serialize;
use std::str::FromStr;

use crate::config::settings::{DialConfig, ScheduleConfig, parse_hhmm};
use crate::models::{Prayer, PrayerType};

const SECS_PER_DAY: i64 = 24 * 60 * 60;

/// What the dial shows at a given moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DialSnapshot {
    /// Prayer whose time has most recently started.
    pub current: PrayerType,
    pub next: PrayerType,
    pub seconds_to_next: i64,
    /// 0-100, share of the day that has passed.
    pub day_progress: f64,
    /// 0-100, share of the gap between `current` and `next` that has passed.
    pub next_prayer_progress: f64,
}

/// The fixed daily list with times taken from `[schedule]`.
#[derive(Debug, Clone)]
pub struct PrayerSchedule {
    prayers: Vec<Prayer>,
    sunrise: NaiveTime,
    iqamah_offset: u32,
}

impl PrayerSchedule {
    pub fn from_config(config: &ScheduleConfig) -> Result<Self> {
        Ok(Self {
            prayers: config.prayers()?,
            sunrise: config.sunrise_time()?,
            iqamah_offset: config.iqamah_offset,
        })
    }

    pub fn prayers(&self) -> &[Prayer] {
        &self.prayers
    }

    pub fn sunrise(&self) -> NaiveTime {
        self.sunrise
    }

    pub fn iqamah_offset(&self) -> u32 {
        self.iqamah_offset
    }

    pub fn time_of(&self, prayer: PrayerType) -> Option<NaiveTime> {
        self.prayers
            .iter()
            .find(|p| p.prayer_type == prayer)
            .map(|p| p.time)
    }

    /// Latest prayer whose time is at or before `now`; before Fajr that is
    /// yesterday's Isha.
    pub fn current_at(&self, now: NaiveTime) -> PrayerType {
        self.prayers
            .iter()
            .rev()
            .find(|p| p.time <= now)
            .or_else(|| self.prayers.last())
            .map(|p| p.prayer_type)
            .unwrap_or(PrayerType::Isha)
    }

    /// Next prayer strictly after `now` and the seconds until it. After Isha
    /// this wraps to tomorrow's Fajr.
    pub fn next_after(&self, now: NaiveTime) -> Option<(PrayerType, i64)> {
        if let Some(p) = self.prayers.iter().find(|p| p.time > now) {
            return Some((p.prayer_type, (p.time - now).num_seconds()));
        }
        let first = self.prayers.first()?;
        let secs = seconds_of_day(first.time) + SECS_PER_DAY - seconds_of_day(now);
        Some((first.prayer_type, secs))
    }

    pub fn snapshot_at(&self, now: NaiveTime) -> Option<DialSnapshot> {
        let current = self.current_at(now);
        let (next, seconds_to_next) = self.next_after(now)?;
        let start = self.time_of(current)?;

        // Both gaps wrap past midnight between Isha and Fajr.
        let elapsed = gap_between(start, now);
        let interval = gap_between(start, self.time_of(next)?);
        let next_prayer_progress = if interval > 0 {
            elapsed as f64 / interval as f64 * 100.0
        } else {
            0.0
        };

        Some(DialSnapshot {
            current,
            next,
            seconds_to_next,
            day_progress: seconds_of_day(now) as f64 / SECS_PER_DAY as f64 * 100.0,
            next_prayer_progress: next_prayer_progress.clamp(0.0, 100.0),
        })
    }
}

/// Builds the dial values from `[dial.mock]`.
pub fn mock_snapshot(dial: &DialConfig) -> Result<DialSnapshot> {
    let current = PrayerType::from_str(&dial.mock.current).context("Parsing dial.mock.current")?;
    let countdown = parse_hhmm(&dial.mock.time_to_next).context("Parsing dial.mock.time_to_next")?;
    let next = PrayerType::all()
        .into_iter()
        .skip_while(|p| *p != current)
        .nth(1)
        .unwrap_or(PrayerType::Fajr);

    if !dial.mock.day_progress.is_finite() || !dial.mock.next_prayer_progress.is_finite() {
        return Err(anyhow!("dial.mock progress values must be finite numbers"));
    }

    Ok(DialSnapshot {
        current,
        next,
        seconds_to_next: seconds_of_day(countdown),
        day_progress: dial.mock.day_progress,
        next_prayer_progress: dial.mock.next_prayer_progress,
    })
}

fn seconds_of_day(t: NaiveTime) -> i64 {
    t.num_seconds_from_midnight() as i64
}

fn gap_between(from: NaiveTime, to: NaiveTime) -> i64 {
    (seconds_of_day(to) - seconds_of_day(from)).rem_euclid(SECS_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn schedule() -> PrayerSchedule {
        PrayerSchedule::from_config(&ScheduleConfig::default()).unwrap()
    }

    #[test]
    fn current_and_next_during_the_day() {
        let s = schedule();
        assert_eq!(s.current_at(t(16, 0)), PrayerType::Asr);
        assert_eq!(s.next_after(t(16, 0)), Some((PrayerType::Maghrib, 2 * 3600 + 45 * 60)));
        assert_eq!(s.current_at(t(15, 30)), PrayerType::Asr);
    }

    #[test]
    fn wraps_to_fajr_after_isha() {
        let s = schedule();
        assert_eq!(s.current_at(t(23, 0)), PrayerType::Isha);
        assert_eq!(s.next_after(t(23, 0)), Some((PrayerType::Fajr, 6 * 3600 + 30 * 60)));
        assert_eq!(s.current_at(t(3, 0)), PrayerType::Isha);
        assert_eq!(s.next_after(t(3, 0)), Some((PrayerType::Fajr, 2 * 3600 + 30 * 60)));
    }

    #[test]
    fn snapshot_progress_values() {
        let s = schedule();
        let snap = s.snapshot_at(t(12, 0)).unwrap();
        assert_eq!(snap.current, PrayerType::Fajr);
        assert_eq!(snap.next, PrayerType::Dhuhr);
        assert!((snap.day_progress - 50.0).abs() < 1e-9);
        // 05:30 -> 12:15 is 405 minutes, 390 have passed.
        assert!((snap.next_prayer_progress - 390.0 / 405.0 * 100.0).abs() < 1e-9);

        let late = s.snapshot_at(t(2, 0)).unwrap();
        // 20:00 -> 05:30 is 570 minutes, 360 have passed.
        assert!((late.next_prayer_progress - 360.0 / 570.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn mock_snapshot_uses_configured_values() {
        let snap = mock_snapshot(&DialConfig::default()).unwrap();
        assert_eq!(snap.current, PrayerType::Asr);
        assert_eq!(snap.next, PrayerType::Maghrib);
        assert_eq!(snap.seconds_to_next, 2 * 3600 + 15 * 60);
        assert_eq!(snap.day_progress, 65.0);
        assert_eq!(snap.next_prayer_progress, 30.0);
    }

    #[test]
    fn mock_after_isha_points_to_fajr() {
        let mut dial = DialConfig::default();
        dial.mock.current = "isha".to_string();
        assert_eq!(mock_snapshot(&dial).unwrap().next, PrayerType::Fajr);
        dial.mock.current = "noon".to_string();
        assert!(mock_snapshot(&dial).is_err());
    }
}
