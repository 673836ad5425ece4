use std::collections::HashMap;

use super::{AlarmType, PrayerType};

/// In-memory "prayed" flags and alarm choices, keyed by prayer. Entries are
/// created on first change; a missing entry reads as not prayed / silent.
#[derive(Debug, Clone, Default)]
pub struct PrayerBoard {
    prayed: HashMap<PrayerType, bool>,
    alarms: HashMap<PrayerType, AlarmType>,
}

impl PrayerBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_prayed(&self, prayer: PrayerType) -> bool {
        self.prayed.get(&prayer).copied().unwrap_or(false)
    }

    /// Flips the flag and returns the new value.
    pub fn toggle_prayed(&mut self, prayer: PrayerType) -> bool {
        let entry = self.prayed.entry(prayer).or_insert(false);
        *entry = !*entry;
        log::debug!("{} prayed = {}", prayer, *entry);
        *entry
    }

    pub fn alarm(&self, prayer: PrayerType) -> AlarmType {
        self.alarms.get(&prayer).copied().unwrap_or_default()
    }

    /// Advances to the next alarm type and returns it.
    pub fn cycle_alarm(&mut self, prayer: PrayerType) -> AlarmType {
        let entry = self.alarms.entry(prayer).or_default();
        *entry = entry.cycle();
        log::debug!("{} alarm = {}", prayer, entry.label());
        *entry
    }

    pub fn prayed_count(&self) -> usize {
        self.prayed.values().filter(|done| **done).count()
    }
}
