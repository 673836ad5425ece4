use chrono::{Days, NaiveDate};

/// The date shown by the date selector. Moves one day at a time with no
/// lower or upper bound other than what `NaiveDate` can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCursor {
    selected: NaiveDate,
}

impl DateCursor {
    pub fn new(selected: NaiveDate) -> Self {
        Self { selected }
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    /// Moves by `days` (negative goes back). At the edge of the representable
    /// range the cursor stays put.
    pub fn step(&mut self, days: i64) -> NaiveDate {
        let moved = if days >= 0 {
            self.selected.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.selected.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        match moved {
            Some(date) => self.selected = date,
            None => log::warn!("cannot move {} days from {}", days, self.selected),
        }
        self.selected
    }

    pub fn next(&mut self) -> NaiveDate {
        self.step(1)
    }

    pub fn prev(&mut self) -> NaiveDate {
        self.step(-1)
    }

    pub fn reset(&mut self, date: NaiveDate) {
        self.selected = date;
    }
}
