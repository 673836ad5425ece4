use chrono::{NaiveDate, NaiveTime};
use unicode_width::UnicodeWidthChar;

/// Format a countdown in seconds as "HH:MM", rounding down to the minute.
pub fn format_countdown(secs: i64) -> String {
    let secs = secs.max(0);
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    format!("{:02}:{:02}", hours, minutes)
}

/// Format a NaiveTime to "HH:MM"
pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// "October 19, 2026"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

const EMOJI_PRESENTATION: char = '\u{FE0F}';

/// Columns a terminal uses for `s`. A narrow symbol followed by VS16
/// ("☀️") is drawn as a two-column emoji.
pub fn display_width(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let w = UnicodeWidthChar::width(c).unwrap_or(0);
            if w == 1 && chars.get(i + 1) == Some(&EMOJI_PRESENTATION) {
                2
            } else {
                w
            }
        })
        .sum()
}

/// Pad `s` on the right to `width` terminal columns.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let used = display_width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(used)))
}
