use anyhow::{Context, Result, anyhow};
use chrono::Local;
use serde::Serialize;
use std::path::Path;

use crate::cli::args::ConfigCommands;
use crate::config::AppConfig;
use crate::geometry::{ArcGeometry, MarkerOffset};
use crate::models::Prayer;
use crate::prayer_times::{DialSnapshot, PrayerSchedule, mock_snapshot};
use crate::utils::format::{format_countdown, format_long_date, format_time};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const ORANGE: &str = "\x1b[38;2;249;115;22m";
const TEAL: &str = "\x1b[38;2;13;148;136m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";

// ─── Times ───────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct TimesReport<'a> {
    date: String,
    hijri: &'a str,
    sunrise: String,
    iqamah_offset: u32,
    prayers: &'a [Prayer],
    dial: &'a DialSnapshot,
}

pub fn handle_times(config: &AppConfig, json: bool) -> Result<()> {
    let now = Local::now().naive_local();
    let schedule = PrayerSchedule::from_config(&config.schedule)?;
    let snapshot = if config.dial.live {
        schedule
            .snapshot_at(now.time())
            .ok_or_else(|| anyhow!("Schedule has no prayers"))?
    } else {
        mock_snapshot(&config.dial)?
    };

    if json {
        let report = TimesReport {
            date: now.date().format("%Y-%m-%d").to_string(),
            hijri: &config.calendar.hijri_label,
            sunrise: format_time(schedule.sunrise()),
            iqamah_offset: schedule.iqamah_offset(),
            prayers: schedule.prayers(),
            dial: &snapshot,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println_colored!(TEAL, "  Prayer Times — {}", format_long_date(now.date()));
    println_colored!(DIM, "  {}", config.calendar.hijri_label);
    println!();
    println_colored!(DIM, "  {:<10}  {}", "Sunrise", format_time(schedule.sunrise()));

    for prayer in schedule.prayers() {
        let line = format!(
            "  {:<10}  {}  +{}",
            prayer.name(),
            format_time(prayer.time),
            schedule.iqamah_offset()
        );
        if prayer.prayer_type == snapshot.current {
            println_colored!(ORANGE, "{}  ◀ now", line);
        } else {
            println_colored!(BOLD, "{}", line);
        }
    }

    println!();
    println_colored!(
        ORANGE,
        "  {} in {}",
        snapshot.next.display_name(),
        format_countdown(snapshot.seconds_to_next)
    );
    println_colored!(
        DIM,
        "  day {:.0}%  ·  until next {:.0}%",
        snapshot.day_progress,
        snapshot.next_prayer_progress
    );
    println!();
    Ok(())
}

// ─── Arc ─────────────────────────────────────────────────────────────────────

pub fn handle_arc(progress: f64, size: f64, stroke: f64, svg: bool, color: &str) -> Result<()> {
    let arc = ArcGeometry::new(progress, size, stroke)?;

    if svg {
        println!("{}", arc.svg(color));
        return Ok(());
    }

    println!();
    println_colored!(TEAL, "  Arc for {}%", arc.progress);
    println!();
    println!("  radius         {:.3}", arc.radius);
    println!("  circumference  {:.3}", arc.circumference);
    println!("  dash offset    {:.3}", arc.dash_offset);
    println!(
        "  visible        {:.3} ({:.1}%)",
        arc.visible_length(),
        arc.visible_fraction() * 100.0
    );
    println_colored!(DIM, "  path           {}", arc.svg_path());
    println!();
    Ok(())
}

// ─── Markers ─────────────────────────────────────────────────────────────────

pub fn handle_markers(config: &AppConfig, width: f64, height: f64) -> Result<()> {
    let schedule = PrayerSchedule::from_config(&config.schedule)?;
    let count = schedule.prayers().len();
    let layout = config.markers.layout(count)?;

    println!();
    println_colored!(
        TEAL,
        "  {} markers, radius {}, container {}×{}",
        count,
        layout.radius,
        width,
        height
    );
    println!();
    println_colored!(DIM, "  {:<9} {:>8} {:>9} {:>9} {:>9} {:>9}", "", "angle", "x", "y", "left", "top");

    for (i, prayer) in schedule.prayers().iter().enumerate() {
        let MarkerOffset { angle, x, y } = layout.offset(i);
        let (left, top) = layout.placement(i, width, height);
        println!(
            "  {:<9} {:>7.2}π {:>9.2} {:>9.2} {:>9.2} {:>9.2}",
            prayer.name(),
            angle / std::f64::consts::PI,
            x,
            y,
            left,
            top
        );
    }
    println!();
    Ok(())
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config(action: &ConfigCommands, path: &Path) -> Result<()> {
    match action {
        ConfigCommands::Path => {
            println!("{}", path.display());
        }
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                return Err(anyhow!(
                    "{} already exists. Use --force to overwrite.",
                    path.display()
                ));
            }
            AppConfig::default()
                .save_to(path)
                .with_context(|| format!("Writing defaults to {}", path.display()))?;
            println_colored!(TEAL, "  ✓ Wrote default settings to {}", path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        handle_config(&ConfigCommands::Init { force: false }, &path).unwrap();
        assert!(path.exists());
        assert!(handle_config(&ConfigCommands::Init { force: false }, &path).is_err());
        handle_config(&ConfigCommands::Init { force: true }, &path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.schedule.fajr, "05:30");
    }

    #[test]
    fn arc_rejects_oversized_stroke() {
        assert!(handle_arc(50.0, 10.0, 20.0, false, "#fff").is_err());
    }

    #[test]
    fn arc_report_for_valid_ring() {
        handle_arc(65.0, 280.0, 8.0, false, "#f97316").unwrap();
        handle_arc(150.0, 280.0, 8.0, true, "#f97316").unwrap();
    }
}
