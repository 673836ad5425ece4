use anyhow::{Context, Result, anyhow};
use chrono::NaiveTime;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::path::{Path, PathBuf};

use crate::geometry::{GeometryError, RadialLayout};
use crate::models::{Prayer, PrayerType};

fn default_outer_ring() -> RingConfig {
    RingConfig {
        size: 280.0,
        stroke_width: 8.0,
        color: "#f97316".to_string(),
    }
}
fn default_inner_ring() -> RingConfig {
    RingConfig {
        size: 200.0,
        stroke_width: 100.0,
        color: "#3b82f6".to_string(),
    }
}
fn default_day_progress() -> f64 {
    65.0
}
fn default_next_prayer_progress() -> f64 {
    30.0
}
fn default_time_to_next() -> String {
    "02:15".to_string()
}
fn default_current() -> String {
    "asr".to_string()
}
fn default_marker_radius() -> f64 {
    140.0
}
fn default_vertical_scale() -> f64 {
    0.5
}
fn default_marker_size() -> f64 {
    40.0
}
fn default_start_angle() -> f64 {
    -0.8 * PI
}
fn default_span() -> f64 {
    1.6 * PI
}
fn default_fajr() -> String {
    "05:30".to_string()
}
fn default_sunrise() -> String {
    "06:45".to_string()
}
fn default_dhuhr() -> String {
    "12:15".to_string()
}
fn default_asr() -> String {
    "15:30".to_string()
}
fn default_maghrib() -> String {
    "18:45".to_string()
}
fn default_isha() -> String {
    "20:00".to_string()
}
fn default_iqamah_offset() -> u32 {
    10
}
fn default_hijri_label() -> String {
    "15 Jumada Al-Awwal, 1446 AH".to_string()
}
fn default_tick_rate_ms() -> u64 {
    1000
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingConfig {
    pub size: f64,
    pub stroke_width: f64,
    pub color: String,
}

/// Values shown on the dial when it is not driven by the clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockProgress {
    #[serde(default = "default_day_progress")]
    pub day_progress: f64,
    #[serde(default = "default_next_prayer_progress")]
    pub next_prayer_progress: f64,
    #[serde(default = "default_time_to_next")]
    pub time_to_next: String,
    #[serde(default = "default_current")]
    pub current: String,
}

impl Default for MockProgress {
    fn default() -> Self {
        Self {
            day_progress: default_day_progress(),
            next_prayer_progress: default_next_prayer_progress(),
            time_to_next: default_time_to_next(),
            current: default_current(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialConfig {
    /// Derive progress from the schedule and the clock instead of `mock`.
    #[serde(default)]
    pub live: bool,
    #[serde(default = "default_outer_ring")]
    pub outer: RingConfig,
    #[serde(default = "default_inner_ring")]
    pub inner: RingConfig,
    #[serde(default)]
    pub mock: MockProgress,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            live: false,
            outer: default_outer_ring(),
            inner: default_inner_ring(),
            mock: MockProgress::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerConfig {
    #[serde(default = "default_marker_radius")]
    pub radius: f64,
    #[serde(default = "default_vertical_scale")]
    pub vertical_scale: f64,
    #[serde(default = "default_marker_size")]
    pub marker_size: f64,
    /// Radians; angle of the first marker.
    #[serde(default = "default_start_angle")]
    pub start_angle: f64,
    /// Radians between the first and the last marker.
    #[serde(default = "default_span")]
    pub span: f64,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            radius: default_marker_radius(),
            vertical_scale: default_vertical_scale(),
            marker_size: default_marker_size(),
            start_angle: default_start_angle(),
            span: default_span(),
        }
    }
}

impl MarkerConfig {
    pub fn layout(&self, count: usize) -> Result<RadialLayout, GeometryError> {
        RadialLayout::spread(
            count,
            self.start_angle,
            self.span,
            self.radius,
            self.vertical_scale,
            self.marker_size,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default = "default_fajr")]
    pub fajr: String,
    #[serde(default = "default_sunrise")]
    pub sunrise: String,
    #[serde(default = "default_dhuhr")]
    pub dhuhr: String,
    #[serde(default = "default_asr")]
    pub asr: String,
    #[serde(default = "default_maghrib")]
    pub maghrib: String,
    #[serde(default = "default_isha")]
    pub isha: String,
    /// Minutes shown next to each time as "+N".
    #[serde(default = "default_iqamah_offset")]
    pub iqamah_offset: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            fajr: default_fajr(),
            sunrise: default_sunrise(),
            dhuhr: default_dhuhr(),
            asr: default_asr(),
            maghrib: default_maghrib(),
            isha: default_isha(),
            iqamah_offset: default_iqamah_offset(),
        }
    }
}

impl ScheduleConfig {
    pub fn time_for(&self, prayer: PrayerType) -> &str {
        match prayer {
            PrayerType::Fajr => &self.fajr,
            PrayerType::Dhuhr => &self.dhuhr,
            PrayerType::Asr => &self.asr,
            PrayerType::Maghrib => &self.maghrib,
            PrayerType::Isha => &self.isha,
        }
    }

    pub fn sunrise_time(&self) -> Result<NaiveTime> {
        parse_hhmm(&self.sunrise).context("Parsing schedule.sunrise")
    }

    /// The five prayers in order, with parsed times.
    pub fn prayers(&self) -> Result<Vec<Prayer>> {
        let prayers = PrayerType::all()
            .into_iter()
            .map(|prayer_type| {
                let time = parse_hhmm(self.time_for(prayer_type))
                    .with_context(|| format!("Parsing schedule.{}", prayer_type.as_str()))?;
                Ok(Prayer { prayer_type, time })
            })
            .collect::<Result<Vec<_>>>()?;

        if prayers.windows(2).any(|w| w[0].time >= w[1].time) {
            return Err(anyhow!("Prayer times in [schedule] must be in increasing order"));
        }
        Ok(prayers)
    }
}

pub fn parse_hhmm(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|e| anyhow!("'{}' is not an HH:MM time: {}", s, e))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default = "default_hijri_label")]
    pub hijri_label: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            hijri_label: default_hijri_label(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub dial: DialConfig,
    #[serde(default)]
    pub markers: MarkerConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "salat-dial")
            .context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        log::debug!("loaded config from {:?}", path);
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }
}
