use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerType {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerType {
    pub fn all() -> [PrayerType; 5] {
        [
            PrayerType::Fajr,
            PrayerType::Dhuhr,
            PrayerType::Asr,
            PrayerType::Maghrib,
            PrayerType::Isha,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerType::Fajr => "fajr",
            PrayerType::Dhuhr => "dhuhr",
            PrayerType::Asr => "asr",
            PrayerType::Maghrib => "maghrib",
            PrayerType::Isha => "isha",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerType::Fajr => "Fajr",
            PrayerType::Dhuhr => "Dhuhr",
            PrayerType::Asr => "Asr",
            PrayerType::Maghrib => "Maghrib",
            PrayerType::Isha => "Isha",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PrayerType::Fajr => "🌅",
            PrayerType::Dhuhr => "☀️",
            PrayerType::Asr => "🔆",
            PrayerType::Maghrib => "🌆",
            PrayerType::Isha => "🌙",
        }
    }
}

impl std::fmt::Display for PrayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PrayerType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fajr" => Ok(PrayerType::Fajr),
            "dhuhr" | "zuhr" | "dhuhur" => Ok(PrayerType::Dhuhr),
            "asr" => Ok(PrayerType::Asr),
            "maghrib" => Ok(PrayerType::Maghrib),
            "isha" => Ok(PrayerType::Isha),
            _ => Err(anyhow::anyhow!("Unknown prayer type: {}", s)),
        }
    }
}

/// One entry of the fixed daily list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prayer {
    pub prayer_type: PrayerType,
    #[serde(serialize_with = "serialize_hhmm")]
    pub time: NaiveTime,
}

impl Prayer {
    pub fn name(&self) -> &'static str {
        self.prayer_type.display_name()
    }

    pub fn icon(&self) -> &'static str {
        self.prayer_type.icon()
    }
}

fn serialize_hhmm<S: serde::Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&t.format("%H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("Fajr".parse::<PrayerType>().unwrap(), PrayerType::Fajr);
        assert_eq!("zuhr".parse::<PrayerType>().unwrap(), PrayerType::Dhuhr);
        assert_eq!("ISHA".parse::<PrayerType>().unwrap(), PrayerType::Isha);
        assert!("sunrise".parse::<PrayerType>().is_err());
    }

    #[test]
    fn prayer_serializes_time_as_hhmm() {
        let prayer = Prayer {
            prayer_type: PrayerType::Asr,
            time: NaiveTime::from_hms_opt(15, 30, 0).unwrap(),
        };
        let json = serde_json::to_string(&prayer).unwrap();
        assert_eq!(json, r#"{"prayer_type":"asr","time":"15:30"}"#);
    }
}
