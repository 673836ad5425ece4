#![allow(dead_code)]
use serde::{Deserialize, Serialize};

/// Per-prayer alert style. Activating the alarm button steps through the
/// variants in index order and wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlarmType {
    #[default]
    Silent,
    Ring,
    Vibrate,
}

impl AlarmType {
    pub const COUNT: u8 = 3;

    pub fn index(&self) -> u8 {
        match self {
            AlarmType::Silent => 0,
            AlarmType::Ring => 1,
            AlarmType::Vibrate => 2,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(AlarmType::Silent),
            1 => Some(AlarmType::Ring),
            2 => Some(AlarmType::Vibrate),
            _ => None,
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            AlarmType::Silent => AlarmType::Ring,
            AlarmType::Ring => AlarmType::Vibrate,
            AlarmType::Vibrate => AlarmType::Silent,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AlarmType::Silent => "🔕",
            AlarmType::Ring => "🔔",
            AlarmType::Vibrate => "📳",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlarmType::Silent => "silent",
            AlarmType::Ring => "ring",
            AlarmType::Vibrate => "vibrate",
        }
    }
}
