use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::models::day_plan::TimeInterval;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActivityCategory {
    #[serde(rename = "hotel")]
    Hotel,
    #[serde(rename = "b&b")]
    BedAndBreakfast,
    #[serde(rename = "hostel")]
    Hostel,
    #[serde(rename = "culture")]
    Culture,
    #[serde(rename = "concert")]
    Concert,
    #[serde(rename = "archeology")]
    Archeology,
    #[serde(rename = "hiking")]
    Hiking,
    #[serde(rename = "cycling")]
    Cycling,
    #[serde(rename = "car")]
    Car,
    #[serde(rename = "motorbike")]
    Motorbike,
    #[serde(rename = "swimming")]
    Swimming,
    #[serde(rename = "water sports")]
    WaterSports,
    #[serde(rename = "sea cruise")]
    SeaCruise,
    #[serde(rename = "workshop")]
    Workshop,
    #[serde(rename = "dining")]
    Dining,
    #[serde(rename = "partying")]
    Partying,
    #[serde(rename = "pubs")]
    Pubs,
    #[serde(rename = "gallery")]
    Gallery,
    #[serde(rename = "networking")]
    Networking,
}

impl ActivityCategory {
    pub const ALL: [ActivityCategory; 19] = [
        ActivityCategory::Hotel,
        ActivityCategory::BedAndBreakfast,
        ActivityCategory::Hostel,
        ActivityCategory::Culture,
        ActivityCategory::Concert,
        ActivityCategory::Archeology,
        ActivityCategory::Hiking,
        ActivityCategory::Cycling,
        ActivityCategory::Car,
        ActivityCategory::Motorbike,
        ActivityCategory::Swimming,
        ActivityCategory::WaterSports,
        ActivityCategory::SeaCruise,
        ActivityCategory::Workshop,
        ActivityCategory::Dining,
        ActivityCategory::Partying,
        ActivityCategory::Pubs,
        ActivityCategory::Gallery,
        ActivityCategory::Networking,
    ];

    /// The wire name, also used in generated copy.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::Hotel => "hotel",
            ActivityCategory::BedAndBreakfast => "b&b",
            ActivityCategory::Hostel => "hostel",
            ActivityCategory::Culture => "culture",
            ActivityCategory::Concert => "concert",
            ActivityCategory::Archeology => "archeology",
            ActivityCategory::Hiking => "hiking",
            ActivityCategory::Cycling => "cycling",
            ActivityCategory::Car => "car",
            ActivityCategory::Motorbike => "motorbike",
            ActivityCategory::Swimming => "swimming",
            ActivityCategory::WaterSports => "water sports",
            ActivityCategory::SeaCruise => "sea cruise",
            ActivityCategory::Workshop => "workshop",
            ActivityCategory::Dining => "dining",
            ActivityCategory::Partying => "partying",
            ActivityCategory::Pubs => "pubs",
            ActivityCategory::Gallery => "gallery",
            ActivityCategory::Networking => "networking",
        }
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Alternative {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub cost: u32,
    pub savings_percentage: u8,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub category: ActivityCategory,
    pub name: String,
    pub description: String,
    pub location: String,
    #[serde(with = "wall_clock")]
    pub start_time: NaiveTime,
    #[serde(with = "wall_clock")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub is_relaxation: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_url: Option<String>,
    pub cost: u32,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<Alternative>,
}

impl Activity {
    pub fn start_minutes(&self) -> u32 {
        minutes_since_midnight(self.start_time)
    }

    pub fn end_minutes(&self) -> u32 {
        minutes_since_midnight(self.end_time)
    }

    /// The occupied interval, or `None` for a zero-length or inverted activity.
    pub fn interval(&self) -> Option<TimeInterval> {
        TimeInterval::new(self.start_minutes(), self.end_minutes()).ok()
    }

    /// Swap this activity for a cheaper offer. Only name, description and cost change.
    pub fn apply_alternative(&mut self, alternative: &Alternative) {
        self.name = alternative.name.clone();
        self.description = alternative.description.clone();
        self.cost = alternative.cost;
    }

    pub fn find_alternative(&self, alternative_id: &Uuid) -> Option<&Alternative> {
        self.alternatives.iter().find(|alt| &alt.id == alternative_id)
    }
}

pub fn minutes_since_midnight(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Minutes past midnight as a wall-clock time. Values wrap at 24:00.
pub fn wall_clock_from_minutes(minutes: u32) -> NaiveTime {
    NaiveTime::MIN + chrono::Duration::minutes(i64::from(minutes))
}

/// `"HH:MM"` (seconds tolerated on input).
pub mod wall_clock {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn parse(value: &str) -> Option<NaiveTime> {
        let value = value.trim();
        NaiveTime::parse_from_str(value, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
            .ok()
    }

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        parse(&value).ok_or_else(|| de::Error::custom(format!("invalid time `{}`", value)))
    }
}
