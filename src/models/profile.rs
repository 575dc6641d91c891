use serde::{Deserialize, Deserializer, Serialize};

use crate::models::activity::ActivityCategory;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl EnergyLevel {
    /// Get the typical number of activities per day for this energy level
    pub fn activities_per_day(&self) -> usize {
        match self {
            EnergyLevel::Low => 2,
            EnergyLevel::Medium => 3,
            EnergyLevel::High => 5,
        }
    }

    /// Unknown labels fall back to medium.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "low" => EnergyLevel::Low,
            "high" => EnergyLevel::High,
            _ => EnergyLevel::Medium,
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Budget,
    #[default]
    Moderate,
    Luxury,
}

impl BudgetTier {
    /// Unknown labels fall back to moderate.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "budget" => BudgetTier::Budget,
            "luxury" => BudgetTier::Luxury,
            _ => BudgetTier::Moderate,
        }
    }
}

// Profiles arrive from a multi-step onboarding form, so anything that is not a
// recognizable label is treated as "not chosen yet" instead of a hard error.
impl<'de> Deserialize<'de> for EnergyLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: serde_json::Value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::String(label) => Ok(EnergyLevel::from_label(&label)),
            _ => Ok(EnergyLevel::default()),
        }
    }
}

impl<'de> Deserialize<'de> for BudgetTier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: serde_json::Value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::String(label) => Ok(BudgetTier::from_label(&label)),
            _ => Ok(BudgetTier::default()),
        }
    }
}

// Unknown interest labels are dropped rather than failing the whole profile
fn deserialize_interests<'de, D>(deserializer: D) -> Result<Vec<ActivityCategory>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match value {
        Some(serde_json::Value::Array(items)) => Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value::<ActivityCategory>(item).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, deserialize_with = "deserialize_interests")]
    pub interests: Vec<ActivityCategory>,
    #[serde(default)]
    pub energy_level: EnergyLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_end_time: Option<String>,
    #[serde(default)]
    pub budget: BudgetTier,
    #[serde(default = "default_true")]
    pub enable_notifications: bool,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            interests: Vec::new(),
            energy_level: EnergyLevel::Medium,
            preferred_start_time: None,
            preferred_end_time: None,
            budget: BudgetTier::Moderate,
            enable_notifications: true,
        }
    }
}

impl UserProfile {
    pub fn is_complete(&self) -> bool {
        !self.interests.is_empty()
    }
}
