use serde::{Deserialize, Serialize};

/// Travelers younger than this ride for free.
pub const INFANT_AGE: u32 = 4;
pub const YOUNG_CHILD_AGE: u32 = 8;
/// Below this age activities are shortened and priced at half.
pub const CHILD_AGE: u32 = 12;
pub const ADULT_AGE: u32 = 18;
/// Travelers strictly older than this count as elderly.
pub const SENIOR_AGE: u32 = 65;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Traveler {
    #[serde(default)]
    pub id: String,
    pub age: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Traveler {
    pub fn new(id: impl Into<String>, age: u32) -> Self {
        Self {
            id: id.into(),
            age,
            name: None,
        }
    }
}

/// Age flags of a traveler group that drive suitability, timing and copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupComposition {
    pub has_young_children: bool,
    pub has_under_twelve: bool,
    pub has_children: bool,
    pub has_elderly: bool,
}

impl GroupComposition {
    pub fn of(travelers: &[Traveler]) -> Self {
        Self {
            has_young_children: travelers.iter().any(|t| t.age < YOUNG_CHILD_AGE),
            has_under_twelve: travelers.iter().any(|t| t.age < CHILD_AGE),
            has_children: travelers.iter().any(|t| t.age < ADULT_AGE),
            has_elderly: travelers.iter().any(|t| t.age > SENIOR_AGE),
        }
    }
}
