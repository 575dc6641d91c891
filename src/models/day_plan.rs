use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::models::activity::Activity;

/// A half-open `[start, end)` range in minutes since midnight. Never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeInterval {
    start: u32,
    end: u32,
}

impl TimeInterval {
    pub fn new(start: u32, end: u32) -> Result<Self, PlanError> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(PlanError::InvalidWindow { start, end })
        }
    }

    /// For bounds known when the crate is compiled; evaluated in const context.
    pub const fn from_static(start: u32, end: u32) -> Self {
        assert!(start < end);
        Self { start, end }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn span(&self) -> u32 {
        self.end - self.start
    }

    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains(&self, other: &TimeInterval) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// One candidate schedule for a day, ordered by start time.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct DayPlanOption {
    pub activities: Vec<Activity>,
}

impl DayPlanOption {
    pub fn new(mut activities: Vec<Activity>) -> Self {
        activities.sort_by_key(Activity::start_minutes);
        Self { activities }
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Activities that are not rest blocks.
    pub fn scheduled_activities(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter().filter(|activity| !activity.is_relaxation)
    }

    /// Checks that the option tiles `window` exactly: sorted, gap-free, overlap-free.
    pub fn validate(&self, window: TimeInterval) -> Result<(), PlanError> {
        if self.activities.is_empty() {
            return Err(PlanError::InvalidOption("no activities".to_string()));
        }

        let mut cursor = window.start();
        for activity in &self.activities {
            let interval = activity.interval().ok_or_else(|| {
                PlanError::InvalidOption(format!("`{}` has an empty time range", activity.name))
            })?;
            if interval.start() != cursor {
                return Err(PlanError::InvalidOption(format!(
                    "`{}` starts at minute {} but the previous block ends at {}",
                    activity.name,
                    interval.start(),
                    cursor
                )));
            }
            cursor = interval.end();
        }

        if cursor != window.end() {
            return Err(PlanError::InvalidOption(format!(
                "schedule ends at minute {} instead of {}",
                cursor,
                window.end()
            )));
        }

        Ok(())
    }
}
