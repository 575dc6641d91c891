use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{activity::Activity, day_plan::DayPlanOption};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub date: NaiveDate,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub is_accepted: bool,
}

impl DayPlan {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            activities: Vec::new(),
            is_accepted: false,
        }
    }

    /// Store the chosen option as this day's schedule.
    pub fn accept(&mut self, option: DayPlanOption) {
        self.activities = option.activities;
        self.is_accepted = true;
    }

    pub fn total_cost(&self) -> u32 {
        self.activities.iter().map(|activity| activity.cost).sum()
    }
}

/// One unaccepted day per date in `start..=end`; empty when the range is inverted.
pub fn empty_day_plans(start: NaiveDate, end: NaiveDate) -> Vec<DayPlan> {
    start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(DayPlan::new)
        .collect()
}
