use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::models::{activity::ActivityCategory, trip::DayPlan};

/// How many of the priciest activities are suggested for a cheaper swap.
pub const MAX_OPTIMIZATION_CANDIDATES: usize = 5;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCost {
    pub category: ActivityCategory,
    pub cost: u32,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayTotal {
    pub date: NaiveDate,
    pub cost: u32,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationCandidate {
    pub date: NaiveDate,
    pub activity_id: Uuid,
    pub name: String,
    pub category: ActivityCategory,
    pub cost: u32,
    pub has_alternatives: bool,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub total_cost: u32,
    pub costs_by_category: Vec<CategoryCost>,
    pub daily_average: u32,
    pub budget_percentage: u32,
    pub optimization_candidates: Vec<OptimizationCandidate>,
    pub day_totals: Vec<DayTotal>,
}

pub struct BudgetService;

impl BudgetService {
    /// Spending overview of a trip's planned days against `total_budget`.
    pub fn summarize(day_plans: &[DayPlan], total_budget: u32) -> BudgetSummary {
        let total_cost = Self::calculate_total_cost(day_plans);

        BudgetSummary {
            total_cost,
            costs_by_category: Self::calculate_category_costs(day_plans),
            daily_average: Self::calculate_daily_average(total_cost, day_plans.len()),
            budget_percentage: Self::calculate_budget_percentage(total_cost, total_budget),
            optimization_candidates: Self::optimization_candidates(day_plans),
            day_totals: day_plans
                .iter()
                .map(|day| DayTotal {
                    date: day.date,
                    cost: day.total_cost(),
                })
                .collect(),
        }
    }

    pub fn calculate_total_cost(day_plans: &[DayPlan]) -> u32 {
        day_plans.iter().map(DayPlan::total_cost).sum()
    }

    /// Spending per category, most expensive first. Rest blocks are left out.
    pub fn calculate_category_costs(day_plans: &[DayPlan]) -> Vec<CategoryCost> {
        let mut totals: HashMap<ActivityCategory, u32> = HashMap::new();
        for activity in day_plans
            .iter()
            .flat_map(|day| &day.activities)
            .filter(|activity| !activity.is_relaxation)
        {
            *totals.entry(activity.category).or_insert(0) += activity.cost;
        }

        let mut costs: Vec<CategoryCost> = totals
            .into_iter()
            .map(|(category, cost)| CategoryCost { category, cost })
            .collect();
        costs.sort_by(|a, b| {
            b.cost
                .cmp(&a.cost)
                .then_with(|| a.category.as_str().cmp(b.category.as_str()))
        });
        costs
    }

    pub fn calculate_daily_average(total_cost: u32, day_count: usize) -> u32 {
        (f64::from(total_cost) / day_count.max(1) as f64).round() as u32
    }

    /// Share of the budget already spent, capped at 100. Zero without a budget.
    pub fn calculate_budget_percentage(total_cost: u32, total_budget: u32) -> u32 {
        if total_budget == 0 {
            return 0;
        }
        let percentage = (f64::from(total_cost) / f64::from(total_budget) * 100.0).round() as u32;
        percentage.min(100)
    }

    /// The priciest paid activities of the trip.
    pub fn optimization_candidates(day_plans: &[DayPlan]) -> Vec<OptimizationCandidate> {
        let mut candidates: Vec<OptimizationCandidate> = day_plans
            .iter()
            .flat_map(|day| {
                day.activities
                    .iter()
                    .filter(|activity| !activity.is_relaxation && activity.cost > 0)
                    .map(move |activity| OptimizationCandidate {
                        date: day.date,
                        activity_id: activity.id,
                        name: activity.name.clone(),
                        category: activity.category,
                        cost: activity.cost,
                        has_alternatives: !activity.alternatives.is_empty(),
                    })
            })
            .collect();

        candidates.sort_by(|a, b| b.cost.cmp(&a.cost).then_with(|| a.date.cmp(&b.date)));
        candidates.truncate(MAX_OPTIMIZATION_CANDIDATES);
        candidates
    }
}
