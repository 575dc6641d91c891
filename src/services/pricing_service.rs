use rand::Rng;

use crate::catalog::{copy, cost_range};
use crate::models::{
    activity::{ActivityCategory, Alternative},
    profile::BudgetTier,
    traveler::{GroupComposition, Traveler, ADULT_AGE, CHILD_AGE, INFANT_AGE, SENIOR_AGE},
};
use crate::services::random::{generate_id, uniform_below};

pub const MIN_SAVINGS_PERCENTAGE: u32 = 20;
/// Exclusive upper bound of a savings draw.
pub const MAX_SAVINGS_PERCENTAGE: u32 = 50;

pub struct PricingService;

impl PricingService {
    /// Share of the base price a traveler of `age` pays
    pub fn traveler_multiplier(age: u32) -> f64 {
        if age < INFANT_AGE {
            0.0
        } else if age < CHILD_AGE {
            0.5
        } else if age < ADULT_AGE {
            0.75
        } else if age > SENIOR_AGE {
            0.9
        } else {
            1.0
        }
    }

    /// Per-person base price drawn from the category's range for `tier`
    pub fn base_cost<R: Rng + ?Sized>(rng: &mut R, category: ActivityCategory, tier: BudgetTier) -> u32 {
        let (min, max) = cost_range(category, tier);
        uniform_below(rng, min, max)
    }

    /// Total price for the whole group, rounded to whole currency units
    pub fn group_cost(base_cost: u32, travelers: &[Traveler]) -> u32 {
        let total: f64 = travelers
            .iter()
            .map(|traveler| f64::from(base_cost) * Self::traveler_multiplier(traveler.age))
            .sum();
        total.round() as u32
    }

    pub fn draw_savings<R: Rng + ?Sized>(rng: &mut R) -> u8 {
        uniform_below(rng, MIN_SAVINGS_PERCENTAGE, MAX_SAVINGS_PERCENTAGE) as u8
    }

    /// `cost` reduced by `savings_percentage`, rounded
    pub fn discounted(cost: u32, savings_percentage: u8) -> u32 {
        (f64::from(cost) * (1.0 - f64::from(savings_percentage) / 100.0)).round() as u32
    }

    /// Cheaper offers attached to an activity at creation time when its total
    /// price is above `threshold`. One or two offers, each saving 20-49%.
    pub fn inline_alternatives<R: Rng + ?Sized>(
        rng: &mut R,
        total_cost: u32,
        threshold: u32,
        category: ActivityCategory,
        destination: &str,
        group: &GroupComposition,
    ) -> Vec<Alternative> {
        if total_cost <= threshold {
            return Vec::new();
        }

        let count = rng.gen_range(1..=2);
        (0..count)
            .map(|index| {
                let savings_percentage = Self::draw_savings(rng);
                let (name, description) =
                    copy::inline_alternative_copy(category, destination, group, index);
                Alternative {
                    id: generate_id(rng),
                    name,
                    description,
                    cost: Self::discounted(total_cost, savings_percentage),
                    savings_percentage,
                }
            })
            .collect()
    }
}
