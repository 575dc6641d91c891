//! Age-aware narrowing of a profile's interests.
//!
//! The checks are probabilistic on purpose: a category that is a poor fit for
//! the group is held back most of the time but still shows up now and then, so
//! regenerating a day gives some variety.

use log::debug;
use rand::Rng;

use crate::catalog::family_substitutes;
use crate::models::{
    activity::ActivityCategory,
    traveler::{GroupComposition, Traveler},
};
use crate::services::random::is_hit;

const NOT_FOR_YOUNG_CHILDREN: [ActivityCategory; 3] = [
    ActivityCategory::Partying,
    ActivityCategory::Pubs,
    ActivityCategory::Concert,
];
const NOT_FOR_CHILDREN: [ActivityCategory; 2] = [ActivityCategory::Partying, ActivityCategory::Pubs];
const CHALLENGING_FOR_ELDERLY: [ActivityCategory; 3] = [
    ActivityCategory::Hiking,
    ActivityCategory::Cycling,
    ActivityCategory::WaterSports,
];

pub const YOUNG_CHILDREN_PASS_RATE: f64 = 0.2;
pub const CHILDREN_PASS_RATE: f64 = 0.4;
pub const ELDERLY_PASS_RATE: f64 = 0.6;

pub struct SuitabilityService;

impl SuitabilityService {
    /// Single draw deciding whether `category` is offered to `group` this time.
    pub fn is_suitable<R: Rng + ?Sized>(
        rng: &mut R,
        category: ActivityCategory,
        group: &GroupComposition,
    ) -> bool {
        if group.has_young_children && NOT_FOR_YOUNG_CHILDREN.contains(&category) {
            return is_hit(rng, YOUNG_CHILDREN_PASS_RATE);
        }

        if group.has_children && NOT_FOR_CHILDREN.contains(&category) {
            return is_hit(rng, CHILDREN_PASS_RATE);
        }

        if group.has_elderly && CHALLENGING_FOR_ELDERLY.contains(&category) {
            return is_hit(rng, ELDERLY_PASS_RATE);
        }

        true
    }

    /// Interests that pass the suitability draw, in their original order.
    pub fn filter_suitable<R: Rng + ?Sized>(
        rng: &mut R,
        categories: &[ActivityCategory],
        travelers: &[Traveler],
    ) -> Vec<ActivityCategory> {
        let group = GroupComposition::of(travelers);
        categories
            .iter()
            .copied()
            .filter(|category| Self::is_suitable(rng, *category, &group))
            .collect()
    }

    /// Substitutes for every interest, flattened. A group without children keeps
    /// its own interests.
    pub fn family_friendly_alternatives(
        categories: &[ActivityCategory],
        group: &GroupComposition,
    ) -> Vec<ActivityCategory> {
        if !group.has_children {
            return categories.to_vec();
        }
        categories
            .iter()
            .flat_map(|category| family_substitutes(*category).iter().copied())
            .collect()
    }

    /// The pool the allocator draws from. Never empty when `categories` is not.
    pub fn candidate_pool<R: Rng + ?Sized>(
        rng: &mut R,
        categories: &[ActivityCategory],
        travelers: &[Traveler],
    ) -> Vec<ActivityCategory> {
        let suitable = Self::filter_suitable(rng, categories, travelers);
        if !suitable.is_empty() {
            return suitable;
        }

        let substitutes =
            Self::family_friendly_alternatives(categories, &GroupComposition::of(travelers));
        debug!(
            "No interest passed the suitability check, using {} substitutes",
            substitutes.len()
        );
        substitutes
    }
}
