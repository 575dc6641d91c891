//! Static lookup data keyed by activity category.
//!
//! Ranges are half-open: a draw lands in `min..max`.

use crate::models::{activity::ActivityCategory, profile::BudgetTier};

/// Nominal duration range in minutes.
pub fn duration_range(category: ActivityCategory) -> (u32, u32) {
    match category {
        ActivityCategory::Hotel => (60, 120),
        ActivityCategory::BedAndBreakfast => (60, 120),
        ActivityCategory::Hostel => (60, 120),
        ActivityCategory::Culture => (90, 180),
        ActivityCategory::Concert => (120, 240),
        ActivityCategory::Archeology => (120, 240),
        ActivityCategory::Hiking => (120, 480),
        ActivityCategory::Cycling => (120, 360),
        ActivityCategory::Car => (60, 120),
        ActivityCategory::Motorbike => (60, 120),
        ActivityCategory::Swimming => (60, 180),
        ActivityCategory::WaterSports => (120, 240),
        ActivityCategory::SeaCruise => (180, 480),
        ActivityCategory::Workshop => (120, 240),
        ActivityCategory::Dining => (60, 180),
        ActivityCategory::Partying => (180, 360),
        ActivityCategory::Pubs => (120, 240),
        ActivityCategory::Gallery => (60, 120),
        ActivityCategory::Networking => (60, 180),
    }
}

/// Per-person base price range for the given budget tier.
pub fn cost_range(category: ActivityCategory, tier: BudgetTier) -> (u32, u32) {
    let [budget, moderate, luxury] = match category {
        ActivityCategory::Hotel => [(50, 100), (120, 250), (300, 800)],
        ActivityCategory::BedAndBreakfast => [(40, 80), (90, 180), (200, 400)],
        ActivityCategory::Hostel => [(20, 50), (60, 120), (130, 250)],
        ActivityCategory::Culture => [(5, 20), (25, 50), (60, 150)],
        ActivityCategory::Concert => [(20, 50), (60, 150), (200, 500)],
        ActivityCategory::Archeology => [(10, 30), (35, 80), (90, 200)],
        ActivityCategory::Hiking => [(0, 10), (15, 60), (70, 200)],
        ActivityCategory::Cycling => [(10, 30), (40, 100), (120, 300)],
        ActivityCategory::Car => [(30, 70), (80, 150), (200, 500)],
        ActivityCategory::Motorbike => [(20, 50), (60, 120), (150, 350)],
        ActivityCategory::Swimming => [(0, 15), (20, 50), (60, 150)],
        ActivityCategory::WaterSports => [(30, 80), (90, 200), (250, 600)],
        ActivityCategory::SeaCruise => [(50, 150), (200, 500), (600, 2000)],
        ActivityCategory::Workshop => [(20, 60), (70, 150), (200, 500)],
        ActivityCategory::Dining => [(15, 40), (50, 120), (150, 400)],
        ActivityCategory::Partying => [(20, 70), (80, 200), (250, 600)],
        ActivityCategory::Pubs => [(15, 50), (60, 120), (150, 300)],
        ActivityCategory::Gallery => [(5, 20), (25, 60), (70, 150)],
        ActivityCategory::Networking => [(0, 20), (30, 80), (100, 250)],
    };

    match tier {
        BudgetTier::Budget => budget,
        BudgetTier::Moderate => moderate,
        BudgetTier::Luxury => luxury,
    }
}

/// Child-safe replacements offered when a group's whole interest set is filtered out.
pub fn family_substitutes(category: ActivityCategory) -> &'static [ActivityCategory] {
    use ActivityCategory::*;

    match category {
        Partying => &[Dining, Gallery, Culture],
        Pubs => &[Dining, Culture, Gallery],
        Concert => &[Culture, Gallery, Workshop],
        Hiking => &[Culture, Gallery, Swimming],
        WaterSports => &[Swimming, Culture, Gallery],
        Archeology => &[Culture, Gallery, Workshop],
        Culture => &[Culture, Gallery, Workshop],
        Gallery => &[Culture, Gallery, Workshop],
        Workshop => &[Culture, Gallery, Workshop],
        Dining => &[Dining, Culture, Gallery],
        Swimming => &[Swimming, Culture, Gallery],
        Cycling => &[Culture, Gallery, Swimming],
        Car => &[Culture, Gallery, Dining],
        Motorbike => &[Culture, Gallery, Dining],
        SeaCruise => &[Culture, Gallery, Dining],
        Hotel => &[Hotel],
        BedAndBreakfast => &[BedAndBreakfast],
        Hostel => &[Hostel],
        Networking => &[Culture, Gallery, Dining],
    }
}
