//! Static content served when a batch cannot be generated.

use rand::Rng;

use crate::catalog::copy;
use crate::models::{
    activity::{wall_clock_from_minutes, Activity, ActivityCategory},
    day_plan::{DayPlanOption, TimeInterval},
};
use crate::services::{
    day_plan_generator::{PlanContext, PLAN_OPTION_COUNT},
    random::generate_id,
};

/// Windows of the fallback options, in minutes since midnight: 09-12, 10-13, 11-14.
pub const REPRESENTATIVE_WINDOWS: [TimeInterval; PLAN_OPTION_COUNT] = [
    TimeInterval::from_static(9 * 60, 12 * 60),
    TimeInterval::from_static(10 * 60, 13 * 60),
    TimeInterval::from_static(11 * 60, 14 * 60),
];

/// A free, self-guided "explore the destination" block over `window`.
pub fn explore_activity<R: Rng + ?Sized>(
    rng: &mut R,
    window: TimeInterval,
    ctx: &PlanContext<'_>,
) -> Activity {
    let (name, description, location) = copy::explore_copy(ctx.display_destination(), &ctx.group);
    Activity {
        id: generate_id(rng),
        category: ActivityCategory::Culture,
        name,
        description,
        location,
        start_time: wall_clock_from_minutes(window.start()),
        end_time: wall_clock_from_minutes(window.end()),
        is_relaxation: false,
        booking_url: None,
        cost: 0,
        currency: ctx.currency.clone(),
        alternatives: Vec::new(),
    }
}

/// The `index`-th fallback option. Indexes past the table wrap around.
pub fn fallback_option<R: Rng + ?Sized>(
    rng: &mut R,
    index: usize,
    ctx: &PlanContext<'_>,
) -> DayPlanOption {
    let window = REPRESENTATIVE_WINDOWS[index % REPRESENTATIVE_WINDOWS.len()];
    DayPlanOption::new(vec![explore_activity(rng, window, ctx)])
}

pub fn fallback_batch<R: Rng + ?Sized>(
    rng: &mut R,
    ctx: &PlanContext<'_>,
) -> [DayPlanOption; PLAN_OPTION_COUNT] {
    std::array::from_fn(|index| fallback_option(rng, index, ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::traveler::Traveler;
    use crate::services::random::seeded_rng;

    #[test]
    fn test_fallback_batch_shape() {
        let mut rng = seeded_rng(Some(8));
        let travelers = [Traveler::new("t1", 44)];
        let ctx = PlanContext::new("Oslo", &travelers, "USD");

        let batch = fallback_batch(&mut rng, &ctx);
        let starts: Vec<String> = batch
            .iter()
            .map(|option| option.activities[0].start_time.format("%H:%M").to_string())
            .collect();
        assert_eq!(starts, vec!["09:00", "10:00", "11:00"]);
        for option in &batch {
            assert_eq!(option.len(), 1);
            assert_eq!(option.activities[0].name, "Explore Oslo");
            assert_eq!(option.activities[0].location, "Downtown Oslo");
            assert_eq!(option.activities[0].cost, 0);
            assert_eq!(option.activities[0].interval().map(|i| i.span()), Some(180));
        }
    }

    #[test]
    fn test_family_fallback_copy() {
        let mut rng = seeded_rng(Some(8));
        let travelers = [Traveler::new("t1", 44), Traveler::new("t2", 16)];
        let ctx = PlanContext::new("Oslo", &travelers, "USD");
        let option = fallback_option(&mut rng, 4, &ctx);
        assert_eq!(option.activities[0].name, "Family-friendly exploration of Oslo");
        assert_eq!(option.activities[0].start_time.format("%H:%M").to_string(), "10:00");
    }
}
