use log::debug;
use rand::Rng;

use crate::catalog::copy;
use crate::models::{
    activity::{wall_clock_from_minutes, Activity, ActivityCategory},
    day_plan::{DayPlanOption, TimeInterval},
};
use crate::services::{day_plan_generator::PlanContext, fallback, random::generate_id};

pub struct GapFiller;

impl GapFiller {
    /// Turn placed activities into a schedule that tiles `window`.
    ///
    /// Idle time before, between and after the activities becomes zero-cost
    /// rest blocks. A day with nothing placed gets a single full-window
    /// "explore" activity instead.
    pub fn fill<R: Rng + ?Sized>(
        rng: &mut R,
        mut activities: Vec<Activity>,
        window: TimeInterval,
        ctx: &PlanContext<'_>,
    ) -> DayPlanOption {
        if activities.is_empty() {
            debug!("Nothing placed, filling {:?} with an explore block", window);
            return DayPlanOption::new(vec![fallback::explore_activity(rng, window, ctx)]);
        }

        activities.sort_by_key(Activity::start_minutes);

        let mut rest_blocks = Vec::new();
        let mut cursor = window.start();
        for activity in &activities {
            if let Ok(gap) = TimeInterval::new(cursor, activity.start_minutes()) {
                rest_blocks.push(Self::rest_block(rng, gap, ctx, false));
            }
            cursor = cursor.max(activity.end_minutes());
        }
        if let Ok(gap) = TimeInterval::new(cursor, window.end()) {
            rest_blocks.push(Self::rest_block(rng, gap, ctx, true));
        }

        debug!(
            "Inserted {} rest blocks around {} activities",
            rest_blocks.len(),
            activities.len()
        );
        activities.extend(rest_blocks);
        DayPlanOption::new(activities)
    }

    pub fn rest_block<R: Rng + ?Sized>(
        rng: &mut R,
        gap: TimeInterval,
        ctx: &PlanContext<'_>,
        is_evening: bool,
    ) -> Activity {
        let (name, description, location) = copy::relaxation_copy(&ctx.group, is_evening);
        Activity {
            id: generate_id(rng),
            category: ActivityCategory::Hotel,
            name: name.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            start_time: wall_clock_from_minutes(gap.start()),
            end_time: wall_clock_from_minutes(gap.end()),
            is_relaxation: true,
            booking_url: None,
            cost: 0,
            currency: ctx.currency.clone(),
            alternatives: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::traveler::Traveler;
    use crate::services::random::seeded_rng;

    fn placed(start: u32, end: u32) -> Activity {
        Activity {
            id: uuid::Uuid::nil(),
            category: ActivityCategory::Dining,
            name: "Food Tasting".to_string(),
            description: String::new(),
            location: "Central Lyon".to_string(),
            start_time: wall_clock_from_minutes(start),
            end_time: wall_clock_from_minutes(end),
            is_relaxation: false,
            booking_url: None,
            cost: 80,
            currency: "EUR".to_string(),
            alternatives: Vec::new(),
        }
    }

    #[test]
    fn test_fill_tiles_the_window() {
        let mut rng = seeded_rng(Some(4));
        let travelers = [Traveler::new("t1", 30)];
        let ctx = PlanContext::new("Lyon", &travelers, "EUR");
        let window = TimeInterval::new(540, 1260).unwrap();

        let option = GapFiller::fill(&mut rng, vec![placed(900, 1000), placed(600, 720)], window, &ctx);

        assert!(option.validate(window).is_ok());
        assert_eq!(option.len(), 5);
        assert_eq!(option.scheduled_activities().count(), 2);

        let rest: Vec<&Activity> = option.activities.iter().filter(|a| a.is_relaxation).collect();
        assert_eq!(rest.len(), 3);
        assert!(rest.iter().all(|a| a.cost == 0 && a.category == ActivityCategory::Hotel));
        assert_eq!(rest[0].name, "Rest & Relaxation");
        assert_eq!(rest[2].name, "Evening Relaxation");
        assert_eq!(rest[2].currency, "EUR");
    }

    #[test]
    fn test_back_to_back_activities_need_no_rest() {
        let mut rng = seeded_rng(Some(4));
        let travelers = [Traveler::new("t1", 30)];
        let ctx = PlanContext::new("Lyon", &travelers, "EUR");
        let window = TimeInterval::new(540, 720).unwrap();

        let option = GapFiller::fill(&mut rng, vec![placed(540, 600), placed(600, 720)], window, &ctx);
        assert_eq!(option.len(), 2);
        assert!(option.activities.iter().all(|a| !a.is_relaxation));
    }

    #[test]
    fn test_family_copy_for_young_travelers() {
        let mut rng = seeded_rng(Some(4));
        let travelers = [Traveler::new("t1", 38), Traveler::new("t2", 9)];
        let ctx = PlanContext::new("Lyon", &travelers, "EUR");
        let window = TimeInterval::new(540, 1260).unwrap();

        let option = GapFiller::fill(&mut rng, vec![placed(600, 720)], window, &ctx);
        let names: Vec<&str> = option
            .activities
            .iter()
            .filter(|a| a.is_relaxation)
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, vec!["Family Rest Time", "Family Evening Time"]);
    }

    #[test]
    fn test_empty_day_becomes_explore_block() {
        let mut rng = seeded_rng(Some(4));
        let travelers = [Traveler::new("t1", 30)];
        let ctx = PlanContext::new("Lyon", &travelers, "EUR");
        let window = TimeInterval::new(600, 1080).unwrap();

        let option = GapFiller::fill(&mut rng, Vec::new(), window, &ctx);
        assert_eq!(option.len(), 1);
        assert_eq!(option.activities[0].name, "Explore Lyon");
        assert!(!option.activities[0].is_relaxation);
        assert!(option.validate(window).is_ok());
    }
}
