use chrono::NaiveDate;
use log::{debug, error, info, warn};
use rand::{rngs::StdRng, Rng};

use crate::catalog::copy;
use crate::error::PlanError;
use crate::models::{
    activity::{minutes_since_midnight, wall_clock, wall_clock_from_minutes, Activity},
    day_plan::{DayPlanOption, TimeInterval},
    profile::{BudgetTier, UserProfile},
    traveler::{GroupComposition, Traveler},
};
use crate::services::{
    fallback::{fallback_batch, fallback_option},
    gap_filler::GapFiller,
    pricing_service::PricingService,
    random::{generate_id, is_hit, pick, seeded_rng},
    slot_allocator::{Placement, SlotAllocator},
    suitability_service::SuitabilityService,
};

/// Every batch holds exactly this many options.
pub const PLAN_OPTION_COUNT: usize = 3;

const DEFAULT_START_TIME: &str = "09:00";
const DEFAULT_END_TIME: &str = "21:00";
const DEFAULT_SLOT_MINUTES: u32 = 15;
const DEFAULT_ATTEMPT_FACTOR: usize = 3;
const DEFAULT_ALTERNATIVE_THRESHOLD: u32 = 50;
const DEFAULT_CURRENCY: &str = "USD";
const DEFAULT_BOOKING_BASE_URL: &str = "https://example.com/book";
const DEFAULT_BOOKING_PROBABILITY: f64 = 0.4;

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Day window start used when the profile has none, `HH:MM`
    pub default_start_time: String,
    /// Day window end used when the profile has none, `HH:MM`
    pub default_end_time: String,
    /// Activity starts snap down to multiples of this many minutes
    pub slot_minutes: u32,
    /// The allocator gives up after `target * attempt_factor` attempts
    pub attempt_factor: usize,
    /// Activities priced above this get cheaper offers attached
    pub alternative_threshold: u32,
    pub currency: String,
    pub booking_base_url: String,
    pub booking_probability: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            default_start_time: DEFAULT_START_TIME.to_string(),
            default_end_time: DEFAULT_END_TIME.to_string(),
            slot_minutes: DEFAULT_SLOT_MINUTES,
            attempt_factor: DEFAULT_ATTEMPT_FACTOR,
            alternative_threshold: DEFAULT_ALTERNATIVE_THRESHOLD,
            currency: DEFAULT_CURRENCY.to_string(),
            booking_base_url: DEFAULT_BOOKING_BASE_URL.to_string(),
            booking_probability: DEFAULT_BOOKING_PROBABILITY,
        }
    }
}

impl GenerationConfig {
    /// Load configuration from environment variables, keeping the default for
    /// anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            default_start_time: std::env::var("DAYPLAN_DEFAULT_START")
                .ok()
                .filter(|s| wall_clock::parse(s).is_some())
                .unwrap_or(defaults.default_start_time),
            default_end_time: std::env::var("DAYPLAN_DEFAULT_END")
                .ok()
                .filter(|s| wall_clock::parse(s).is_some())
                .unwrap_or(defaults.default_end_time),
            slot_minutes: std::env::var("DAYPLAN_SLOT_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|minutes: &u32| *minutes > 0)
                .unwrap_or(defaults.slot_minutes),
            attempt_factor: std::env::var("DAYPLAN_ATTEMPT_FACTOR")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|factor: &usize| *factor > 0)
                .unwrap_or(defaults.attempt_factor),
            alternative_threshold: std::env::var("DAYPLAN_ALTERNATIVE_THRESHOLD")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.alternative_threshold),
            currency: std::env::var("DAYPLAN_CURRENCY")
                .ok()
                .map(|s| s.trim().to_uppercase())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.currency),
            booking_base_url: std::env::var("DAYPLAN_BOOKING_URL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.booking_base_url),
            booking_probability: std::env::var("DAYPLAN_BOOKING_PROBABILITY")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|p: &f64| (0.0..=1.0).contains(p))
                .unwrap_or(defaults.booking_probability),
        }
    }
}

/// What one generation call knows about the trip, shared by every option.
#[derive(Debug, Clone)]
pub struct PlanContext<'a> {
    pub destination: &'a str,
    pub travelers: &'a [Traveler],
    pub group: GroupComposition,
    pub currency: String,
}

impl<'a> PlanContext<'a> {
    pub fn new(destination: &'a str, travelers: &'a [Traveler], currency: &str) -> Self {
        Self {
            destination,
            travelers,
            group: GroupComposition::of(travelers),
            currency: currency.to_string(),
        }
    }

    /// Destination as shown in copy.
    pub fn display_destination(&self) -> &str {
        match self.destination.trim() {
            "" => "your destination",
            trimmed => trimmed,
        }
    }
}

/// Produces the three candidate schedules offered for a day.
pub struct DayPlanGenerator<R: Rng = StdRng> {
    config: GenerationConfig,
    rng: R,
}

impl DayPlanGenerator<StdRng> {
    /// Generator with a fresh OS-seeded random source.
    pub fn new(config: GenerationConfig) -> Self {
        Self::with_rng(config, seeded_rng(None))
    }

    /// Generator whose output is reproducible for a given seed.
    pub fn with_seed(config: GenerationConfig, seed: u64) -> Self {
        Self::with_rng(config, seeded_rng(Some(seed)))
    }
}

impl<R: Rng> DayPlanGenerator<R> {
    pub fn with_rng(config: GenerationConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Three options for `date`. Never fails: incomplete input or a failed
    /// batch yields the static fallback options instead.
    pub fn generate_day_plan_options(
        &mut self,
        date: NaiveDate,
        profile: &UserProfile,
        destination: &str,
        travelers: &[Traveler],
    ) -> [DayPlanOption; PLAN_OPTION_COUNT] {
        let ctx = PlanContext::new(destination, travelers, &self.config.currency);

        match self.try_generate(profile, &ctx) {
            Ok(options) => {
                info!(
                    "Generated {} day plan options for {} in {}",
                    options.len(),
                    date,
                    ctx.display_destination()
                );
                options
            }
            Err(e) if e.is_input_incomplete() => {
                warn!("Using fallback day plans for {}: {}", date, e);
                fallback_batch(&mut self.rng, &ctx)
            }
            Err(e) => {
                error!("Day plan generation failed for {}: {}", date, e);
                fallback_batch(&mut self.rng, &ctx)
            }
        }
    }

    fn try_generate(
        &mut self,
        profile: &UserProfile,
        ctx: &PlanContext<'_>,
    ) -> Result<[DayPlanOption; PLAN_OPTION_COUNT], PlanError> {
        validate_input(profile, ctx)?;
        let window = self.day_window(profile)?;

        let mut options = Vec::with_capacity(PLAN_OPTION_COUNT);
        for iteration in 0..PLAN_OPTION_COUNT {
            let option = self.generate_option(profile, ctx, window);
            match option.validate(window) {
                Ok(()) => options.push(option),
                Err(e) => warn!("Dropping day plan option {}: {}", iteration + 1, e),
            }
        }

        top_up(&mut self.rng, options, ctx)
    }

    fn generate_option(
        &mut self,
        profile: &UserProfile,
        ctx: &PlanContext<'_>,
        window: TimeInterval,
    ) -> DayPlanOption {
        let pool = SuitabilityService::candidate_pool(&mut self.rng, &profile.interests, ctx.travelers);
        let target = SlotAllocator::target_activity_count(profile.energy_level, &ctx.group);

        let mut allocator = SlotAllocator::new(window, self.config.slot_minutes);
        let placements = allocator.allocate(
            &mut self.rng,
            &pool,
            target,
            &ctx.group,
            self.config.attempt_factor,
        );

        let activities = placements
            .into_iter()
            .map(|placement| {
                build_activity(&mut self.rng, &self.config, placement, profile.budget, ctx)
            })
            .collect();

        GapFiller::fill(&mut self.rng, activities, window, ctx)
    }

    /// The profile's preferred window, with configured defaults for blanks.
    pub fn day_window(&self, profile: &UserProfile) -> Result<TimeInterval, PlanError> {
        let start = resolve_time(
            profile.preferred_start_time.as_deref(),
            &self.config.default_start_time,
        )?;
        let end = resolve_time(
            profile.preferred_end_time.as_deref(),
            &self.config.default_end_time,
        )?;
        TimeInterval::new(start, end)
    }
}

fn validate_input(profile: &UserProfile, ctx: &PlanContext<'_>) -> Result<(), PlanError> {
    if !profile.is_complete() {
        return Err(PlanError::MissingInterests);
    }
    if ctx.destination.trim().is_empty() {
        return Err(PlanError::MissingDestination);
    }
    if ctx.travelers.is_empty() {
        return Err(PlanError::MissingTravelers);
    }
    Ok(())
}

/// Fill a batch of valid options up to [`PLAN_OPTION_COUNT`] with fallback
/// options, which take the window of the index they land on.
fn top_up<R: Rng + ?Sized>(
    rng: &mut R,
    options: Vec<DayPlanOption>,
    ctx: &PlanContext<'_>,
) -> Result<[DayPlanOption; PLAN_OPTION_COUNT], PlanError> {
    if options.is_empty() {
        return Err(PlanError::InvalidOption(
            "no option in the batch passed validation".to_string(),
        ));
    }
    if options.len() < PLAN_OPTION_COUNT {
        debug!(
            "Topping up {} valid options with fallback content",
            options.len()
        );
    }

    let mut options = options.into_iter();
    Ok(std::array::from_fn(|index| {
        options
            .next()
            .unwrap_or_else(|| fallback_option(rng, index, ctx))
    }))
}

fn resolve_time(preferred: Option<&str>, default: &str) -> Result<u32, PlanError> {
    let value = match preferred.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => default,
    };
    wall_clock::parse(value)
        .map(minutes_since_midnight)
        .ok_or_else(|| PlanError::InvalidTime(value.to_string()))
}

/// Priced activity for one placement, with copy, an optional booking link and
/// inline cheaper offers.
fn build_activity<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GenerationConfig,
    placement: Placement,
    budget: BudgetTier,
    ctx: &PlanContext<'_>,
) -> Activity {
    let category = placement.category;
    let destination = ctx.display_destination();

    let base_cost = PricingService::base_cost(rng, category, budget);
    let cost = PricingService::group_cost(base_cost, ctx.travelers);

    let names = copy::activity_names(category, destination, &ctx.group);
    let descriptions = copy::activity_descriptions(category, destination, &ctx.group);
    let locations = copy::locations(destination);

    let id = generate_id(rng);
    let name = pick(rng, &names).cloned().unwrap_or_else(|| category.to_string());
    let description = pick(rng, &descriptions).cloned().unwrap_or_default();
    let location = pick(rng, &locations)
        .cloned()
        .unwrap_or_else(|| destination.to_string());

    let booking_url = is_hit(rng, config.booking_probability)
        .then(|| format!("{}/{}", config.booking_base_url.trim_end_matches('/'), id));

    let alternatives = PricingService::inline_alternatives(
        rng,
        cost,
        config.alternative_threshold,
        category,
        destination,
        &ctx.group,
    );

    Activity {
        id,
        category,
        name,
        description,
        location,
        start_time: wall_clock_from_minutes(placement.interval.start()),
        end_time: wall_clock_from_minutes(placement.interval.end()),
        is_relaxation: false,
        booking_url,
        cost,
        currency: ctx.currency.clone(),
        alternatives,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::duration_range;
    use crate::models::{activity::ActivityCategory, profile::EnergyLevel};
    use crate::services::fallback::REPRESENTATIVE_WINDOWS;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()
    }

    fn profile(interests: &[ActivityCategory], energy_level: EnergyLevel) -> UserProfile {
        UserProfile {
            interests: interests.to_vec(),
            energy_level,
            preferred_start_time: Some("09:00".to_string()),
            preferred_end_time: Some("21:00".to_string()),
            budget: BudgetTier::Moderate,
            enable_notifications: true,
        }
    }

    fn travelers(ages: &[u32]) -> Vec<Traveler> {
        ages.iter()
            .enumerate()
            .map(|(i, age)| Traveler::new(format!("t{}", i), *age))
            .collect()
    }

    fn full_day() -> TimeInterval {
        TimeInterval::new(540, 1260).unwrap()
    }

    #[test]
    fn test_low_energy_day_has_two_activities() {
        let mut generator = DayPlanGenerator::with_seed(GenerationConfig::default(), 42);
        let profile = profile(&[ActivityCategory::Culture, ActivityCategory::Dining], EnergyLevel::Low);
        let roster = travelers(&[30]);

        for _ in 0..50 {
            let options = generator.generate_day_plan_options(date(), &profile, "Lisbon", &roster);
            for option in &options {
                assert_eq!(option.scheduled_activities().count(), 2);
                assert!(option.validate(full_day()).is_ok());
                assert_eq!(option.activities[0].start_time.format("%H:%M").to_string(), "09:00");
                assert_eq!(
                    option.activities.last().unwrap().end_time.format("%H:%M").to_string(),
                    "21:00"
                );
            }
        }
    }

    #[test]
    fn test_options_partition_the_window() {
        let mut generator = DayPlanGenerator::with_seed(GenerationConfig::default(), 7);
        let roster = travelers(&[34, 36, 70]);
        for energy in [EnergyLevel::Low, EnergyLevel::Medium, EnergyLevel::High] {
            let profile = profile(&ActivityCategory::ALL, energy);
            for _ in 0..30 {
                let options = generator.generate_day_plan_options(date(), &profile, "Kyoto", &roster);
                for option in &options {
                    option.validate(full_day()).unwrap();
                    assert!(option.scheduled_activities().count() <= energy.activities_per_day());
                    for pair in option.activities.windows(2) {
                        assert!(pair[0].end_minutes() <= pair[1].start_minutes());
                    }
                }
            }
        }
    }

    #[test]
    fn test_young_child_shortens_and_filters() {
        let mut generator = DayPlanGenerator::with_seed(GenerationConfig::default(), 2025);
        let nightlife = [ActivityCategory::Partying, ActivityCategory::Pubs, ActivityCategory::Concert];
        let mut interests = nightlife.to_vec();
        interests.extend([ActivityCategory::Culture, ActivityCategory::Gallery, ActivityCategory::Swimming]);
        let profile = profile(&interests, EnergyLevel::High);
        let roster = travelers(&[38, 36, 5]);

        let mut scheduled = 0;
        let mut nightlife_count = 0;
        for _ in 0..100 {
            for option in generator.generate_day_plan_options(date(), &profile, "Nice", &roster) {
                for activity in option.scheduled_activities() {
                    let (_, max) = duration_range(activity.category);
                    let span = activity.interval().unwrap().span();
                    assert!(span * 4 <= max * 3, "{} lasted {}", activity.category, span);
                    scheduled += 1;
                    if nightlife.contains(&activity.category) {
                        nightlife_count += 1;
                    }
                }
            }
        }
        assert!(scheduled > 0);
        assert!(
            (nightlife_count as f64) < 0.25 * scheduled as f64,
            "{} of {} activities were nightlife",
            nightlife_count,
            scheduled
        );
    }

    #[test]
    fn test_missing_interests_fall_back() {
        let mut generator = DayPlanGenerator::with_seed(GenerationConfig::default(), 1);
        let profile = profile(&[], EnergyLevel::Medium);
        let options = generator.generate_day_plan_options(date(), &profile, "Porto", &travelers(&[30]));

        for (option, window) in options.iter().zip(REPRESENTATIVE_WINDOWS) {
            assert_eq!(option.len(), 1);
            assert_eq!(option.activities[0].name, "Explore Porto");
            assert!(option.validate(window).is_ok());
        }
    }

    #[test]
    fn test_incomplete_input_falls_back() {
        let mut generator = DayPlanGenerator::with_seed(GenerationConfig::default(), 1);
        let profile = profile(&[ActivityCategory::Dining], EnergyLevel::Medium);

        let no_travelers = generator.generate_day_plan_options(date(), &profile, "Porto", &[]);
        assert!(no_travelers.iter().all(|option| option.len() == 1));

        let no_destination = generator.generate_day_plan_options(date(), &profile, "  ", &travelers(&[30]));
        assert_eq!(no_destination[0].activities[0].name, "Explore your destination");
    }

    #[test]
    fn test_invalid_window_falls_back() {
        let mut generator = DayPlanGenerator::with_seed(GenerationConfig::default(), 1);
        let mut inverted = profile(&[ActivityCategory::Dining], EnergyLevel::Medium);
        inverted.preferred_start_time = Some("18:00".to_string());
        inverted.preferred_end_time = Some("10:00".to_string());
        assert!(generator.day_window(&inverted).is_err());

        let options = generator.generate_day_plan_options(date(), &inverted, "Porto", &travelers(&[30]));
        assert!(options.iter().all(|option| option.len() == 1));

        let mut garbled = profile(&[ActivityCategory::Dining], EnergyLevel::Medium);
        garbled.preferred_start_time = Some("nine".to_string());
        assert_eq!(
            generator.day_window(&garbled),
            Err(PlanError::InvalidTime("nine".to_string()))
        );
    }

    #[test]
    fn test_blank_times_use_configured_defaults() {
        let generator = DayPlanGenerator::with_seed(GenerationConfig::default(), 1);
        let mut blank = profile(&[ActivityCategory::Dining], EnergyLevel::Medium);
        blank.preferred_start_time = Some(" ".to_string());
        blank.preferred_end_time = None;
        assert_eq!(generator.day_window(&blank), Ok(full_day()));
    }

    #[test]
    fn test_costs_and_currency_follow_config() {
        let config = GenerationConfig {
            currency: "EUR".to_string(),
            booking_probability: 1.0,
            ..GenerationConfig::default()
        };
        let mut generator = DayPlanGenerator::with_seed(config, 9);
        let profile = profile(&[ActivityCategory::SeaCruise, ActivityCategory::Hotel], EnergyLevel::Medium);
        let roster = travelers(&[40, 42]);

        for option in generator.generate_day_plan_options(date(), &profile, "Split", &roster) {
            for activity in &option.activities {
                assert_eq!(activity.currency, "EUR");
                if activity.is_relaxation {
                    assert_eq!(activity.cost, 0);
                    assert!(activity.booking_url.is_none());
                } else {
                    let url = activity.booking_url.as_deref().unwrap();
                    assert_eq!(url, format!("https://example.com/book/{}", activity.id));
                    // Sea cruises and hotels always cost more than the threshold for two adults
                    assert!(!activity.alternatives.is_empty());
                    assert!(activity.alternatives.len() <= 2);
                    for alternative in &activity.alternatives {
                        assert!(alternative.cost < activity.cost);
                        assert!((20..50).contains(&alternative.savings_percentage));
                    }
                }
            }
        }
    }

    #[test]
    fn test_seeded_generators_repeat() {
        let profile = profile(&[ActivityCategory::Culture, ActivityCategory::Hiking], EnergyLevel::Medium);
        let roster = travelers(&[30, 31]);
        let first = DayPlanGenerator::with_seed(GenerationConfig::default(), 77)
            .generate_day_plan_options(date(), &profile, "Bergen", &roster);
        let second = DayPlanGenerator::with_seed(GenerationConfig::default(), 77)
            .generate_day_plan_options(date(), &profile, "Bergen", &roster);
        assert_eq!(first, second);
    }

    fn generated_options(count: usize) -> Vec<DayPlanOption> {
        let mut generator = DayPlanGenerator::with_seed(GenerationConfig::default(), 11);
        let profile = profile(&[ActivityCategory::Culture, ActivityCategory::Dining], EnergyLevel::Low);
        generator
            .generate_day_plan_options(date(), &profile, "Lisbon", &travelers(&[30]))
            .into_iter()
            .take(count)
            .collect()
    }

    fn starts_at(option: &DayPlanOption) -> String {
        option.activities[0].start_time.format("%H:%M").to_string()
    }

    #[test]
    fn test_top_up_without_valid_options_is_an_error() {
        let mut rng = seeded_rng(Some(5));
        let roster = travelers(&[30]);
        let ctx = PlanContext::new("Lisbon", &roster, "USD");
        let err = top_up(&mut rng, Vec::new(), &ctx).unwrap_err();
        assert!(matches!(err, PlanError::InvalidOption(_)));
        assert!(!err.is_input_incomplete());
    }

    #[test]
    fn test_top_up_fills_missing_indices_with_fallback() {
        let mut rng = seeded_rng(Some(5));
        let roster = travelers(&[30]);
        let ctx = PlanContext::new("Lisbon", &roster, "USD");
        let kept = generated_options(1);

        let options = top_up(&mut rng, kept.clone(), &ctx).unwrap();
        assert_eq!(options[0], kept[0]);
        assert!(options[0].validate(full_day()).is_ok());
        for (index, expected) in [(1, "10:00"), (2, "11:00")] {
            assert_eq!(options[index].len(), 1);
            assert_eq!(options[index].activities[0].name, "Explore Lisbon");
            assert_eq!(starts_at(&options[index]), expected);
            assert!(options[index].validate(REPRESENTATIVE_WINDOWS[index]).is_ok());
        }
    }

    #[test]
    fn test_top_up_keeps_a_full_batch() {
        let mut rng = seeded_rng(Some(5));
        let roster = travelers(&[30]);
        let ctx = PlanContext::new("Lisbon", &roster, "USD");
        let kept = generated_options(PLAN_OPTION_COUNT);

        let options = top_up(&mut rng, kept.clone(), &ctx).unwrap();
        assert_eq!(options.to_vec(), kept);
    }

    #[test]
    fn test_fallback_windows_follow_index() {
        let mut rng = seeded_rng(Some(5));
        let roster = travelers(&[30]);
        let ctx = PlanContext::new("Lisbon", &roster, "USD");
        for (index, expected) in ["09:00", "10:00", "11:00"].into_iter().enumerate() {
            let option = fallback_option(&mut rng, index, &ctx);
            assert_eq!(starts_at(&option), expected);
            assert!(option.validate(REPRESENTATIVE_WINDOWS[index]).is_ok());
        }
    }

    #[test]
    fn test_display_destination() {
        let roster = travelers(&[30]);
        assert_eq!(PlanContext::new(" Rome ", &roster, "USD").display_destination(), "Rome");
        assert_eq!(PlanContext::new("", &roster, "USD").display_destination(), "your destination");
    }
}
