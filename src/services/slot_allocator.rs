//! Time-Slot Allocator
//!
//! Keeps the free part of a day window as a list of disjoint intervals and
//! packs randomly sized activities into it.
//!
//! ## Algorithm
//! Each attempt draws a category from the pool and a duration for that
//! category, then one of the free intervals long enough to hold it. A start is
//! drawn inside the interval and snapped to the slot grid, and the interval is
//! split into the residual pieces before and after the activity. When no free
//! interval is long enough the attempt counts against the attempt budget but
//! not against the activity count, so a day whose free time has fragmented
//! stops after a bounded number of tries.

use log::debug;
use rand::Rng;

use crate::catalog::duration_range;
use crate::models::{
    activity::ActivityCategory, day_plan::TimeInterval, profile::EnergyLevel,
    traveler::GroupComposition,
};
use crate::services::random::{pick, uniform_below, uniform_inclusive};

/// Activities are shortened to this share of their drawn duration for groups with a child under 12.
const CHILD_DURATION_NUMERATOR: u32 = 3;
const CHILD_DURATION_DENOMINATOR: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub category: ActivityCategory,
    pub interval: TimeInterval,
}

#[derive(Debug, Clone)]
pub struct SlotAllocator {
    free: Vec<TimeInterval>,
    granularity: u32,
}

impl SlotAllocator {
    pub fn new(window: TimeInterval, granularity: u32) -> Self {
        Self {
            free: vec![window],
            granularity: granularity.max(1),
        }
    }

    /// How many activities a day should hold for this energy level and group.
    pub fn target_activity_count(energy: EnergyLevel, group: &GroupComposition) -> usize {
        let base = energy.activities_per_day();
        if group.has_young_children {
            base.saturating_sub(1).max(1)
        } else {
            base
        }
    }

    /// Duration for one activity of `category`, adjusted for the group.
    pub fn draw_duration<R: Rng + ?Sized>(
        rng: &mut R,
        category: ActivityCategory,
        group: &GroupComposition,
    ) -> u32 {
        let (min, max) = duration_range(category);
        let duration = uniform_below(rng, min, max);
        if group.has_under_twelve {
            duration * CHILD_DURATION_NUMERATOR / CHILD_DURATION_DENOMINATOR
        } else {
            duration
        }
    }

    /// Place up to `target` activities drawn from `pool`.
    ///
    /// At most `target * attempt_factor` attempts are made. The result is in
    /// placement order, not time order.
    pub fn allocate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        pool: &[ActivityCategory],
        target: usize,
        group: &GroupComposition,
        attempt_factor: usize,
    ) -> Vec<Placement> {
        let max_attempts = target.saturating_mul(attempt_factor.max(1));
        let mut placements = Vec::with_capacity(target);
        let mut attempts = 0;

        while placements.len() < target && attempts < max_attempts {
            attempts += 1;

            if self.free.is_empty() {
                break;
            }
            let Some(&category) = pick(rng, pool) else {
                break;
            };

            let duration = Self::draw_duration(rng, category, group);
            match self.place(rng, duration) {
                Some(interval) => placements.push(Placement { category, interval }),
                None => debug!(
                    "No room for {} minutes of {} (attempt {}/{})",
                    duration, category, attempts, max_attempts
                ),
            }
        }

        debug!(
            "Placed {}/{} activities in {} attempts, {} free intervals left",
            placements.len(),
            target,
            attempts,
            self.free.len()
        );
        placements
    }

    /// Reserve `duration` minutes inside a random free interval that can hold it.
    ///
    /// Returns `None`, leaving the free list unchanged, when every free interval
    /// is too short.
    pub fn place<R: Rng + ?Sized>(&mut self, rng: &mut R, duration: u32) -> Option<TimeInterval> {
        if duration == 0 {
            return None;
        }

        // A stall only happens when no free interval fits
        let fitting: Vec<usize> = self
            .free
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.span() >= duration)
            .map(|(index, _)| index)
            .collect();
        let &index = pick(rng, &fitting)?;
        let slot = self.free.swap_remove(index);

        let latest_start = slot.end() - duration;
        let raw_start = uniform_inclusive(rng, slot.start(), latest_start);
        let start = self.align_start(slot, raw_start, duration);
        let end = start + duration;

        if let Ok(before) = TimeInterval::new(slot.start(), start) {
            self.free.push(before);
        }
        if let Ok(after) = TimeInterval::new(end, slot.end()) {
            self.free.push(after);
        }

        TimeInterval::new(start, end).ok()
    }

    /// Snap `raw_start` down to the slot grid. If that leaves the interval,
    /// snap up instead, and if that overruns, use the interval start as is.
    fn align_start(&self, slot: TimeInterval, raw_start: u32, duration: u32) -> u32 {
        let down = raw_start - raw_start % self.granularity;
        if down >= slot.start() {
            return down;
        }

        let up = down + self.granularity;
        if up + duration <= slot.end() {
            up
        } else {
            slot.start()
        }
    }
}
