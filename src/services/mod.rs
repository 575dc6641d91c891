pub mod alternative_service;
pub mod budget_service;
pub mod day_plan_generator;
pub mod fallback;
pub mod gap_filler;
pub mod pricing_service;
pub mod random;
pub mod slot_allocator;
pub mod suitability_service;
