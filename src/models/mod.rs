pub mod activity;
pub mod day_plan;
pub mod profile;
pub mod traveler;
pub mod trip;
