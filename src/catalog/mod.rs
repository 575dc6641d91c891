//! Immutable reference data: duration and price tables, substitution map and
//! the copy templates generated activities are dressed with.

pub mod copy;
pub mod tables;

pub use tables::{cost_range, duration_range, family_substitutes};
