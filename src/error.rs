use thiserror::Error;

/// Failures raised while building a day plan.
///
/// None of these reach the caller of the generator: they are absorbed at the
/// batch boundary and replaced by fallback content.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("profile has no interests")]
    MissingInterests,
    #[error("destination is missing")]
    MissingDestination,
    #[error("traveler roster is empty")]
    MissingTravelers,
    #[error("invalid wall-clock time `{0}`, expected HH:MM")]
    InvalidTime(String),
    #[error("invalid day window {start}..{end} (minutes since midnight)")]
    InvalidWindow { start: u32, end: u32 },
    #[error("generated option is invalid: {0}")]
    InvalidOption(String),
}

impl PlanError {
    /// Input errors are expected outcomes of an unfinished onboarding, not bugs.
    pub fn is_input_incomplete(&self) -> bool {
        matches!(
            self,
            PlanError::MissingInterests | PlanError::MissingDestination | PlanError::MissingTravelers
        )
    }
}
