use thiserror::Error;

/// Faults raised while turning a raw package into a training.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    /// The workout code has no entry in the dispatch table
    #[error("unknown workout code '{0}'")]
    UnknownWorkoutCode(String),

    /// Field count or field type does not match the variant's constructor
    #[error("malformed fields for {code}: expected {expected} values, got {actual} ({reason})")]
    MalformedFields {
        code: String,
        expected: usize,
        actual: usize,
        reason: String,
    },

    /// A field has the right shape but a value the formulas cannot use
    #[error("invalid {field} for {code}: {value} ({reason})")]
    InvalidField {
        code: String,
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl WorkoutError {
    /// Workout code the failing package was submitted with
    pub fn code(&self) -> &str {
        match self {
            WorkoutError::UnknownWorkoutCode(code) => code,
            WorkoutError::MalformedFields { code, .. } => code,
            WorkoutError::InvalidField { code, .. } => code,
        }
    }
}
