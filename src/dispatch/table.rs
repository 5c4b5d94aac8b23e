use tracing::debug;

use super::fields::Fields;
use crate::error::WorkoutError;
use crate::training::{Running, SportsWalking, Swimming, Training, TrainingKind};

/// Builds a training from the positional values of a package
pub type Constructor = fn(&[f64]) -> Result<Training, WorkoutError>;

/// Workout code to constructor mapping.
pub static TRAINING_TYPES: &[(&str, Constructor)] = &[
    ("RUN", build_running),
    ("WLK", build_sports_walking),
    ("SWM", build_swimming),
];

fn build_running(data: &[f64]) -> Result<Training, WorkoutError> {
    let mut fields = Fields::new(TrainingKind::Running, data)?;
    Ok(Training::Running(Running {
        action: fields.count()?,
        duration: fields.positive()?,
        weight: fields.non_negative()?,
    }))
}

fn build_sports_walking(data: &[f64]) -> Result<Training, WorkoutError> {
    let mut fields = Fields::new(TrainingKind::SportsWalking, data)?;
    Ok(Training::SportsWalking(SportsWalking {
        action: fields.count()?,
        duration: fields.positive()?,
        weight: fields.non_negative()?,
        height: fields.positive()?,
    }))
}

fn build_swimming(data: &[f64]) -> Result<Training, WorkoutError> {
    let mut fields = Fields::new(TrainingKind::Swimming, data)?;
    Ok(Training::Swimming(Swimming {
        action: fields.count()?,
        duration: fields.positive()?,
        weight: fields.non_negative()?,
        length_pool: fields.positive()?,
        count_pool: fields.count()?,
    }))
}

/// Read one sensor package: resolve the workout code and build the training.
///
/// There is no fallback variant, an unknown code is always an error.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Training, WorkoutError> {
    let (_, constructor) = TRAINING_TYPES
        .iter()
        .find(|(code, _)| *code == workout_type)
        .ok_or_else(|| WorkoutError::UnknownWorkoutCode(workout_type.to_string()))?;

    let training = constructor(data)?;
    debug!(code = workout_type, ?data, "package read");
    Ok(training)
}

/// Check that every training kind has exactly one code in the dispatch table
/// and that each code builds the kind it names.
/// Returns all problems at once (not just the first).
pub fn validate_dispatch_table() -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for kind in TrainingKind::ALL {
        let entries = TRAINING_TYPES
            .iter()
            .filter(|(code, _)| *code == kind.code())
            .count();
        if entries != 1 {
            errors.push(format!(
                "{}: expected exactly one dispatch entry for '{}', found {}",
                kind.label(),
                kind.code(),
                entries
            ));
        }
    }

    for (code, constructor) in TRAINING_TYPES {
        let Some(kind) = TrainingKind::ALL.iter().find(|k| k.code() == *code) else {
            errors.push(format!("dispatch entry '{}' names no training kind", code));
            continue;
        };

        // Probe the constructor with a minimal well-formed package
        let probe = vec![1.0; kind.field_count()];
        match constructor(&probe) {
            Ok(training) if training.kind() == *kind => {}
            Ok(training) => errors.push(format!(
                "dispatch entry '{}' builds {} instead of {}",
                code,
                training.kind().label(),
                kind.label()
            )),
            Err(e) => errors.push(format!("dispatch entry '{}' rejects a valid package: {}", code, e)),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
