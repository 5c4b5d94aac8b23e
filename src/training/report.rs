use serde::Serialize;

use super::types::Training;

/// Computed summary of one training, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutReport {
    pub training_type: String,
    pub duration: f64, // hours
    pub distance: f64, // km
    pub speed: f64,    // km/h
    pub calories: f64, // kcal
}

impl Training {
    /// Snapshot the training's metrics. Does not mutate the training.
    pub fn build_report(&self) -> WorkoutReport {
        WorkoutReport {
            training_type: self.kind().label().to_string(),
            duration: self.duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}
