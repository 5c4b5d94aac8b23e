use super::kind::TrainingKind;

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;
/// Distance covered by one step, in meters
pub const STEP_LENGTH_M: f64 = 0.65;

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub action: u64,
    pub duration: f64, // hours
    pub weight: f64,   // kg
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn spent_calories(&self, mean_speed: f64) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * mean_speed + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.weight
            / M_IN_KM
            * self.duration
            * MIN_IN_H
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    pub action: u64,
    pub duration: f64, // hours
    pub weight: f64,   // kg
    pub height: f64,   // cm
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    const KMH_IN_MSEC: f64 = 0.278;
    const CM_IN_M: f64 = 100.0;

    pub fn spent_calories(&self, mean_speed: f64) -> f64 {
        // Grouping matters: the squared speed is divided by height in meters
        // before the weight term, and the whole sum scales with minutes.
        (Self::CALORIES_WEIGHT_MULTIPLIER * self.weight
            + ((mean_speed * Self::KMH_IN_MSEC).powi(2) / (self.height / Self::CM_IN_M))
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * self.weight)
            * (self.duration * MIN_IN_H)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub action: u64,
    pub duration: f64,    // hours
    pub weight: f64,      // kg
    pub length_pool: f64, // m
    pub count_pool: u64,
}

impl Swimming {
    /// Distance covered by one stroke, in meters
    pub const STROKE_LENGTH_M: f64 = 1.38;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    /// Pool distance: length of the pool times laps swum
    pub fn distance(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM
    }

    pub fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM / self.duration
    }

    /// Distance estimated from the stroke count instead of the pool geometry
    pub fn stroke_distance(&self) -> f64 {
        self.action as f64 * Self::STROKE_LENGTH_M / M_IN_KM
    }

    pub fn spent_calories(&self, mean_speed: f64) -> f64 {
        (mean_speed + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.weight
            * self.duration
    }
}

/// A workout built from one sensor package.
///
/// Only concrete variants exist, so every training has a calorie formula.
#[derive(Debug, Clone, PartialEq)]
pub enum Training {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Training {
    pub fn kind(&self) -> TrainingKind {
        match self {
            Training::Running(_) => TrainingKind::Running,
            Training::SportsWalking(_) => TrainingKind::SportsWalking,
            Training::Swimming(_) => TrainingKind::Swimming,
        }
    }

    /// Steps, or strokes for swimming
    pub fn action(&self) -> u64 {
        match self {
            Training::Running(t) => t.action,
            Training::SportsWalking(t) => t.action,
            Training::Swimming(t) => t.action,
        }
    }

    /// Duration in hours
    pub fn duration(&self) -> f64 {
        match self {
            Training::Running(t) => t.duration,
            Training::SportsWalking(t) => t.duration,
            Training::Swimming(t) => t.duration,
        }
    }

    /// Body weight in kg
    pub fn weight(&self) -> f64 {
        match self {
            Training::Running(t) => t.weight,
            Training::SportsWalking(t) => t.weight,
            Training::Swimming(t) => t.weight,
        }
    }

    /// Distance in km
    pub fn distance(&self) -> f64 {
        match self {
            Training::Swimming(t) => t.distance(),
            _ => self.action() as f64 * STEP_LENGTH_M / M_IN_KM,
        }
    }

    /// Mean speed in km/h
    pub fn mean_speed(&self) -> f64 {
        match self {
            Training::Swimming(t) => t.mean_speed(),
            _ => self.distance() / self.duration(),
        }
    }

    /// Calories burned, in kcal
    pub fn spent_calories(&self) -> f64 {
        let mean_speed = self.mean_speed();
        match self {
            Training::Running(t) => t.spent_calories(mean_speed),
            Training::SportsWalking(t) => t.spent_calories(mean_speed),
            Training::Swimming(t) => t.spent_calories(mean_speed),
        }
    }
}
