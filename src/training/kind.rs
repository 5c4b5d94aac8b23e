use serde::{Deserialize, Serialize};

/// Every workout variant the calculator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum TrainingKind {
    Running,
    SportsWalking,
    Swimming,
}

impl TrainingKind {
    pub const ALL: [TrainingKind; 3] = [
        TrainingKind::Running,
        TrainingKind::SportsWalking,
        TrainingKind::Swimming,
    ];

    /// Short code used by sensor packages ("RUN", "WLK", "SWM")
    pub fn code(&self) -> &'static str {
        match self {
            TrainingKind::Running => "RUN",
            TrainingKind::SportsWalking => "WLK",
            TrainingKind::Swimming => "SWM",
        }
    }

    /// Name shown in the report
    pub fn label(&self) -> &'static str {
        match self {
            TrainingKind::Running => "Running",
            TrainingKind::SportsWalking => "SportsWalking",
            TrainingKind::Swimming => "Swimming",
        }
    }

    /// Positional field names, in the order a package must supply them
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            TrainingKind::Running => &["action", "duration", "weight"],
            TrainingKind::SportsWalking => &["action", "duration", "weight", "height"],
            TrainingKind::Swimming => &[
                "action",
                "duration",
                "weight",
                "length_pool",
                "count_pool",
            ],
        }
    }

    pub fn field_count(&self) -> usize {
        self.field_names().len()
    }
}
