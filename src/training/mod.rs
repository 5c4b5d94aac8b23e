pub mod kind;
pub mod report;
pub mod types;

pub use kind::TrainingKind;
pub use report::WorkoutReport;
pub use types::*;
