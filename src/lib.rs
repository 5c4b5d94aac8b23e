pub mod config;
pub mod dispatch;
pub mod driver;
pub mod error;
pub mod logging;
pub mod output;
pub mod training;

pub use error::WorkoutError;
