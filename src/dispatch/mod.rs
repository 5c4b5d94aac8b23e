pub mod fields;
pub mod table;

pub use table::{read_package, validate_dispatch_table, Constructor, TRAINING_TYPES};
