use super::schema::Config;
use crate::dispatch::read_package;

/// Validate every package in the config before anything is printed.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let errors: Vec<String> = config
        .packages
        .iter()
        .enumerate()
        .filter_map(|(i, package)| {
            read_package(&package.code, &package.data)
                .err()
                .map(|e| format!("packages[{}]: {}", i, e))
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
