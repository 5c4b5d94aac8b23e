use serde::{Deserialize, Serialize};

use crate::driver::{sample_packages, ErrorPolicy, Package};

/// Batch configuration.
///
/// Example YAML:
/// ```yaml
/// on_error: skip
/// packages:
///   - { code: SWM, data: [720, 1, 80, 25, 40] }
///   - { code: RUN, data: [15000, 1, 75] }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// What to do when a package fails (default: abort)
    #[serde(default)]
    pub on_error: ErrorPolicy,

    pub packages: Vec<Package>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            on_error: ErrorPolicy::default(),
            packages: sample_packages(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_runs_samples() {
        let config = Config::default();
        assert_eq!(config.on_error, ErrorPolicy::Abort);
        assert_eq!(config.packages.len(), 3);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
on_error: skip
packages:
  - code: SWM
    data: [720, 1, 80, 25, 40]
  - code: RUN
    data: [15000, 1, 75]
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.on_error, ErrorPolicy::Skip);
        assert_eq!(config.packages.len(), 2);
        assert_eq!(config.packages[0].code, "SWM");
        assert_eq!(config.packages[0].data, vec![720.0, 1.0, 80.0, 25.0, 40.0]);
    }

    #[test]
    fn test_on_error_defaults_to_abort() {
        let yaml = r#"
packages:
  - code: RUN
    data: [15000, 1, 75]
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.on_error, ErrorPolicy::Abort);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = r#"
packages: []
retries: 3
"#;
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }
}
