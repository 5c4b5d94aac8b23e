use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::dispatch::read_package;
use crate::error::WorkoutError;
use crate::training::{Training, WorkoutReport};

/// One sensor package: a workout code and its positional values.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: &str, data: &[f64]) -> Self {
        Self {
            code: code.to_string(),
            data: data.to_vec(),
        }
    }
}

/// What the batch does when a package fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop at the first failing package
    #[default]
    Abort,
    /// Log the failing package and move on
    Skip,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: usize,
}

/// The packages the calculator runs when nothing else is configured.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Build the training for one package and compute its report.
pub fn process_package(package: &Package) -> Result<(Training, WorkoutReport), WorkoutError> {
    let training = read_package(&package.code, &package.data)?;
    let report = training.build_report();
    Ok((training, report))
}

/// Process packages in order, handing each report to `sink` before the next
/// package is read.
///
/// Under [`ErrorPolicy::Abort`] the first failure is returned; reports already
/// handed to the sink stay emitted.
pub fn run_batch<F>(
    packages: &[Package],
    policy: ErrorPolicy,
    mut sink: F,
) -> Result<BatchSummary, WorkoutError>
where
    F: FnMut(&Training, &WorkoutReport),
{
    let mut summary = BatchSummary::default();

    for (index, package) in packages.iter().enumerate() {
        match process_package(package) {
            Ok((training, report)) => {
                debug!(
                    index,
                    code = %package.code,
                    calories = report.calories,
                    "package processed"
                );
                sink(&training, &report);
                summary.processed += 1;
            }
            Err(e) => match policy {
                ErrorPolicy::Abort => return Err(e),
                ErrorPolicy::Skip => {
                    warn!(index, code = %package.code, error = %e, "skipping package");
                    summary.failed += 1;
                }
            },
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_in_order() {
        let codes: Vec<_> = sample_packages().into_iter().map(|p| p.code).collect();
        assert_eq!(codes, vec!["SWM", "RUN", "WLK"]);
    }

    #[test]
    fn test_run_samples() {
        let mut labels = Vec::new();
        let summary = run_batch(&sample_packages(), ErrorPolicy::Abort, |_, report| {
            labels.push(report.training_type.clone());
        })
        .unwrap();
        assert_eq!(summary, BatchSummary { processed: 3, failed: 0 });
        assert_eq!(labels, vec!["Swimming", "Running", "SportsWalking"]);
    }

    #[test]
    fn test_abort_stops_at_first_failure() {
        let packages = vec![
            Package::new("RUN", &[15000.0, 1.0, 75.0]),
            Package::new("XYZ", &[1.0]),
            Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
        ];
        let mut emitted = 0;
        let err = run_batch(&packages, ErrorPolicy::Abort, |_, _| emitted += 1).unwrap_err();
        assert_eq!(err, WorkoutError::UnknownWorkoutCode("XYZ".to_string()));
        assert_eq!(emitted, 1);
    }

    #[test]
    fn test_skip_continues_past_failures() {
        let packages = vec![
            Package::new("XYZ", &[1.0]),
            Package::new("RUN", &[15000.0, 1.0]),
            Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
        ];
        let mut emitted = Vec::new();
        let summary = run_batch(&packages, ErrorPolicy::Skip, |t, _| emitted.push(t.kind())).unwrap();
        assert_eq!(summary, BatchSummary { processed: 1, failed: 2 });
        assert_eq!(emitted.len(), 1);
    }

    #[test]
    fn test_empty_batch() {
        let summary = run_batch(&[], ErrorPolicy::Abort, |_, _| {}).unwrap();
        assert_eq!(summary, BatchSummary::default());
    }
}
