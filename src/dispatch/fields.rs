use crate::error::WorkoutError;
use crate::training::TrainingKind;

/// Positional reader over the raw values of one package.
///
/// The arity is checked up front, so the typed accessors only ever have to
/// reject bad values, never missing ones.
pub struct Fields<'a> {
    kind: TrainingKind,
    data: &'a [f64],
    pos: usize,
}

impl<'a> Fields<'a> {
    pub fn new(kind: TrainingKind, data: &'a [f64]) -> Result<Self, WorkoutError> {
        if data.len() != kind.field_count() {
            return Err(WorkoutError::MalformedFields {
                code: kind.code().to_string(),
                expected: kind.field_count(),
                actual: data.len(),
                reason: format!("expected [{}]", kind.field_names().join(", ")),
            });
        }
        Ok(Self { kind, data, pos: 0 })
    }

    fn next(&mut self) -> (&'static str, f64) {
        let name = self.kind.field_names()[self.pos];
        let value = self.data[self.pos];
        self.pos += 1;
        (name, value)
    }

    /// A non-negative whole number (steps, strokes, laps)
    pub fn count(&mut self) -> Result<u64, WorkoutError> {
        let (name, value) = self.next();
        if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > u64::MAX as f64 {
            return Err(WorkoutError::MalformedFields {
                code: self.kind.code().to_string(),
                expected: self.kind.field_count(),
                actual: self.data.len(),
                reason: format!("{} must be a non-negative integer, got {}", name, value),
            });
        }
        Ok(value as u64)
    }

    /// A value the formulas divide by
    pub fn positive(&mut self) -> Result<f64, WorkoutError> {
        let (name, value) = self.next();
        if !value.is_finite() || value <= 0.0 {
            return Err(self.invalid(name, value, "must be greater than zero"));
        }
        Ok(value)
    }

    pub fn non_negative(&mut self) -> Result<f64, WorkoutError> {
        let (name, value) = self.next();
        if !value.is_finite() || value < 0.0 {
            return Err(self.invalid(name, value, "must not be negative"));
        }
        Ok(value)
    }

    fn invalid(&self, field: &'static str, value: f64, reason: &'static str) -> WorkoutError {
        WorkoutError::InvalidField {
            code: self.kind.code().to_string(),
            field,
            value,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_arity() {
        let err = Fields::new(TrainingKind::Running, &[1.0, 2.0]).err().unwrap();
        assert!(matches!(
            err,
            WorkoutError::MalformedFields { expected: 3, actual: 2, .. }
        ));
    }

    #[test]
    fn test_count_accepts_whole_numbers() {
        let mut fields = Fields::new(TrainingKind::Running, &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(fields.count().unwrap(), 15000);
    }

    #[test]
    fn test_count_rejects_fraction() {
        let mut fields = Fields::new(TrainingKind::Running, &[10.5, 1.0, 75.0]).unwrap();
        let err = fields.count().unwrap_err();
        assert!(matches!(err, WorkoutError::MalformedFields { .. }));
        assert!(err.to_string().contains("action"));
    }

    #[test]
    fn test_count_rejects_negative() {
        let mut fields = Fields::new(TrainingKind::Running, &[-1.0, 1.0, 75.0]).unwrap();
        assert!(fields.count().is_err());
    }

    #[test]
    fn test_positive_rejects_zero() {
        let mut fields = Fields::new(TrainingKind::Running, &[100.0, 0.0, 75.0]).unwrap();
        fields.count().unwrap();
        let err = fields.positive().unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidField { field: "duration", .. }
        ));
    }

    #[test]
    fn test_non_negative_accepts_zero() {
        let mut fields = Fields::new(TrainingKind::Running, &[100.0, 1.0, 0.0]).unwrap();
        fields.count().unwrap();
        fields.positive().unwrap();
        assert_eq!(fields.non_negative().unwrap(), 0.0);
    }

    #[test]
    fn test_nan_rejected() {
        let mut fields = Fields::new(TrainingKind::Running, &[100.0, f64::NAN, 75.0]).unwrap();
        fields.count().unwrap();
        assert!(fields.positive().is_err());
    }
}
