use workout_calc::driver::{process_package, run_batch, sample_packages, ErrorPolicy, Package};
use workout_calc::output::format_message;
use workout_calc::training::TrainingKind;
use workout_calc::WorkoutError;

#[test]
fn swimming_package() {
    let (training, report) = process_package(&Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])).unwrap();
    assert_eq!(training.kind(), TrainingKind::Swimming);
    assert!((report.speed - 1.0).abs() < 1e-9);
    assert!((report.calories - 336.0).abs() < 1e-6);

    let line = format_message(&report);
    assert!(line.contains("Ср. скорость: 1.000 км/ч"));
    assert!(line.contains("Потрачено ккал: 336.000."));
}

#[test]
fn running_package() {
    let (training, report) = process_package(&Package::new("RUN", &[15000.0, 1.0, 75.0])).unwrap();
    assert_eq!(training.kind(), TrainingKind::Running);
    assert!((report.distance - 9.75).abs() < 1e-9);
    assert!((report.speed - 9.75).abs() < 1e-9);
    assert!((report.calories - 797.805).abs() < 1e-2);
}

#[test]
fn walking_package() {
    let (training, report) = process_package(&Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0])).unwrap();
    assert_eq!(training.kind(), TrainingKind::SportsWalking);
    assert!((report.distance - 5.85).abs() < 1e-9);
    assert!((report.speed - 5.85).abs() < 1e-9);
    assert!((report.calories - 349.252).abs() < 1e-2);
}

#[test]
fn sample_batch_renders_three_lines() {
    let mut lines = Vec::new();
    run_batch(&sample_packages(), ErrorPolicy::Abort, |_, report| {
        lines.push(format_message(report));
    })
    .unwrap();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Тип тренировки: Swimming;"));
    assert!(lines[1].starts_with("Тип тренировки: Running;"));
    assert!(lines[2].starts_with("Тип тренировки: SportsWalking;"));
    for line in &lines {
        assert!(line.ends_with('.'));
    }
}

#[test]
fn unknown_code_is_rejected() {
    let err = process_package(&Package::new("XYZ", &[1.0, 1.0, 1.0])).unwrap_err();
    assert_eq!(err, WorkoutError::UnknownWorkoutCode("XYZ".to_string()));
}
