use std::io::IsTerminal;
use owo_colors::OwoColorize;

use crate::training::{Training, WorkoutReport};

/// Format a report as the canonical one-line message.
/// Every number is shown with exactly three decimals.
pub fn format_message(report: &WorkoutReport) -> String {
    format!(
        "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
        report.training_type, report.duration, report.distance, report.speed, report.calories
    )
}

/// Same text as [`format_message`], styled for a terminal
pub fn format_message_colored(report: &WorkoutReport) -> String {
    format!(
        "Тип тренировки: {}; Длительность: {} ч.; Дистанция: {} км; Ср. скорость: {} км/ч; Потрачено ккал: {}.",
        report.training_type.bold(),
        format!("{:.3}", report.duration).cyan(),
        format!("{:.3}", report.distance).cyan(),
        format!("{:.3}", report.speed).cyan(),
        format!("{:.3}", report.calories).yellow()
    )
}

/// Format a training with its raw inputs (for verbose mode)
pub fn format_detail(training: &Training, report: &WorkoutReport, use_colors: bool) -> String {
    let mut lines = vec![if use_colors {
        format!("{} ({})", report.training_type.bold(), training.kind().code().dimmed())
    } else {
        format!("{} ({})", report.training_type, training.kind().code())
    }];

    lines.push(format!("  Actions: {}", training.action()));
    lines.push(format!("  Duration: {:.3} h", training.duration()));
    lines.push(format!("  Weight: {:.1} kg", training.weight()));

    match training {
        Training::Running(_) => {}
        Training::SportsWalking(t) => {
            lines.push(format!("  Height: {:.1} cm", t.height));
        }
        Training::Swimming(t) => {
            lines.push(format!("  Pool: {} x {:.1} m", t.count_pool, t.length_pool));
            lines.push(format!("  Stroke distance: {:.3} km", t.stroke_distance()));
        }
    }

    lines.push(format!("  Distance: {:.3} km", report.distance));
    lines.push(format!("  Mean speed: {:.3} km/h", report.speed));
    lines.push(format!("  Calories: {:.3} kcal", report.calories));
    lines.join("\n")
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format reports as tab-separated values for scripting
/// Columns: type, duration, distance, speed, calories (no headers, no colors)
pub fn format_tsv(reports: &[WorkoutReport]) -> String {
    reports
        .iter()
        .map(|r| {
            format!(
                "{}\t{:.3}\t{:.3}\t{:.3}\t{:.3}",
                r.training_type, r.duration, r.distance, r.speed, r.calories
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format reports as a pretty-printed JSON array
pub fn format_json(reports: &[WorkoutReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}
