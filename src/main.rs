use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error};

use workout_calc::driver::{self, ErrorPolicy, Package};
use workout_calc::training::{Training, TrainingKind, WorkoutReport};

const EXIT_SUCCESS: i32 = 0;
const EXIT_WORKOUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report every configured package (default if no subcommand)
    Report,
    /// Report a single package given on the command line
    Calc {
        /// Workout code (RUN, WLK, SWM)
        code: String,
        /// Positional values, see `codes` for the order
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// List workout codes and the values each one expects
    Codes,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
enum OutputFormat {
    #[default]
    Text,
    Tsv,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "workout-calc")]
#[command(about = "Workout distance, speed and calorie calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging and detailed output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/workout-calc/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Skip failing packages instead of stopping at the first one
    #[arg(short, long, global = true)]
    keep_going: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    workout_calc::logging::init(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Report);
    let start_time = Instant::now();

    // Every training kind must be reachable by exactly one code
    if let Err(errors) = workout_calc::dispatch::validate_dispatch_table() {
        eprintln!("Dispatch table errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let (packages, policy) = match command {
        Commands::Codes => {
            for kind in TrainingKind::ALL {
                println!(
                    "{}  {:<14} [{}]",
                    kind.code(),
                    kind.label(),
                    kind.field_names().join(", ")
                );
            }
            std::process::exit(EXIT_SUCCESS);
        }
        Commands::Calc { code, values } => (vec![Package { code, data: values }], ErrorPolicy::Abort),
        Commands::Report => {
            let config_path = cli.config.map(PathBuf::from);
            let config = match workout_calc::config::load_config(config_path) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Config error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };

            // Under abort, a bad package would stop the batch halfway; reject up front
            if config.on_error == ErrorPolicy::Abort && !cli.keep_going {
                if let Err(errors) = workout_calc::config::validate_config(&config) {
                    eprintln!("Config errors:");
                    for error in errors {
                        eprintln!("  - {}", error);
                    }
                    std::process::exit(EXIT_CONFIG);
                }
            }

            (config.packages, config.on_error)
        }
    };

    let policy = if cli.keep_going { ErrorPolicy::Skip } else { policy };
    debug!(packages = packages.len(), ?policy, "starting batch");

    let use_colors = workout_calc::output::should_use_colors();
    let mut reports: Vec<WorkoutReport> = Vec::new();

    let result = driver::run_batch(&packages, policy, |training: &Training, report: &WorkoutReport| {
        match cli.format {
            OutputFormat::Text if cli.verbose => {
                println!(
                    "{}",
                    workout_calc::output::format_detail(training, report, use_colors)
                );
                println!();
            }
            OutputFormat::Text if use_colors => {
                println!("{}", workout_calc::output::format_message_colored(report));
            }
            OutputFormat::Text => {
                println!("{}", workout_calc::output::format_message(report));
            }
            // Collected and printed once the batch is done
            OutputFormat::Tsv | OutputFormat::Json => reports.push(report.clone()),
        }
    });

    match cli.format {
        OutputFormat::Text => {}
        OutputFormat::Tsv => {
            if !reports.is_empty() {
                println!("{}", workout_calc::output::format_tsv(&reports));
            }
        }
        OutputFormat::Json => match workout_calc::output::format_json(&reports) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize reports: {}", e);
                std::process::exit(EXIT_WORKOUT);
            }
        },
    }

    match result {
        Ok(summary) => {
            debug!(
                processed = summary.processed,
                failed = summary.failed,
                elapsed = ?start_time.elapsed(),
                "batch finished"
            );
            if summary.failed > 0 {
                eprintln!(
                    "{} of {} packages failed",
                    summary.failed,
                    summary.processed + summary.failed
                );
                std::process::exit(EXIT_WORKOUT);
            }
        }
        Err(e) => {
            error!(code = e.code(), "batch aborted");
            eprintln!("Workout error: {}", e);
            std::process::exit(EXIT_WORKOUT);
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
