// LogTriage - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Reading the log file and running the triage pipeline
// 4. Rendering the report to stdout

use clap::{Parser, ValueEnum};
use logtriage::app::input;
use logtriage::core::report;
use logtriage::core::summary::{summarize_failure, TriageConfig};
use logtriage::util::{constants, logging};
use std::path::PathBuf;

/// Output format for the summary report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable formatted text.
    Human,
    /// JSON (machine-readable).
    Json,
}

/// LogTriage - CI/CD failure log triage.
///
/// Point LogTriage at a CI log file to extract the error-like lines and
/// guess a probable root-cause category for the failure.
#[derive(Parser, Debug)]
#[command(name = "LogTriage", version, about)]
struct Cli {
    /// Path to the CI log file.
    log: PathBuf,

    /// Maximum number of error lines to keep (most recent kept).
    #[arg(
        short = 'n',
        long = "max-lines",
        default_value_t = constants::DEFAULT_MAX_ERROR_LINES,
        value_parser = clap::value_parser!(u64)
            .range(constants::MIN_MAX_ERROR_LINES..=constants::ABSOLUTE_MAX_ERROR_LINES)
    )]
    max_lines: u64,

    /// Report output format.
    #[arg(short = 'o', long = "format", value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    logging::init(cli.debug);

    tracing::info!(
        version = constants::APP_VERSION,
        log = %cli.log.display(),
        max_lines = cli.max_lines,
        "LogTriage starting"
    );

    let log_text = match input::read_log_text(&cli.log) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read log file");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let config = TriageConfig {
        max_error_lines: cli.max_lines as usize,
    };
    let summary = summarize_failure(&log_text, &config);

    // A log with no classifiable error lines is still a successful run;
    // only an unreadable input path is a failure.
    match cli.format {
        OutputFormat::Human => print!("{}", report::render_human(&summary)),
        OutputFormat::Json => {
            let stdout = std::io::stdout();
            if let Err(e) = report::render_json(&summary, stdout.lock()) {
                tracing::error!(error = %e, "Failed to write JSON report");
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
            println!();
        }
    }
}
