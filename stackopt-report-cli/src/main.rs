//! Stack-Optimization Performance Report CLI
//!
//! Command-line front end for the stackopt-report library. It adds:
//! - Input/output path selection (defaults: perf.csv → report.html)
//! - Optional TOML configuration file
//! - HTML, TXT and JSON output
//! - Logging controlled by -v/-q

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod output;

use config::AppConfig;
use output::ReportFormat;
use stackopt_report::{
    ReportConfig, ReportGenerator, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH,
};

/// StackOpt Report - Compare baseline and stack-optimized test runs
#[derive(Parser, Debug)]
#[command(name = "stackopt-report-cli")]
#[command(about = "Render a baseline vs. $STACKOPT performance comparison", long_about = None)]
#[command(version)]
struct Args {
    /// Performance counter CSV to read (default: perf.csv)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Report file to write (default: report.html)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Report format (default: html)
    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Name suffix of the optimized test variant (default: $STACKOPT)
    #[arg(long, value_name = "TOKEN")]
    suffix: Option<String>,

    /// Report title
    #[arg(long, value_name = "TEXT")]
    title: Option<String>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

/// Effective settings after merging flags, config file and defaults
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    input: PathBuf,
    output: PathBuf,
    format: ReportFormat,
    report: ReportConfig,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("StackOpt Report CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using report library v{}", stackopt_report::VERSION);

    let app_config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    let settings = resolve_settings(&args, app_config)?;
    log::debug!("Effective settings: {:?}", settings);

    let generator = ReportGenerator::from_path(&settings.input, settings.report)?;
    let document = generator.generate();

    output::write_report(&document, &settings.output, settings.format)?;

    if !args.quiet {
        println!(
            "✓ {} test(s) compared, {} without an optimized run",
            document.sections.len(),
            document.unpaired.len()
        );
        println!("✓ Report written: {:?}", settings.output);
    }

    Ok(())
}

/// Merge command-line flags over the config file over the defaults
fn resolve_settings(args: &Args, config: AppConfig) -> Result<Settings> {
    let mut report = ReportConfig::new();
    if let Some(suffix) = args.suffix.clone().or(config.pairing.suffix) {
        anyhow::ensure!(!suffix.is_empty(), "--suffix must not be empty");
        report = report.with_suffix(suffix);
    }
    if let Some(title) = args.title.clone().or(config.output.title) {
        report = report.with_title(title);
    }

    Ok(Settings {
        input: args
            .input
            .clone()
            .or(config.input.file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH)),
        output: args
            .output
            .clone()
            .or(config.output.file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
        format: args.format.or(config.output.format).unwrap_or_default(),
        report,
    })
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
