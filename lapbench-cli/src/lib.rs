#![warn(missing_docs)]
//! Lapbench CLI Library
//!
//! Command-line front end for the timing reporter: reads recorded
//! `(case_name, elapsed_ms)` pairs from a file or stdin, aggregates them in a
//! `StatsReporter`, and renders the report in the selected output format.
//!
//! # Example
//!
//! ```text
//! $ my-harness | lapbench --format human
//! Case      Med/Avg/Stddev/90%/Min/Max
//! point_get 1.20/1.31/0.24/1.70/1.05/1.70
//! full_scan 48.75/49.10/2.02/52.30/46.80/52.30
//! ```

mod config;
mod input;

pub use config::{LapConfig, ReportConfig};
pub use input::{Record, parse_records};

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use lapbench_report::{
    CaseReport, OutputFormat, Report, build_report, generate_csv_report, generate_json_report,
    generate_text_report,
};
use lapbench_stats::{StatsReporter, compute_stats};
use regex::Regex;

/// Lapbench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "lapbench")]
#[command(author, version, about = "lapbench - timing statistics reporter")]
pub struct Cli {
    /// Optional subcommand (Report, List); defaults to Report
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Input file of recorded timings ('-' or absent reads stdin)
    pub input: Option<PathBuf>,

    /// Only include cases whose name matches this regex
    #[arg(long)]
    pub filter: Option<String>,

    /// Output format: human, json, csv
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Header token for the name column in human output
    #[arg(long)]
    pub header: Option<String>,

    /// Skip cases whose statistics cannot be computed, instead of aborting
    #[arg(long)]
    pub skip_incomplete: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the statistics report (default)
    Report {
        /// Input file of recorded timings ('-' or absent reads stdin)
        input: Option<PathBuf>,
    },
    /// List distinct case names with their sample counts
    List {
        /// Input file of recorded timings ('-' or absent reads stdin)
        input: Option<PathBuf>,
    },
}

/// Run the lapbench CLI with arguments from the process command line.
/// This is the main entry point for the `lapbench` binary.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the lapbench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("lapbench=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("lapbench=info")
            .init();
    }

    // Discover lapbench.toml configuration (CLI flags override)
    let config = LapConfig::discover().unwrap_or_default();

    let format: OutputFormat = cli
        .format
        .as_deref()
        .unwrap_or(&config.report.format)
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    let header = cli
        .header
        .clone()
        .unwrap_or_else(|| config.report.header.clone());
    let skip_incomplete = cli.skip_incomplete || config.report.skip_incomplete;

    match cli.command {
        Some(Commands::List { ref input }) => {
            let reporter = load_reporter(input.as_ref().or(cli.input.as_ref()), &cli)?;
            print!("{}", format_case_listing(&reporter, &header));
            Ok(())
        }
        Some(Commands::Report { ref input }) => {
            let reporter = load_reporter(input.as_ref().or(cli.input.as_ref()), &cli)?;
            render_report(&cli, &reporter, format, &header, skip_incomplete)
        }
        None => {
            let reporter = load_reporter(cli.input.as_ref(), &cli)?;
            render_report(&cli, &reporter, format, &header, skip_incomplete)
        }
    }
}

/// Read the raw timing stream from a file, or stdin for `-`/no path
fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Read, parse, filter, and accumulate the timing stream into a reporter
fn load_reporter(path: Option<&PathBuf>, cli: &Cli) -> anyhow::Result<StatsReporter> {
    let filter = cli
        .filter
        .as_deref()
        .map(Regex::new)
        .transpose()
        .context("invalid --filter regex")?;

    let text = read_input(path)?;
    let records = parse_records(&text)?;
    build_reporter(&records, filter.as_ref())
}

/// Accumulate parsed records into a reporter, applying the case-name filter
fn build_reporter(records: &[Record], filter: Option<&Regex>) -> anyhow::Result<StatsReporter> {
    let mut reporter = StatsReporter::new();
    for (case, elapsed_ms) in records {
        if let Some(re) = filter {
            if !re.is_match(case) {
                continue;
            }
        }
        reporter
            .record(case, *elapsed_ms)
            .with_context(|| format!("failed to record sample for '{}'", case))?;
    }
    Ok(reporter)
}

/// Format the `list` subcommand output: one line per case, insertion order
fn format_case_listing(reporter: &StatsReporter, header: &str) -> String {
    let width = reporter.column_width(header);

    let mut output = String::new();
    output.push_str(&format!("{:<width$} Samples\n", header, width = width));
    for set in reporter.cases() {
        output.push_str(&format!(
            "{:<width$} {}\n",
            set.name(),
            set.len(),
            width = width
        ));
    }
    output.push_str(&format!("{} case(s).\n", reporter.len()));
    output
}

/// Assemble the report document, optionally skipping incomplete cases
///
/// With `skip_incomplete`, a case whose statistics cannot be computed is
/// warned about on stderr and dropped; a report with every case dropped is
/// still an error.
fn assemble_report(reporter: &StatsReporter, skip_incomplete: bool) -> anyhow::Result<Report> {
    if reporter.is_empty() {
        anyhow::bail!("no cases recorded (empty input, or the filter matched nothing)");
    }

    if !skip_incomplete {
        return Ok(build_report(reporter)?);
    }

    let mut cases = Vec::with_capacity(reporter.len());
    for set in reporter.cases() {
        match compute_stats(set) {
            Ok(stats) => cases.push(CaseReport::from_stats(set.name(), &stats)),
            Err(err) => eprintln!("Warning: skipping case '{}': {}", set.name(), err),
        }
    }
    if cases.is_empty() {
        anyhow::bail!("every case was skipped; nothing to report");
    }
    Ok(Report::new(cases))
}

fn render_report(
    cli: &Cli,
    reporter: &StatsReporter,
    format: OutputFormat,
    header: &str,
    skip_incomplete: bool,
) -> anyhow::Result<()> {
    let report = assemble_report(reporter, skip_incomplete)?;

    let output = match format {
        OutputFormat::Human => generate_text_report(&report, header),
        OutputFormat::Json => generate_json_report(&report)?,
        OutputFormat::Csv => generate_csv_report(&report),
    };

    if let Some(ref path) = cli.output {
        let mut file = std::fs::File::create(path)?;
        file.write_all(output.as_bytes())?;
        println!("Report written to: {}", path.display());
    } else {
        print!("{}", output);
    }

    Ok(())
}
