//! Coverage report command.
//!
//! The report command:
//! 1. Validates arguments and compiles the grouping pattern
//! 2. Parses the cover profile
//! 3. Aggregates blocks into buckets, skipping generated files
//! 4. Writes bucket lines to the console or the raw report file
//! 5. Prints the total line

use crate::aggregator::{aggregate, AggregateOptions, Grouping};
use crate::output::{validate_report_path, write_console, write_report};
use crate::parser::parse_profiles;
use crate::utils::config::DEFAULT_BASE_DIR;
use crate::utils::error::ConfigError;
use anyhow::Result;
use log::{debug, info};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Cover profile produced by `go test -coverprofile`
    pub profile: PathBuf,

    /// Where to find the files named in the profile
    pub base_dir: PathBuf,

    /// Print per-file progress to stderr
    pub trace: bool,

    /// Pattern whose first capture group names the bucket
    pub grouping: Option<String>,

    /// Raw report path, replaces console bucket lines
    pub out: Option<PathBuf>,

    /// Skip files carrying the generated marker
    pub filter_generated: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            profile: PathBuf::new(),
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            trace: false,
            grouping: None,
            out: None,
            filter_generated: true,
        }
    }
}

/// Validate report arguments and compile the grouping pattern
///
/// **Public** - runs before any profile parsing
///
/// # Errors
/// * `ConfigError::MissingProfile` - no profile path
/// * `ConfigError::OutWithoutGrouping` - `out` set without `grouping`
/// * `ConfigError::InvalidPattern` - grouping pattern does not compile
pub fn validate_args(args: &ReportArgs) -> Result<Option<Grouping>, ConfigError> {
    if args.profile.as_os_str().is_empty() {
        return Err(ConfigError::MissingProfile);
    }

    if args.out.is_some() && args.grouping.is_none() {
        return Err(ConfigError::OutWithoutGrouping);
    }

    Grouping::from_option(args.grouping.as_deref())
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// Console output goes to `stdout`; trace events go to stderr when
/// `args.trace` is set.
///
/// # Errors
/// * Invalid configuration
/// * Profile parse errors
/// * Generated-file scan errors
/// * Report file errors, including an existing report file
pub fn execute_report(args: ReportArgs, stdout: &mut impl Write) -> Result<()> {
    let trace = |event: &str| {
        if args.trace {
            eprintln!("{}", event);
        }
    };
    run_report(&args, stdout, trace)
}

/// Execute the report command with a caller-supplied trace sink
///
/// **Public** - lets tests capture trace events
pub fn run_report<F>(args: &ReportArgs, stdout: &mut impl Write, trace: F) -> Result<()>
where
    F: FnMut(&str),
{
    let start_time = Instant::now();

    let grouping = validate_args(args)?;
    if let Some(out) = &args.out {
        validate_report_path(out)?;
    }

    info!("Reading profile: {}", args.profile.display());
    let profiles = parse_profiles(&args.profile)?;

    let options = AggregateOptions {
        base_dir: args.base_dir.clone(),
        filter_generated: args.filter_generated,
        grouping,
    };
    if let Some(grouping) = &options.grouping {
        debug!("Grouping by pattern: {}", grouping.as_str());
    }

    let coverage = aggregate(&profiles, &options, trace)?;

    match &args.out {
        Some(out) => {
            write_report(&coverage.buckets, out)?;
            info!("✓ Bucket report written to: {}", out.display());
            write_console(stdout, &coverage, false)?;
        }
        None => write_console(stdout, &coverage, true)?,
    }

    debug!(
        "Report completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
