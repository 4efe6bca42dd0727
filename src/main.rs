//! Covertool CLI
//!
//! Prints total statement coverage from a cover profile, excluding
//! generated files, optionally grouped by a path pattern.

use clap::{ArgAction, Parser};
use covertool::commands::{execute_report, ReportArgs};
use covertool::utils::args::normalize_flags;
use covertool::utils::config::DEFAULT_BASE_DIR;
use env_logger::Env;
use std::path::PathBuf;
use std::process::ExitCode;

/// Covertool - statement coverage totals from cover profiles
#[derive(Parser, Debug)]
#[command(name = "covertool")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Coverage profile produced by `go test -coverprofile`
    #[arg(long)]
    profile: PathBuf,

    /// Where to find the files in the coverage profile
    #[arg(long, default_value = DEFAULT_BASE_DIR)]
    base: PathBuf,

    /// Output debug info
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true"
    )]
    trace: bool,

    /// If provided, results will be matched against this regex, and grouped
    /// by the 1st grouped match, e.g. 'foo/([^/]*)/' will group foo/bar/baz as bar
    #[arg(long)]
    grouping: Option<String>,

    /// Write raw per-bucket counts to this file instead of stdout
    #[arg(long, requires = "grouping")]
    out: Option<PathBuf>,

    /// Count generated files instead of skipping them
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true"
    )]
    keep_generated: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse_from(normalize_flags(std::env::args_os()));

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = ReportArgs {
        profile: cli.profile,
        base_dir: cli.base,
        trace: cli.trace,
        grouping: cli.grouping,
        out: cli.out,
        filter_generated: !cli.keep_generated,
    };

    let result = execute_report(args, &mut std::io::stdout().lock());
    if let Err(err) = result {
        println!("{}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(normalize_flags(args.iter().copied()))
    }

    #[test]
    fn test_go_style_flags() {
        let cli = parse(&["covertool", "-profile", "c.out", "-grouping=foo/([^/]*)/"]).unwrap();
        assert_eq!(cli.profile, PathBuf::from("c.out"));
        assert_eq!(cli.base, PathBuf::from("."));
        assert_eq!(cli.grouping.as_deref(), Some("foo/([^/]*)/"));
        assert!(!cli.trace);
        assert!(!cli.keep_generated);
    }

    #[test]
    fn test_bool_flags_accept_explicit_values() {
        let cli = parse(&["covertool", "-profile", "c.out", "-trace=true"]).unwrap();
        assert!(cli.trace);

        let cli = parse(&["covertool", "-profile", "c.out", "-trace=false"]).unwrap();
        assert!(!cli.trace);

        let cli = parse(&["covertool", "-keep-generated=true", "-profile", "c.out"]).unwrap();
        assert!(cli.keep_generated);
    }

    #[test]
    fn test_bare_bool_flags() {
        let cli = parse(&["covertool", "-trace", "-keep-generated", "-profile", "c.out"]).unwrap();
        assert!(cli.trace);
        assert!(cli.keep_generated);
    }

    #[test]
    fn test_out_requires_grouping() {
        assert!(parse(&["covertool", "-profile", "c.out", "-out", "r.txt"]).is_err());
    }

    #[test]
    fn test_profile_required() {
        assert!(parse(&["covertool", "-trace"]).is_err());
    }
}
