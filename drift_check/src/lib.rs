//! Command line front end for `linematch`: resolves match options from flags, an options file
//! and the environment, runs one verification and maps the verdict to an exit code.

pub mod cli;
pub mod exit_codes;
pub mod settings;

use anyhow::{Context, Result};
use cli::{Args, OutputFormat};
use colored::Colorize;
use common::config::DriftConfig;
use linematch::{MatchSummary, ReportResponse, VerificationJob, VerifyError};
use std::io::Write;
use tracing::{debug, info, warn};

/// Runs one check and writes its verdict.
///
/// Returns [`exit_codes::SUCCESS`] or [`exit_codes::DRIFT`]. Anything that prevents the check
/// from running (unreadable files, bad options) is an `Err`.
pub fn run<O: Write, E: Write>(
    args: &Args,
    config: &DriftConfig,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<i32> {
    let options = settings::resolve(args, config).context("invalid match options")?;
    debug!(?options, "resolved match options");
    info!(
        project = %config.project_name,
        expected = %args.expected.display(),
        actual = %args.actual.display(),
        "checking documentation"
    );

    let outcome = VerificationJob::new(&args.expected, &args.actual)
        .with_options(options)
        .run();

    match outcome {
        Ok(summary) => {
            write_success(args, summary, stdout)?;
            Ok(exit_codes::SUCCESS)
        }
        Err(VerifyError::Drift(report)) => {
            warn!(
                reason = %report.reason,
                expected_line = report.expected_line_number,
                actual_line = report.actual_line_number,
                "documentation drift detected"
            );
            match args.format {
                OutputFormat::Text => {
                    writeln!(stderr, "{}", "DOCUMENTATION DRIFT".red().bold())?;
                    write!(stderr, "{}", report)?;
                    writeln!(
                        stderr,
                        "{} regenerate {} or update the reference",
                        "hint:".yellow().bold(),
                        args.expected.display()
                    )?;
                }
                OutputFormat::Json => {
                    let response = ReportResponse::from(*report);
                    writeln!(stdout, "{}", serde_json::to_string_pretty(&response)?)?;
                }
            }
            Ok(exit_codes::DRIFT)
        }
        Err(err) => Err(anyhow::Error::new(err))
            .with_context(|| format!("could not check {}", args.actual.display())),
    }
}

fn write_success<O: Write>(args: &Args, summary: MatchSummary, stdout: &mut O) -> Result<()> {
    match args.format {
        OutputFormat::Text if args.quiet => {}
        OutputFormat::Text => {
            writeln!(
                stdout,
                "{} {} matches {} ({} literal, {} pattern, {} skipped)",
                "OK".green().bold(),
                args.actual.display(),
                args.expected.display(),
                summary.literal_lines,
                summary.pattern_lines,
                summary.skipped_lines
            )?;
        }
        OutputFormat::Json => {
            let response = ReportResponse::from(summary);
            writeln!(stdout, "{}", serde_json::to_string_pretty(&response)?)?;
        }
    }
    Ok(())
}
