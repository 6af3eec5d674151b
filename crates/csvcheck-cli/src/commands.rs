use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use csvcheck_model::{FailurePolicy, ValidatorConfig};
use csvcheck_validate::{RunReport, validate_all};
use tracing::{info, info_span};

/// Every file validated and no required value missing.
pub const EXIT_CLEAN: i32 = 0;
/// At least one required value missing.
pub const EXIT_VIOLATIONS: i32 = 1;
/// A file, the rule file or the output could not be processed.
pub const EXIT_FATAL: i32 = 2;

/// Build the run configuration from command-line inputs.
///
/// Without a rule file the built-in file list and rules are used.
pub fn load_config(
    dir: Option<&Path>,
    rules: Option<&Path>,
    keep_going: bool,
) -> Result<ValidatorConfig> {
    let config = match rules {
        Some(path) => ValidatorConfig::from_rules_file(path)
            .with_context(|| format!("load rules: {}", path.display()))?,
        None => ValidatorConfig::default(),
    };
    let config = match dir {
        Some(dir) => config.with_base_dir(dir),
        None => config,
    };
    let policy = if keep_going {
        FailurePolicy::Continue
    } else {
        FailurePolicy::Abort
    };
    Ok(config.with_failure_policy(policy))
}

/// Validate every configured file, writing output lines to `out`.
pub fn run_check<W: Write>(config: &ValidatorConfig, out: &mut W) -> Result<RunReport> {
    let span = info_span!("check", base_dir = %config.base_dir.display());
    let _guard = span.enter();
    let start = Instant::now();
    let report = validate_all(config, out)?;
    out.flush().context("flush output")?;
    info!(
        files = report.files.len(),
        rows = report.total_rows(),
        violations = report.total_violations(),
        failed = report.failed_count(),
        duration_ms = start.elapsed().as_millis(),
        "check complete"
    );
    Ok(report)
}

pub fn exit_code(report: &RunReport) -> i32 {
    if report.has_failures() {
        EXIT_FATAL
    } else if report.has_violations() {
        EXIT_VIOLATIONS
    } else {
        EXIT_CLEAN
    }
}

/// Exit code for a check that either finished or stopped at a fatal error.
pub fn check_exit_code(result: &Result<RunReport>) -> i32 {
    match result {
        Ok(report) => exit_code(report),
        Err(_) => EXIT_FATAL,
    }
}
