//! Driving loop over a [`ValidatorConfig`].

use std::io::Write;

use csvcheck_model::{Announcement, FailurePolicy, ValidatorConfig};
use tracing::{info, info_span, warn};

use crate::error::{Result, ValidationError};
use crate::validator::{FileOutcome, validate_file};

/// How one configured file fared.
#[derive(Debug)]
pub enum FileStatus {
    Checked(FileOutcome),
    /// Validation stopped with a fatal error. Only recorded under
    /// [`FailurePolicy::Continue`].
    Failed(ValidationError),
}

#[derive(Debug)]
pub struct FileReport {
    pub file: String,
    pub status: FileStatus,
}

impl FileReport {
    pub fn outcome(&self) -> Option<FileOutcome> {
        match &self.status {
            FileStatus::Checked(outcome) => Some(*outcome),
            FileStatus::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match &self.status {
            FileStatus::Checked(_) => None,
            FileStatus::Failed(error) => Some(error),
        }
    }
}

/// Per-file results of a run, in validation order.
///
/// Holds counts only; diagnostics are written as they are found.
#[derive(Debug, Default)]
pub struct RunReport {
    pub files: Vec<FileReport>,
}

impl RunReport {
    pub fn total_rows(&self) -> u64 {
        self.files
            .iter()
            .filter_map(FileReport::outcome)
            .map(|outcome| outcome.rows)
            .sum()
    }

    pub fn total_violations(&self) -> u64 {
        self.files
            .iter()
            .filter_map(FileReport::outcome)
            .map(|outcome| outcome.violations)
            .sum()
    }

    pub fn failed_count(&self) -> usize {
        self.files
            .iter()
            .filter(|report| report.error().is_some())
            .count()
    }

    pub fn has_violations(&self) -> bool {
        self.total_violations() > 0
    }

    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }
}

/// Validate every configured file that has a rule, in configured order.
///
/// Writes `Validating <file>...` before each file, then its diagnostics.
/// Files without a rule produce no output.
///
/// # Errors
///
/// Under [`FailurePolicy::Abort`] the first fatal error is returned and the
/// remaining files are not validated. Under [`FailurePolicy::Continue`] only
/// a failure to write to `out` is returned; other errors are recorded in the
/// report.
pub fn validate_all<W: Write>(config: &ValidatorConfig, out: &mut W) -> Result<RunReport> {
    let mut report = RunReport::default();
    for (file, required_columns) in config.planned_files() {
        let span = info_span!("file", file);
        let _guard = span.enter();

        writeln!(out, "{}", Announcement(file))?;
        let path = config.resolve(file);
        let status = match validate_file(&path, file, required_columns, out) {
            Ok(outcome) => {
                info!(
                    rows = outcome.rows,
                    violations = outcome.violations,
                    "file validated"
                );
                FileStatus::Checked(outcome)
            }
            Err(error @ ValidationError::Output(_)) => return Err(error),
            Err(error) => match config.failure_policy {
                FailurePolicy::Abort => return Err(error),
                FailurePolicy::Continue => {
                    warn!(%error, "file failed, continuing with next file");
                    FileStatus::Failed(error)
                }
            },
        };
        report.files.push(FileReport {
            file: file.to_string(),
            status,
        });
    }
    Ok(report)
}
