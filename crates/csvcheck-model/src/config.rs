//! Validator configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::rules::{DEFAULT_FILES, RuleTable, default_rule_table};

/// What the driving loop does when a file cannot be validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first fatal error; remaining files are not checked.
    #[default]
    Abort,
    /// Record the error against the file and move on to the next one.
    Continue,
}

/// Everything a validation run needs, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Directory the configured file names are resolved against.
    pub base_dir: PathBuf,
    /// File names in validation order. Names without a rule are skipped.
    pub files: Vec<String>,
    pub rules: RuleTable,
    pub failure_policy: FailurePolicy,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_FILES.iter().map(|file| (*file).to_string()).collect(),
            default_rule_table(),
        )
    }
}

impl ValidatorConfig {
    pub fn new(files: Vec<String>, rules: RuleTable) -> Self {
        Self {
            base_dir: PathBuf::from("."),
            files,
            rules,
            failure_policy: FailurePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Load the file list and rules from a JSON rule file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not a valid rule file.
    pub fn from_rules_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_rules_json(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a rule file body.
    pub fn from_rules_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let rule_file: RuleFile = serde_json::from_str(json)?;
        Ok(rule_file.into_config())
    }

    /// Path of a configured file on disk.
    pub fn resolve(&self, file: &str) -> PathBuf {
        self.base_dir.join(file)
    }

    /// Files that will actually be validated, with their required columns,
    /// in configured order.
    pub fn planned_files(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.files.iter().filter_map(|file| {
            self.rules
                .required_columns(file)
                .map(|columns| (file.as_str(), columns))
        })
    }
}

/// On-disk shape of a rule file.
///
/// ```json
/// { "files": ["nodes_tags.csv"], "rules": { "nodes_tags.csv": ["name:ID(Tag)"] } }
/// ```
///
/// When `files` is omitted every file with a rule is validated, in
/// lexicographic order.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleFile {
    #[serde(default)]
    pub files: Option<Vec<String>>,
    pub rules: RuleTable,
}

impl RuleFile {
    pub fn into_config(self) -> ValidatorConfig {
        let files = self
            .files
            .unwrap_or_else(|| self.rules.file_names().map(str::to_string).collect());
        ValidatorConfig::new(files, self.rules)
    }
}
