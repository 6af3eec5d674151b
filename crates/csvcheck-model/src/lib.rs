//! Data model for csvcheck: the rule table, validator configuration and
//! the diagnostic line emitted for every missing value.

pub mod config;
pub mod diagnostic;
pub mod error;
pub mod rules;

pub use config::{FailurePolicy, RuleFile, ValidatorConfig};
pub use diagnostic::{Announcement, Diagnostic};
pub use error::{ConfigError, Result};
pub use rules::{DEFAULT_FILES, RuleTable, default_rule_table};
