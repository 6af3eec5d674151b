//! Required-column validation for graph import CSV files.
//!
//! [`validate_file`] streams one file and writes a diagnostic line for every
//! empty required cell; [`validate_all`] drives it over a
//! [`ValidatorConfig`](csvcheck_model::ValidatorConfig).

mod error;
mod row;
mod run;
mod validator;

pub use error::{Result, ValidationError};
pub use row::{Cell, Header, LookupError, Row};
pub use run::{FileReport, FileStatus, RunReport, validate_all};
pub use validator::{FileOutcome, validate_file, validate_reader};
