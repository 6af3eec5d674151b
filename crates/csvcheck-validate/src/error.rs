//! Fatal validation errors.
//!
//! An empty required cell is not an error; it is reported as a diagnostic
//! and validation continues. Everything here stops validation of the file.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// Input file missing or unreadable.
    #[error("Failed to open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input bytes are not valid UTF-8.
    #[error("Invalid UTF-8 in {file} at line {line}")]
    Encoding { file: String, line: u64 },

    /// CSV syntax or read failure other than encoding.
    #[error("Failed to read CSV {file} at line {line}: {source}")]
    Csv {
        file: String,
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// Required column is not declared in the header.
    #[error("Column '{column}' required at line {line} of {file} is not in the header")]
    MissingColumn {
        file: String,
        line: u64,
        column: String,
    },

    /// Row has fewer fields than needed to reach a required column.
    #[error(
        "Row at line {line} of {file} has {fields} fields, too few for column '{column}'"
    )]
    RaggedRow {
        file: String,
        line: u64,
        column: String,
        fields: usize,
    },

    /// Diagnostic output could not be written.
    #[error("Failed to write diagnostics: {0}")]
    Output(#[from] io::Error),
}

impl ValidationError {
    /// Classify a reader error raised while reading `line` of `file`.
    pub(crate) fn from_csv(file: &str, line: u64, source: csv::Error) -> Self {
        if matches!(source.kind(), csv::ErrorKind::Utf8 { .. }) {
            Self::Encoding {
                file: file.to_string(),
                line,
            }
        } else {
            Self::Csv {
                file: file.to_string(),
                line,
                source,
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
