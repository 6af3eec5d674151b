//! Per-file required-column check.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use csvcheck_model::Diagnostic;
use tracing::{debug, trace};

use crate::error::{Result, ValidationError};
use crate::row::{Header, LookupError, Row};

/// Line number of the first data row; line 1 is the header.
const FIRST_DATA_LINE: u64 = 2;

/// Counts for one validated file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileOutcome {
    /// Data rows scanned (header excluded).
    pub rows: u64,
    /// Missing-value diagnostics written.
    pub violations: u64,
}

impl FileOutcome {
    pub fn is_clean(&self) -> bool {
        self.violations == 0
    }
}

/// Validate the CSV file at `path`, reported under `file_name`.
///
/// # Errors
///
/// [`ValidationError::FileOpen`] if the file cannot be opened, plus every
/// error [`validate_reader`] can return.
pub fn validate_file<W: Write>(
    path: &Path,
    file_name: &str,
    required_columns: &[String],
    out: &mut W,
) -> Result<FileOutcome> {
    let file = File::open(path).map_err(|source| ValidationError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(file = file_name, path = %path.display(), "opened input file");
    validate_reader(file, file_name, required_columns, out)
}

/// Stream CSV rows from `input` and write one diagnostic line to `out` for
/// each empty required cell.
///
/// Diagnostics follow row order, then `required_columns` order within a row.
/// Blank lines are skipped by the reader and do not consume a line number.
///
/// # Errors
///
/// Stops at the first record that cannot be read or checked: invalid UTF-8,
/// malformed CSV, a required column missing from the header, or a row too
/// short to hold a required column.
pub fn validate_reader<R, W>(
    input: R,
    file_name: &str,
    required_columns: &[String],
    out: &mut W,
) -> Result<FileOutcome>
where
    R: io::Read,
    W: Write,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);
    let header = Header::new(
        reader
            .headers()
            .map_err(|error| ValidationError::from_csv(file_name, 1, error))?
            .clone(),
    );
    debug!(
        file = file_name,
        columns = header.len(),
        required = required_columns.len(),
        "read header"
    );

    let mut outcome = FileOutcome::default();
    let mut record = StringRecord::new();
    let mut line = FIRST_DATA_LINE;
    loop {
        let has_record = reader
            .read_record(&mut record)
            .map_err(|error| ValidationError::from_csv(file_name, line, error))?;
        if !has_record {
            break;
        }
        let row = Row::new(&header, &record);
        trace!(file = file_name, line, fields = row.field_count(), "checking row");
        for column in required_columns {
            let cell = row
                .get(column)
                .map_err(|error| lookup_error(file_name, line, column, error))?;
            if cell.is_missing() {
                let diagnostic = Diagnostic {
                    file: file_name,
                    line,
                    column,
                };
                writeln!(out, "{diagnostic}")?;
                outcome.violations += 1;
            }
        }
        outcome.rows += 1;
        line += 1;
    }
    Ok(outcome)
}

fn lookup_error(file: &str, line: u64, column: &str, error: LookupError) -> ValidationError {
    match error {
        LookupError::NotInHeader => ValidationError::MissingColumn {
            file: file.to_string(),
            line,
            column: column.to_string(),
        },
        LookupError::Ragged { fields } => ValidationError::RaggedRow {
            file: file.to_string(),
            line,
            column: column.to_string(),
            fields,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    fn run(input: &str, required: &[&str]) -> (Result<FileOutcome>, String) {
        let mut out = Vec::new();
        let result = validate_reader(input.as_bytes(), "test.csv", &columns(required), &mut out);
        (result, String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn clean_file_writes_nothing() {
        let (result, output) = run("id,name\n1,a\n2,b\n", &["id", "name"]);
        assert_eq!(
            result.expect("validate"),
            FileOutcome {
                rows: 2,
                violations: 0
            }
        );
        assert!(output.is_empty());
    }

    #[test]
    fn blank_lines_do_not_advance_line_numbers() {
        let (result, output) = run("id\n1\n\n\"\"\n\n", &["id"]);
        assert_eq!(result.expect("validate").rows, 2);
        assert_eq!(
            output,
            "Invalid row in test.csv at line 3: Missing value in column 'id'\n"
        );
    }

    #[test]
    fn quoted_empty_string_is_missing() {
        let (result, output) = run("id,name\n1,\"\"\n", &["name"]);
        assert_eq!(result.expect("validate").violations, 1);
        assert!(output.contains("line 2"));
    }

    #[test]
    fn quoted_comma_stays_in_one_field() {
        let (result, output) = run("id,name\n\"1,2\",x\n", &["id", "name"]);
        assert!(result.expect("validate").is_clean());
        assert!(output.is_empty());
    }

    #[test]
    fn empty_input_has_no_rows() {
        let (result, output) = run("", &["id"]);
        assert_eq!(result.expect("validate"), FileOutcome::default());
        assert!(output.is_empty());
    }

    #[test]
    fn leading_bom_is_stripped_from_first_header_name() {
        let (result, output) = run("\u{feff}name:ID(Tag)\nalpha\n\"\"\n", &["name:ID(Tag)"]);
        assert_eq!(
            result.expect("validate"),
            FileOutcome {
                rows: 2,
                violations: 1
            }
        );
        assert_eq!(
            output,
            "Invalid row in test.csv at line 3: Missing value in column 'name:ID(Tag)'\n"
        );
    }
}
