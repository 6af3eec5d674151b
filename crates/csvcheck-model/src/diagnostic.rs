//! Output lines produced during validation.
//!
//! Both types borrow their data and are rendered through [`std::fmt::Display`]
//! as soon as they are created; nothing here is meant to be collected.

use std::fmt;

/// A required column left empty on one data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic<'a> {
    pub file: &'a str,
    /// 1-based line number; the first data row is line 2.
    pub line: u64,
    pub column: &'a str,
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid row in {} at line {}: Missing value in column '{}'",
            self.file, self.line, self.column
        )
    }
}

/// Line printed before a file's rows are scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Announcement<'a>(pub &'a str);

impl fmt::Display for Announcement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validating {}...", self.0)
    }
}
