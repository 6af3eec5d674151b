//! Checked column lookup for one CSV record.

use csv::StringRecord;
use thiserror::Error;

/// Column names declared by a file's first line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    names: StringRecord,
}

impl Header {
    pub fn new(names: StringRecord) -> Self {
        Self { names }
    }

    /// Index of `column`. When a name is declared twice the last occurrence
    /// wins.
    pub fn position(&self, column: &str) -> Option<usize> {
        self.names
            .iter()
            .enumerate()
            .filter(|(_, name)| *name == column)
            .map(|(idx, _)| idx)
            .last()
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }
}

impl<T: AsRef<str>> From<&[T]> for Header {
    fn from(names: &[T]) -> Self {
        Self::new(StringRecord::from(names))
    }
}

/// Value of one cell, as seen by the presence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell<'a> {
    Value(&'a str),
    /// Declared and present, but the empty string.
    Empty,
}

impl Cell<'_> {
    /// Only the empty string is missing; whitespace counts as a value.
    pub fn is_missing(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("column is not declared in the header")]
    NotInHeader,
    #[error("row has only {fields} fields")]
    Ragged { fields: usize },
}

/// A data record paired with the header it is read against.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    header: &'a Header,
    record: &'a StringRecord,
}

impl<'a> Row<'a> {
    pub fn new(header: &'a Header, record: &'a StringRecord) -> Self {
        Self { header, record }
    }

    /// Look up `column` by name.
    ///
    /// # Errors
    ///
    /// [`LookupError::NotInHeader`] if the header does not declare the
    /// column, [`LookupError::Ragged`] if the record is too short to hold it.
    pub fn get(&self, column: &str) -> Result<Cell<'a>, LookupError> {
        let idx = self
            .header
            .position(column)
            .ok_or(LookupError::NotInHeader)?;
        let record: &'a StringRecord = self.record;
        match record.get(idx) {
            Some("") => Ok(Cell::Empty),
            Some(value) => Ok(Cell::Value(value)),
            None => Err(LookupError::Ragged {
                fields: record.len(),
            }),
        }
    }

    pub fn field_count(&self) -> usize {
        self.record.len()
    }
}
