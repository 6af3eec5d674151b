//! Required-column rules keyed by file name.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Input files checked when no rule file is supplied, in validation order.
pub const DEFAULT_FILES: [&str; 5] = [
    "nodes_directories.csv",
    "nodes_tags.csv",
    "nodes_files.csv",
    "rels_file_directory.csv",
    "rels_file_tags.csv",
];

/// Mapping from file name to the ordered list of columns that must hold a
/// value in every data row.
///
/// Column order is significant: diagnostics for one row are emitted in the
/// order the columns appear here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RuleTable {
    rules: BTreeMap<String, Vec<String>>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the required columns for a file, returning the previous list.
    pub fn insert<I>(&mut self, file: impl Into<String>, columns: I) -> Option<Vec<String>>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.rules
            .insert(file.into(), columns.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn with_rule<I>(mut self, file: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.insert(file, columns);
        self
    }

    /// Required columns for `file`, or `None` when the file has no rule.
    pub fn required_columns(&self, file: &str) -> Option<&[String]> {
        self.rules.get(file).map(Vec::as_slice)
    }

    pub fn contains(&self, file: &str) -> bool {
        self.rules.contains_key(file)
    }

    /// File names with a rule, in lexicographic order.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

}

/// Rules for the node and relationship files of a graph bulk import.
pub fn default_rule_table() -> RuleTable {
    RuleTable::new()
        .with_rule("nodes_directories.csv", ["path:ID(Directory)"])
        .with_rule("nodes_tags.csv", ["name:ID(Tag)"])
        .with_rule(
            "nodes_files.csv",
            [
                "file_path:ID(File)",
                "content",
                "last_updated",
                "author",
                "version",
            ],
        )
        .with_rule(
            "rels_file_directory.csv",
            [":START_ID(File)", ":END_ID(Directory)"],
        )
        .with_rule("rels_file_tags.csv", [":START_ID(File)", ":END_ID(Tag)"])
}
