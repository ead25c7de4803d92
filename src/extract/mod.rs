//! Directory-table extraction.
//!
//! The pipeline is classify-then-parse: [`DirectoryExtractor::is_directory_table`]
//! decides whether a table is a personnel roster, and
//! [`DirectoryExtractor::contacts`] parses the qualifying rows into
//! [`ContactRecord`]s. [`DocumentScanner`] runs the pipeline over a whole
//! document, tracking section context.

mod analysis;
mod detector;
mod name_filter;
mod options;
mod patterns;
mod row_parser;
mod scanner;

pub use analysis::{TableAnalysis, TeamHint};
pub use options::{
    ExtractOptions, DEFAULT_EMAIL_PATTERN, DEFAULT_HEADER_KEYWORDS, DEFAULT_NAME_DENYLIST,
    DEFAULT_PHONE_PATTERNS,
};
pub use scanner::{DirectoryTable, DocumentScanner};

use crate::error::Result;
use crate::model::{ContactRecord, TableBlock};

use name_filter::NameFilter;
use patterns::PatternSet;

/// Classifies tables as personnel directories and parses their rows.
///
/// Construction compiles the configured patterns once; extraction is
/// then a pure function of its input, safe to share across threads.
#[derive(Debug)]
pub struct DirectoryExtractor {
    options: ExtractOptions,
    name_filter: NameFilter,
    patterns: PatternSet,
}

impl DirectoryExtractor {
    /// Create an extractor with default options.
    pub fn new() -> Self {
        Self::with_options(ExtractOptions::default())
            .expect("default extraction patterns compile")
    }

    /// Create an extractor with custom options.
    ///
    /// Fails only when a configured pattern does not compile.
    pub fn with_options(options: ExtractOptions) -> Result<Self> {
        let name_filter = NameFilter::compile(&options)?;
        let patterns = PatternSet::compile(&options)?;
        Ok(Self {
            options,
            name_filter,
            patterns,
        })
    }

    /// Get the options this extractor was built with.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Check whether text looks like a person's name.
    ///
    /// A deterministic shape heuristic, not a name detector; see the
    /// crate documentation for its stated limitations.
    pub fn is_person_name(&self, text: &str) -> bool {
        self.name_filter.is_person_name(text)
    }

    /// Check whether a table is a personnel directory.
    ///
    /// `section_context` is the nearest preceding heading text, or empty
    /// when unknown. Tables with fewer than two rows never qualify.
    pub fn is_directory_table(&self, table: &TableBlock, section_context: &str) -> bool {
        detector::is_directory_table(table, section_context, &self.options, &self.name_filter)
    }

    /// Iterate over the contacts in a table, lazily, in row order.
    ///
    /// The gate is re-checked here, so a non-directory table yields an
    /// empty iterator rather than garbage records. Calling this again on
    /// the same table restarts from the first row and yields identical
    /// output.
    pub fn contacts<'a>(&'a self, table: &'a TableBlock) -> ContactRows<'a> {
        let qualified = self.is_directory_table(table, "");
        let (next_row, headers) = if qualified {
            match detector::locate_header_row(table, &self.options) {
                Some((index, headers)) => (index + 1, headers),
                None => (0, detector::synthesize_headers(table.column_count())),
            }
        } else {
            (0, Vec::new())
        };

        ContactRows {
            extractor: self,
            table,
            headers,
            next_row,
            qualified,
        }
    }

    /// Extract all contacts from a table into a vector.
    pub fn extract(&self, table: &TableBlock) -> Vec<ContactRecord> {
        self.contacts(table).collect()
    }

    /// Score the contact signals in a table without gating it.
    pub fn analyze(&self, table: &TableBlock, section_context: &str) -> TableAnalysis {
        analysis::analyze(table, section_context, &self.options, &self.patterns)
    }
}

impl Default for DirectoryExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy iterator over the contact records of one table.
///
/// Produced by [`DirectoryExtractor::contacts`]. Rows that fail
/// validation are skipped silently; the iterator ends at the last table
/// row.
pub struct ContactRows<'a> {
    extractor: &'a DirectoryExtractor,
    table: &'a TableBlock,
    headers: Vec<String>,
    next_row: usize,
    qualified: bool,
}

impl Iterator for ContactRows<'_> {
    type Item = ContactRecord;

    fn next(&mut self) -> Option<ContactRecord> {
        if !self.qualified {
            return None;
        }
        while self.next_row < self.table.rows.len() {
            let row = &self.table.rows[self.next_row];
            self.next_row += 1;
            if let Some(record) = row_parser::parse_row(
                row,
                &self.headers,
                &self.extractor.options,
                &self.extractor.name_filter,
                &self.extractor.patterns,
            ) {
                return Some(record);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_table() -> TableBlock {
        TableBlock::from_rows([
            ["Name", "Title", "Phone"],
            ["Jane Smith", "Team Lead", "555-123-4567"],
            ["Robert Jones", "Analyst", "555-987-6543"],
        ])
    }

    #[test]
    fn test_extract_roster() {
        let extractor = DirectoryExtractor::new();
        let contacts = extractor.extract(&roster_table());

        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].name, "Jane Smith");
        assert_eq!(contacts[0].title, "Team Lead");
        assert_eq!(contacts[0].phone, vec!["555-123-4567"]);
        assert_eq!(contacts[1].name, "Robert Jones");
    }

    #[test]
    fn test_contacts_iterator_is_lazy_and_restartable() {
        let extractor = DirectoryExtractor::new();
        let table = roster_table();

        let mut rows = extractor.contacts(&table);
        assert_eq!(rows.next().unwrap().name, "Jane Smith");

        // A fresh iterator restarts from the top
        let names: Vec<String> = extractor.contacts(&table).map(|c| c.name).collect();
        assert_eq!(names, vec!["Jane Smith", "Robert Jones"]);
    }

    #[test]
    fn test_non_directory_table_yields_nothing() {
        let extractor = DirectoryExtractor::new();
        let table = TableBlock::from_rows([
            ["Step", "Action"],
            ["1", "Notify manager"],
            ["2", "Escalate to IT"],
        ]);

        assert!(!extractor.is_directory_table(&table, ""));
        assert!(extractor.extract(&table).is_empty());
    }

    #[test]
    fn test_short_table_yields_nothing() {
        let extractor = DirectoryExtractor::new();
        let table = TableBlock::from_rows([["Name", "Phone"]]);

        assert!(!extractor.is_directory_table(&table, ""));
        assert!(extractor.extract(&table).is_empty());
    }

    #[test]
    fn test_extract_is_idempotent() {
        let extractor = DirectoryExtractor::new();
        let table = roster_table();

        assert_eq!(extractor.extract(&table), extractor.extract(&table));
    }

    #[test]
    fn test_headerless_table_uses_positional_mapping() {
        // Gate needs a header keyword somewhere; here row 0 mentions
        // "team member" as a caption while cells line up positionally.
        let extractor = DirectoryExtractor::new();
        let table = TableBlock::from_rows([
            ["Team Member Roster", "", ""],
            ["Jane Smith", "Incident Lead", "555-123-4567"],
            ["Robert Jones", "Analyst", "555-987-6543"],
        ]);

        let contacts = extractor.extract(&table);
        // Row 0 carries the keyword, so it is consumed as the header row
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].title, "Incident Lead");
    }

    #[test]
    fn test_custom_options_gate() {
        let options = ExtractOptions::new().with_min_person_rows(3);
        let extractor = DirectoryExtractor::with_options(options).unwrap();

        assert!(!extractor.is_directory_table(&roster_table(), ""));
    }
}
