//! Document scanning.
//!
//! Walks a parsed document in block order, tracking the section each
//! table falls under, and extracts contacts from the tables that pass
//! the directory gate.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::model::{Block, ContactRecord, ParsedDocument};

use super::analysis;
use super::{DirectoryExtractor, TableAnalysis, TeamHint};

/// One directory table found in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryTable {
    /// Index among the document's tables, in source order
    pub table_index: usize,

    /// Nearest preceding section text, if any
    pub section: Option<String>,

    /// Team classification from the table and its section
    pub team: TeamHint,

    /// Contacts extracted from the table, in row order
    pub contacts: Vec<ContactRecord>,
}

/// Scans parsed documents for directory tables.
#[derive(Debug, Default)]
pub struct DocumentScanner {
    extractor: DirectoryExtractor,
}

impl DocumentScanner {
    /// Create a scanner with default extraction options.
    pub fn new() -> Self {
        Self {
            extractor: DirectoryExtractor::new(),
        }
    }

    /// Create a scanner around a configured extractor.
    pub fn with_extractor(extractor: DirectoryExtractor) -> Self {
        Self { extractor }
    }

    /// Get the underlying extractor.
    pub fn extractor(&self) -> &DirectoryExtractor {
        &self.extractor
    }

    /// Scan a document and return its directory tables.
    ///
    /// Section context comes from heading blocks; plain paragraphs also
    /// refresh it when they mention a section keyword, since many
    /// documents mark team rosters with bold body text rather than real
    /// heading styles. Tables that pass the gate but yield no surviving
    /// contacts are omitted.
    pub fn scan(&self, doc: &ParsedDocument) -> Vec<DirectoryTable> {
        let options = self.extractor.options();
        let mut found = Vec::new();
        let mut section: Option<String> = None;
        let mut table_index = 0usize;

        for block in &doc.blocks {
            match block {
                Block::Text(text) => {
                    let trimmed = text.text.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    if text.is_heading {
                        section = Some(trimmed.to_string());
                    } else {
                        let lower = trimmed.to_lowercase();
                        if options
                            .section_keywords
                            .iter()
                            .any(|keyword| lower.contains(keyword))
                        {
                            section = Some(trimmed.to_string());
                        }
                    }
                }
                Block::Table(table) => {
                    let context = section.as_deref().unwrap_or("");
                    if self.extractor.is_directory_table(table, context) {
                        let contacts = self.extractor.extract(table);
                        if !contacts.is_empty() {
                            log::debug!(
                                "scanner: table {} in section {:?}: {} contacts",
                                table_index,
                                section,
                                contacts.len()
                            );
                            let team = table_team_hint(table, context);
                            found.push(DirectoryTable {
                                table_index,
                                section: section.clone(),
                                team,
                                contacts,
                            });
                        }
                    }
                    table_index += 1;
                }
            }
        }

        found
    }

    /// Scan a document and return all contacts, flattened in source order.
    pub fn extract_all(&self, doc: &ParsedDocument) -> Vec<ContactRecord> {
        self.scan(doc)
            .into_iter()
            .flat_map(|table| table.contacts)
            .collect()
    }

    /// Scan many documents, one rayon worker per document.
    ///
    /// Results keep the input order. Documents are independent, so no
    /// ordering constraint exists between them.
    pub fn scan_documents(&self, docs: &[ParsedDocument]) -> Vec<Vec<DirectoryTable>> {
        docs.par_iter().map(|doc| self.scan(doc)).collect()
    }

    /// Score the contact signals of every table in a document.
    pub fn analyze_tables(&self, doc: &ParsedDocument) -> Vec<TableAnalysis> {
        let mut section: Option<String> = None;
        let options = self.extractor.options();
        let mut analyses = Vec::new();

        for block in &doc.blocks {
            match block {
                Block::Text(text) => {
                    let trimmed = text.text.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    if text.is_heading
                        || options
                            .section_keywords
                            .iter()
                            .any(|keyword| trimmed.to_lowercase().contains(keyword))
                    {
                        section = Some(trimmed.to_string());
                    }
                }
                Block::Table(table) => {
                    analyses.push(
                        self.extractor
                            .analyze(table, section.as_deref().unwrap_or("")),
                    );
                }
            }
        }

        analyses
    }
}

/// Team hint from the table's leading rows plus its section context.
fn table_team_hint(table: &crate::model::TableBlock, context: &str) -> TeamHint {
    let mut text = context.to_string();
    for row in table.rows.iter().take(2) {
        text.push(' ');
        text.push_str(&row.join(" "));
    }
    analysis::team_hint(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TableBlock;

    fn roster_table() -> TableBlock {
        TableBlock::from_rows([
            ["Name", "Title", "Phone"],
            ["Jane Smith", "Incident Lead", "555-123-4567"],
            ["Robert Jones", "Analyst", "555-987-6543"],
        ])
    }

    fn procedure_table() -> TableBlock {
        TableBlock::from_rows([
            ["Step", "Action"],
            ["1", "Notify manager"],
            ["2", "Escalate to IT"],
        ])
    }

    #[test]
    fn test_scan_finds_roster_under_heading() {
        let mut doc = ParsedDocument::new();
        doc.add_heading("SECTION III: Recovery Teams");
        doc.add_table(procedure_table());
        doc.add_heading("Business Function Team (BFT)");
        doc.add_table(roster_table());

        let scanner = DocumentScanner::new();
        let found = scanner.scan(&doc);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].table_index, 1);
        assert_eq!(
            found[0].section.as_deref(),
            Some("Business Function Team (BFT)")
        );
        assert_eq!(found[0].team, TeamHint::BusinessFunction);
        assert_eq!(found[0].contacts.len(), 2);
    }

    #[test]
    fn test_plain_paragraph_refreshes_section() {
        let mut doc = ParsedDocument::new();
        doc.add_text("Cross Functional Team contact roster follows.");
        doc.add_table(roster_table());

        let scanner = DocumentScanner::new();
        let found = scanner.scan(&doc);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].team, TeamHint::CrossFunctional);
    }

    #[test]
    fn test_scan_empty_document() {
        let scanner = DocumentScanner::new();
        assert!(scanner.scan(&ParsedDocument::new()).is_empty());
    }

    #[test]
    fn test_scan_documents_parallel_matches_serial() {
        let mut doc = ParsedDocument::new();
        doc.add_heading("Recovery Teams");
        doc.add_table(roster_table());
        let docs = vec![doc.clone(), ParsedDocument::new(), doc.clone()];

        let scanner = DocumentScanner::new();
        let parallel = scanner.scan_documents(&docs);
        let serial: Vec<_> = docs.iter().map(|d| scanner.scan(d)).collect();

        assert_eq!(parallel, serial);
        assert_eq!(parallel[0].len(), 1);
        assert!(parallel[1].is_empty());
    }

    #[test]
    fn test_analyze_tables_covers_every_table() {
        let mut doc = ParsedDocument::new();
        doc.add_table(procedure_table());
        doc.add_table(roster_table());

        let scanner = DocumentScanner::new();
        let analyses = scanner.analyze_tables(&doc);

        assert_eq!(analyses.len(), 2);
        assert!(!analyses[0].looks_like_directory());
        assert!(analyses[1].looks_like_directory());
    }
}
