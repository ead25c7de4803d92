//! # contab
//!
//! Heuristic extraction of contact directories from parsed document tables.
//!
//! Business-continuity plans, org handbooks, and similar documents bury
//! their team rosters in tables mixed among procedure tables and
//! schedules. This library takes an already-parsed document — an ordered
//! list of text blocks and tables, from any source format — decides
//! which tables are personnel directories, and parses each qualifying
//! row into a normalized [`ContactRecord`].
//!
//! ## Quick Start
//!
//! ```
//! use contab::{extract_contacts, ParsedDocument, TableBlock};
//!
//! let mut doc = ParsedDocument::new();
//! doc.add_heading("Business Function Team (BFT)");
//! doc.add_table(TableBlock::from_rows([
//!     ["Name", "Title", "Phone"],
//!     ["Jane Smith", "Team Lead", "555-123-4567"],
//!     ["Robert Jones", "Analyst", "555-987-6543"],
//! ]));
//!
//! let contacts = extract_contacts(&doc);
//! assert_eq!(contacts.len(), 2);
//! assert_eq!(contacts[0].name, "Jane Smith");
//! assert_eq!(contacts[0].phone, vec!["555-123-4567"]);
//! ```
//!
//! ## How classification works
//!
//! A table qualifies as a directory only when both gates pass: a header
//! keyword ("name", "phone", "team member", ...) in its leading rows,
//! and at least two rows whose first cell passes the person-name test.
//! Either signal alone misfires — procedure tables mention "contact",
//! and id columns defeat pure name density.
//!
//! The person-name test is a deterministic shape heuristic, not a name
//! detector: length, letters-and-name-punctuation, capitalization, and
//! a 2-4 token count, minus a denylist of process words. Its keyword
//! lists and thresholds are configuration ([`ExtractOptions`]), so
//! matching can be widened or narrowed without code changes.
//!
//! Heuristic misses are silent by design: malformed rows are skipped,
//! and an empty result is the normal signal for "not actually a
//! directory table". Nothing here errors on data quality.

pub mod error;
pub mod extract;
pub mod json;
pub mod model;

// Re-export commonly used types
pub use error::{Error, Result};
pub use extract::{
    ContactRows, DirectoryExtractor, DirectoryTable, DocumentScanner, ExtractOptions,
    TableAnalysis, TeamHint,
};
pub use json::JsonFormat;
pub use model::{Block, ContactRecord, ParsedDocument, TableBlock, TextBlock};

/// Extract all contacts from a document with default options.
///
/// Scans the document in block order and flattens the contacts of every
/// directory table, keeping source order.
pub fn extract_contacts(doc: &ParsedDocument) -> Vec<ContactRecord> {
    DocumentScanner::new().extract_all(doc)
}

/// Extract all contacts from a document with custom options.
///
/// Fails only when a configured pattern does not compile.
pub fn extract_contacts_with_options(
    doc: &ParsedDocument,
    options: ExtractOptions,
) -> Result<Vec<ContactRecord>> {
    let extractor = DirectoryExtractor::with_options(options)?;
    Ok(DocumentScanner::with_extractor(extractor).extract_all(doc))
}

/// Scan a document and return its directory tables with section context.
pub fn scan_document(doc: &ParsedDocument) -> Vec<DirectoryTable> {
    DocumentScanner::new().scan(doc)
}

/// Scan many documents in parallel, one worker per document.
pub fn scan_documents(docs: &[ParsedDocument]) -> Vec<Vec<DirectoryTable>> {
    DocumentScanner::new().scan_documents(docs)
}

/// Extract contacts from a single table with default options.
pub fn table_contacts(table: &TableBlock) -> Vec<ContactRecord> {
    DirectoryExtractor::new().extract(table)
}

/// Check whether a single table is a personnel directory.
pub fn is_directory_table(table: &TableBlock) -> bool {
    DirectoryExtractor::new().is_directory_table(table, "")
}
