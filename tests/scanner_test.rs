//! Integration tests for document scanning.

use contab::json::{scan_to_json, JsonFormat};
use contab::{
    scan_document, scan_documents, DocumentScanner, ParsedDocument, TableBlock, TeamHint,
};

/// A document shaped like a real continuity plan: procedures, a BFT
/// roster, and a CFT roster under their own headings.
fn continuity_plan() -> ParsedDocument {
    let mut doc = ParsedDocument::new();

    doc.add_heading("SECTION I: Plan Overview");
    doc.add_text("This plan describes how operations continue during an incident.");
    doc.add_table(TableBlock::from_rows([
        ["Step", "Action"],
        ["1", "Notify manager"],
        ["2", "Escalate to IT"],
    ]));

    doc.add_heading("SECTION III: Recovery Teams");
    doc.add_heading("Business Function Team (BFT)");
    doc.add_table(TableBlock::from_rows([
        ["Name", "Title", "Phone", "Email"],
        ["Jane Smith", "Incident Lead", "555-123-4567", "jane.smith@example.com"],
        ["Robert Jones", "Analyst", "555-987-6543", "robert.jones@example.com"],
    ]));

    doc.add_heading("Cross Functional Team (CFT)");
    doc.add_table(TableBlock::from_rows([
        ["Name", "Role", "Mobile"],
        ["Alice Brown", "Facilities", "(555) 222-3344"],
        ["David Green", "Communications", "(555) 888-9900"],
    ]));

    doc
}

#[test]
fn test_scan_full_plan() {
    let found = scan_document(&continuity_plan());

    assert_eq!(found.len(), 2);

    let bft = &found[0];
    assert_eq!(bft.table_index, 1);
    assert_eq!(bft.section.as_deref(), Some("Business Function Team (BFT)"));
    assert_eq!(bft.team, TeamHint::BusinessFunction);
    assert_eq!(bft.contacts.len(), 2);
    assert_eq!(bft.contacts[0].email, vec!["jane.smith@example.com"]);

    let cft = &found[1];
    assert_eq!(cft.table_index, 2);
    assert_eq!(cft.team, TeamHint::CrossFunctional);
    assert_eq!(cft.contacts[0].name, "Alice Brown");
    assert_eq!(cft.contacts[0].title, "Facilities");
    assert_eq!(cft.contacts[0].mobile, vec!["(555) 222-3344"]);
}

#[test]
fn test_procedure_table_not_scanned_as_roster() {
    let found = scan_document(&continuity_plan());
    assert!(found.iter().all(|table| table.table_index != 0));
}

#[test]
fn test_extract_all_flattens_in_order() {
    let scanner = DocumentScanner::new();
    let contacts = scanner.extract_all(&continuity_plan());

    let names: Vec<&str> = contacts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Jane Smith", "Robert Jones", "Alice Brown", "David Green"]
    );
}

#[test]
fn test_scan_documents_batch() {
    let docs = vec![
        continuity_plan(),
        ParsedDocument::new(),
        continuity_plan(),
    ];

    let results = scan_documents(&docs);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].len(), 2);
    assert!(results[1].is_empty());
    assert_eq!(results[0], results[2]);
}

#[test]
fn test_table_without_heading_still_extracts() {
    let mut doc = ParsedDocument::new();
    doc.add_table(TableBlock::from_rows([
        ["Name", "Title", "Phone"],
        ["Jane Smith", "Team Lead", "555-123-4567"],
        ["Robert Jones", "Analyst", "555-987-6543"],
    ]));

    let found = scan_document(&doc);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].section, None);
    assert_eq!(found[0].team, TeamHint::Unspecified);
}

#[test]
fn test_scan_result_serializes() {
    let found = scan_document(&continuity_plan());
    let json = scan_to_json(&found, JsonFormat::Pretty).unwrap();

    assert!(json.contains("\"section\": \"Business Function Team (BFT)\""));
    assert!(json.contains("\"team\": \"business_function\""));
    assert!(json.contains("\"Jane Smith\""));
}

#[test]
fn test_analyze_tables_reports_signals() {
    let scanner = DocumentScanner::new();
    let analyses = scanner.analyze_tables(&continuity_plan());

    assert_eq!(analyses.len(), 3);
    assert!(!analyses[0].looks_like_directory());
    assert!(analyses[1].looks_like_directory());
    assert!(analyses[1].has_emails);
    assert_eq!(analyses[1].team, TeamHint::BusinessFunction);
    assert!(analyses[2].looks_like_directory());
}
