//! Directory-table detection.
//!
//! A table qualifies as a personnel directory only when it passes both
//! gates: header keywords somewhere in its leading rows, and a minimum
//! number of person-name rows in its first column. Header keywords alone
//! over-match (procedure tables love the word "contact"); name density
//! alone under-matches (the first cell is sometimes an id). The pair is
//! what makes the classifier usable.

use crate::model::TableBlock;

use super::name_filter::{self, NameFilter};
use super::options::ExtractOptions;
use super::row_parser;

/// Check whether any of the leading rows carries a header keyword.
pub(crate) fn header_score(table: &TableBlock, options: &ExtractOptions) -> bool {
    table
        .rows
        .iter()
        .take(options.header_scan_rows)
        .any(|row| {
            let row_text = row.join(" ").to_lowercase();
            options
                .header_keywords
                .iter()
                .any(|keyword| row_text.contains(keyword))
        })
}

/// Count rows after the presumed header whose first cell is a person name.
pub(crate) fn person_row_count(
    table: &TableBlock,
    options: &ExtractOptions,
    filter: &NameFilter,
) -> usize {
    table
        .rows
        .iter()
        .skip(1)
        .take(options.name_probe_rows)
        .filter(|row| {
            row.first().is_some_and(|cell| {
                let cleaned = row_parser::clean_cell(cell, options);
                let (name, _) = name_filter::split_display_name(&cleaned);
                filter.is_person_name(&name)
            })
        })
        .count()
}

/// Decide whether a table is a personnel directory.
///
/// `section_context` is the nearest preceding heading text. It never
/// relaxes the gate; it only feeds the log line so misclassifications
/// can be traced back to their section.
pub(crate) fn is_directory_table(
    table: &TableBlock,
    section_context: &str,
    options: &ExtractOptions,
    filter: &NameFilter,
) -> bool {
    if table.row_count() < 2 {
        log::debug!("detector: rejected table with {} rows", table.row_count());
        return false;
    }

    if !header_score(table, options) {
        log::debug!(
            "detector: no header keywords in first {} rows (section: {:?})",
            options.header_scan_rows,
            section_context
        );
        return false;
    }

    let person_rows = person_row_count(table, options, filter);
    if person_rows < options.min_person_rows {
        log::debug!(
            "detector: only {} person-name rows (need {}, section: {:?})",
            person_rows,
            options.min_person_rows,
            section_context
        );
        return false;
    }

    true
}

/// Locate the header row among the leading rows.
///
/// Returns the row index and its lowercased trimmed cells, or `None`
/// when no leading row carries a header keyword.
pub(crate) fn locate_header_row(
    table: &TableBlock,
    options: &ExtractOptions,
) -> Option<(usize, Vec<String>)> {
    table
        .rows
        .iter()
        .take(options.header_scan_rows)
        .enumerate()
        .find(|(_, row)| {
            let row_text = row.join(" ").to_lowercase();
            options
                .header_keywords
                .iter()
                .any(|keyword| row_text.contains(keyword))
        })
        .map(|(index, row)| {
            let headers = row
                .iter()
                .map(|cell| cell.trim().to_lowercase())
                .collect();
            (index, headers)
        })
}

/// Build positional headers for a table with no recognizable header row.
pub(crate) fn synthesize_headers(columns: usize) -> Vec<String> {
    let mut headers = Vec::with_capacity(columns);
    for (index, base) in ["name", "title", "contact_info"].iter().enumerate() {
        if index >= columns {
            break;
        }
        headers.push(base.to_string());
    }
    for index in headers.len()..columns {
        headers.push(format!("field_{index}"));
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (ExtractOptions, NameFilter) {
        let options = ExtractOptions::default();
        let filter = NameFilter::compile(&options).unwrap();
        (options, filter)
    }

    #[test]
    fn test_roster_table_accepted() {
        let (options, filter) = setup();
        let table = TableBlock::from_rows([
            ["Name", "Title", "Phone"],
            ["Jane Smith", "Team Lead", "555-123-4567"],
            ["Robert Jones", "Analyst", "555-987-6543"],
        ]);

        assert!(is_directory_table(&table, "", &options, &filter));
    }

    #[test]
    fn test_procedure_table_rejected() {
        let (options, filter) = setup();
        let table = TableBlock::from_rows([
            ["Step", "Action"],
            ["1", "Notify manager"],
            ["2", "Escalate to IT"],
        ]);

        assert!(!is_directory_table(&table, "", &options, &filter));
    }

    #[test]
    fn test_header_keywords_without_names_rejected() {
        let (options, filter) = setup();
        // "contact" appears but the first column holds process steps
        let table = TableBlock::from_rows([
            ["Phase", "Contact Procedure"],
            ["Initial Response", "Call the hotline"],
            ["Follow Up", "Email the roster owner"],
        ]);

        assert!(!is_directory_table(&table, "", &options, &filter));
    }

    #[test]
    fn test_single_person_rejected() {
        let (options, filter) = setup();
        let table = TableBlock::from_rows([
            ["Name", "Phone"],
            ["Jane Smith", "555-123-4567"],
        ]);

        assert!(!is_directory_table(&table, "", &options, &filter));
    }

    #[test]
    fn test_short_table_rejected() {
        let (options, filter) = setup();
        let table = TableBlock::from_rows([["Name", "Phone"]]);
        assert!(!is_directory_table(&table, "", &options, &filter));
        assert!(!is_directory_table(&TableBlock::new(), "", &options, &filter));
    }

    #[test]
    fn test_name_probe_depth() {
        let (options, filter) = setup();
        // Person names beyond the probe window do not count
        let mut rows = vec![vec!["Name".to_string(), "Phone".to_string()]];
        for _ in 0..5 {
            rows.push(vec!["pending".to_string(), "".to_string()]);
        }
        rows.push(vec!["Jane Smith".to_string(), "555-123-4567".to_string()]);
        rows.push(vec!["Robert Jones".to_string(), "555-987-6543".to_string()]);
        let table = TableBlock { rows };

        assert!(!is_directory_table(&table, "", &options, &filter));
    }

    #[test]
    fn test_locate_header_row_skips_caption() {
        let (options, _) = setup();
        let table = TableBlock::from_rows([
            ["Escalation Roster", "", ""],
            ["Name", "Title", "Phone"],
            ["Jane Smith", "Team Lead", "555-123-4567"],
        ]);

        let (index, headers) = locate_header_row(&table, &options).unwrap();
        assert_eq!(index, 1);
        assert_eq!(headers, vec!["name", "title", "phone"]);
    }

    #[test]
    fn test_synthesize_headers() {
        assert_eq!(
            synthesize_headers(5),
            vec!["name", "title", "contact_info", "field_3", "field_4"]
        );
        assert_eq!(synthesize_headers(2), vec!["name", "title"]);
        assert!(synthesize_headers(0).is_empty());
    }
}
