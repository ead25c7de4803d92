//! Row-to-record parsing.

use unicode_normalization::UnicodeNormalization;

use crate::model::ContactRecord;

use super::name_filter::{self, NameFilter};
use super::options::ExtractOptions;
use super::patterns::PatternSet;

/// Normalize one cell: NFC, control characters stripped, whitespace
/// collapsed, placeholder values ("n/a", "tbd", ...) reduced to empty.
pub(crate) fn clean_cell(text: &str, options: &ExtractOptions) -> String {
    let normalized: String = text
        .nfc()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .collect();
    let collapsed = normalized
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let lower = collapsed.to_lowercase();
    if options
        .placeholder_values
        .iter()
        .any(|placeholder| lower == *placeholder)
    {
        return String::new();
    }
    collapsed
}

/// Parse one data row into a contact record.
///
/// Returns `None` for blank rows, rows whose first cell is not a person
/// name, and rows whose mapped name fails re-validation. Never errors:
/// a malformed row is a skipped row.
pub(crate) fn parse_row(
    row: &[String],
    headers: &[String],
    options: &ExtractOptions,
    filter: &NameFilter,
    patterns: &PatternSet,
) -> Option<ContactRecord> {
    let cells: Vec<String> = row.iter().map(|cell| clean_cell(cell, options)).collect();
    if cells.iter().all(|cell| cell.is_empty()) {
        return None;
    }

    let (gate_name, _) = name_filter::split_display_name(cells.first()?);
    if !filter.is_person_name(&gate_name) {
        return None;
    }

    let mut record = ContactRecord::default();

    for (index, cell) in cells.iter().enumerate() {
        if cell.is_empty() {
            continue;
        }
        // Cells past the known headers carry no field meaning
        let Some(header) = headers.get(index) else {
            break;
        };

        let phones = patterns.find_phones(cell);
        let emails = patterns.find_emails(cell);

        if index == 0 || header.contains("name") {
            let (name, user_id) = name_filter::split_display_name(cell);
            record.name = name;
            if user_id.is_some() {
                record.user_id = user_id;
            }
        } else if index == 1 || header.contains("title") || header.contains("role") {
            record.title = cell.clone();
        } else if header.contains("phone") && !header.contains("mobile") {
            if !phones.is_empty() {
                for phone in phones {
                    record.add_phone(phone);
                }
            } else if emails.is_empty() && cell.chars().count() > 5 {
                record.add_phone(cell.clone());
            }
        } else if header.contains("mobile") || header.contains("cell") {
            if !phones.is_empty() {
                for phone in phones {
                    record.add_mobile(phone);
                }
            } else if emails.is_empty() && cell.chars().count() > 5 {
                record.add_mobile(cell.clone());
            }
        } else if header.contains("location") || header.contains("site") {
            record.location = cell.clone();
        } else if header.contains("description") || header.contains("notes") {
            record.description = cell.clone();
        } else if header.contains("email") {
            if !emails.is_empty() {
                for email in emails {
                    record.add_email(email);
                }
            } else if phones.is_empty() {
                record.add_email(cell.clone());
            }
        } else {
            infer_cell(&mut record, cell, phones, emails, index, cells.len(), options);
        }
    }

    if record.name.is_empty() || !filter.is_person_name(&record.name) {
        return None;
    }
    Some(record)
}

/// Classify a cell with no recognized header by its content.
fn infer_cell(
    record: &mut ContactRecord,
    cell: &str,
    phones: Vec<String>,
    emails: Vec<String>,
    index: usize,
    cell_count: usize,
    options: &ExtractOptions,
) {
    if !emails.is_empty() {
        for email in emails {
            record.add_email(email);
        }
        return;
    }

    if !phones.is_empty() {
        // First unlabeled number is the desk phone; later ones, or
        // anything self-described as mobile, go to mobile
        let mobile = cell.to_lowercase().contains("mobile") || !record.phone.is_empty();
        for phone in phones {
            if mobile {
                record.add_mobile(phone);
            } else {
                record.add_phone(phone);
            }
        }
        return;
    }

    if index + 1 == cell_count && cell.chars().count() > 10 {
        let lower = cell.to_lowercase();
        let is_location = options
            .location_keywords
            .iter()
            .any(|keyword| lower.contains(keyword));
        if record.location.is_empty() && is_location {
            record.location = cell.to_string();
        } else if record.description.is_empty() {
            record.description = cell.to_string();
        }
    }
}
