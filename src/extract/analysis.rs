//! Diagnostic table analysis.
//!
//! A scored, looser companion to the strict directory gate. The scorer
//! reports which contact signals a table carries so a caller can see
//! why a borderline table was or was not treated as a roster.

use serde::{Deserialize, Serialize};

use crate::model::TableBlock;

use super::options::ExtractOptions;
use super::patterns::PatternSet;

/// Which recovery team a table appears to belong to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamHint {
    /// Business Function Team
    BusinessFunction,
    /// Cross Functional Team
    CrossFunctional,
    /// No team indicator found
    #[default]
    Unspecified,
}

/// Contact signals found in one table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableAnalysis {
    /// Any header keyword appears in the table text
    pub has_contact_headers: bool,

    /// Some cell has the capitalized first-last shape of a name
    pub has_names: bool,

    /// Some cell matches a phone pattern
    pub has_phone_numbers: bool,

    /// Some cell matches the email pattern
    pub has_emails: bool,

    /// Some cell mentions a role word
    pub has_titles: bool,

    /// Team classification from the surrounding section
    pub team: TeamHint,

    /// Weighted sum of the signals above
    pub score: u8,
}

impl TableAnalysis {
    /// Whether the signals add up to a probable directory table.
    pub fn looks_like_directory(&self) -> bool {
        self.score >= 3
    }
}

/// Classify team membership from context text.
pub(crate) fn team_hint(context: &str) -> TeamHint {
    let lower = context.to_lowercase();
    if lower.contains("bft") || lower.contains("business function") {
        TeamHint::BusinessFunction
    } else if lower.contains("cft") || lower.contains("cross functional") {
        TeamHint::CrossFunctional
    } else {
        TeamHint::Unspecified
    }
}

/// Score the contact signals in a table.
pub(crate) fn analyze(
    table: &TableBlock,
    section_context: &str,
    options: &ExtractOptions,
    patterns: &PatternSet,
) -> TableAnalysis {
    let all_text = table
        .rows
        .iter()
        .map(|row| row.join(" "))
        .collect::<Vec<_>>()
        .join(" ");
    let all_lower = all_text.to_lowercase();

    let has_contact_headers = options
        .header_keywords
        .iter()
        .any(|keyword| all_lower.contains(keyword));
    let has_phone_numbers = patterns.has_phone(&all_text);
    let has_emails = patterns.has_email(&all_text);
    let has_titles = options
        .title_indicators
        .iter()
        .any(|word| all_lower.contains(word));
    let has_names = table.rows.iter().any(|row| {
        row.iter()
            .any(|cell| has_name_shape(cell, &options.name_shape_excludes))
    });
    let team = team_hint(section_context);

    let mut score = 0u8;
    if has_contact_headers {
        score += 2;
    }
    if has_names {
        score += 2;
    }
    if has_phone_numbers {
        score += 2;
    }
    if has_emails {
        score += 1;
    }
    if has_titles {
        score += 1;
    }
    if team != TeamHint::Unspecified {
        score += 1;
    }

    TableAnalysis {
        has_contact_headers,
        has_names,
        has_phone_numbers,
        has_emails,
        has_titles,
        team,
        score,
    }
}

/// Loose name-shape test: 2-4 words, each capitalized then lowercase,
/// with no excluded word. Deliberately weaker than the extraction gate.
fn has_name_shape(cell: &str, excludes: &[String]) -> bool {
    let trimmed = cell.trim();
    let words: Vec<&str> = trimmed.split_whitespace().collect();
    if words.len() < 2 || words.len() > 4 {
        return false;
    }

    let lower = trimmed.to_lowercase();
    if excludes.iter().any(|word| lower.contains(word)) {
        return false;
    }

    words.iter().all(|word| {
        let mut chars = word.chars();
        match chars.next() {
            Some(first) if word.chars().count() > 1 => {
                first.is_uppercase() && chars.all(|c| c.is_lowercase())
            }
            _ => true,
        }
    })
}
