//! Person-name validation.
//!
//! This is a deterministic shape heuristic, not a name detector: it
//! accepts capitalized 2-4 token strings of letters and name punctuation
//! and rejects anything carrying a denylisted process word. It will
//! reject legitimate names that contain a denylist substring (e.g.
//! "Matthew" contains "the") and accept capitalized phrases that merely
//! look name-shaped. That trade keeps procedure text out of rosters,
//! which is the error that matters here.

use regex::Regex;

use crate::error::Result;

use super::options::ExtractOptions;
use super::patterns;

/// Compiled person-name predicate.
#[derive(Debug)]
pub(crate) struct NameFilter {
    denylist: Vec<String>,
    shape: Regex,
    min_len: usize,
    max_len: usize,
    min_tokens: usize,
    max_tokens: usize,
    min_token_len: usize,
    max_token_len: usize,
}

impl NameFilter {
    /// Compile the predicate from the options.
    pub(crate) fn compile(options: &ExtractOptions) -> Result<Self> {
        Ok(Self {
            denylist: options
                .name_denylist
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
            shape: patterns::compile(&options.name_shape_pattern)?,
            min_len: options.min_name_len,
            max_len: options.max_name_len,
            min_tokens: options.min_name_tokens,
            max_tokens: options.max_name_tokens,
            min_token_len: options.min_token_len,
            max_token_len: options.max_token_len,
        })
    }

    /// Check whether text looks like a person's name.
    pub(crate) fn is_person_name(&self, text: &str) -> bool {
        let trimmed = text.trim();
        let len = trimmed.chars().count();
        if len < self.min_len || len > self.max_len {
            return false;
        }

        let lower = trimmed.to_lowercase();
        if self.denylist.iter().any(|word| lower.contains(word)) {
            return false;
        }

        if !self.shape.is_match(trimmed) {
            return false;
        }

        if !trimmed.chars().any(|c| c.is_uppercase()) {
            return false;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        if tokens.len() < self.min_tokens || tokens.len() > self.max_tokens {
            return false;
        }

        tokens.iter().all(|token| {
            let token_len = token.chars().count();
            token_len >= self.min_token_len && token_len <= self.max_token_len
        })
    }
}

/// Split a display name of the form "Jane Smith (jsmith)" into the name
/// part and the parenthesized user id. Text without parentheses comes
/// back unchanged with no user id.
pub(crate) fn split_display_name(text: &str) -> (String, Option<String>) {
    let trimmed = text.trim();
    if let (Some(open), Some(close)) = (trimmed.find('('), trimmed.rfind(')')) {
        if open < close {
            let name = trimmed[..open].trim().to_string();
            let user_id = trimmed[open + 1..close].trim();
            if !user_id.is_empty() {
                return (name, Some(user_id.to_string()));
            }
            return (name, None);
        }
    }
    (trimmed.to_string(), None)
}
