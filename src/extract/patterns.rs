//! Compiled phone and email patterns.

use regex::Regex;

use crate::error::{Error, Result};

use super::options::ExtractOptions;

/// Phone and email regexes compiled once per extractor.
#[derive(Debug)]
pub(crate) struct PatternSet {
    phones: Vec<Regex>,
    email: Regex,
}

impl PatternSet {
    /// Compile the patterns from the options.
    pub(crate) fn compile(options: &ExtractOptions) -> Result<Self> {
        let phones = options
            .phone_patterns
            .iter()
            .map(|pattern| compile(pattern))
            .collect::<Result<Vec<_>>>()?;
        let email = compile(&options.email_pattern)?;

        Ok(Self { phones, email })
    }

    /// Find phone numbers, applying each pattern in order and unioning
    /// the matches. Exact duplicates are dropped; overlapping matches
    /// from different patterns are all kept.
    pub(crate) fn find_phones(&self, text: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        for pattern in &self.phones {
            for m in pattern.find_iter(text) {
                let value = m.as_str().to_string();
                if !found.contains(&value) {
                    found.push(value);
                }
            }
        }
        found
    }

    /// Find email addresses.
    pub(crate) fn find_emails(&self, text: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        for m in self.email.find_iter(text) {
            let value = m.as_str().to_string();
            if !found.contains(&value) {
                found.push(value);
            }
        }
        found
    }

    /// Check whether any phone pattern matches.
    pub(crate) fn has_phone(&self, text: &str) -> bool {
        self.phones.iter().any(|pattern| pattern.is_match(text))
    }

    /// Check whether the email pattern matches.
    pub(crate) fn has_email(&self, text: &str) -> bool {
        self.email.is_match(text)
    }
}

pub(crate) fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
