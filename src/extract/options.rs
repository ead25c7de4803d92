//! Extraction options and configuration.
//!
//! Every keyword list and threshold the heuristics consult lives here as
//! data, so matching can be widened or narrowed without code changes.
//! The defaults reproduce the tuned production behavior.

/// Keywords that mark a row as a plausible directory-table header.
pub const DEFAULT_HEADER_KEYWORDS: &[&str] = &[
    "name",
    "title",
    "phone",
    "mobile",
    "email",
    "contact",
    "role",
    "team member",
];

/// Substrings that disqualify a cell from being a person name.
///
/// Matching is case-insensitive substring containment, so short entries
/// like "the" also hit inside longer words. That overreach is accepted:
/// it is what keeps procedure text ("Return to Normal Operations") out
/// of the roster.
pub const DEFAULT_NAME_DENYLIST: &[&str] = &[
    "return",
    "normal",
    "operations",
    "activate",
    "section",
    "page",
    "step",
    "procedure",
    "process",
    "system",
    "tool",
    "application",
    "recovery",
    "business",
    "continuity",
    "plan",
    "when",
    "if",
    "the",
    "this",
    "that",
    "contact",
    "engage",
    "determine",
    "communicate",
    "situation",
    "team",
    "activation",
    "equipment",
    "outage",
    "building",
    "location",
    "personnel",
];

/// Cell values treated as blank.
pub const DEFAULT_PLACEHOLDER_VALUES: &[&str] = &["none", "n/a", "tbd", "none listed"];

/// Keywords that let a non-heading paragraph refresh the section context.
pub const DEFAULT_SECTION_KEYWORDS: &[&str] = &["section", "recovery", "team", "contact"];

/// Keywords that classify trailing free text as a location.
pub const DEFAULT_LOCATION_KEYWORDS: &[&str] = &["office", "building", "floor", "room"];

/// Role words used by the diagnostic table analyzer.
pub const DEFAULT_TITLE_INDICATORS: &[&str] = &[
    "manager",
    "director",
    "lead",
    "coordinator",
    "specialist",
    "engineer",
    "analyst",
];

/// Words that disqualify a cell from the analyzer's name-shape test.
pub const DEFAULT_NAME_SHAPE_EXCLUDES: &[&str] =
    &["section", "team", "department", "function", "title"];

/// Phone number patterns, applied in order with results unioned.
pub const DEFAULT_PHONE_PATTERNS: &[&str] = &[
    r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}",
    r"\(\d{3}\)\s?\d{3}[-.\s]?\d{4}",
    r"1[-.\s]?\d{3}[-.\s]?\d{3}[-.\s]?\d{4}",
    r"\+\d{1,3}[-.\s]?\d{3}[-.\s]?\d{3}[-.\s]?\d{4}",
];

/// Email address pattern.
pub const DEFAULT_EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";

/// Character shape a person name must match.
pub const DEFAULT_NAME_SHAPE_PATTERN: &str = r"^[A-Za-z\s.\-']+$";

/// Options controlling directory-table detection and contact extraction.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Header keywords for the table gate and header-row location
    pub header_keywords: Vec<String>,

    /// Denylist substrings for the person-name predicate
    pub name_denylist: Vec<String>,

    /// Cell values treated as blank
    pub placeholder_values: Vec<String>,

    /// Keywords that update the section context from plain paragraphs
    pub section_keywords: Vec<String>,

    /// Keywords that classify inferred free text as a location
    pub location_keywords: Vec<String>,

    /// Role words for the diagnostic analyzer
    pub title_indicators: Vec<String>,

    /// Exclusion words for the analyzer's name-shape test
    pub name_shape_excludes: Vec<String>,

    /// Phone number patterns, applied in order
    pub phone_patterns: Vec<String>,

    /// Email address pattern
    pub email_pattern: String,

    /// Character shape a person name must match
    pub name_shape_pattern: String,

    /// Minimum name length in characters
    pub min_name_len: usize,

    /// Maximum name length in characters
    pub max_name_len: usize,

    /// Minimum whitespace-separated name tokens
    pub min_name_tokens: usize,

    /// Maximum whitespace-separated name tokens
    pub max_name_tokens: usize,

    /// Minimum length of each name token
    pub min_token_len: usize,

    /// Maximum length of each name token
    pub max_token_len: usize,

    /// How many leading rows to probe for header keywords
    pub header_scan_rows: usize,

    /// How many rows after the presumed header to probe for person names
    pub name_probe_rows: usize,

    /// Minimum person-name rows for a table to qualify as a directory
    pub min_person_rows: usize,
}

impl ExtractOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the header keyword list.
    pub fn with_header_keywords<S: Into<String>>(
        mut self,
        keywords: impl IntoIterator<Item = S>,
    ) -> Self {
        self.header_keywords = lowered(keywords);
        self
    }

    /// Add a header keyword, widening header matching.
    pub fn add_header_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.header_keywords.push(keyword.into().to_lowercase());
        self
    }

    /// Replace the person-name denylist.
    pub fn with_name_denylist<S: Into<String>>(
        mut self,
        words: impl IntoIterator<Item = S>,
    ) -> Self {
        self.name_denylist = lowered(words);
        self
    }

    /// Add a denylist word, narrowing what counts as a person name.
    pub fn add_denylist_word(mut self, word: impl Into<String>) -> Self {
        self.name_denylist.push(word.into().to_lowercase());
        self
    }

    /// Replace the placeholder value list.
    pub fn with_placeholder_values<S: Into<String>>(
        mut self,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        self.placeholder_values = lowered(values);
        self
    }

    /// Replace the section keyword list.
    pub fn with_section_keywords<S: Into<String>>(
        mut self,
        keywords: impl IntoIterator<Item = S>,
    ) -> Self {
        self.section_keywords = lowered(keywords);
        self
    }

    /// Replace the phone pattern list.
    pub fn with_phone_patterns<S: Into<String>>(
        mut self,
        patterns: impl IntoIterator<Item = S>,
    ) -> Self {
        self.phone_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Add a phone pattern, widening phone recognition.
    pub fn add_phone_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.phone_patterns.push(pattern.into());
        self
    }

    /// Replace the email pattern.
    pub fn with_email_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.email_pattern = pattern.into();
        self
    }

    /// Set the minimum number of person-name rows a directory table needs.
    pub fn with_min_person_rows(mut self, rows: usize) -> Self {
        self.min_person_rows = rows;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            header_keywords: strings(DEFAULT_HEADER_KEYWORDS),
            name_denylist: strings(DEFAULT_NAME_DENYLIST),
            placeholder_values: strings(DEFAULT_PLACEHOLDER_VALUES),
            section_keywords: strings(DEFAULT_SECTION_KEYWORDS),
            location_keywords: strings(DEFAULT_LOCATION_KEYWORDS),
            title_indicators: strings(DEFAULT_TITLE_INDICATORS),
            name_shape_excludes: strings(DEFAULT_NAME_SHAPE_EXCLUDES),
            phone_patterns: strings(DEFAULT_PHONE_PATTERNS),
            email_pattern: DEFAULT_EMAIL_PATTERN.to_string(),
            name_shape_pattern: DEFAULT_NAME_SHAPE_PATTERN.to_string(),
            min_name_len: 2,
            max_name_len: 50,
            min_name_tokens: 2,
            max_name_tokens: 4,
            min_token_len: 2,
            max_token_len: 20,
            header_scan_rows: 3,
            name_probe_rows: 5,
            min_person_rows: 2,
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn lowered<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.into().to_lowercase())
        .collect()
}
