//! Contact record type.

use serde::{Deserialize, Serialize};

/// A normalized contact record parsed from one directory-table row.
///
/// `name` is always non-empty for records produced by the extractor;
/// every other field defaults to empty. The phone, mobile, and email
/// lists keep insertion order but never hold exact duplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Person name, with any parenthesized user id removed
    pub name: String,

    /// Corporate user id when the name cell carried one, e.g. "Jane Smith (jsmith)"
    pub user_id: Option<String>,

    /// Job title or role
    pub title: String,

    /// Office or site location
    pub location: String,

    /// Desk phone numbers
    pub phone: Vec<String>,

    /// Mobile phone numbers
    pub mobile: Vec<String>,

    /// Email addresses
    pub email: Vec<String>,

    /// Free-form notes
    pub description: String,
}

impl ContactRecord {
    /// Create a record with a name and all other fields empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Check whether the record carries any way to reach the person.
    pub fn has_contact_info(&self) -> bool {
        !self.phone.is_empty() || !self.mobile.is_empty() || !self.email.is_empty()
    }

    /// Append a phone number unless it is already present.
    pub fn add_phone(&mut self, value: impl Into<String>) {
        push_unique(&mut self.phone, value.into());
    }

    /// Append a mobile number unless it is already present.
    pub fn add_mobile(&mut self, value: impl Into<String>) {
        push_unique(&mut self.mobile, value.into());
    }

    /// Append an email address unless it is already present.
    pub fn add_email(&mut self, value: impl Into<String>) {
        push_unique(&mut self.email, value.into());
    }
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}
