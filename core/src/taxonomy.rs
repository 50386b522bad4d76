//! Category derivation from fetched collections.
//!
//! Categories are not a fixed schema: they are whatever keys the current
//! collection snapshot carries, in first-occurrence order, behind a synthetic
//! "All" entry. Re-deriving from the same snapshot yields the same list; a new
//! snapshot is derived from scratch.

use std::collections::HashSet;

use serde::Serialize;

use crate::kind::{FieldMap, LabelTable};
use crate::types::RawRecord;

pub const ALL_KEY: &str = "all";
pub const ALL_LABEL: &str = "All";

/// One selectable category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub key: String,
    pub label: String,
}

impl CategoryEntry {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    pub fn all() -> Self {
        Self::new(ALL_KEY, ALL_LABEL)
    }
}

/// Display label for a raw taxonomy key.
///
/// Missing or empty keys get `fallback`; known keys come from `labels`;
/// anything else is title-cased with underscores turned into spaces.
pub fn format_label(raw: Option<&str>, labels: LabelTable, fallback: &str) -> String {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return fallback.to_string();
    };
    labels
        .iter()
        .find(|(key, _)| *key == raw)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| title_case(&raw.replace('_', " ")))
}

/// Uppercase the first ASCII letter or digit of every word, leaving the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        let is_word = ch.is_ascii_alphanumeric() || ch == '_';
        if is_word && !in_word {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
        in_word = is_word;
    }
    out
}

/// [`format_label`] using a listing's own label table and fallback.
pub fn label_for(fields: &FieldMap, raw: Option<&str>) -> String {
    format_label(raw, fields.labels, fields.fallback_label)
}

/// Ordered, de-duplicated categories for `records`, "All" first.
pub fn derive_categories(records: &[RawRecord], fields: &FieldMap) -> Vec<CategoryEntry> {
    let mut seen: HashSet<&str> = HashSet::from([ALL_KEY]);
    let mut categories = vec![CategoryEntry::all()];

    for record in records {
        let key = fields.effective_key(record);
        if seen.insert(key) {
            categories.push(CategoryEntry::new(key, label_for(fields, fields.raw_key(record))));
        }
    }
    categories
}
