//! Active-category selection for one listing screen.

use crate::kind::FieldMap;
use crate::taxonomy::ALL_KEY;
use crate::types::RawRecord;

/// Anything that exposes an effective category key.
pub trait Categorized {
    fn category_key(&self) -> &str;
}

/// Currently selected category. Starts at `"all"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    active_key: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_key: ALL_KEY.to_string(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Any key is accepted, including ones no record carries.
    pub fn set_active(&mut self, key: impl Into<String>) {
        self.active_key = key.into();
    }

    pub fn active(&self) -> &str {
        &self.active_key
    }

    pub fn is_all(&self) -> bool {
        self.active_key == ALL_KEY
    }

    pub fn reset(&mut self) {
        self.active_key = ALL_KEY.to_string();
    }

    fn admits(&self, key: &str) -> bool {
        self.is_all() || self.active_key == key
    }

    /// Items whose key matches the selection, in their original order.
    pub fn filtered<'a, T: Categorized>(&self, items: &'a [T]) -> Vec<&'a T> {
        items
            .iter()
            .filter(|item| self.admits(item.category_key()))
            .collect()
    }

    /// Same as [`FilterState::filtered`] over raw records, keyed through `fields`.
    pub fn filtered_records<'a>(&self, records: &'a [RawRecord], fields: &FieldMap) -> Vec<&'a RawRecord> {
        records
            .iter()
            .filter(|record| self.admits(fields.effective_key(record)))
            .collect()
    }
}
