//! Mapping between HTML form inputs and sheet fields.
//!
//! The form uses hyphenated display names that do not always match the
//! internal field names (`page-num` is the checkpoint, `clues` are the
//! notes). [`FORM_FIELDS`] is the single source for that mapping; both
//! extraction and rendering walk it.

use crate::character_sheet::{SheetField, SheetRecord};

/// Ordered `(display_name, field)` pairs for every sheet field.
pub const FORM_FIELDS: [(&str, SheetField); 18] = [
    ("max-skill", SheetField::MaxSkill),
    ("cur-skill", SheetField::CurSkill),
    ("max-hp", SheetField::MaxHp),
    ("cur-hp", SheetField::CurHp),
    ("max-luck", SheetField::MaxLuck),
    ("cur-luck", SheetField::CurLuck),
    ("page-num", SheetField::Checkpoint),
    ("gold", SheetField::Gold),
    ("treasures", SheetField::Treasures),
    ("food", SheetField::Food),
    ("provisions", SheetField::Provisions),
    ("equipment-and-items", SheetField::Inventory),
    ("conditions", SheetField::Special),
    ("clues", SheetField::Notes),
    ("book-1", SheetField::Book1),
    ("book-2", SheetField::Book2),
    ("book-3", SheetField::Book3),
    ("book-4", SheetField::Book4),
];

/// Display name of a field's form input.
pub fn display_name(field: SheetField) -> &'static str {
    FORM_FIELDS
        .iter()
        .find(|(_, candidate)| *candidate == field)
        .map(|(name, _)| *name)
        .unwrap_or_else(|| field.as_str())
}

/// Text fields submitted with a request, in submission order.
///
/// Repeated names are kept; lookups return the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Vec<(String, String)>> for FormData {
    fn from(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl SheetRecord {
    /// Build a record from submitted form inputs.
    ///
    /// Inputs that were not submitted stay `None`; inputs submitted empty
    /// are kept as `Some("")`. Unrelated inputs are ignored.
    pub fn from_form(form: &FormData) -> Self {
        let mut record = SheetRecord::empty();
        for (display_name, field) in FORM_FIELDS {
            record.set(field, form.get(display_name).map(str::to_string));
        }
        record
    }
}
