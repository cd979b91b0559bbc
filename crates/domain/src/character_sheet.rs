//! Gamebook character sheet record.
//!
//! A sheet is a closed set of [`SheetField`]s, each holding optional opaque
//! text. [`SheetRecord`] always carries every field: a value that was never
//! supplied is `None` (serialized as JSON `null`), which is distinct from a
//! field submitted empty (`Some("")`).
//!
//! Records are built fresh for every request, either from form fields
//! (see [`crate::form`]) or by normalizing an arbitrary JSON object
//! (see [`SheetRecord::normalize`]).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DomainError;

// =============================================================================
// Sheet Fields
// =============================================================================

/// One field of the character sheet.
///
/// Declaration order is the canonical order used for export and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SheetField {
    MaxSkill,
    CurSkill,
    MaxHp,
    CurHp,
    MaxLuck,
    CurLuck,
    /// Current paragraph/page in the gamebook.
    Checkpoint,
    Gold,
    Treasures,
    Food,
    Provisions,
    /// Equipment and items carried.
    Inventory,
    /// Special conditions (curses, blessings, ...).
    Special,
    /// Clues and free-form notes.
    Notes,
    Book1,
    Book2,
    Book3,
    Book4,
}

impl SheetField {
    /// Every field, in canonical order.
    pub const ALL: [SheetField; 18] = [
        SheetField::MaxSkill,
        SheetField::CurSkill,
        SheetField::MaxHp,
        SheetField::CurHp,
        SheetField::MaxLuck,
        SheetField::CurLuck,
        SheetField::Checkpoint,
        SheetField::Gold,
        SheetField::Treasures,
        SheetField::Food,
        SheetField::Provisions,
        SheetField::Inventory,
        SheetField::Special,
        SheetField::Notes,
        SheetField::Book1,
        SheetField::Book2,
        SheetField::Book3,
        SheetField::Book4,
    ];

    /// Internal name, used as the key in the interchange file.
    pub fn as_str(&self) -> &'static str {
        match self {
            SheetField::MaxSkill => "max_skill",
            SheetField::CurSkill => "cur_skill",
            SheetField::MaxHp => "max_hp",
            SheetField::CurHp => "cur_hp",
            SheetField::MaxLuck => "max_luck",
            SheetField::CurLuck => "cur_luck",
            SheetField::Checkpoint => "checkpoint",
            SheetField::Gold => "gold",
            SheetField::Treasures => "treasures",
            SheetField::Food => "food",
            SheetField::Provisions => "provisions",
            SheetField::Inventory => "inventory",
            SheetField::Special => "special",
            SheetField::Notes => "notes",
            SheetField::Book1 => "book1",
            SheetField::Book2 => "book2",
            SheetField::Book3 => "book3",
            SheetField::Book4 => "book4",
        }
    }
}

impl fmt::Display for SheetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SheetField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SheetField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown sheet field: {}", s)))
    }
}

// =============================================================================
// Sheet Record
// =============================================================================

/// A complete character sheet: every [`SheetField`] mapped to optional text.
///
/// The map is private and every constructor fills all fields, so a record
/// can never be missing a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRecord {
    values: BTreeMap<SheetField, Option<String>>,
}

impl SheetRecord {
    /// A sheet with no values at all; what a fresh form shows.
    pub fn empty() -> Self {
        Self {
            values: SheetField::ALL.into_iter().map(|field| (field, None)).collect(),
        }
    }

    /// Back-fill an arbitrary JSON object against the fixed field set.
    ///
    /// Known keys keep their value, missing fields become `None` and
    /// unknown keys are dropped. Strings are kept verbatim and `null` is
    /// the no-value marker; any other JSON value is kept as its compact JSON
    /// text, so `{"gold": 12}` yields `Some("12")`.
    pub fn normalize(map: &Map<String, Value>) -> Self {
        let mut record = Self::empty();
        for field in SheetField::ALL {
            let value = map.get(field.as_str()).and_then(value_to_text);
            record.values.insert(field, value);
        }
        record
    }

    /// Builder-style setter.
    pub fn with(mut self, field: SheetField, value: impl Into<String>) -> Self {
        self.values.insert(field, Some(value.into()));
        self
    }

    pub fn set(&mut self, field: SheetField, value: Option<String>) {
        self.values.insert(field, value);
    }

    pub fn get(&self, field: SheetField) -> Option<&str> {
        self.values.get(&field).and_then(|value| value.as_deref())
    }

    /// Iterate fields in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (SheetField, Option<&str>)> + '_ {
        self.values
            .iter()
            .map(|(field, value)| (*field, value.as_deref()))
    }

    /// True when no field carries a value.
    pub fn is_blank(&self) -> bool {
        self.values.values().all(Option::is_none)
    }

    /// Convert back into a JSON object keyed by internal field name.
    pub fn to_json_map(&self) -> Map<String, Value> {
        self.iter()
            .map(|(field, value)| {
                let value = value.map_or(Value::Null, |text| Value::String(text.to_string()));
                (field.as_str().to_string(), value)
            })
            .collect()
    }
}

impl Default for SheetRecord {
    fn default() -> Self {
        Self::empty()
    }
}

fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

impl Serialize for SheetRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter().map(|(field, value)| (field.as_str(), value)))
    }
}

impl<'de> Deserialize<'de> for SheetRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::normalize(&map))
    }
}
