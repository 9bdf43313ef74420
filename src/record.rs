//! Decoded records and the line decoder.

use crate::field::FieldValue;
use crate::money::Money;
use crate::schema::RecordSchema;
use serde::Serialize;
use std::collections::btree_map::{self, BTreeMap};

/// A decoded line: field name to coerced value.
///
/// The set of fields is whatever the line's schema declares, so lookups are
/// by name and return `None` for fields the schema did not define.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(FieldValue::as_integer)
    }

    pub fn money(&self, name: &str) -> Option<Money> {
        self.get(name).and_then(FieldValue::as_money)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, FieldValue> {
        self.fields.iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = btree_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Decodes one line with a resolved schema.
///
/// Always succeeds. Fields are populated in schema order, so when two
/// fields share a name the later one wins.
pub fn decode_line(line: &str, schema: &RecordSchema) -> Record {
    let mut record = Record::new();
    for field in &schema.fields {
        let raw = extract(line, field.range.start, field.range.end);
        record.insert(field.name.clone(), field.field_type.coerce(raw));
    }
    record
}

/// Returns the characters of `line` in `[start, end)`, clamped to the line.
///
/// Offsets count characters, so a multi-byte character is never split. A
/// range past the end of the line, or with `start >= end`, yields a shorter
/// or empty slice.
pub fn extract(line: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    let byte_at = |n: usize| {
        line.char_indices()
            .nth(n)
            .map(|(i, _)| i)
            .unwrap_or(line.len())
    };
    let from = byte_at(start);
    let to = byte_at(end);
    &line[from..to]
}
