//! Record and dataset types.
//!
//! A [`Record`] is a flat, ordered mapping of field name to text. A
//! [`Dataset`] is the ordered collection searched by the engine, and an
//! [`AnnotatedRecord`] is the highlighted copy handed to renderers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One searchable item: field name to text value, in declared order.
///
/// Field order is insertion order (for JSON input, the order of the keys in
/// the object). The engine scans fields in this order, so results are
/// deterministic.
///
/// # Example
///
/// ```
/// use glean_core::Record;
///
/// let record = Record::new()
///     .with("title", "Eleventy is simple")
///     .with("body", "static site");
///
/// assert_eq!(record.get("title"), Some("Eleventy is simple"));
/// assert_eq!(record.field_names().collect::<Vec<_>>(), ["title", "body"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, String>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Record::default()
    }

    /// Adds a field, replacing the value of an existing field of the same name
    /// (the field keeps its original position).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Returns the value of a field.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Iterates field names in declared order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterates `(name, value)` pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// The ordered collection of records available to search.
///
/// Insertion order is the canonical order and survives filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Creates a dataset from records, keeping their order.
    pub fn new(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    /// Returns the records as a slice, ready for filtering.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterates records in dataset order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the dataset, returning its records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Dataset::new(records)
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Dataset::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// A highlighted copy of a matched record.
///
/// Holds the same field names, in the same order, as the record it was built
/// from; each value carries marker pairs around matched text. It owns its
/// storage and never aliases the source record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnnotatedRecord {
    fields: IndexMap<String, String>,
}

impl AnnotatedRecord {
    pub(crate) fn from_fields(fields: IndexMap<String, String>) -> Self {
        AnnotatedRecord { fields }
    }

    /// Returns the marked-up value of a field.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Iterates field names in the source record's order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterates `(name, marked-up value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
