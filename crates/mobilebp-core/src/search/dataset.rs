//! Dataset Search
//!
//! Ranks the rows of one dataset against a query. Each call builds its own
//! [`Bm25Index`] over the rows' search fields, keeps the top non-zero hits and
//! projects them onto the descriptor's output fields.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::bm25::{Bm25Config, Bm25Index};

// ============================================================================
// RECORD
// ============================================================================

/// One dataset row: field name to text, in column order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing the value in place if the name already exists
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Builder-style [`Record::insert`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Value of a field, if present
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// True if the record has this field
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Fields in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Searchable text: the given fields' values joined by single spaces
    ///
    /// A missing field contributes an empty string, so separators stay put.
    pub fn document(&self, fields: &[&str]) -> String {
        fields
            .iter()
            .map(|field| self.get(field).unwrap_or(""))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Keep only the listed fields the record actually has, in list order
    pub fn project(&self, fields: &[&str]) -> Record {
        let fields = fields
            .iter()
            .filter_map(|field| self.get(field).map(|value| (field.to_string(), value.to_string())))
            .collect();
        Record { fields }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// ============================================================================
// DESCRIPTOR
// ============================================================================

/// Static description of a dataset: where it lives, what is searched, what is returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetDescriptor {
    /// Identifier handed to the storage layer (a path relative to the data dir)
    pub identifier: &'static str,
    /// Fields concatenated into the searchable document, in order
    pub search_fields: &'static [&'static str],
    /// Fields projected into results, in order
    pub output_fields: &'static [&'static str],
}

// ============================================================================
// SEARCH
// ============================================================================

/// Rank `records` against `query` and return at most `max_results` projected rows
///
/// Only rows scoring strictly above zero are returned, in rank order.
pub fn search_records(
    descriptor: &DatasetDescriptor,
    records: &[Record],
    query: &str,
    max_results: usize,
    config: Bm25Config,
) -> Vec<Record> {
    let documents = records
        .iter()
        .map(|record| record.document(descriptor.search_fields));
    let index = Bm25Index::build(documents, config);

    let results: Vec<Record> = index
        .score(query)
        .into_iter()
        .take(max_results)
        .filter(|scored| scored.score > 0.0)
        .map(|scored| records[scored.index].project(descriptor.output_fields))
        .collect();

    tracing::debug!(
        dataset = descriptor.identifier,
        rows = records.len(),
        hits = results.len(),
        "Dataset search complete"
    );

    results
}
