//! In-memory dataset source

use std::collections::HashMap;

use super::{DatasetSource, Result, StorageError};
use crate::search::Record;

/// Datasets held in memory, keyed by identifier
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    datasets: HashMap<String, Vec<Record>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a dataset
    pub fn insert(&mut self, identifier: impl Into<String>, records: Vec<Record>) {
        self.datasets.insert(identifier.into(), records);
    }

    /// Builder-style [`MemoryStore::insert`]
    pub fn with_dataset(mut self, identifier: impl Into<String>, records: Vec<Record>) -> Self {
        self.insert(identifier, records);
        self
    }
}

impl DatasetSource for MemoryStore {
    fn load(&self, identifier: &str) -> Result<Vec<Record>> {
        self.datasets
            .get(identifier)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(identifier.to_string()))
    }
}
