//! Storage Module
//!
//! The boundary between the ranking core and wherever dataset rows live.
//! The core only asks for the rows of a dataset by identifier; file layout,
//! encodings and parse errors stay behind [`DatasetSource`].

mod csv_store;
mod memory;

pub use csv_store::{CsvStore, DATA_DIR_ENV};
pub use memory::MemoryStore;

use crate::search::Record;

/// Storage error type
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Dataset does not exist
    #[error("Dataset not found: {0}")]
    NotFound(String),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed dataset
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// Initialization error
    #[error("Initialization error: {0}")]
    Init(String),
}

/// Storage result type
pub type Result<T> = std::result::Result<T, StorageError>;

/// Anything that can hand over the rows of a dataset
pub trait DatasetSource {
    /// Load every row of `identifier`, in stored order
    fn load(&self, identifier: &str) -> Result<Vec<Record>>;
}

impl<S: DatasetSource + ?Sized> DatasetSource for &S {
    fn load(&self, identifier: &str) -> Result<Vec<Record>> {
        (**self).load(identifier)
    }
}
