//! CSV dataset source
//!
//! Each dataset is a headered CSV file under a data directory; the identifier
//! is its path relative to that directory (`security.csv`,
//! `platforms/ios.csv`). The header row names the fields.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use super::{DatasetSource, Result, StorageError};
use crate::search::Record;

/// Environment variable overriding the default data directory
pub const DATA_DIR_ENV: &str = "MOBILEBP_DATA_DIR";

/// Reads datasets from CSV files on disk
#[derive(Debug, Clone)]
pub struct CsvStore {
    data_dir: PathBuf,
}

impl CsvStore {
    /// Open a store rooted at `data_dir`
    ///
    /// Without an explicit directory, falls back to `$MOBILEBP_DATA_DIR`, then
    /// to the platform data directory. The directory is not created; datasets
    /// missing from it load as [`StorageError::NotFound`].
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => match std::env::var_os(DATA_DIR_ENV) {
                Some(dir) if !dir.is_empty() => PathBuf::from(dir),
                _ => default_data_dir()?,
            },
        };
        tracing::debug!(data_dir = %data_dir.display(), "Using dataset directory");
        Ok(Self { data_dir })
    }

    /// Directory datasets are read from
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, identifier: &str) -> PathBuf {
        self.data_dir.join(identifier)
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "mobilebp", "mobilebp").ok_or_else(|| {
        StorageError::Init("Could not determine project directories".to_string())
    })?;
    Ok(proj_dirs.data_dir().join("data"))
}

impl DatasetSource for CsvStore {
    fn load(&self, identifier: &str) -> Result<Vec<Record>> {
        let path = self.path_for(identifier);
        if !path.is_file() {
            return Err(StorageError::NotFound(identifier.to_string()));
        }

        // Ragged rows are tolerated: short rows simply lack trailing fields
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(&path)?;
        let headers = reader.headers()?.clone();

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            records.push(headers.iter().zip(row.iter()).collect::<Record>());
        }

        tracing::debug!(dataset = identifier, rows = records.len(), "Loaded dataset");
        Ok(records)
    }
}
