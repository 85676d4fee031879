//! Dataset fixtures

mod fixtures;

pub use fixtures::{DatasetFactory, Fixture};
