//! End-to-end test support
//!
//! - `harness`: isolated on-disk data directories
//! - `mocks`: CSV fixtures resembling the shipped datasets

pub mod mocks;

pub use harness::TestDataDir;
pub use mocks::{DatasetFactory, Fixture};
