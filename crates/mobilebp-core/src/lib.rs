//! # Mobile Best Practices Core
//!
//! Retrieval engine over curated mobile-development knowledge tables
//! (architectures, UI patterns, security threats, gradle dependencies, ...):
//!
//! - **BM25 ranking**: Okapi BM25 (k1 = 1.5, b = 0.75) over tokenized rows
//! - **Domain routing**: keyword voting picks a table for free-text queries
//! - **Platform filtering**: narrow any domain to Android, iOS, Flutter or React Native
//! - **Stack search**: platform guidelines merged with routed domain results
//! - **Blueprints**: multi-domain markdown reports written to disk
//!
//! Every search loads its rows and builds a fresh index. There is no
//! long-lived state, so a [`KnowledgeBase`] can be shared freely.
//!
//! ## Quick Start
//!
//! ```rust
//! use mobilebp_core::{Domain, KnowledgeBase, MemoryStore, Record};
//!
//! let store = MemoryStore::new().with_dataset(
//!     "architectures.csv",
//!     vec![
//!         Record::new().with("Name", "MVVM").with("Keywords", "viewmodel state"),
//!         Record::new().with("Name", "VIPER").with("Keywords", "router presenter"),
//!     ],
//! );
//! let kb = KnowledgeBase::new(store);
//!
//! let outcome = kb.search("viewmodel", Some(Domain::Architecture), 3, None)?;
//! assert_eq!(outcome.count, 1);
//! assert_eq!(outcome.results[0].get("Name"), Some("MVVM"));
//! # Ok::<(), mobilebp_core::SearchError>(())
//! ```
//!
//! On disk, datasets are CSV files read through [`CsvStore`].

#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// MODULES
// ============================================================================

pub mod blueprint;
pub mod catalog;
pub mod engine;
pub mod router;
pub mod search;
pub mod storage;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use blueprint::{
    detect_platform, persist, Blueprint, BlueprintComposer, BlueprintError, BlueprintSection,
    PersistReport, SectionKey, BLUEPRINT_MAX_RESULTS,
};

pub use catalog::{stack_names, stack_platform, Domain, Platform, STACKS};

pub use engine::{
    filter_by_platform, KnowledgeBase, OutcomeKind, SearchError, SearchOutcome,
    DEFAULT_MAX_RESULTS,
};

pub use router::{classify_domain, domain_votes, DEFAULT_DOMAIN};

pub use search::{
    search_records, tokenize, Bm25Config, Bm25Index, DatasetDescriptor, Record, ScoredDocument,
};

pub use storage::{CsvStore, DatasetSource, MemoryStore, StorageError, DATA_DIR_ENV};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
