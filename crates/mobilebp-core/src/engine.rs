//! Query Orchestration
//!
//! The public search entry points over a [`DatasetSource`]:
//!
//! - [`KnowledgeBase::search`]: one domain (routed when not given), with an
//!   optional platform post-filter
//! - [`KnowledgeBase::search_platform`]: a platform's guideline table
//! - [`KnowledgeBase::search_stack`]: platform guidelines plus platform-filtered
//!   domain results for a technology stack
//!
//! Every call loads its rows and builds a fresh index; nothing is shared
//! between calls. Selectors are validated before any indexing work.

use serde::Serialize;

use crate::catalog::{
    normalize_platform_filter, stack_platform, Domain, Platform, ANDROID_XML_ALIAS, VIEW_SYSTEM_STACKS,
};
use crate::router::classify_domain;
use crate::search::{search_records, Bm25Config, DatasetDescriptor, Record};
use crate::storage::{DatasetSource, StorageError};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Default number of results per lookup
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Over-fetch factor applied before a platform filter narrows results
pub const PLATFORM_FILTER_OVERFETCH: usize = 3;

/// Field name (case-insensitive) the platform filter inspects
pub const PLATFORM_FIELD: &str = "platform";

// ============================================================================
// ERRORS
// ============================================================================

/// Search error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Domain identifier outside the catalog
    #[error("Unknown domain: {value}. Available: {}", .valid.join(", "))]
    UnknownDomain {
        value: String,
        valid: Vec<&'static str>,
    },
    /// Platform identifier outside the catalog
    #[error("Unknown platform: {value}. Available: {}", .valid.join(", "))]
    UnknownPlatform {
        value: String,
        valid: Vec<&'static str>,
    },
    /// Stack keyword outside the catalog
    #[error("Unknown stack: {value}. Available: {}", .valid.join(", "))]
    UnknownStack {
        value: String,
        valid: Vec<&'static str>,
    },
    /// The storage layer could not provide the dataset
    #[error("Dataset not found: {dataset}")]
    DatasetUnavailable { dataset: String },
}

impl SearchError {
    /// The offending identifier (selector value or dataset)
    pub fn identifier(&self) -> &str {
        match self {
            SearchError::UnknownDomain { value, .. }
            | SearchError::UnknownPlatform { value, .. }
            | SearchError::UnknownStack { value, .. } => value,
            SearchError::DatasetUnavailable { dataset } => dataset,
        }
    }

    /// Valid choices for a selector error, empty otherwise
    pub fn valid_values(&self) -> &[&'static str] {
        match self {
            SearchError::UnknownDomain { valid, .. }
            | SearchError::UnknownPlatform { valid, .. }
            | SearchError::UnknownStack { valid, .. } => valid.as_slice(),
            SearchError::DatasetUnavailable { .. } => &[],
        }
    }

    /// True for caller-supplied identifiers outside the configured enumerations
    pub fn is_unknown_selector(&self) -> bool {
        !matches!(self, SearchError::DatasetUnavailable { .. })
    }
}

/// Search result type
pub type Result<T> = std::result::Result<T, SearchError>;

// ============================================================================
// OUTCOME
// ============================================================================

/// Which entry point produced an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Domain(Domain),
    Platform(Platform),
    Stack(Platform),
}

/// Result set of one search call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    #[serde(skip)]
    pub kind: OutcomeKind,
    /// Domain identifier, or `platform` / `stack`
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    pub query: String,
    /// Dataset the results came from (absent for merged stack results)
    #[serde(rename = "file", skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub count: usize,
    pub results: Vec<Record>,
}

impl SearchOutcome {
    fn new(kind: OutcomeKind, query: &str, source: Option<&str>, results: Vec<Record>) -> Self {
        let (domain, platform) = match kind {
            OutcomeKind::Domain(domain) => (domain.as_str(), None),
            OutcomeKind::Platform(platform) => ("platform", Some(platform.as_str().to_string())),
            OutcomeKind::Stack(platform) => ("stack", Some(platform.as_str().to_string())),
        };
        Self {
            kind,
            domain: domain.to_string(),
            stack: None,
            platform,
            query: query.to_string(),
            source: source.map(str::to_string),
            count: results.len(),
            results,
        }
    }

    /// True when nothing matched
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

// ============================================================================
// KNOWLEDGE BASE
// ============================================================================

/// Stateless search front over a dataset source
#[derive(Debug, Clone)]
pub struct KnowledgeBase<S> {
    source: S,
    bm25: Bm25Config,
}

impl<S: DatasetSource> KnowledgeBase<S> {
    /// Create a knowledge base with default BM25 parameters
    pub fn new(source: S) -> Self {
        Self {
            source,
            bm25: Bm25Config::default(),
        }
    }

    /// Override BM25 parameters
    pub fn with_bm25_config(mut self, config: Bm25Config) -> Self {
        self.bm25 = config;
        self
    }

    /// The underlying dataset source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Route a query to a domain
    pub fn classify_domain(&self, query: &str) -> Domain {
        classify_domain(query)
    }

    /// Search one domain
    ///
    /// The domain is routed from the query when `None`. With a
    /// `platform_filter`, fetches `3 * max_results` rows, keeps those whose
    /// `platform` field contains the filter (case-insensitive, `android-xml`
    /// treated as `android`), then truncates to `max_results`. A blank filter
    /// counts as no filter.
    pub fn search(
        &self,
        query: &str,
        domain: Option<Domain>,
        max_results: usize,
        platform_filter: Option<&str>,
    ) -> Result<SearchOutcome> {
        let domain = domain.unwrap_or_else(|| classify_domain(query));
        let descriptor = domain.descriptor();
        let platform_filter = platform_filter.filter(|filter| !filter.trim().is_empty());

        let results = match platform_filter {
            Some(filter) => {
                let fetched = self.lookup(
                    descriptor,
                    query,
                    max_results.saturating_mul(PLATFORM_FILTER_OVERFETCH),
                )?;
                filter_by_platform(fetched, filter, max_results)
            }
            None => self.lookup(descriptor, query, max_results)?,
        };

        Ok(SearchOutcome::new(
            OutcomeKind::Domain(domain),
            query,
            Some(descriptor.identifier),
            results,
        ))
    }

    /// Search a platform's guideline table
    ///
    /// `android-xml` reads the android table but keeps its own label in the
    /// outcome.
    pub fn search_platform(&self, query: &str, platform: &str, max_results: usize) -> Result<SearchOutcome> {
        let parsed: Platform = platform.parse()?;
        let mut outcome = self.search_platform_table(query, parsed, max_results)?;
        if platform.eq_ignore_ascii_case(ANDROID_XML_ALIAS) {
            outcome.platform = Some(ANDROID_XML_ALIAS.to_string());
        }
        Ok(outcome)
    }

    fn search_platform_table(&self, query: &str, platform: Platform, max_results: usize) -> Result<SearchOutcome> {
        let descriptor = platform.descriptor();
        let results = self.lookup(&descriptor, query, max_results)?;
        Ok(SearchOutcome::new(
            OutcomeKind::Platform(platform),
            query,
            Some(descriptor.identifier),
            results,
        ))
    }

    /// Search by technology stack
    ///
    /// Both lookups use `"{query} {stack}"` so the stack name also ranks.
    /// Platform guidelines come first, then routed-domain results filtered to
    /// the stack's platform; the concatenation is cut to `max_results`.
    /// Rows present in both sources are not deduplicated. A missing dataset on
    /// either side just contributes nothing.
    pub fn search_stack(&self, query: &str, stack: &str, max_results: usize) -> Result<SearchOutcome> {
        let platform = stack_platform(stack)?;
        let augmented = format!("{query} {stack}");

        let platform_results =
            tolerate_unavailable(self.search_platform_table(&augmented, platform, max_results))?;
        let domain_results = tolerate_unavailable(self.search(
            &augmented,
            None,
            max_results,
            Some(platform.as_str()),
        ))?;

        let merged: Vec<Record> = platform_results
            .into_iter()
            .chain(domain_results)
            .take(max_results)
            .collect();

        let mut outcome = SearchOutcome::new(OutcomeKind::Stack(platform), query, None, merged);
        outcome.stack = Some(stack.to_string());
        if VIEW_SYSTEM_STACKS.contains(&stack.to_lowercase().as_str()) {
            outcome.platform = Some(ANDROID_XML_ALIAS.to_string());
        }
        Ok(outcome)
    }

    fn lookup(&self, descriptor: &DatasetDescriptor, query: &str, max_results: usize) -> Result<Vec<Record>> {
        let records = self.source.load(descriptor.identifier).map_err(|e| {
            match &e {
                StorageError::NotFound(_) => {
                    tracing::warn!(dataset = descriptor.identifier, "Dataset not found")
                }
                other => {
                    tracing::warn!(dataset = descriptor.identifier, error = %other, "Dataset unreadable")
                }
            }
            SearchError::DatasetUnavailable {
                dataset: descriptor.identifier.to_string(),
            }
        })?;
        Ok(search_records(descriptor, &records, query, max_results, self.bm25))
    }
}

/// Keep rows whose platform field contains `filter`, at most `max_results`
pub fn filter_by_platform(records: Vec<Record>, filter: &str, max_results: usize) -> Vec<Record> {
    let filter = normalize_platform_filter(filter);
    records
        .into_iter()
        .filter(|record| {
            record.iter().any(|(name, value)| {
                name.eq_ignore_ascii_case(PLATFORM_FIELD) && value.to_lowercase().contains(&filter)
            })
        })
        .take(max_results)
        .collect()
}

/// Treat an unavailable dataset as an empty contribution
pub(crate) fn tolerate_unavailable(outcome: Result<SearchOutcome>) -> Result<Vec<Record>> {
    match outcome {
        Ok(outcome) => Ok(outcome.results),
        Err(SearchError::DatasetUnavailable { dataset }) => {
            tracing::debug!(dataset = %dataset, "Skipping unavailable dataset");
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}
