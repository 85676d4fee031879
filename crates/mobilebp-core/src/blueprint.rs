//! Architecture Blueprint
//!
//! Runs a fixed battery of domain lookups plus one platform lookup for a
//! query and renders the hits as a single markdown document. Lookups that
//! fail or find nothing are left out of the blueprint.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::catalog::{Domain, Platform};
use crate::engine::KnowledgeBase;
use crate::search::Record;
use crate::storage::DatasetSource;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Domains searched for every blueprint, in section order
pub const BLUEPRINT_DOMAINS: [Domain; 7] = [
    Domain::Reasoning,
    Domain::Architecture,
    Domain::Snippet,
    Domain::Gradle,
    Domain::Performance,
    Domain::Security,
    Domain::Antipattern,
];

/// Results fetched per blueprint lookup
pub const BLUEPRINT_MAX_RESULTS: usize = 5;

/// Project name used when none is given
pub const DEFAULT_PROJECT_NAME: &str = "MyApp";

/// Platform mentions looked for in the query, first match wins
pub const PLATFORM_HINTS: [&str; 6] = [
    "android-xml",
    "android",
    "ios",
    "flutter",
    "react-native",
    "react native",
];

/// File written for a whole-project blueprint
pub const MASTER_FILE: &str = "MASTER.md";

/// Sub-directory for page-specific blueprints
pub const PAGES_DIR: &str = "pages";

// ============================================================================
// ERRORS
// ============================================================================

/// Blueprint persistence error
#[derive(Debug, thiserror::Error)]
pub enum BlueprintError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Page name that cannot be used as a file name
    #[error("Invalid page name: {0}")]
    InvalidPage(String),
}

// ============================================================================
// TYPES
// ============================================================================

/// Where a blueprint section's rows came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKey {
    Domain(Domain),
    Platform,
}

impl SectionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Domain(domain) => domain.as_str(),
            SectionKey::Platform => "platform",
        }
    }
}

/// Rows gathered for one blueprint section
#[derive(Debug, Clone)]
pub struct BlueprintSection {
    pub key: SectionKey,
    pub results: Vec<Record>,
}

/// A composed, not yet rendered blueprint
#[derive(Debug, Clone)]
pub struct Blueprint {
    pub query: String,
    pub project_name: String,
    /// Platform as mentioned in the query (`android` when none was)
    pub platform_label: String,
    pub platform: Platform,
    /// Non-empty sections in composition order
    pub sections: Vec<BlueprintSection>,
}

/// Summary of a persisted blueprint
#[derive(Debug, Clone, Serialize)]
pub struct PersistReport {
    pub file: PathBuf,
    pub sections: Vec<String>,
    pub total_entries: usize,
}

// ============================================================================
// COMPOSITION
// ============================================================================

/// Find the platform a query talks about
///
/// Returns the matched mention and the platform it selects.
pub fn detect_platform(query: &str) -> (String, Platform) {
    let lower = query.to_lowercase();
    for hint in PLATFORM_HINTS {
        if lower.contains(hint) {
            let label = hint.replace(' ', "-");
            if let Ok(platform) = label.parse::<Platform>() {
                return (label, platform);
            }
        }
    }
    (Platform::Android.as_str().to_string(), Platform::Android)
}

/// Builds blueprints from a knowledge base
pub struct BlueprintComposer<'a, S> {
    kb: &'a KnowledgeBase<S>,
}

impl<'a, S: DatasetSource> BlueprintComposer<'a, S> {
    pub fn new(kb: &'a KnowledgeBase<S>) -> Self {
        Self { kb }
    }

    /// Run every blueprint lookup for `query`
    pub fn compose(&self, query: &str, project_name: Option<&str>) -> Blueprint {
        let mut sections = Vec::new();

        for domain in BLUEPRINT_DOMAINS {
            match self.kb.search(query, Some(domain), BLUEPRINT_MAX_RESULTS, None) {
                Ok(outcome) if !outcome.is_empty() => sections.push(BlueprintSection {
                    key: SectionKey::Domain(domain),
                    results: outcome.results,
                }),
                Ok(_) => {}
                Err(e) => tracing::debug!(domain = %domain, error = %e, "Blueprint section skipped"),
            }
        }

        let (platform_label, platform) = detect_platform(query);
        match self
            .kb
            .search_platform(query, platform.as_str(), BLUEPRINT_MAX_RESULTS)
        {
            Ok(outcome) if !outcome.is_empty() => sections.push(BlueprintSection {
                key: SectionKey::Platform,
                results: outcome.results,
            }),
            Ok(_) => {}
            Err(e) => tracing::debug!(platform = %platform, error = %e, "Blueprint section skipped"),
        }

        Blueprint {
            query: query.to_string(),
            project_name: project_name.unwrap_or(DEFAULT_PROJECT_NAME).to_string(),
            platform_label,
            platform,
            sections,
        }
    }
}

// ============================================================================
// RENDERING
// ============================================================================

impl Blueprint {
    /// Rows of a section, if it made it into the blueprint
    pub fn section(&self, key: SectionKey) -> Option<&[Record]> {
        self.sections
            .iter()
            .find(|section| section.key == key)
            .map(|section| section.results.as_slice())
    }

    /// Section identifiers in composition order
    pub fn section_names(&self) -> Vec<String> {
        self.sections
            .iter()
            .map(|section| section.key.as_str().to_string())
            .collect()
    }

    /// Rows across all sections
    pub fn total_entries(&self) -> usize {
        self.sections.iter().map(|section| section.results.len()).sum()
    }

    /// Render as markdown, stamped with `generated_at`
    pub fn render_markdown(&self, generated_at: NaiveDateTime) -> String {
        let mut lines = vec![
            format!("# Architecture Blueprint - {}", self.project_name),
            String::new(),
            format!("**Generated:** {}", generated_at.format("%Y-%m-%d %H:%M")),
            format!("**Query:** {}", self.query),
            format!("**Platform:** {}", self.platform_label),
            String::new(),
        ];

        if let Some(rows) = self.section(SectionKey::Domain(Domain::Reasoning)) {
            lines.push("## Product Recommendation".to_string());
            for row in rows.iter().take(1) {
                push_all_fields(&mut lines, row);
            }
            lines.push(String::new());
        }

        if let Some(rows) = self.section(SectionKey::Domain(Domain::Architecture)) {
            lines.push("## Architecture".to_string());
            for row in rows.iter().take(2) {
                push_all_fields(&mut lines, row);
                lines.push(String::new());
            }
        }

        if let Some(rows) = self.section(SectionKey::Domain(Domain::Gradle)) {
            lines.push("## Dependencies".to_string());
            for row in rows {
                lines.push(format!(
                    "- **{}:** `{}`",
                    row.get("Name").unwrap_or(""),
                    row.get("Implementation").unwrap_or("")
                ));
            }
            lines.push(String::new());
        }

        let summaries: [(Domain, &str, &str, &str); 3] = [
            (Domain::Performance, "## Performance Rules", "Issue", "Do"),
            (Domain::Security, "## Security Checklist", "Threat", "Mitigation"),
            (Domain::Antipattern, "## Anti-Patterns to Avoid", "Name", "Fix"),
        ];
        for (domain, heading, label_field, detail_field) in summaries {
            if let Some(rows) = self.section(SectionKey::Domain(domain)) {
                lines.push(heading.to_string());
                push_pairs(&mut lines, rows, 3, label_field, detail_field);
                lines.push(String::new());
            }
        }

        if let Some(rows) = self.section(SectionKey::Platform) {
            lines.push(format!("## {} Best Practices", title_case(&self.platform_label)));
            push_pairs(&mut lines, rows, 5, "Guideline", "Do");
            lines.push(String::new());
        }

        lines.join("\n")
    }
}

fn push_all_fields(lines: &mut Vec<String>, row: &Record) {
    for (name, value) in row.iter() {
        lines.push(format!("- **{name}:** {value}"));
    }
}

fn push_pairs(lines: &mut Vec<String>, rows: &[Record], limit: usize, label: &str, detail: &str) {
    for row in rows.iter().take(limit) {
        lines.push(format!(
            "- **{}:** {}",
            row.get(label).unwrap_or(""),
            row.get(detail).unwrap_or("")
        ));
    }
}

/// Upper-case the first letter of every alphabetic run
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

// ============================================================================
// PERSISTENCE
// ============================================================================

/// Write a rendered blueprint under `output_dir`
///
/// Goes to `MASTER.md`, or `pages/<page>.md` for a page-specific override.
/// Missing directories are created.
pub fn persist(
    blueprint: &Blueprint,
    output_dir: &Path,
    page: Option<&str>,
    generated_at: NaiveDateTime,
) -> Result<PersistReport, BlueprintError> {
    let file = match page {
        Some(page) => {
            if page.is_empty() || page.contains(['/', '\\']) || page == "." || page == ".." {
                return Err(BlueprintError::InvalidPage(page.to_string()));
            }
            let pages_dir = output_dir.join(PAGES_DIR);
            fs::create_dir_all(&pages_dir)?;
            pages_dir.join(format!("{page}.md"))
        }
        None => {
            fs::create_dir_all(output_dir)?;
            output_dir.join(MASTER_FILE)
        }
    };

    fs::write(&file, blueprint.render_markdown(generated_at))?;
    tracing::info!(file = %file.display(), sections = blueprint.sections.len(), "Blueprint written");

    Ok(PersistReport {
        file,
        sections: blueprint.section_names(),
        total_entries: blueprint.total_entries(),
    })
}
