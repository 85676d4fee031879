//! Result rendering
//!
//! Three shapes for a [`SearchOutcome`]: a markdown report, a compact
//! one-line-per-hit listing, and pretty JSON.

use std::borrow::Cow;

use mobilebp_core::{OutcomeKind, PersistReport, SearchOutcome};

/// Longest field value shown in the markdown report
pub const MARKDOWN_VALUE_LIMIT: usize = 300;

/// Longest field value shown in compact output
pub const COMPACT_VALUE_LIMIT: usize = 200;

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Compact,
    Json,
}

impl OutputFormat {
    /// `--json` takes precedence over `--compact`
    pub fn from_flags(json: bool, compact: bool) -> Self {
        if json {
            OutputFormat::Json
        } else if compact {
            OutputFormat::Compact
        } else {
            OutputFormat::Markdown
        }
    }
}

/// Render a search outcome in the chosen format
pub fn render_outcome(outcome: &SearchOutcome, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Markdown => Ok(render_markdown(outcome)),
        OutputFormat::Compact => Ok(render_compact(outcome)),
        OutputFormat::Json => serde_json::to_string_pretty(outcome),
    }
}

/// Markdown report: heading, summary lines, one block per result
pub fn render_markdown(outcome: &SearchOutcome) -> String {
    let mut lines = Vec::new();
    let platform = outcome.platform.as_deref().unwrap_or("");

    match outcome.kind {
        OutcomeKind::Platform(_) => {
            lines.push("## Mobile Best Practices - Platform Guidelines".to_string());
            lines.push(format!("**Platform:** {platform} | **Query:** {}", outcome.query));
        }
        OutcomeKind::Stack(_) => {
            lines.push("## Mobile Best Practices - Stack Search".to_string());
            lines.push(format!(
                "**Stack:** {} ({platform}) | **Query:** {}",
                outcome.stack.as_deref().unwrap_or(""),
                outcome.query
            ));
        }
        OutcomeKind::Domain(domain) => {
            lines.push("## Mobile Best Practices - Search Results".to_string());
            lines.push(format!("**Domain:** {domain} | **Query:** {}", outcome.query));
        }
    }

    match &outcome.source {
        Some(file) => lines.push(format!("**Source:** {file} | **Found:** {} results", outcome.count)),
        None => lines.push(format!("**Found:** {} results", outcome.count)),
    }
    lines.push(String::new());

    for (i, row) in outcome.results.iter().enumerate() {
        lines.push(format!("### Result {}", i + 1));
        for (name, value) in row.iter() {
            lines.push(format!("- **{name}:** {}", truncate_chars(value, MARKDOWN_VALUE_LIMIT)));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Compact listing: `[domain] q="..." found=N`, then `#i key: value | ...`
pub fn render_compact(outcome: &SearchOutcome) -> String {
    let mut lines = vec![format!(
        "[{}] q=\"{}\" found={}",
        outcome.domain, outcome.query, outcome.count
    )];

    for (i, row) in outcome.results.iter().enumerate() {
        let parts: Vec<String> = row
            .iter()
            .filter_map(|(name, value)| {
                let value = value.trim();
                (!value.is_empty())
                    .then(|| format!("{name}: {}", truncate_chars(value, COMPACT_VALUE_LIMIT)))
            })
            .collect();
        lines.push(format!("#{} {}", i + 1, parts.join(" | ")));
    }

    lines.join("\n")
}

/// Summary printed after a blueprint is written
pub fn render_persist_report(report: &PersistReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report),
        OutputFormat::Markdown | OutputFormat::Compact => Ok(format!(
            "Blueprint saved to: {}\nSections: {}\nTotal entries: {}",
            report.file.display(),
            report.sections.join(", "),
            report.total_entries
        )),
    }
}

/// Cut `value` to `limit` characters, marking the cut with `...`
pub fn truncate_chars(value: &str, limit: usize) -> Cow<'_, str> {
    match value.char_indices().nth(limit) {
        Some((byte_index, _)) => Cow::Owned(format!("{}...", &value[..byte_index])),
        None => Cow::Borrowed(value),
    }
}
