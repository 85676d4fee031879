//! Mobile Best Practices CLI
//!
//! Command-line search over the mobile best-practice datasets.

mod output;

use std::io;
use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand};
use colored::Colorize;
use mobilebp_core::{
    classify_domain, domain_votes, persist, BlueprintComposer, CsvStore, Domain, KnowledgeBase,
    Platform, DEFAULT_MAX_RESULTS, STACKS,
};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::output::{render_outcome, render_persist_report, OutputFormat};

/// Mobile Best Practices - BM25 search CLI
#[derive(Parser)]
#[command(name = "mobilebp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search mobile-development best practices")]
#[command(long_about = "Ranks curated mobile-development knowledge (architectures, UI patterns, security, gradle dependencies, ...) against a query with BM25.\n\nDatasets are CSV files read from --data-dir, $MOBILEBP_DATA_DIR, or the platform data directory.")]
struct Cli {
    /// Directory holding the CSV datasets
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Print one line per result
    #[arg(short, long, global = true)]
    compact: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search one domain (auto-detected when not given)
    Search {
        /// Search query
        query: String,
        /// Domain to search
        #[arg(short, long)]
        domain: Option<String>,
        /// Keep only results for this platform
        #[arg(short = 'f', long)]
        filter_platform: Option<String>,
        /// Maximum number of results
        #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_RESULTS)]
        max_results: usize,
    },

    /// Search a platform's guidelines
    Platform {
        /// Search query
        query: String,
        /// Platform (android, ios, flutter, react-native)
        #[arg(short, long)]
        platform: String,
        /// Maximum number of results
        #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_RESULTS)]
        max_results: usize,
    },

    /// Search by technology stack
    Stack {
        /// Search query
        query: String,
        /// Stack keyword (compose, swiftui, bloc, ...)
        #[arg(short, long)]
        stack: String,
        /// Maximum number of results
        #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_RESULTS)]
        max_results: usize,
    },

    /// Show which domain a query routes to
    Classify {
        /// Query to classify
        query: String,
    },

    /// Compose an architecture blueprint and write it to disk
    Blueprint {
        /// Query describing the product
        query: String,
        /// Project name used in the blueprint title
        #[arg(long)]
        project_name: Option<String>,
        /// Write a page-specific blueprint instead of MASTER.md
        #[arg(long)]
        page: Option<String>,
        /// Directory the blueprint is written to
        #[arg(long, default_value = "architecture-blueprint")]
        output_dir: PathBuf,
    },

    /// List domains, platforms and stacks
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let format = OutputFormat::from_flags(cli.json, cli.compact);

    match cli.command {
        Commands::Search {
            query,
            domain,
            filter_platform,
            max_results,
        } => run_search(cli.data_dir, format, &query, domain, filter_platform, max_results),
        Commands::Platform {
            query,
            platform,
            max_results,
        } => run_platform(cli.data_dir, format, &query, &platform, max_results),
        Commands::Stack {
            query,
            stack,
            max_results,
        } => run_stack(cli.data_dir, format, &query, &stack, max_results),
        Commands::Classify { query } => run_classify(format, &query),
        Commands::Blueprint {
            query,
            project_name,
            page,
            output_dir,
        } => run_blueprint(cli.data_dir, format, &query, project_name, page, output_dir),
        Commands::List => run_list(format),
    }
}

/// Logs go to stderr so stdout only carries results
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(false)
        .init();
}

fn open_knowledge_base(data_dir: Option<PathBuf>) -> anyhow::Result<KnowledgeBase<CsvStore>> {
    let store = CsvStore::new(data_dir)?;
    Ok(KnowledgeBase::new(store))
}

/// Run search command
fn run_search(
    data_dir: Option<PathBuf>,
    format: OutputFormat,
    query: &str,
    domain: Option<String>,
    filter_platform: Option<String>,
    max_results: usize,
) -> anyhow::Result<()> {
    // Validate the selector before touching the data directory
    let domain = domain.map(|d| d.parse::<Domain>()).transpose()?;
    let kb = open_knowledge_base(data_dir)?;
    let outcome = kb.search(query, domain, max_results, filter_platform.as_deref())?;
    println!("{}", render_outcome(&outcome, format)?);
    Ok(())
}

/// Run platform command
fn run_platform(
    data_dir: Option<PathBuf>,
    format: OutputFormat,
    query: &str,
    platform: &str,
    max_results: usize,
) -> anyhow::Result<()> {
    let kb = open_knowledge_base(data_dir)?;
    let outcome = kb.search_platform(query, platform, max_results)?;
    println!("{}", render_outcome(&outcome, format)?);
    Ok(())
}

/// Run stack command
fn run_stack(
    data_dir: Option<PathBuf>,
    format: OutputFormat,
    query: &str,
    stack: &str,
    max_results: usize,
) -> anyhow::Result<()> {
    let kb = open_knowledge_base(data_dir)?;
    let outcome = kb.search_stack(query, stack, max_results)?;
    println!("{}", render_outcome(&outcome, format)?);
    Ok(())
}

/// Run classify command
fn run_classify(format: OutputFormat, query: &str) -> anyhow::Result<()> {
    let domain = classify_domain(query);

    match format {
        OutputFormat::Json => {
            let votes: serde_json::Map<String, serde_json::Value> = domain_votes(query)
                .into_iter()
                .filter(|(_, count)| *count > 0)
                .map(|(d, count)| (d.to_string(), count.into()))
                .collect();
            let value = serde_json::json!({ "query": query, "domain": domain, "votes": votes });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Compact => println!("{domain}"),
        OutputFormat::Markdown => {
            println!("{}: {}", "Domain".white().bold(), domain.as_str().cyan().bold());
            for (d, count) in domain_votes(query).into_iter().filter(|(_, count)| *count > 0) {
                println!("  {:<14} {}", d.to_string(), count);
            }
        }
    }
    Ok(())
}

/// Run blueprint command
fn run_blueprint(
    data_dir: Option<PathBuf>,
    format: OutputFormat,
    query: &str,
    project_name: Option<String>,
    page: Option<String>,
    output_dir: PathBuf,
) -> anyhow::Result<()> {
    let kb = open_knowledge_base(data_dir)?;
    let blueprint = BlueprintComposer::new(&kb).compose(query, project_name.as_deref());
    let report = persist(&blueprint, &output_dir, page.as_deref(), Local::now().naive_local())?;
    println!("{}", render_persist_report(&report, format)?);
    Ok(())
}

/// Run list command
fn run_list(format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        let domains: Vec<serde_json::Value> = Domain::ALL
            .iter()
            .map(|d| serde_json::json!({ "domain": d, "file": d.descriptor().identifier }))
            .collect();
        let stacks: serde_json::Map<String, serde_json::Value> = STACKS
            .iter()
            .map(|(name, platform)| (name.to_string(), platform.as_str().into()))
            .collect();
        let value = serde_json::json!({
            "domains": domains,
            "platforms": Platform::names(),
            "stacks": stacks,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", "=== Domains ===".cyan().bold());
    for domain in Domain::ALL {
        println!("  {:<14} {}", domain.as_str(), domain.descriptor().identifier.dimmed());
    }
    println!();

    println!("{}", "=== Platforms ===".cyan().bold());
    for platform in Platform::ALL {
        println!("  {:<14} {}", platform.as_str(), platform.descriptor().identifier.dimmed());
    }
    println!();

    println!("{}", "=== Stacks ===".cyan().bold());
    for (name, platform) in STACKS {
        println!("  {:<16} -> {}", name, platform);
    }
    Ok(())
}
