//! Blueprint Workflow Journey
//!
//! Compose a multi-domain blueprint from on-disk datasets, render it and
//! persist it as MASTER.md or a page override.

use std::fs;

use chrono::NaiveDate;
use mobilebp_core::{persist, BlueprintComposer, Platform};
use mobilebp_e2e_tests::TestDataDir;

const QUERY: &str = "fintech banking app with biometric login android";

fn generated_at() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .and_then(|d| d.and_hms_opt(8, 30, 0))
        .unwrap()
}

#[test]
fn test_blueprint_collects_sections_in_order() {
    let data = TestDataDir::seeded();
    let kb = data.knowledge_base();

    let blueprint = BlueprintComposer::new(&kb).compose(QUERY, Some("Ledger"));

    assert_eq!(blueprint.platform, Platform::Android);
    // No code-snippets dataset is seeded, so that section is skipped
    assert_eq!(
        blueprint.section_names(),
        vec![
            "reasoning",
            "architecture",
            "gradle",
            "performance",
            "security",
            "antipattern",
            "platform"
        ]
    );
    assert_eq!(blueprint.total_entries(), 8);
}

#[test]
fn test_blueprint_markdown_content() {
    let data = TestDataDir::seeded();
    let kb = data.knowledge_base();

    let markdown = BlueprintComposer::new(&kb)
        .compose(QUERY, Some("Ledger"))
        .render_markdown(generated_at());

    assert!(markdown.starts_with("# Architecture Blueprint - Ledger\n"));
    assert!(markdown.contains("**Generated:** 2026-10-19 08:30"));
    assert!(markdown.contains(&format!("**Query:** {QUERY}")));
    assert!(markdown.contains("**Platform:** android"));
    assert!(markdown.contains("## Product Recommendation\n- **Product Type:** Fintech"));
    assert!(markdown.contains("- **Recommended Arch:** Clean + MVVM"));
    assert!(markdown.contains("## Architecture\n- **Name:** MVVM"));
    assert!(markdown.contains("## Dependencies\n- **Hilt:** `com.google.dagger:hilt-android`"));
    assert!(markdown.contains("## Performance Rules\n- **Slow cold start:** Use Baseline Profiles"));
    assert!(markdown.contains("- **Tokens in SharedPreferences:** Use EncryptedSharedPreferences"));
    assert!(markdown.contains("- **Missing certificate pinning:** Pin certificates"));
    assert!(markdown.contains("## Anti-Patterns to Avoid\n- **God Activity:** Move logic into ViewModels"));
    assert!(markdown.contains("## Android Best Practices\n- **Use BiometricPrompt:** Use BiometricPrompt API"));
}

#[test]
fn test_missing_datasets_shrink_the_blueprint() {
    let data = TestDataDir::seeded();
    data.remove("gradle-deps.csv");
    data.remove("platforms/android.csv");
    let kb = data.knowledge_base();

    let blueprint = BlueprintComposer::new(&kb).compose(QUERY, None);
    let markdown = blueprint.render_markdown(generated_at());

    assert!(!blueprint.section_names().contains(&"gradle".to_string()));
    assert!(!blueprint.section_names().contains(&"platform".to_string()));
    assert!(markdown.starts_with("# Architecture Blueprint - MyApp\n"));
    assert!(!markdown.contains("## Dependencies"));
    assert!(!markdown.contains("Best Practices"));
}

#[test]
fn test_persist_master_then_page() {
    let data = TestDataDir::seeded();
    let kb = data.knowledge_base();
    let output_dir = data.scratch("architecture-blueprint");

    let blueprint = BlueprintComposer::new(&kb).compose(QUERY, Some("Ledger"));

    let master = persist(&blueprint, &output_dir, None, generated_at()).unwrap();
    assert_eq!(master.file, output_dir.join("MASTER.md"));
    assert_eq!(master.sections.len(), 7);
    assert_eq!(master.total_entries, 8);
    let written = fs::read_to_string(&master.file).unwrap();
    assert_eq!(written, blueprint.render_markdown(generated_at()));

    let page = persist(&blueprint, &output_dir, Some("login"), generated_at()).unwrap();
    assert_eq!(page.file, output_dir.join("pages").join("login.md"));
    assert!(page.file.is_file());

    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["total_entries"], 8);
    assert_eq!(json["sections"][0], "reasoning");
}
