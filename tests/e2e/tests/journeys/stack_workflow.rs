//! Stack Workflow Journey
//!
//! Stack search merges a platform's guidelines with routed, platform-filtered
//! domain results.

use mobilebp_core::{OutcomeKind, Platform, SearchError};
use mobilebp_e2e_tests::TestDataDir;

#[test]
fn test_bloc_stack_puts_platform_guidelines_first() {
    let data = TestDataDir::seeded();
    let kb = data.knowledge_base();

    let outcome = kb.search_stack("state management", "bloc", 3).unwrap();

    assert_eq!(outcome.kind, OutcomeKind::Stack(Platform::Flutter));
    assert_eq!(outcome.domain, "stack");
    assert_eq!(outcome.stack.as_deref(), Some("bloc"));
    assert_eq!(outcome.platform.as_deref(), Some("flutter"));
    assert_eq!(outcome.count, 3);

    assert_eq!(outcome.results[0].get("Guideline"), Some("Use BLoC for complex state"));
    assert_eq!(outcome.results[1].get("Guideline"), Some("Dispose controllers"));
    // Architecture rows for other platforms are filtered out
    assert_eq!(outcome.results[2].get("Name"), Some("BLoC"));
}

#[test]
fn test_stack_truncates_merged_results() {
    let data = TestDataDir::seeded();
    let kb = data.knowledge_base();

    let outcome = kb.search_stack("state management", "bloc", 1).unwrap();
    assert_eq!(outcome.count, 1);
    assert!(outcome.results[0].contains("Guideline"));
}

#[test]
fn test_stack_lookup_is_case_insensitive() {
    let data = TestDataDir::seeded();
    let kb = data.knowledge_base();

    let outcome = kb.search_stack("state management", "BLoC", 3).unwrap();
    assert_eq!(outcome.platform.as_deref(), Some("flutter"));
}

#[test]
fn test_view_system_stack_maps_to_android() {
    let data = TestDataDir::seeded();
    let kb = data.knowledge_base();

    let outcome = kb.search_stack("biometric login", "xml", 3).unwrap();
    assert_eq!(outcome.kind, OutcomeKind::Stack(Platform::Android));
    assert_eq!(outcome.platform.as_deref(), Some("android-xml"));
    assert_eq!(outcome.results[0].get("Guideline"), Some("Use BiometricPrompt"));
}

#[test]
fn test_unknown_stack_lists_choices() {
    let data = TestDataDir::seeded();
    let kb = data.knowledge_base();

    let err = kb.search_stack("state", "cobol", 3).unwrap_err();
    assert!(matches!(err, SearchError::UnknownStack { .. }));
    assert!(err.valid_values().contains(&"swiftui"));
    assert!(err.to_string().starts_with("Unknown stack: cobol. Available: compose,"));
}

#[test]
fn test_missing_platform_table_contributes_nothing() {
    let data = TestDataDir::seeded();
    data.remove("platforms/flutter.csv");
    let kb = data.knowledge_base();

    let outcome = kb.search_stack("state management", "bloc", 3).unwrap();
    assert_eq!(outcome.count, 1);
    assert_eq!(outcome.results[0].get("Name"), Some("BLoC"));
}

#[test]
fn test_missing_everything_is_an_empty_outcome() {
    let data = TestDataDir::new_temp();
    let kb = data.knowledge_base();

    let outcome = kb.search_stack("state management", "swiftui", 3).unwrap();
    assert!(outcome.is_empty());
}
