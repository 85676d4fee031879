//! Catalog Journey
//!
//! Walks every configured domain and platform against a seeded data
//! directory: each either answers or reports its dataset as unavailable.

use mobilebp_core::{classify_domain, Domain, Platform, SearchError, DEFAULT_MAX_RESULTS};
use mobilebp_e2e_tests::{DatasetFactory, TestDataDir};

#[test]
fn test_every_domain_answers_or_reports_missing_dataset() {
    let data = TestDataDir::seeded();
    let kb = data.knowledge_base();
    let seeded: Vec<String> = DatasetFactory::standard()
        .into_iter()
        .map(|f| f.identifier)
        .collect();

    for domain in Domain::ALL {
        let identifier = domain.descriptor().identifier;
        match kb.search("android state", Some(domain), DEFAULT_MAX_RESULTS, None) {
            Ok(outcome) => {
                assert!(seeded.iter().any(|s| s == identifier), "{identifier} was not seeded");
                assert!(outcome.count <= DEFAULT_MAX_RESULTS);
                assert_eq!(outcome.source.as_deref(), Some(identifier));
            }
            Err(SearchError::DatasetUnavailable { dataset }) => {
                assert_eq!(dataset, identifier);
                assert!(!seeded.iter().any(|s| s == identifier));
            }
            Err(other) => panic!("unexpected error for {domain}: {other}"),
        }
    }
}

#[test]
fn test_every_platform_parses_and_resolves_its_table() {
    let data = TestDataDir::seeded();
    let kb = data.knowledge_base();

    for platform in Platform::ALL {
        let result = kb.search_platform("state", platform.as_str(), 3);
        match platform {
            Platform::Android | Platform::Flutter => assert!(result.is_ok()),
            Platform::Ios | Platform::ReactNative => assert!(matches!(
                result,
                Err(SearchError::DatasetUnavailable { .. })
            )),
        }
    }
}

#[test]
fn test_router_sends_queries_to_seeded_tables() {
    assert_eq!(classify_domain("mvvm"), Domain::Architecture);
    assert_eq!(classify_domain("bottom sheet with tabs"), Domain::Ui);
    assert_eq!(classify_domain("keystore encrypt"), Domain::Security);
    assert_eq!(classify_domain("nothing relevant here"), Domain::Architecture);
}
