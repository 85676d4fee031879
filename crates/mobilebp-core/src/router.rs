//! Domain Router
//!
//! Picks a knowledge domain for a free-text query by keyword voting. Each
//! trigger phrase found as a literal substring of the lower-cased query is one
//! vote for its domain. Multi-word phrases match as written, no tokenizing.
//! The first domain (table order) with the most votes wins; a query with no
//! votes at all goes to [`Domain::Architecture`].

use crate::catalog::Domain;

/// Domain used when no trigger phrase matches
pub const DEFAULT_DOMAIN: Domain = Domain::Architecture;

/// Trigger phrases per domain, in tie-break order
pub const DOMAIN_KEYWORDS: &[(Domain, &[&str])] = &[
    (
        Domain::Architecture,
        &[
            "mvvm", "mvi", "viper", "bloc", "clean", "architecture", "repository", "coordinator",
            "redux", "tca", "layer", "module",
        ],
    ),
    (
        Domain::Ui,
        &[
            "button", "navigation", "bottom sheet", "tab", "list", "card", "dialog", "modal",
            "drawer", "scaffold", "appbar", "toolbar",
        ],
    ),
    (
        Domain::Template,
        &[
            "project", "template", "setup", "scaffold", "starter", "boilerplate", "create",
            "new app", "init",
        ],
    ),
    (
        Domain::Antipattern,
        &[
            "anti-pattern", "antipattern", "mistake", "bad practice", "wrong", "avoid", "smell",
            "god class", "leak",
        ],
    ),
    (
        Domain::Reasoning,
        &[
            "ecommerce", "e-commerce", "banking", "fintech", "social", "healthcare", "delivery",
            "fitness", "education", "food", "chat", "streaming",
        ],
    ),
    (
        Domain::Library,
        &[
            "library", "dependency", "package", "retrofit", "hilt", "room", "coil", "ktor",
            "alamofire", "dio", "riverpod", "redux",
        ],
    ),
    (
        Domain::Performance,
        &[
            "performance", "memory", "battery", "startup", "render", "fps", "lag", "slow",
            "optimize", "profil", "baseline",
        ],
    ),
    (
        Domain::Testing,
        &[
            "test", "unit test", "ui test", "espresso", "xctest", "mockito", "junit",
            "widget test", "integration",
        ],
    ),
    (
        Domain::Security,
        &[
            "security", "encrypt", "keychain", "keystore", "proguard", "obfuscate", "ssl", "pin",
            "biometric", "auth token",
        ],
    ),
    (
        Domain::Snippet,
        &[
            "snippet", "code", "example", "template code", "viewmodel code", "compose screen",
            "room setup", "hilt module", "bottom nav", "paging", "datastore", "theme code",
        ],
    ),
    (
        Domain::Gradle,
        &[
            "gradle", "dependency", "implementation", "ksp", "kapt", "version catalog", "libs.",
            "bom", "plugin", "classpath",
        ],
    ),
    (
        Domain::DesignPattern,
        &[
            "design pattern", "pattern", "factory", "observer", "strategy", "builder pattern",
            "adapter pattern", "decorator", "facade", "singleton pattern", "command pattern",
            "state pattern", "mediator", "proxy pattern", "composite", "code smell",
            "refactor pattern", "visitor", "chain of responsibility", "template method",
            "repository pattern", "mapper",
        ],
    ),
];

/// Vote count per domain, in table order
pub fn domain_votes(query: &str) -> Vec<(Domain, usize)> {
    let lower = query.to_lowercase();
    DOMAIN_KEYWORDS
        .iter()
        .map(|(domain, phrases)| {
            let votes = phrases.iter().filter(|phrase| lower.contains(*phrase)).count();
            (*domain, votes)
        })
        .collect()
}

/// Route a query to the domain with the most keyword votes
pub fn classify_domain(query: &str) -> Domain {
    let mut best = (DEFAULT_DOMAIN, 0);
    for (domain, votes) in domain_votes(query) {
        // Strictly greater: earlier domains win ties
        if votes > best.1 {
            best = (domain, votes);
        }
    }
    tracing::debug!(query, domain = %best.0, votes = best.1, "Classified query domain");
    best.0
}
