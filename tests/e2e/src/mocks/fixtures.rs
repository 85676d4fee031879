//! Test Data Factory
//!
//! Small CSV datasets shaped like the shipped ones. Row text is chosen so
//! ranking outcomes in the journey tests are predictable: documents that must
//! tie have equal token counts and term frequencies.

/// One dataset: identifier, header row, data rows
#[derive(Debug, Clone)]
pub struct Fixture {
    pub identifier: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Fixture {
    pub fn new(identifier: &str, headers: &[&str]) -> Self {
        Self {
            identifier: identifier.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; cells map to headers by position
    pub fn row(mut self, cells: &[&str]) -> Self {
        self.rows.push(cells.iter().map(|c| c.to_string()).collect());
        self
    }
}

/// Factory for dataset fixtures
pub struct DatasetFactory;

impl DatasetFactory {
    /// Every fixture below except code snippets
    pub fn standard() -> Vec<Fixture> {
        vec![
            Self::ui_navigation(),
            Self::architectures(),
            Self::security(),
            Self::reasoning(),
            Self::performance(),
            Self::gradle(),
            Self::antipatterns(),
            Self::platform_android(),
            Self::platform_flutter(),
        ]
    }

    /// Three UI patterns; rows 1 and 3 are android navigation patterns that tie
    pub fn ui_navigation() -> Fixture {
        Fixture::new(
            "ui-patterns.csv",
            &["Pattern Name", "Platform", "Category", "Keywords", "Use Case", "Components"],
        )
        .row(&[
            "Bottom Navigation",
            "android",
            "Navigation",
            "tabs bottom bar",
            "Top destinations",
            "NavigationBar",
        ])
        .row(&[
            "Tab Bar",
            "ios",
            "Tabs",
            "tabs bottom bar",
            "Top destinations",
            "UITabBarController",
        ])
        .row(&[
            "Navigation Rail",
            "android",
            "Navigation",
            "tabs side rail",
            "Large screens",
            "NavigationRail",
        ])
    }

    pub fn architectures() -> Fixture {
        Fixture::new(
            "architectures.csv",
            &["Name", "Platform", "Complexity", "Keywords", "Best For", "Tech Stack", "Layers"],
        )
        .row(&[
            "BLoC",
            "flutter",
            "Medium",
            "bloc state management streams",
            "Reactive apps",
            "flutter_bloc",
            "presentation, domain, data",
        ])
        .row(&[
            "MVVM",
            "android",
            "Low",
            "viewmodel state management",
            "Most apps",
            "Jetpack ViewModel",
            "ui, domain, data",
        ])
        .row(&[
            "TCA",
            "ios",
            "High",
            "reducer state management",
            "SwiftUI apps",
            "swift-composable-architecture",
            "feature, reducer, store",
        ])
    }

    pub fn security() -> Fixture {
        Fixture::new(
            "security.csv",
            &["Category", "Threat", "Platform", "Severity", "Keywords", "Description", "Mitigation"],
        )
        .row(&[
            "Storage",
            "Tokens in SharedPreferences",
            "android",
            "High",
            "token storage encryption",
            "Plain text tokens readable on rooted devices",
            "Use EncryptedSharedPreferences",
        ])
        .row(&[
            "Storage",
            "Secrets in UserDefaults",
            "ios",
            "High",
            "token keychain storage",
            "UserDefaults is not encrypted",
            "Store secrets in Keychain",
        ])
        .row(&[
            "Network",
            "Missing certificate pinning",
            "android, ios",
            "Medium",
            "ssl pinning network",
            "MITM on hostile networks",
            "Pin certificates",
        ])
    }

    pub fn reasoning() -> Fixture {
        Fixture::new(
            "reasoning-rules.csv",
            &["Product Type", "Platform", "Keywords", "Key Features", "Recommended Arch", "Recommended UI"],
        )
        .row(&[
            "Fintech",
            "android",
            "banking payments wallet",
            "transfers, biometric login",
            "Clean + MVVM",
            "Material 3",
        ])
        .row(&[
            "E-commerce",
            "flutter",
            "shop cart checkout",
            "catalog, cart, payments",
            "BLoC",
            "Material",
        ])
    }

    pub fn performance() -> Fixture {
        Fixture::new(
            "performance.csv",
            &["Category", "Issue", "Platform", "Keywords", "Description", "Do", "Dont"],
        )
        .row(&[
            "Startup",
            "Slow cold start",
            "android",
            "startup baseline profile",
            "Heavy init in Application",
            "Use Baseline Profiles",
            "Init SDKs eagerly",
        ])
    }

    pub fn gradle() -> Fixture {
        Fixture::new(
            "gradle-deps.csv",
            &["Name", "Category", "Keywords", "Implementation", "Version"],
        )
        .row(&[
            "Hilt",
            "DI",
            "hilt dependency injection android",
            "com.google.dagger:hilt-android",
            "2.51",
        ])
        .row(&[
            "Retrofit",
            "Network",
            "retrofit http client payments api",
            "com.squareup.retrofit2:retrofit",
            "2.11",
        ])
    }

    pub fn antipatterns() -> Fixture {
        Fixture::new(
            "anti-patterns.csv",
            &["Name", "Platform", "Category", "Keywords", "Description", "Fix"],
        )
        .row(&[
            "God Activity",
            "android",
            "Architecture",
            "god class activity",
            "All logic inside one Activity for payments and login",
            "Move logic into ViewModels",
        ])
    }

    pub fn platform_android() -> Fixture {
        Fixture::new(
            "platforms/android.csv",
            &["Category", "Guideline", "Description", "Do", "Dont"],
        )
        .row(&[
            "Security",
            "Use BiometricPrompt",
            "biometric login with strong authenticators",
            "Use BiometricPrompt API",
            "Roll your own fingerprint UI",
        ])
        .row(&[
            "UI",
            "Edge to edge",
            "draw behind system bars",
            "Handle insets",
            "Hardcode status bar height",
        ])
    }

    pub fn platform_flutter() -> Fixture {
        Fixture::new(
            "platforms/flutter.csv",
            &["Category", "Guideline", "Description", "Do", "Dont", "Severity"],
        )
        .row(&[
            "State",
            "Use BLoC for complex state",
            "bloc separates state management from widgets",
            "Emit immutable states",
            "Mutate state in widgets",
            "High",
        ])
        .row(&[
            "Performance",
            "Use const constructors",
            "const widgets skip rebuilds",
            "Mark widgets const",
            "Rebuild everything",
            "Medium",
        ])
        .row(&[
            "State",
            "Dispose controllers",
            "state objects own controllers",
            "Dispose in dispose()",
            "Leak controllers",
            "Medium",
        ])
    }
}
