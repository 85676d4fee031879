//! Catalog - static configuration tables
//!
//! Knowledge domains and their dataset descriptors, the platform enumeration
//! and the stack-to-platform map. Built at compile time, never mutated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::SearchError;
use crate::search::DatasetDescriptor;

// ============================================================================
// DOMAINS
// ============================================================================

/// Knowledge domain, each backed by its own dataset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// App architectures (MVVM, MVI, Clean, ...)
    #[default]
    Architecture,
    /// UI patterns and components
    Ui,
    /// Project templates
    Template,
    /// Common mistakes and their fixes
    Antipattern,
    /// Product-type reasoning rules
    Reasoning,
    /// Third-party libraries
    Library,
    /// Performance issues
    Performance,
    /// Testing patterns
    Testing,
    /// Security threats and mitigations
    Security,
    /// Code snippets
    Snippet,
    /// Gradle dependencies
    Gradle,
    /// Design patterns
    #[serde(rename = "designpattern")]
    DesignPattern,
}

impl Domain {
    /// Every domain, in declaration order
    pub const ALL: [Domain; 12] = [
        Domain::Architecture,
        Domain::Ui,
        Domain::Template,
        Domain::Antipattern,
        Domain::Reasoning,
        Domain::Library,
        Domain::Performance,
        Domain::Testing,
        Domain::Security,
        Domain::Snippet,
        Domain::Gradle,
        Domain::DesignPattern,
    ];

    /// Identifier used on the command line and in outcomes
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Architecture => "architecture",
            Domain::Ui => "ui",
            Domain::Template => "template",
            Domain::Antipattern => "antipattern",
            Domain::Reasoning => "reasoning",
            Domain::Library => "library",
            Domain::Performance => "performance",
            Domain::Testing => "testing",
            Domain::Security => "security",
            Domain::Snippet => "snippet",
            Domain::Gradle => "gradle",
            Domain::DesignPattern => "designpattern",
        }
    }

    /// Dataset descriptor for this domain
    pub fn descriptor(&self) -> &'static DatasetDescriptor {
        match self {
            Domain::Architecture => &ARCHITECTURE,
            Domain::Ui => &UI,
            Domain::Template => &TEMPLATE,
            Domain::Antipattern => &ANTIPATTERN,
            Domain::Reasoning => &REASONING,
            Domain::Library => &LIBRARY,
            Domain::Performance => &PERFORMANCE,
            Domain::Testing => &TESTING,
            Domain::Security => &SECURITY,
            Domain::Snippet => &SNIPPET,
            Domain::Gradle => &GRADLE,
            Domain::DesignPattern => &DESIGN_PATTERN,
        }
    }

    /// All domain identifiers
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Domain::as_str).collect()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|domain| domain.as_str() == lower)
            .ok_or_else(|| SearchError::UnknownDomain {
                value: s.to_string(),
                valid: Domain::names(),
            })
    }
}

// ============================================================================
// DATASET DESCRIPTORS
// ============================================================================

static ARCHITECTURE: DatasetDescriptor = DatasetDescriptor {
    identifier: "architectures.csv",
    search_fields: &["Name", "Platform", "Keywords", "Best For", "Tech Stack"],
    output_fields: &[
        "Name", "Platform", "Complexity", "Team Size", "Keywords", "Best For", "Tech Stack",
        "Layers", "Structure", "Anti Patterns", "Notes",
    ],
};

static UI: DatasetDescriptor = DatasetDescriptor {
    identifier: "ui-patterns.csv",
    search_fields: &["Pattern Name", "Platform", "Category", "Keywords", "Use Case"],
    output_fields: &[
        "Pattern Name", "Platform", "Category", "Keywords", "Use Case", "Components",
        "Implementation Notes", "Accessibility",
    ],
};

static TEMPLATE: DatasetDescriptor = DatasetDescriptor {
    identifier: "project-templates.csv",
    search_fields: &["Template Name", "Platform", "Architecture", "Tech Stack", "Features Included"],
    output_fields: &[
        "Template Name", "Platform", "Architecture", "Tech Stack", "Modules", "Folder Structure",
        "Features Included", "Key Dependencies",
    ],
};

static ANTIPATTERN: DatasetDescriptor = DatasetDescriptor {
    identifier: "anti-patterns.csv",
    search_fields: &["Name", "Platform", "Category", "Keywords", "Description"],
    output_fields: &[
        "Name", "Platform", "Category", "Severity", "Description", "Bad Example", "Good Example",
        "Why Bad", "Fix",
    ],
};

static REASONING: DatasetDescriptor = DatasetDescriptor {
    identifier: "reasoning-rules.csv",
    search_fields: &["Product Type", "Platform", "Keywords", "Key Features"],
    output_fields: &[
        "Product Type", "Platform", "Recommended Arch", "Recommended UI", "Color Mood",
        "Key Features", "Anti Patterns", "Key Dependencies", "Notes",
    ],
};

static LIBRARY: DatasetDescriptor = DatasetDescriptor {
    identifier: "libraries.csv",
    search_fields: &["Name", "Platform", "Category", "Keywords", "Description"],
    output_fields: &[
        "Name", "Platform", "Category", "Keywords", "Description", "Gradle/Pod/Pub", "Alternative",
        "Stars", "Notes",
    ],
};

static PERFORMANCE: DatasetDescriptor = DatasetDescriptor {
    identifier: "performance.csv",
    search_fields: &["Category", "Issue", "Platform", "Keywords", "Description"],
    output_fields: &[
        "Category", "Issue", "Platform", "Severity", "Description", "Do", "Dont", "Code Good",
        "Code Bad", "Metric",
    ],
};

static TESTING: DatasetDescriptor = DatasetDescriptor {
    identifier: "testing.csv",
    search_fields: &["Category", "Pattern", "Platform", "Keywords", "Description"],
    output_fields: &[
        "Category", "Pattern", "Platform", "Description", "Framework", "Code Example",
        "Anti Pattern", "Notes",
    ],
};

static SECURITY: DatasetDescriptor = DatasetDescriptor {
    identifier: "security.csv",
    search_fields: &["Category", "Threat", "Platform", "Keywords", "Description"],
    output_fields: &[
        "Category", "Threat", "Platform", "Severity", "Description", "Mitigation", "Code Good",
        "Code Bad", "OWASP Ref",
    ],
};

static SNIPPET: DatasetDescriptor = DatasetDescriptor {
    identifier: "code-snippets.csv",
    search_fields: &["Name", "Category", "Keywords", "Description"],
    output_fields: &["ID", "Name", "Platform", "Category", "Description", "Code", "Imports", "Notes"],
};

static GRADLE: DatasetDescriptor = DatasetDescriptor {
    identifier: "gradle-deps.csv",
    search_fields: &["Name", "Category", "Keywords"],
    output_fields: &[
        "Name", "Category", "Version Catalog Key", "Implementation", "KSP/KAPT", "Version", "Notes",
    ],
};

static DESIGN_PATTERN: DatasetDescriptor = DatasetDescriptor {
    identifier: "design-patterns.csv",
    search_fields: &["Name", "Category", "Platform", "Keywords", "Intent", "Code Smell"],
    output_fields: &[
        "Name", "Category", "Platform", "Intent", "Code Smell", "When To Use", "Structure",
        "Bad Example", "Good Example", "Notes",
    ],
};

// ============================================================================
// PLATFORMS
// ============================================================================

/// Field and dataset layout shared by every platform guideline table
pub const PLATFORM_FIELDS: PlatformFields = PlatformFields {
    search_fields: &["Category", "Guideline", "Description", "Do", "Dont"],
    output_fields: &[
        "Category", "Guideline", "Description", "Do", "Dont", "Code Good", "Code Bad", "Severity",
        "Docs URL",
    ],
};

/// Search/output field lists for platform tables
#[derive(Debug, Clone, Copy)]
pub struct PlatformFields {
    pub search_fields: &'static [&'static str],
    pub output_fields: &'static [&'static str],
}

/// Alias accepted wherever a platform is parsed; filters as plain android
pub const ANDROID_XML_ALIAS: &str = "android-xml";

/// Target mobile platform
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    Android,
    Ios,
    Flutter,
    ReactNative,
}

impl Platform {
    /// Every platform, in declaration order
    pub const ALL: [Platform; 4] = [
        Platform::Android,
        Platform::Ios,
        Platform::Flutter,
        Platform::ReactNative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Flutter => "flutter",
            Platform::ReactNative => "react-native",
        }
    }

    /// Descriptor of this platform's guideline table
    pub fn descriptor(&self) -> DatasetDescriptor {
        let identifier = match self {
            Platform::Android => "platforms/android.csv",
            Platform::Ios => "platforms/ios.csv",
            Platform::Flutter => "platforms/flutter.csv",
            Platform::ReactNative => "platforms/react-native.csv",
        };
        DatasetDescriptor {
            identifier,
            search_fields: PLATFORM_FIELDS.search_fields,
            output_fields: PLATFORM_FIELDS.output_fields,
        }
    }

    /// All platform identifiers (the alias is not listed)
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Platform::as_str).collect()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        if lower == ANDROID_XML_ALIAS {
            return Ok(Platform::Android);
        }
        Self::ALL
            .into_iter()
            .find(|platform| platform.as_str() == lower)
            .ok_or_else(|| SearchError::UnknownPlatform {
                value: s.to_string(),
                valid: Platform::names(),
            })
    }
}

/// Apply filter aliases to a platform filter value (lower-cased)
pub fn normalize_platform_filter(filter: &str) -> String {
    let lower = filter.to_lowercase();
    if lower == ANDROID_XML_ALIAS {
        Platform::Android.as_str().to_string()
    } else {
        lower
    }
}

// ============================================================================
// STACKS
// ============================================================================

/// Technology stack keywords and the platform each belongs to
pub const STACKS: &[(&str, Platform)] = &[
    ("compose", Platform::Android),
    ("jetpack-compose", Platform::Android),
    ("material3", Platform::Android),
    ("hilt", Platform::Android),
    ("room", Platform::Android),
    ("kotlin", Platform::Android),
    // View-system stacks (android-xml)
    ("viewbinding", Platform::Android),
    ("xml", Platform::Android),
    ("swiftui", Platform::Ios),
    ("combine", Platform::Ios),
    ("uikit", Platform::Ios),
    ("swift", Platform::Ios),
    ("flutter", Platform::Flutter),
    ("dart", Platform::Flutter),
    ("bloc", Platform::Flutter),
    ("riverpod", Platform::Flutter),
    ("react-native", Platform::ReactNative),
    ("rn", Platform::ReactNative),
    ("hooks", Platform::ReactNative),
    ("typescript", Platform::ReactNative),
    ("redux", Platform::ReactNative),
];

/// Stacks on the android view system, reported under the `android-xml` label
pub const VIEW_SYSTEM_STACKS: [&str; 2] = ["viewbinding", "xml"];

/// Platform for a stack keyword (case-insensitive)
pub fn stack_platform(stack: &str) -> Result<Platform, SearchError> {
    let lower = stack.to_lowercase();
    STACKS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, platform)| *platform)
        .ok_or_else(|| SearchError::UnknownStack {
            value: stack.to_string(),
            valid: stack_names(),
        })
}

/// All stack keywords, in table order
pub fn stack_names() -> Vec<&'static str> {
    STACKS.iter().map(|(name, _)| *name).collect()
}
