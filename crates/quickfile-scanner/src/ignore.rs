//! Ignore list used to prune the folder walk
//!
//! Patterns are glob patterns matched against the bare name of an entry
//! (never against its full path). A pattern without glob metacharacters is
//! therefore an exact name match.

use glob_match::glob_match;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default patterns, grouped by category
const DEFAULT_PATTERNS: &[(&str, &[&str])] = &[
    ("Node.js / JavaScript", &["node_modules", ".npm", ".next"]),
    ("Python", &["__pycache__", ".venv", "venv", ".virtualenv"]),
    ("Java", &["target"]),
    ("Editor/IDE-specific", &[".vscode", ".idea", ".vs"]),
    ("Build and Output Artifacts", &["build", "dist", "out"]),
    (
        "Compiled Files",
        &[
            "*.class", "*.dll", "*.exe", "*.o", "*.pyc", "*.jar", "*.war", "*.so", "*.a", "*.lib",
        ],
    ),
    ("Logs and Temporary Files", &["*.log", "*.tmp", "*.swp"]),
    (
        "Configuration and Environment Files",
        &[".env", ".env.local", ".env.*"],
    ),
    (
        "Dependency Management",
        &["yarn.lock", "package-lock.json", "pipfile.lock", "Gemfile.lock"],
    ),
    (
        "User-specific and Sensitive Data",
        &[
            ".DS_Store",
            ".gitignore",
            ".git",
            ".gitattributes",
            ".editorconfig",
            ".env.*.local",
            ".history",
            ".bash_history",
            ".zsh_history",
            ".config",
            ".ssh",
        ],
    ),
];

/// Mapping of ignore pattern to the category it belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IgnoreList {
    patterns: BTreeMap<String, String>,
}

impl IgnoreList {
    /// Create an empty ignore list (nothing is pruned)
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in ignore list
    #[must_use]
    pub fn defaults() -> Self {
        let mut list = Self::empty();
        for (category, patterns) in DEFAULT_PATTERNS {
            for pattern in *patterns {
                list.insert(*pattern, *category);
            }
        }
        list
    }

    /// Add a pattern, replacing the category if it was already present
    pub fn insert(&mut self, pattern: impl Into<String>, category: impl Into<String>) {
        self.patterns.insert(pattern.into(), category.into());
    }

    /// Merge another list into this one; entries in `other` win
    pub fn extend(&mut self, other: IgnoreList) {
        self.patterns.extend(other.patterns);
    }

    /// Whether any pattern matches the bare entry name
    pub fn matches(&self, name: &str) -> bool {
        self.category_for(name).is_some()
    }

    /// Category of the first pattern that matches the bare entry name
    pub fn category_for(&self, name: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|(pattern, _)| pattern.as_str() == name || glob_match(pattern, name))
            .map(|(_, category)| category.as_str())
    }

    /// Iterate over `(pattern, category)` pairs in pattern order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.patterns.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    /// Patterns grouped by category
    pub fn by_category(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut grouped: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (pattern, category) in self.iter() {
            grouped.entry(category).or_default().push(pattern);
        }
        grouped
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
