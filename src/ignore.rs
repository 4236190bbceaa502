//! Exclusion patterns for the manifest builder.
//! Patterns use shell-glob semantics: `*` may cross path separators and a
//! leading `**/` also matches at the top level, so `**/*.meta` excludes `foo.meta`.

use crate::error::{Error, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use log::debug;

/// Editor ignore rules excluded from the manifest by default.
pub const DEFAULT_EXCLUDE_PATTERNS: [&str; 16] = [
    ".idea",
    ".venv",
    "Library",
    "obj",
    "Packages",
    "ProjectSettings",
    "Temp",
    "UserSettings",
    "*.DotSettings.user",
    "*.DotSettings",
    "*.sln",
    "**/.DS_Store",
    "**/.git",
    "**/*.csproj",
    "**/Thumbs.db",
    "**/*.meta",
];

pub fn default_exclusion_patterns() -> Vec<String> {
    DEFAULT_EXCLUDE_PATTERNS.iter().map(|p| p.to_string()).collect()
}

/// Rewrites Windows separators to `/`.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// A compiled set of exclusion patterns.
///
/// A path is excluded when any pattern matches it; pattern order only
/// decides which one gets reported.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    patterns: Vec<String>,
    glob_set: GlobSet,
}

impl ExclusionSet {
    /// Compiles `patterns` into a case-sensitive matcher.
    ///
    /// # Errors
    /// * `Error::InvalidPattern` naming the first pattern that fails to compile
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_case(patterns, false)
    }

    /// Compiles `patterns`, optionally ignoring case as Windows filesystems do.
    pub fn with_case<I, S>(patterns: I, case_insensitive: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GlobSetBuilder::new();
        let mut compiled = Vec::new();
        for pattern in patterns {
            let pattern = normalize_separators(pattern.as_ref());
            let glob = GlobBuilder::new(&pattern)
                .case_insensitive(case_insensitive)
                .build()
                .map_err(|e| Error::InvalidPattern {
                    pattern: pattern.clone(),
                    reason: e.kind().to_string(),
                })?;
            builder.add(glob);
            compiled.push(pattern);
        }
        let glob_set = builder.build().map_err(|e| Error::InvalidPattern {
            pattern: e.glob().unwrap_or_default().to_string(),
            reason: e.kind().to_string(),
        })?;
        debug!("Compiled {} exclusion patterns", compiled.len());

        Ok(Self { patterns: compiled, glob_set })
    }

    /// Returns the first configured pattern matching `path`, if any.
    pub fn matching_pattern(&self, path: &str) -> Option<&str> {
        let path = normalize_separators(path);
        self.glob_set
            .matches(path.as_str())
            .into_iter()
            .min()
            .map(|index| self.patterns[index].as_str())
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        self.glob_set.is_match(normalize_separators(path).as_str())
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
