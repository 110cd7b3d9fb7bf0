//! Name-based exclusion rules for the tree walk.
//!
//! Rules are matched case-sensitively against a bare file or directory
//! name, never against a full path. The rule set is an explicit
//! configuration value so tests and callers can substitute their own list
//! without process-wide side effects.

/// A single exclusion rule.
///
/// # Examples
///
/// ```
/// use treemerge_core::merge::ExclusionRule;
///
/// let rule = ExclusionRule::parse("*.pyc");
/// assert!(rule.matches("module.pyc"));
/// assert!(!rule.matches("module.py"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionRule {
    /// Matches a name exactly.
    Exact(String),

    /// Matches any name containing the fragment.
    Contains(String),

    /// Matches any name ending with the suffix (parsed from `*.ext`).
    Suffix(String),
}

impl ExclusionRule {
    /// Parses a pattern string into a rule.
    ///
    /// `*suffix` patterns become [`ExclusionRule::Suffix`]; everything else
    /// becomes [`ExclusionRule::Contains`], which also covers exact name
    /// matches. [`ExclusionRule::Exact`] is available for callers that need
    /// strict matching.
    #[must_use]
    pub fn parse(pattern: &str) -> Self {
        pattern.strip_prefix('*').map_or_else(
            || Self::Contains(pattern.to_string()),
            |suffix| Self::Suffix(suffix.to_string()),
        )
    }

    /// Tests a bare file or directory name against this rule.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Exact(exact) => name == exact,
            Self::Contains(fragment) => name.contains(fragment.as_str()),
            Self::Suffix(suffix) => name.ends_with(suffix.as_str()),
        }
    }
}

/// Decides whether a name is excluded from the archive.
///
/// Applied to both directory and file names during the walk. An excluded
/// directory is never descended into; an excluded file is counted as
/// skipped and not written.
///
/// # Examples
///
/// ```
/// use treemerge_core::merge::ExclusionFilter;
///
/// let filter = ExclusionFilter::default();
/// assert!(filter.is_excluded(".git"));
/// assert!(filter.is_excluded("cache.pyc"));
/// assert!(!filter.is_excluded("main.rs"));
/// ```
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    rules: Vec<ExclusionRule>,
}

impl Default for ExclusionFilter {
    /// Creates a filter with [`default_rules`].
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl ExclusionFilter {
    /// Creates a filter from an explicit rule list.
    #[must_use]
    pub fn new(rules: Vec<ExclusionRule>) -> Self {
        Self { rules }
    }

    /// Creates a filter that excludes nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Creates a filter by parsing a list of pattern strings.
    #[must_use]
    pub fn from_patterns<S: AsRef<str>>(patterns: &[S]) -> Self {
        Self::new(patterns.iter().map(|p| ExclusionRule::parse(p.as_ref())).collect())
    }

    /// Returns `true` if the name matches any configured rule.
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(name))
    }

    /// Returns the configured rules.
    #[must_use]
    pub fn rules(&self) -> &[ExclusionRule] {
        &self.rules
    }
}

/// Pattern strings behind [`default_rules`].
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[
    ".git",
    ".svn",
    ".hg",
    ".gitignore",
    ".gitattributes",
    "node_modules",
    "bower_components",
    "vendor",
    "target",
    "build",
    "dist",
    "out",
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
    ".tox",
    "venv",
    ".venv",
    "env",
    ".env",
    "bin",
    "obj",
    "packages",
    "*.pyc",
    "*.pyo",
    "*.class",
    "*.o",
    "*.so",
    "*.dll",
    "*.dylib",
    "*.exe",
    "*.jar",
    "*.war",
    "*.ear",
    "*.log",
    "*.tmp",
    "*.temp",
    "Thumbs.db",
    ".DS_Store",
    "desktop.ini",
];

/// Returns the default rule set covering version-control metadata,
/// dependency caches, build output, and common binary artifacts.
#[must_use]
pub fn default_rules() -> Vec<ExclusionRule> {
    DEFAULT_EXCLUDE_PATTERNS
        .iter()
        .map(|p| ExclusionRule::parse(p))
        .collect()
}
