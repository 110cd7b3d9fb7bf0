//! Configuration for merge operations.

use crate::merge::filters::ExclusionRule;
use crate::merge::filters::default_rules;

/// Base directory against which relative paths in the stream are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkBase {
    /// Paths are relative to the walked root itself.
    #[default]
    Root,

    /// Paths are relative to the root's parent, so the top-level folder
    /// name appears inside every emitted path. Required for archives that
    /// will be restored with a project scope.
    Parent,
}

/// Configuration for merging a directory tree into an archive stream.
///
/// # Examples
///
/// ```
/// use treemerge_core::merge::MergeConfig;
/// use treemerge_core::merge::WalkBase;
///
/// let config = MergeConfig::default()
///     .with_base(WalkBase::Parent)
///     .with_info(vec![("folder".into(), "myproject".into())]);
/// ```
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Exclusion rules applied to every directory and file name.
    ///
    /// Default: [`default_rules`].
    pub rules: Vec<ExclusionRule>,

    /// Base for relative path computation.
    ///
    /// Default: [`WalkBase::Root`].
    pub base: WalkBase,

    /// Key=value pairs emitted as a single leading
    /// `===MERGE_INFO:k=v[,k=v...]===` line when non-empty.
    ///
    /// Default: empty (no metadata line).
    pub info: Vec<(String, String)>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            base: WalkBase::default(),
            info: Vec::new(),
        }
    }
}

impl MergeConfig {
    /// Creates a `MergeConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the exclusion rules.
    #[must_use]
    pub fn with_rules(mut self, rules: Vec<ExclusionRule>) -> Self {
        self.rules = rules;
        self
    }

    /// Sets the relative-path base.
    #[must_use]
    pub fn with_base(mut self, base: WalkBase) -> Self {
        self.base = base;
        self
    }

    /// Sets the metadata pairs for the leading `MERGE_INFO` line.
    #[must_use]
    pub fn with_info(mut self, info: Vec<(String, String)>) -> Self {
        self.info = info;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_config_default() {
        let config = MergeConfig::default();
        assert!(!config.rules.is_empty());
        assert_eq!(config.base, WalkBase::Root);
        assert!(config.info.is_empty());
    }

    #[test]
    fn test_merge_config_builder() {
        let config = MergeConfig::new()
            .with_rules(vec![ExclusionRule::parse("*.bak")])
            .with_base(WalkBase::Parent)
            .with_info(vec![("folder".into(), "proj".into())]);

        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.base, WalkBase::Parent);
        assert_eq!(config.info[0].0, "folder");
    }
}
