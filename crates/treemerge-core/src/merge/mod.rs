//! Merge side of the codec: walking a tree and serializing it into an
//! ordered archive stream.

pub mod config;
pub mod filters;
pub mod walker;
pub mod writer;

// Re-exports for public API
pub use config::MergeConfig;
pub use config::WalkBase;
pub use filters::DEFAULT_EXCLUDE_PATTERNS;
pub use filters::ExclusionFilter;
pub use filters::ExclusionRule;
pub use filters::default_rules;
pub use walker::TreeWalker;
pub use walker::WalkStats;
pub use walker::WalkedFile;
pub use writer::merge_to_string;
pub use writer::write_merge;
