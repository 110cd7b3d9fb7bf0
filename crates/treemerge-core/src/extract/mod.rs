//! Extract side of the codec: parsing an archive stream and rebuilding a
//! directory tree, optionally scoped to one project.

pub mod engine;
pub mod parser;
pub mod report;
pub mod scope;

// Re-exports for public API
pub use engine::extract_archive;
pub use engine::restore_scoped;
pub use parser::ArchiveParser;
pub use report::ExtractReport;
pub use scope::resolve_scope;
