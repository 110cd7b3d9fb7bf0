//! CLI command implementations.

pub mod completion;
pub mod extract;
pub mod merge;
pub mod restore;
