//! relnotes Changelog - Release notes extraction from changelog documents
//!
//! This crate loads a changelog into memory and pulls out the body of the
//! section that belongs to a single version.

pub mod document;
pub mod extractor;
pub mod types;

pub use document::ChangelogDocument;
pub use extractor::{extract, SectionExtractor};
pub use types::ReleaseSection;

/// Result type for changelog operations
pub type Result<T> = std::result::Result<T, relnotes_core::ChangelogError>;
