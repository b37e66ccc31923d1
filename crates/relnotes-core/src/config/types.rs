//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::{DEFAULT_CHANGELOG_FILE, DEFAULT_HEADING_PREFIX, DEFAULT_SECTION_DELIMITER};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changelog configuration
    pub changelog: ChangelogConfig,
}

/// Changelog configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file path, relative to the working directory
    pub file: PathBuf,

    /// Literal text that introduces a version heading (e.g. "## v")
    pub heading_prefix: String,

    /// Literal marker that ends a section body (e.g. "##")
    pub section_delimiter: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_CHANGELOG_FILE),
            heading_prefix: DEFAULT_HEADING_PREFIX.to_string(),
            section_delimiter: DEFAULT_SECTION_DELIMITER.to_string(),
        }
    }
}
