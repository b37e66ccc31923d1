//! Version section extraction
//!
//! A section starts at `<prefix><version>` followed by one or more newlines
//! and runs until the next occurrence of the section delimiter or the end of
//! the document. The version is always matched as literal text.

use std::collections::HashSet;

use regex::Regex;
use relnotes_core::config::{
    ChangelogConfig, DEFAULT_HEADING_PREFIX, DEFAULT_SECTION_DELIMITER,
};
use relnotes_core::ChangelogError;
use tracing::{debug, instrument};

use crate::types::ReleaseSection;
use crate::Result;

/// Extract the notes for `version` using the default `## v` headings
pub fn extract(version: &str, document: &str) -> Result<String> {
    SectionExtractor::default().extract(version, document)
}

/// Pulls a single version's section out of a changelog
#[derive(Debug, Clone)]
pub struct SectionExtractor {
    heading_prefix: String,
    section_delimiter: String,
}

impl SectionExtractor {
    /// Create an extractor with custom heading and delimiter markers
    pub fn new(heading_prefix: impl Into<String>, section_delimiter: impl Into<String>) -> Self {
        Self {
            heading_prefix: heading_prefix.into(),
            section_delimiter: section_delimiter.into(),
        }
    }

    /// Create an extractor from changelog configuration
    pub fn from_config(config: &ChangelogConfig) -> Self {
        Self::new(&config.heading_prefix, &config.section_delimiter)
    }

    /// Text that introduces a version heading
    pub fn heading_prefix(&self) -> &str {
        &self.heading_prefix
    }

    /// Return the trimmed body of the first section headed by `version`
    #[instrument(skip(self, document), fields(document_len = document.len()))]
    pub fn extract(&self, version: &str, document: &str) -> Result<String> {
        if version.is_empty() {
            return Err(ChangelogError::EmptyVersion);
        }

        let pattern = self.section_pattern(version)?;
        let body = pattern
            .captures(document)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| ChangelogError::VersionNotFound {
                version: version.to_string(),
            })?;

        debug!(start = body.start(), end = body.end(), "section matched");
        Ok(body.as_str().trim_end().to_string())
    }

    /// Like [`extract`](Self::extract), keeping the version alongside the notes
    pub fn extract_section(&self, version: &str, document: &str) -> Result<ReleaseSection> {
        let notes = self.extract(version, document)?;
        Ok(ReleaseSection::new(version, notes))
    }

    /// Versions named by heading lines, in document order, without duplicates
    #[instrument(skip(self, document), fields(document_len = document.len()))]
    pub fn versions(&self, document: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let versions: Vec<String> = document
            .lines()
            .filter_map(|line| line.strip_prefix(self.heading_prefix.as_str()))
            .filter(|version| !version.is_empty())
            .filter(|version| seen.insert(*version))
            .map(str::to_string)
            .collect();

        debug!(count = versions.len(), "collected version headings");
        versions
    }

    fn section_pattern(&self, version: &str) -> Result<Regex> {
        // `.+?` stops at the first delimiter; `$` only matches at end of text.
        let pattern = format!(
            r"(?s){}{}\n+(.+?)(?:{}|$)",
            regex::escape(&self.heading_prefix),
            regex::escape(version),
            regex::escape(&self.section_delimiter),
        );
        Ok(Regex::new(&pattern)?)
    }
}

impl Default for SectionExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_HEADING_PREFIX, DEFAULT_SECTION_DELIMITER)
    }
}
