//! In-memory changelog documents

use std::path::{Path, PathBuf};

use relnotes_core::ChangelogError;
use tracing::{debug, instrument};

use crate::Result;

/// A changelog read fully into memory
#[derive(Debug, Clone)]
pub struct ChangelogDocument {
    path: Option<PathBuf>,
    content: String,
}

impl ChangelogDocument {
    /// Read a changelog file.
    ///
    /// Line endings (`\r\n` and lone `\r`) are normalized to `\n`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ChangelogError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(bytes = content.len(), "changelog loaded");

        Ok(Self {
            path: Some(path.to_path_buf()),
            content: normalize_line_endings(content),
        })
    }

    /// Wrap text that did not come from a file
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            path: None,
            content: normalize_line_endings(content.into()),
        }
    }

    /// Path the document was loaded from, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Full document text
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// `\r\n` and lone `\r` both become `\n`.
fn normalize_line_endings(content: String) -> String {
    if content.contains('\r') {
        content.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_reads_whole_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");
        std::fs::write(&path, "## v1.0.0\n\nInitial release.\n").unwrap();

        let doc = ChangelogDocument::load(&path).unwrap();
        assert_eq!(doc.content(), "## v1.0.0\n\nInitial release.\n");
        assert_eq!(doc.path(), Some(path.as_path()));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");

        let err = ChangelogDocument::load(&path).unwrap_err();
        match err {
            ChangelogError::ReadFailed { path: failed, source } => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_crlf_is_normalized() {
        let doc = ChangelogDocument::from_content("## v1.0.0\r\n\r\nInitial release.\r\n");
        assert_eq!(doc.content(), "## v1.0.0\n\nInitial release.\n");
        assert!(doc.path().is_none());
    }

    #[test]
    fn test_lone_carriage_return_is_newline() {
        let doc = ChangelogDocument::from_content("a\rb\r\nc\n");
        assert_eq!(doc.content(), "a\nb\nc\n");
    }

    #[test]
    fn test_cr_only_changelog_extracts() {
        let doc = ChangelogDocument::from_content(
            "## v1.0.0\r\rInitial release.\r\r## v0.1.0\r\rOld.\r",
        );
        assert_eq!(
            crate::extract("1.0.0", doc.content()).unwrap(),
            "Initial release."
        );
        assert_eq!(crate::extract("0.1.0", doc.content()).unwrap(), "Old.");
    }
}
