//! Changelog types

use serde::{Deserialize, Serialize};

/// The notes belonging to one version of the changelog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseSection {
    /// Version identifier as requested (without the heading prefix)
    pub version: String,
    /// Section body with trailing whitespace removed
    pub notes: String,
}

impl ReleaseSection {
    /// Create a new release section
    pub fn new(version: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            notes: notes.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_json_shape() {
        let section = ReleaseSection::new("1.0.0", "Initial release.");
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["version"], "1.0.0");
        assert_eq!(json["notes"], "Initial release.");
    }
}
