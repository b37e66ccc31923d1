//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "relnotes.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "relnotes.yaml";

/// Changelog file read when nothing else is configured
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Text that introduces a version heading
pub const DEFAULT_HEADING_PREFIX: &str = "## v";

/// Marker that terminates a section body
pub const DEFAULT_SECTION_DELIMITER: &str = "##";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".relnotes.toml",
        ".relnotes.yaml",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_preferred_first() {
        assert_eq!(config_file_names()[0], DEFAULT_CONFIG_TOML);
    }

    #[test]
    fn test_hidden_variants_searched_last() {
        let names = config_file_names();
        assert_eq!(names.len(), 4);
        assert!(names[2..].iter().all(|n| n.starts_with('.')));
    }
}
