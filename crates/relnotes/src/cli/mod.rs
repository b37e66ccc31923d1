//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::debug;

use relnotes_changelog::{ChangelogDocument, SectionExtractor};
use relnotes_core::config::{load_config, load_config_or_default, Config};

use commands::{CompletionsCommand, ExtractCommand, ListCommand};

/// relnotes - Print the release notes for one version of a changelog
#[derive(Debug, Parser)]
#[command(name = "relnotes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress diagnostics on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    /// Changelog file (overrides the configured file)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Configuration file (skips the search for relnotes.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub extract: ExtractCommand,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the versions that have a section in the changelog
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Command-line misuse that clap cannot detect on its own
#[derive(Debug, Error)]
pub enum UsageError {
    /// No version given and no subcommand selected
    #[error("missing required argument <VERSION>")]
    MissingVersion,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> anyhow::Result<()> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match &self.command {
            Some(Commands::List(cmd)) => cmd.execute(self),
            Some(Commands::Completions(cmd)) => cmd.execute(self),
            None => self.extract.execute(self),
        }
    }

    /// Resolve configuration for `cwd`, honoring `--config`
    pub fn load_config(&self, cwd: &Path) -> anyhow::Result<Config> {
        let config = match &self.config {
            Some(path) => load_config(&cwd.join(path))?,
            None => load_config_or_default(cwd)?.0,
        };
        Ok(config)
    }

    /// Read the changelog and build the matching extractor
    pub fn open_changelog(&self, cwd: &Path) -> anyhow::Result<(ChangelogDocument, SectionExtractor)> {
        let config = self.load_config(cwd)?;
        let file = self
            .file
            .clone()
            .unwrap_or_else(|| config.changelog.file.clone());
        let path = cwd.join(file);
        debug!(path = %path.display(), "opening changelog");

        let document = ChangelogDocument::load(&path)?;
        Ok((document, SectionExtractor::from_config(&config.changelog)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_version_argument() {
        let cli = Cli::try_parse_from(["relnotes", "1.2.3"]).unwrap();
        assert_eq!(cli.extract.target.as_deref(), Some("1.2.3"));
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_without_arguments() {
        let cli = Cli::try_parse_from(["relnotes"]).unwrap();
        assert!(cli.extract.target.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_list_subcommand() {
        let cli = Cli::try_parse_from(["relnotes", "list", "--format", "json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List(_))));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_global_options() {
        let cli = Cli::try_parse_from([
            "relnotes",
            "-C",
            "/tmp",
            "--file",
            "HISTORY.md",
            "-q",
            "0.1.0",
        ])
        .unwrap();
        assert_eq!(cli.directory, Some(PathBuf::from("/tmp")));
        assert_eq!(cli.file, Some(PathBuf::from("HISTORY.md")));
        assert!(cli.quiet);
        assert_eq!(cli.extract.target.as_deref(), Some("0.1.0"));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["relnotes", "--bogus", "1.0.0"]).is_err());
    }

    #[test]
    fn test_open_changelog_uses_config_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("relnotes.toml"),
            "[changelog]\nfile = \"HISTORY.md\"\n",
        )
        .unwrap();
        std::fs::write(temp.path().join("HISTORY.md"), "## v1.0.0\n\nFrom history.\n").unwrap();

        let cli = Cli::try_parse_from(["relnotes", "1.0.0"]).unwrap();
        let (document, extractor) = cli.open_changelog(temp.path()).unwrap();
        assert_eq!(
            extractor.extract("1.0.0", document.content()).unwrap(),
            "From history."
        );
    }

    #[test]
    fn test_file_flag_overrides_config() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("relnotes.toml"),
            "[changelog]\nfile = \"HISTORY.md\"\n",
        )
        .unwrap();
        std::fs::write(temp.path().join("NEWS.md"), "## v1.0.0\n\nFrom news.\n").unwrap();

        let cli = Cli::try_parse_from(["relnotes", "--file", "NEWS.md", "1.0.0"]).unwrap();
        let (document, _) = cli.open_changelog(temp.path()).unwrap();
        assert_eq!(document.path(), Some(temp.path().join("NEWS.md").as_path()));
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::try_parse_from(["relnotes", "--config", "missing.toml", "1.0.0"]).unwrap();
        let err = cli.load_config(temp.path()).unwrap_err();
        assert_eq!(crate::exit_codes::from_error(&err), crate::exit_codes::CONFIG_ERROR);
    }
}
