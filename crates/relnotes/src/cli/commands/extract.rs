//! Extract command - print one version's release notes

use std::io::Write;
use std::path::Path;

use clap::Args;
use tracing::info;

use crate::cli::{Cli, OutputFormat, UsageError};

/// Print the release notes for a version
#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Version to print notes for, without the leading "v"
    #[arg(value_name = "VERSION")]
    pub target: Option<String>,
}

impl ExtractCommand {
    /// Execute the extract command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let cwd = std::env::current_dir()?;
        let stdout = std::io::stdout();
        self.run(cli, &cwd, &mut stdout.lock())
    }

    fn run(&self, cli: &Cli, cwd: &Path, out: &mut impl Write) -> anyhow::Result<()> {
        let version = match self.target.as_deref() {
            Some(version) if !version.is_empty() => version,
            _ => return Err(UsageError::MissingVersion.into()),
        };
        info!(version, format = ?cli.format, "executing extract command");

        let (document, extractor) = cli.open_changelog(cwd)?;
        let section = extractor.extract_section(version, document.content())?;

        match cli.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(&section)?)?;
            }
            OutputFormat::Text => {
                writeln!(out, "{}", section.notes)?;
            }
        }

        Ok(())
    }
}
