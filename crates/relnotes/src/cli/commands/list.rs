//! List command - show which versions the changelog covers

use std::io::Write;
use std::path::Path;

use clap::Args;
use tracing::info;

use crate::cli::{output, Cli, OutputFormat};

/// List the versions that have a section in the changelog
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only show the first N versions
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

impl ListCommand {
    /// Execute the list command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let cwd = std::env::current_dir()?;
        let stdout = std::io::stdout();
        self.run(cli, &cwd, &mut stdout.lock())
    }

    fn run(&self, cli: &Cli, cwd: &Path, out: &mut impl Write) -> anyhow::Result<()> {
        info!(limit = ?self.limit, format = ?cli.format, "executing list command");

        let (document, extractor) = cli.open_changelog(cwd)?;
        let mut versions = extractor.versions(document.content());
        if let Some(limit) = self.limit {
            versions.truncate(limit);
        }

        if versions.is_empty() && !cli.quiet && cli.format == OutputFormat::Text {
            let source = document.path().map(output::path).unwrap_or_default();
            output::warning(&format!(
                "No \"{}\" headings found in {}",
                extractor.heading_prefix(),
                source
            ));
        }

        match cli.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(&versions)?)?;
            }
            OutputFormat::Text => {
                for version in &versions {
                    writeln!(out, "{}", version)?;
                }
            }
        }

        Ok(())
    }
}
