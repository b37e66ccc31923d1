//! CLI commands

mod completions;
mod extract;
mod list;

pub use completions::CompletionsCommand;
pub use extract::ExtractCommand;
pub use list::ListCommand;
