//! relnotes Core - Shared foundation for changelog extraction
//!
//! This crate provides the error taxonomy and the configuration layer used by
//! the extractor and the `relnotes` CLI.

pub mod config;
pub mod error;

pub use error::{ChangelogError, ConfigError, RelnotesError, Result};
