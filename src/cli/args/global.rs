//! Global CLI options shared across all commands
//!
//! Consolidates the global flags into a single struct so handlers take one
//! argument instead of a growing parameter list.

use std::path::Path;

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// Values here already include their environment variable fallbacks (clap
/// reads `STCLI_*`). Config file values are merged later by
/// [`Settings::resolve`](crate::config::Settings::resolve).
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format override (None defers to the profile preference)
    pub format: Option<OutputFormat>,

    /// Write output to this file instead of stdout
    pub output: Option<String>,

    /// Profile name override (bypasses active_profile in config)
    pub profile: Option<String>,

    /// Custom config file path (defaults to ~/.stcli/config.yaml)
    pub config: Option<String>,

    /// Token override (bypasses the profile token)
    pub token: Option<String>,

    /// Custom API base URL for development/testing
    pub api_url: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            output: cli.output.clone(),
            profile: cli.profile.clone(),
            config: cli.config.clone(),
            token: cli.token.clone(),
            api_url: cli.api_url.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get profile override as `Option<&str>`.
    pub fn profile_ref(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    /// Get the output file as `Option<&Path>`.
    pub fn output_path(&self) -> Option<&Path> {
        self.output.as_deref().map(Path::new)
    }
}
