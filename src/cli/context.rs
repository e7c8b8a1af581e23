//! Command execution context
//!
//! Bundles the resolved settings and an API client so handlers do not repeat
//! config loading and client construction.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::{AppsApi, SmartThingsClient};
use crate::config::Settings;
use crate::error::Result;

/// Context for command execution containing the client and output options.
pub struct CommandContext {
    /// Authenticated API client
    pub client: Arc<dyn AppsApi>,
    /// Output format preference
    pub format: OutputFormat,
    /// Output file, if not stdout
    pub output: Option<PathBuf>,
}

impl CommandContext {
    /// Resolve settings from flags, environment and config file, then build
    /// the HTTP client.
    ///
    /// # Errors
    /// Returns error if config cannot be loaded, no token is available, or
    /// the API URL is malformed.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let settings = Settings::resolve(opts)?;
        debug!("Using profile '{}' against {}", settings.profile, settings.api_url);
        let client = SmartThingsClient::with_base_url(settings.token, &settings.api_url)?;

        Ok(Self {
            client: Arc::new(client),
            format: settings.format,
            output: opts.output_path().map(Path::to_path_buf),
        })
    }

    /// Build a context around an existing client.
    #[cfg(test)]
    pub fn with_client(
        client: Arc<dyn AppsApi>,
        format: OutputFormat,
        output: Option<PathBuf>,
    ) -> Self {
        Self {
            client,
            format,
            output,
        }
    }

    /// Output file as `Option<&Path>`.
    pub fn output_ref(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_token_and_no_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let opts = GlobalOptions {
            config: Some(dir.path().join("absent.yaml").to_string_lossy().to_string()),
            token: Some("tok".to_string()),
            output: Some("out.txt".to_string()),
            ..Default::default()
        };

        let ctx = CommandContext::new(&opts).unwrap();

        assert_eq!(ctx.format, OutputFormat::Table);
        assert_eq!(ctx.output_ref(), Some(Path::new("out.txt")));
    }

    #[test]
    fn test_new_rejects_bad_api_url() {
        let opts = GlobalOptions {
            config: Some("/nonexistent/stcli.yaml".to_string()),
            token: Some("tok".to_string()),
            api_url: Some("::not-a-url".to_string()),
            ..Default::default()
        };

        assert!(CommandContext::new(&opts).is_err());
    }
}
