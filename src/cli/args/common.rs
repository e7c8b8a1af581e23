//! Common CLI types shared across commands

use serde::{Deserialize, Serialize};

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format - human-readable (default)
    #[default]
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
    /// YAML format
    Yaml,
}
