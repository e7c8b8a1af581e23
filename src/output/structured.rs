//! JSON and YAML output formatting

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Wrapper for structured output with metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The actual data
    pub data: T,

    /// Metadata about the response
    pub meta: Metadata,
}

/// Metadata included in structured output
#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// Timestamp of the response
    pub timestamp: String,

    /// CLI version
    pub version: String,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Format data as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Envelope::new(data))
}

/// Format data as YAML
pub fn format_yaml<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_yaml::Error> {
    let yaml = serde_yaml::to_string(&Envelope::new(data))?;
    Ok(yaml.trim_end().to_string())
}
