//! App models

use serde::{Deserialize, Serialize};

/// App entry as returned by the `GET /apps` listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSummary {
    /// Canonical app ID
    pub app_id: String,

    /// Unique app name
    #[serde(default)]
    pub app_name: Option<String>,

    /// Human-friendly name shown in listings
    #[serde(default)]
    pub display_name: Option<String>,

    /// App type, e.g. "WEBHOOK_SMART_APP" or "API_ONLY"
    #[serde(default)]
    pub app_type: Option<String>,

    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AppSummary {
    /// Name used for sorting and display, falling back to the app name and then the id.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.app_name.as_deref())
            .unwrap_or(&self.app_id)
    }
}

/// Full app resource from `GET /apps/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
    pub app_id: String,

    #[serde(default)]
    pub app_name: Option<String>,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub app_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Where the app shows up in the mobile client, e.g. "AUTOMATION"
    #[serde(default)]
    pub classifications: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_instance: Option<bool>,

    /// "LOCATION" or "USER_LEVEL"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal_type: Option<String>,
}
