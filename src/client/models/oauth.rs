//! OAuth models

use serde::{Deserialize, Serialize};

/// OAuth client settings of an app, from `GET /apps/{id}/oauth`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppOAuth {
    /// Name shown to users on the consent screen
    #[serde(default)]
    pub client_name: Option<String>,

    /// Requested permission scopes
    #[serde(default)]
    pub scope: Vec<String>,

    /// Allowed redirect URIs for the authorization code flow
    #[serde(default)]
    pub redirect_uris: Vec<String>,
}
