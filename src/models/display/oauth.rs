//! OAuth display model

use tabled::Tabled;

use crate::client::models::AppOAuth;

/// Field definitions for an app's OAuth settings
#[derive(Debug, Clone, Tabled)]
pub struct OAuthDisplay {
    #[tabled(rename = "Client Name")]
    pub client_name: String,

    #[tabled(rename = "Scope")]
    pub scope: String,

    #[tabled(rename = "Redirect URIs")]
    pub redirect_uris: String,
}

impl From<&AppOAuth> for OAuthDisplay {
    fn from(oauth: &AppOAuth) -> Self {
        Self {
            client_name: oauth.client_name.clone().unwrap_or_default(),
            scope: oauth.scope.join("\n"),
            redirect_uris: oauth.redirect_uris.join("\n"),
        }
    }
}
