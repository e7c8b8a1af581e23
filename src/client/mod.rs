//! SmartThings API client

use async_trait::async_trait;

use crate::error::Result;

#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod smartthings;

#[cfg(test)]
pub use mock::MockAppsClient;
pub use models::{App, AppOAuth, AppSummary};
pub use smartthings::SmartThingsClient;

/// Operations on the `apps` resource
#[async_trait]
pub trait AppsApi: Send + Sync {
    /// List every app visible to the token, following pagination links
    async fn list_apps(&self) -> Result<Vec<AppSummary>>;

    /// Fetch a single app by canonical ID
    async fn get_app(&self, app_id: &str) -> Result<App>;

    /// Fetch the OAuth client settings of an app
    async fn get_oauth(&self, app_id: &str) -> Result<AppOAuth>;
}
