//! Mock apps client for testing
//!
//! Serves canned listings and records without network access, and counts
//! calls so tests can assert which requests were issued.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::models::{App, AppOAuth, AppSummary};
use super::AppsApi;
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockAppsClient::new()
///     .with_apps(vec![summary("a1", "First")])
///     .await;
///
/// let apps = mock.list_apps().await?;
/// assert_eq!(apps.len(), 1);
/// ```
#[derive(Default)]
pub struct MockAppsClient {
    apps: Arc<Mutex<Vec<AppSummary>>>,
    oauth: Arc<Mutex<HashMap<String, AppOAuth>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    call_count: Arc<Mutex<CallCounts>>,
    /// App IDs passed to detail calls, in order
    requested_ids: Arc<Mutex<Vec<String>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_apps: usize,
    pub get_app: usize,
    pub get_oauth: usize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        self.list_apps + self.get_app + self.get_oauth
    }
}

impl MockAppsClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the listing returned from list_apps (also backs get_app).
    pub async fn with_apps(self, apps: Vec<AppSummary>) -> Self {
        *self.apps.lock().await = apps;
        self
    }

    /// Configure the OAuth record returned for one app ID.
    pub async fn with_oauth(self, app_id: &str, oauth: AppOAuth) -> Self {
        self.oauth.lock().await.insert(app_id.to_string(), oauth);
        self
    }

    /// Configure an error to return from the next call.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    pub async fn requested_ids(&self) -> Vec<String> {
        self.requested_ids.lock().await.clone()
    }

    async fn check_error(&self) -> Result<()> {
        if let Some(err) = self.error.lock().await.take() {
            return Err(err.into());
        }
        Ok(())
    }
}

#[async_trait]
impl AppsApi for MockAppsClient {
    async fn list_apps(&self) -> Result<Vec<AppSummary>> {
        self.call_count.lock().await.list_apps += 1;
        self.check_error().await?;
        Ok(self.apps.lock().await.clone())
    }

    async fn get_app(&self, app_id: &str) -> Result<App> {
        self.call_count.lock().await.get_app += 1;
        self.requested_ids.lock().await.push(app_id.to_string());
        self.check_error().await?;

        self.apps
            .lock()
            .await
            .iter()
            .find(|a| a.app_id == app_id)
            .map(|a| App {
                app_id: a.app_id.clone(),
                app_name: a.app_name.clone(),
                display_name: a.display_name.clone(),
                app_type: a.app_type.clone(),
                description: a.description.clone(),
                classifications: Vec::new(),
                single_instance: None,
                principal_type: None,
            })
            .ok_or_else(|| ApiError::NotFound(format!("App {}", app_id)).into())
    }

    async fn get_oauth(&self, app_id: &str) -> Result<AppOAuth> {
        self.call_count.lock().await.get_oauth += 1;
        self.requested_ids.lock().await.push(app_id.to_string());
        self.check_error().await?;

        self.oauth
            .lock()
            .await
            .get(app_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("OAuth settings for app {}", app_id)).into())
    }
}

/// Build a listing entry with just an ID and display name.
pub fn summary(app_id: &str, display_name: &str) -> AppSummary {
    AppSummary {
        app_id: app_id.to_string(),
        app_name: Some(display_name.to_lowercase().replace(' ', "-")),
        display_name: Some(display_name.to_string()),
        app_type: Some("API_ONLY".to_string()),
        description: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockAppsClient::new();
        assert!(mock.list_apps().await.unwrap().is_empty());
        assert_eq!(mock.call_counts().await.total(), 1);
    }

    #[tokio::test]
    async fn test_mock_client_error_consumed_once() {
        let mock = MockAppsClient::new()
            .with_error(ApiError::ServerError("boom".to_string()))
            .await;

        assert!(matches!(
            mock.list_apps().await,
            Err(Error::Api(ApiError::ServerError(_)))
        ));
        assert!(mock.list_apps().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_get_oauth_records_ids() {
        let mock = MockAppsClient::new()
            .with_oauth("a1", AppOAuth::default())
            .await;

        assert!(mock.get_oauth("a1").await.is_ok());
        assert!(mock.get_oauth("zz").await.is_err());
        assert_eq!(mock.requested_ids().await, vec!["a1", "zz"]);
        assert_eq!(mock.call_counts().await.get_oauth, 2);
    }
}
