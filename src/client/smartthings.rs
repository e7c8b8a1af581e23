//! SmartThings API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::pagination::{MAX_PAGES, PagedItems};
use super::{App, AppOAuth, AppSummary, AppsApi};
use crate::error::{ApiError, ConfigError, Result};

/// SmartThings API base URL
pub const DEFAULT_API_URL: &str = "https://api.smartthings.com";

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// SmartThings API client authenticated with a bearer token
pub struct SmartThingsClient {
    http: HttpClient,
    base_url: Url,
    token: String,
}

impl SmartThingsClient {
    /// Create a client against the default API host
    #[cfg(test)]
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(token, DEFAULT_API_URL)
    }

    /// Create a client against a custom API host (used for staging and tests)
    pub fn with_base_url(token: impl Into<String>, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ConfigError::Invalid(format!("API URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::Invalid(format!("API URL '{}' is not a base URL", base_url)).into());
        }

        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("stcli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            token: token.into(),
        })
    }

    /// Build an endpoint URL from path segments, escaping each segment
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Resolve a `next` link against the base URL.
    ///
    /// The token is only ever sent to the configured API origin.
    fn next_page_url(&self, href: &str) -> Result<Url> {
        let url = self.base_url.join(href).map_err(|e| {
            ApiError::InvalidResponse(format!("Invalid next link '{}': {}", href, e))
        })?;
        if url.origin() != self.base_url.origin() {
            return Err(ApiError::InvalidResponse(format!(
                "Next link '{}' leaves the API host {}",
                href,
                self.base_url.origin().ascii_serialization()
            ))
            .into());
        }
        Ok(url)
    }

    /// Issue an authenticated GET and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let data = response.json::<T>().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
                Ok(data)
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => {
                let error_msg = response
                    .text()
                    .await
                    .ok()
                    .filter(|body| !body.trim().is_empty())
                    .unwrap_or_else(|| "Resource not found".to_string());
                Err(ApiError::NotFound(error_msg).into())
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                Err(ApiError::RateLimit(Duration::from_secs(retry_after)).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(error_msg).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }
}

#[async_trait]
impl AppsApi for SmartThingsClient {
    async fn list_apps(&self) -> Result<Vec<AppSummary>> {
        let mut apps = Vec::new();
        let mut next = Some(self.endpoint(&["apps"]));
        let mut pages = 0;

        while let Some(url) = next.take() {
            pages += 1;
            if pages > MAX_PAGES {
                return Err(ApiError::InvalidResponse(format!(
                    "app listing exceeded {} pages",
                    MAX_PAGES
                ))
                .into());
            }

            let page: PagedItems<AppSummary> = self.get_json(url).await?;
            if let Some(href) = page.next_href() {
                next = Some(self.next_page_url(href)?);
            }
            apps.extend(page.items);
        }

        debug!("Fetched {} apps in {} page(s)", apps.len(), pages);
        Ok(apps)
    }

    async fn get_app(&self, app_id: &str) -> Result<App> {
        self.get_json(self.endpoint(&["apps", app_id])).await
    }

    async fn get_oauth(&self, app_id: &str) -> Result<AppOAuth> {
        self.get_json(self.endpoint(&["apps", app_id, "oauth"])).await
    }
}
