//! SmartThings API data models
//!
//! Domain types returned by the apps endpoints, one file per resource.

mod app;
mod oauth;

pub use app::{App, AppSummary};
pub use oauth::AppOAuth;
