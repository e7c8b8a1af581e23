//! Display models for table output
//!
//! Display models carry the field definitions (column names and rendered
//! values) used when results are printed as tables.

mod app;
mod oauth;

pub use app::{AppDetailDisplay, AppListDisplay};
pub use oauth::OAuthDisplay;
