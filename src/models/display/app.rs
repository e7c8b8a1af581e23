//! App display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::App;
use crate::select::AppListing;

/// One row of the numbered app listing.
///
/// The `#` column is the ordinal accepted by commands that take an app
/// reference.
#[derive(Debug, Clone, Tabled, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppListDisplay {
    #[tabled(rename = "#")]
    pub index: usize,

    #[tabled(rename = "Display Name")]
    pub display_name: String,

    #[tabled(rename = "Type")]
    pub app_type: String,

    #[tabled(rename = "App ID")]
    pub app_id: String,
}

impl AppListDisplay {
    /// Number a listing from 1 in its display order.
    pub fn numbered(listing: &AppListing) -> Vec<Self> {
        listing
            .apps()
            .iter()
            .enumerate()
            .map(|(i, app)| Self {
                index: i + 1,
                display_name: app.label().to_string(),
                app_type: app.app_type.clone().unwrap_or_default(),
                app_id: app.app_id.clone(),
            })
            .collect()
    }
}

/// Field definitions for a single app
#[derive(Debug, Clone, Tabled)]
pub struct AppDetailDisplay {
    #[tabled(rename = "Display Name")]
    pub display_name: String,

    #[tabled(rename = "App ID")]
    pub app_id: String,

    #[tabled(rename = "App Name")]
    pub app_name: String,

    #[tabled(rename = "Type")]
    pub app_type: String,

    #[tabled(rename = "Classifications")]
    pub classifications: String,

    #[tabled(rename = "Single Instance")]
    pub single_instance: String,

    #[tabled(rename = "Description")]
    pub description: String,
}

impl From<&App> for AppDetailDisplay {
    fn from(app: &App) -> Self {
        Self {
            display_name: app.display_name.clone().unwrap_or_default(),
            app_id: app.app_id.clone(),
            app_name: app.app_name.clone().unwrap_or_default(),
            app_type: app.app_type.clone().unwrap_or_default(),
            classifications: app.classifications.join("\n"),
            single_instance: match app.single_instance {
                Some(true) => "yes".to_string(),
                Some(false) => "no".to_string(),
                None => String::new(),
            },
            description: app.description.clone().unwrap_or_default(),
        }
    }
}
