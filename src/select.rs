//! App selection
//!
//! Commands that act on a single app accept either the app's canonical ID or
//! its 1-based position in the app listing, and prompt when neither is given.
//! [`AppSelector`] turns that user-supplied reference into a canonical ID.
//!
//! Ordinals refer to the listing fetched during the same invocation. The
//! listing is sorted by display name so `stcli apps list` and the selector
//! agree on numbering.

use log::debug;

use crate::client::{AppSummary, AppsApi};
use crate::error::{Result, SelectError};

/// How a command wants references interpreted
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectOptions {
    /// Accept list positions in addition to IDs
    pub allow_index: bool,
    /// Skip the prompt when exactly one app exists
    pub auto_choose: bool,
}

impl SelectOptions {
    pub fn allow_index(mut self) -> Self {
        self.allow_index = true;
        self
    }

    pub fn auto_choose(mut self) -> Self {
        self.auto_choose = true;
        self
    }
}

/// A user-supplied app reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRef {
    /// Canonical app ID, used as-is
    ById(String),
    /// 1-based position in the listing
    ByOrdinal(i64),
    /// Nothing given; ask the user
    Unspecified,
}

impl AppRef {
    /// Classify a raw command-line token.
    ///
    /// Integer-looking tokens become ordinals only when `allow_index` is set;
    /// otherwise they are taken as literal IDs.
    pub fn parse(
        raw: Option<&str>,
        options: SelectOptions,
    ) -> std::result::Result<Self, SelectError> {
        let Some(raw) = raw else {
            return Ok(AppRef::Unspecified);
        };

        let token = raw.trim();
        if token.is_empty() || token.contains(|c: char| c.is_whitespace() || c == '/') {
            return Err(SelectError::InvalidReference(raw.to_string()));
        }

        if !looks_like_integer(token) {
            return Ok(AppRef::ById(token.to_string()));
        }

        if !options.allow_index {
            return Ok(AppRef::ById(token.to_string()));
        }

        token
            .parse::<i64>()
            .map(AppRef::ByOrdinal)
            .map_err(|_| SelectError::InvalidReference(raw.to_string()))
    }
}

/// Optional leading minus followed by ASCII digits only
fn looks_like_integer(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Apps fetched during this invocation, in display order
#[derive(Debug, Clone)]
pub struct AppListing {
    apps: Vec<AppSummary>,
}

impl AppListing {
    /// Sort apps by display name (case-insensitive), then by ID.
    pub fn new(mut apps: Vec<AppSummary>) -> Self {
        apps.sort_by(|a, b| {
            a.label()
                .to_lowercase()
                .cmp(&b.label().to_lowercase())
                .then_with(|| a.app_id.cmp(&b.app_id))
        });
        Self { apps }
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    pub fn apps(&self) -> &[AppSummary] {
        &self.apps
    }

    /// Look up the app at a 1-based position.
    pub fn get(&self, ordinal: i64) -> std::result::Result<&AppSummary, SelectError> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| self.apps.get(idx))
            .ok_or(SelectError::OutOfRange {
                ordinal,
                count: self.apps.len(),
            })
    }
}

/// Interactive source of a choice from a listing
pub trait Prompt {
    /// Present the listing and return the raw answer (an ordinal or an ID).
    ///
    /// Returns `None` when the user aborts.
    fn choose(&mut self, listing: &AppListing) -> Result<Option<String>>;
}

/// Resolves app references against the API
pub struct AppSelector<'a, C: AppsApi + ?Sized> {
    client: &'a C,
    options: SelectOptions,
}

impl<'a, C: AppsApi + ?Sized> AppSelector<'a, C> {
    pub fn new(client: &'a C, options: SelectOptions) -> Self {
        Self { client, options }
    }

    /// Resolve a raw command-line token to a canonical app ID.
    pub async fn resolve(&self, raw: Option<&str>, prompt: &mut dyn Prompt) -> Result<String> {
        let reference = AppRef::parse(raw, self.options)?;
        self.resolve_ref(reference, prompt).await
    }

    /// Resolve an already classified reference.
    ///
    /// IDs are returned without touching the API. Ordinals and prompts issue
    /// one listing request.
    pub async fn resolve_ref(&self, reference: AppRef, prompt: &mut dyn Prompt) -> Result<String> {
        match reference {
            AppRef::ById(id) => {
                debug!("Using app id {} as given", id);
                Ok(id)
            }
            AppRef::ByOrdinal(ordinal) => {
                let listing = self.fetch_listing().await?;
                let app = listing.get(ordinal)?;
                debug!("Index {} resolved to app {}", ordinal, app.app_id);
                Ok(app.app_id.clone())
            }
            AppRef::Unspecified => {
                let listing = self.fetch_listing().await?;
                self.choose_from(&listing, prompt)
            }
        }
    }

    async fn fetch_listing(&self) -> Result<AppListing> {
        let apps = self.client.list_apps().await?;
        debug!("Listing holds {} apps", apps.len());
        Ok(AppListing::new(apps))
    }

    fn choose_from(&self, listing: &AppListing, prompt: &mut dyn Prompt) -> Result<String> {
        if listing.is_empty() {
            debug!("No apps to choose from");
            return Err(SelectError::NoSelection.into());
        }

        if self.options.auto_choose && listing.len() == 1 {
            let only = &listing.apps()[0];
            debug!("Auto-selecting the only app {}", only.app_id);
            return Ok(only.app_id.clone());
        }

        let answer = prompt
            .choose(listing)?
            .filter(|a| !a.trim().is_empty())
            .ok_or(SelectError::NoSelection)?;

        match AppRef::parse(Some(answer.as_str()), SelectOptions::default().allow_index())? {
            AppRef::ById(id) => Ok(id),
            AppRef::ByOrdinal(ordinal) => Ok(listing.get(ordinal)?.app_id.clone()),
            AppRef::Unspecified => Err(SelectError::NoSelection.into()),
        }
    }
}
