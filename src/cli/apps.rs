//! App commands

use log::debug;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::prompt::TerminalPrompt;
use crate::error::Result;
use crate::models::display::{AppDetailDisplay, AppListDisplay, OAuthDisplay};
use crate::output::{self, Detail};
use crate::select::{AppListing, AppSelector, Prompt, SelectOptions};

/// Options shared by commands that accept an app id or list number
fn by_id_or_index() -> SelectOptions {
    SelectOptions::default().allow_index()
}

/// Run the `apps list` command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    list_with(&ctx).await
}

/// Run the `apps get` command
pub async fn get(opts: &GlobalOptions, id: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    get_with(&ctx, id, &mut TerminalPrompt).await
}

/// Run the `apps oauth` command
pub async fn oauth(opts: &GlobalOptions, id: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    oauth_with(&ctx, id, &mut TerminalPrompt).await
}

async fn list_with(ctx: &CommandContext) -> Result<()> {
    let listing = AppListing::new(ctx.client.list_apps().await?);
    debug!("Listing {} apps", listing.len());

    let rows = AppListDisplay::numbered(&listing);
    output::print(&rows, ctx.format, ctx.output_ref())
}

async fn get_with(ctx: &CommandContext, id: Option<&str>, prompt: &mut dyn Prompt) -> Result<()> {
    // Skip the prompt when only one app exists
    let app_id = AppSelector::new(ctx.client.as_ref(), by_id_or_index().auto_choose())
        .resolve(id, prompt)
        .await?;

    debug!("Fetching app {}", app_id);
    let app = ctx.client.get_app(&app_id).await?;

    output::print(
        &Detail::new(&app, AppDetailDisplay::from(&app)),
        ctx.format,
        ctx.output_ref(),
    )
}

async fn oauth_with(ctx: &CommandContext, id: Option<&str>, prompt: &mut dyn Prompt) -> Result<()> {
    let app_id = AppSelector::new(ctx.client.as_ref(), by_id_or_index())
        .resolve(id, prompt)
        .await?;

    debug!("Fetching OAuth settings for app {}", app_id);
    let oauth = ctx.client.get_oauth(&app_id).await?;

    output::print(
        &Detail::new(&oauth, OAuthDisplay::from(&oauth)),
        ctx.format,
        ctx.output_ref(),
    )
}
