//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod apps;
pub mod args;
pub mod context;
pub mod prompt;

pub use args::OutputFormat;
pub use context::CommandContext;

/// stcli - command-line companion for SmartThings apps
#[derive(Parser, Debug)]
#[command(name = "stcli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json, yaml) [default: profile preference or table]
    #[arg(
        long,
        short = 'f',
        global = true,
        value_enum,
        env = "STCLI_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Write output to a file instead of stdout
    #[arg(long, short = 'o', global = true, value_name = "FILE")]
    pub output: Option<String>,

    /// Configuration profile to use
    #[arg(long, short = 'p', global = true, env = "STCLI_PROFILE", hide_env = true)]
    pub profile: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "STCLI_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Access token (overrides the profile token)
    #[arg(long, global = true, env = "STCLI_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// API base URL for development/testing
    #[arg(long, global = true, env = "STCLI_API_URL", hide = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "STCLI_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Work with SmartThings apps
    #[command(subcommand)]
    Apps(AppsCommands),
}

/// App subcommands
#[derive(Subcommand, Debug)]
pub enum AppsCommands {
    /// List apps, numbered for use with other app commands
    #[command(visible_alias = "ls")]
    List,

    /// Get details of an app
    #[command(after_help = "EXAMPLES:\n  \
            stcli apps get            # Choose from a list\n  \
            stcli apps get 2          # Second app in `stcli apps list`\n  \
            stcli apps get <app-id>   # By ID")]
    Get {
        /// The app id or number in the list
        id: Option<String>,
    },

    /// Get OAuth information for the app
    #[command(after_help = "EXAMPLES:\n  \
            stcli apps oauth                 # Choose from a list\n  \
            stcli apps oauth 2               # Second app in `stcli apps list`\n  \
            stcli apps oauth <app-id> -f json")]
    Oauth {
        /// The app id or number in the list
        id: Option<String>,
    },
}
