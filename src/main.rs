//! stcli - command-line companion for SmartThings apps

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod select;

use cli::args::GlobalOptions;
use cli::{AppsCommands, Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Log to stderr; `--debug` lowers the default filter, `RUST_LOG` wins over both.
fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Apps(apps_cmd) => match apps_cmd {
            AppsCommands::List => cli::apps::list(&opts).await,
            AppsCommands::Get { id } => cli::apps::get(&opts, id.as_deref()).await,
            AppsCommands::Oauth { id } => cli::apps::oauth(&opts, id.as_deref()).await,
        },
    }
}
