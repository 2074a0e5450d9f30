use std::sync::Arc;

use crate::cli::{Cli, Commands};
use crate::client::CliClient;
use crate::error::Result;
use clap::Parser;
use posty_core::logger::init_tracing;
use posty_core::server::default_config::backend_base_url;
mod adapters;
mod cli;
mod client;
mod commands;
mod error;
mod utils;

#[tokio::main]
async fn main() {
    if let Err(err) = try_main().await {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }
}

async fn try_main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let cli_client = Arc::new(CliClient::new(&backend_base_url()));

    match cli.command {
        Commands::Chat { user, local } => commands::chat::handle(cli_client, user, local).await?,
        Commands::Generate {
            prompt,
            user,
            local,
        } => commands::generate::handle(cli_client, &prompt, user, local).await?,
        Commands::Quota { reset } => commands::quota::handle(reset)?,
        Commands::Posts { user } => commands::posts::handle(&cli_client, &user).await?,
    }

    Ok(())
}
