use dotenv::dotenv;
use posty_core::logger::init_tracing;
use tracing::debug;

use crate::config::BackendConfig;

mod application;
mod config;
mod domain;
mod error;
mod infrastructure;
mod interfaces;
mod server;
mod use_cases;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let env_file = dotenv();
    init_tracing();
    if let Err(e) = env_file {
        debug!("No .env file loaded: {e}");
    }
    let config = BackendConfig::from_env();
    server::http_server::http_server_backend(config)?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Application error: {e}");
        std::process::exit(1);
    }
}
