use std::sync::Arc;

use crate::client::CliClient;
use crate::commands::{build_session, caller_for};
use crate::error::Result;
use crate::utils::render::render_outcome;

pub async fn handle(
    cli_client: Arc<CliClient>,
    prompt: &str,
    user: Option<String>,
    local: bool,
) -> Result<()> {
    let session = build_session(cli_client, local);
    let caller = caller_for(user);
    let outcome = session.generate(prompt, &caller).await;
    print!("{}", render_outcome(&outcome));
    Ok(())
}
