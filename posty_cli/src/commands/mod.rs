pub mod chat;
pub mod generate;
pub mod posts;
pub mod quota;

use std::sync::Arc;

use posty_core::session::{
    ChatSession, FileKeyValueStore, GuestQuota, MockGenerator, ResponseGenerator,
};
use posty_core::types::caller::Caller;
use tracing::{debug, warn};

use crate::adapters::{HttpGenerator, HttpPostStore};
use crate::client::CliClient;

/// Guest counter kept in the user's data directory; without one the quota runs detached.
pub fn guest_quota() -> GuestQuota {
    match FileKeyValueStore::in_data_dir() {
        Some(store) => {
            debug!("Guest quota stored in {}", store.path().display());
            GuestQuota::new(Arc::new(store))
        }
        None => {
            warn!("No local data directory, guest quota is not persisted");
            GuestQuota::detached()
        }
    }
}

pub fn build_session(cli_client: Arc<CliClient>, local: bool) -> ChatSession {
    let generator: Arc<dyn ResponseGenerator> = if local {
        Arc::new(MockGenerator::from_env())
    } else {
        Arc::new(HttpGenerator::new(cli_client.clone()))
    };
    ChatSession::new(
        guest_quota(),
        generator,
        Arc::new(HttpPostStore::new(cli_client)),
    )
}

pub fn caller_for(user: Option<String>) -> Caller {
    let is_guest = user.is_none();
    Caller::from_parts(user, is_guest)
}
