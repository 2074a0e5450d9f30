//! Session collaborators backed by the HTTP API.

use std::sync::Arc;

use async_trait::async_trait;
use posty_core::error::{ErrorCore, Result};
use posty_core::server::payload::create_post_request::CreatePostRequest;
use posty_core::session::{PostStore, ResponseGenerator};
use posty_core::types::generated_response::ResponsePair;
use posty_core::types::post::NewPost;

use crate::client::CliClient;

pub struct HttpGenerator {
    client: Arc<CliClient>,
}

impl HttpGenerator {
    pub fn new(client: Arc<CliClient>) -> Self {
        HttpGenerator { client }
    }
}

#[async_trait]
impl ResponseGenerator for HttpGenerator {
    async fn generate(&self, prompt: &str) -> Result<ResponsePair> {
        self.client
            .generate(prompt)
            .await
            .map(|response| response.responses)
            .map_err(|e| ErrorCore::Generation(e.to_string()))
    }
}

pub struct HttpPostStore {
    client: Arc<CliClient>,
}

impl HttpPostStore {
    pub fn new(client: Arc<CliClient>) -> Self {
        HttpPostStore { client }
    }
}

#[async_trait]
impl PostStore for HttpPostStore {
    async fn create_post(&self, post: NewPost) -> Result<String> {
        let request = CreatePostRequest::from(post);
        self.client
            .create_post(&request)
            .await
            .map(|post| post.id)
            .map_err(|e| ErrorCore::Persistence(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use posty_core::session::{
        ChatSession, GuestQuota, MemoryKeyValueStore, MockGenerator, PostOutcome, Phase,
    };
    use posty_core::types::caller::Caller;
    use std::time::Duration;

    fn unreachable_client() -> Arc<CliClient> {
        Arc::new(CliClient::new("http://127.0.0.1:1"))
    }

    #[tokio::test]
    async fn test_generator_maps_transport_errors() {
        let generator = HttpGenerator::new(unreachable_client());
        let err = generator.generate("idée").await.unwrap_err();
        assert!(matches!(err, ErrorCore::Generation(_)));
    }

    #[tokio::test]
    async fn test_post_store_maps_transport_errors() {
        let store = HttpPostStore::new(unreachable_client());
        let err = store
            .create_post(NewPost {
                user_id: "u1".to_string(),
                prompt: "idée".to_string(),
                variant_a: "a".to_string(),
                variant_b: "b".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ErrorCore::Persistence(_)));
    }

    #[tokio::test]
    async fn test_local_generation_with_backend_down_is_unsaved() {
        let session = ChatSession::new(
            GuestQuota::new(Arc::new(MemoryKeyValueStore::new())),
            Arc::new(MockGenerator::new(Duration::ZERO)),
            Arc::new(HttpPostStore::new(unreachable_client())),
        );
        let state = session
            .generate("Je lance un nouveau produit", &Caller::member("u1"))
            .await
            .unwrap();
        assert_eq!(state.responses.len(), 2);
        assert_eq!(
            state.phase,
            Phase::Succeeded {
                post: PostOutcome::Unsaved
            }
        );
    }

    #[tokio::test]
    async fn test_remote_generation_with_backend_down_fails() {
        let client = unreachable_client();
        let session = ChatSession::new(
            GuestQuota::new(Arc::new(MemoryKeyValueStore::new())),
            Arc::new(HttpGenerator::new(client.clone())),
            Arc::new(HttpPostStore::new(client)),
        );
        let err = session.generate("idée", &Caller::Guest).await.unwrap_err();
        assert_eq!(err, posty_core::session::SessionError::Generation);
        assert_eq!(session.guest_count(), 0);
    }
}
