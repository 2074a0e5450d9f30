use std::sync::Arc;

use crate::domain::post::entity::{IntoPost, IntoPosts};
use crate::domain::post::repository::PostRepository;
use crate::error::{ErrorBackend, Result};
use async_trait::async_trait;
use posty_core::server::payload::create_post_request::CreatePostRequest;
use posty_core::session::PostStore;
use posty_core::types::post::{NewPost, Post};
use tracing::info;

#[derive(Clone, Debug)]
pub struct PostService {
    repo: Arc<PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<PostRepository>) -> Self {
        Self { repo }
    }

    pub async fn handle_create(&self, req: CreatePostRequest) -> Result<Post> {
        if req.user_id.trim().is_empty() {
            return Err(ErrorBackend::MissingField("user_id"));
        }
        if req.prompt.trim().is_empty() {
            return Err(ErrorBackend::EmptyPrompt);
        }
        let post = self.repo.create(NewPost::from(req)).await?;
        info!("Created post {} for user {}", post.id, post.user_id);
        Ok(post.into_post())
    }

    pub async fn get_post(&self, id: &str) -> Result<Post> {
        match self.repo.find_by_id(id).await? {
            Some(post) => Ok(post.into_post()),
            None => Err(ErrorBackend::PostNotFound(id.to_string())),
        }
    }

    pub async fn list_posts(&self, user_id: &str) -> Result<Vec<Post>> {
        let posts = self.repo.find_all_by_user_id(user_id).await?;
        Ok(posts.into_posts())
    }
}

/// Lets an in-process chat session save straight into the database.
#[async_trait]
impl PostStore for PostService {
    async fn create_post(&self, post: NewPost) -> posty_core::error::Result<String> {
        self.handle_create(post.into())
            .await
            .map(|post| post.id)
            .map_err(|e| posty_core::error::ErrorCore::Persistence(e.to_string()))
    }
}
