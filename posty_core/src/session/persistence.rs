use async_trait::async_trait;

use crate::error::Result;
use crate::types::post::NewPost;

/// Storage for generated posts. Each call creates exactly one record;
/// retrying a call creates a duplicate.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Returns the id of the created post.
    async fn create_post(&self, post: NewPost) -> Result<String>;
}
