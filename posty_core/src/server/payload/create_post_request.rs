use serde::{Deserialize, Serialize};

use crate::types::post::NewPost;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreatePostRequest {
    pub user_id: String,
    pub prompt: String,
    pub variant_a: String,
    pub variant_b: String,
}

impl From<NewPost> for CreatePostRequest {
    fn from(post: NewPost) -> Self {
        CreatePostRequest {
            user_id: post.user_id,
            prompt: post.prompt,
            variant_a: post.variant_a,
            variant_b: post.variant_b,
        }
    }
}

impl From<CreatePostRequest> for NewPost {
    fn from(req: CreatePostRequest) -> Self {
        NewPost {
            user_id: req.user_id,
            prompt: req.prompt,
            variant_a: req.variant_a,
            variant_b: req.variant_b,
        }
    }
}
