use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub user_id: String,
    pub prompt: String,
    pub variant_a: String,
    pub variant_b: String,
    pub created_at: DateTime<Utc>,
}

/// Fields needed to create a post; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub user_id: String,
    pub prompt: String,
    pub variant_a: String,
    pub variant_b: String,
}
