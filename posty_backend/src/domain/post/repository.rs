use std::sync::Arc;

use crate::domain;
use crate::error::Result;
use chrono::Utc;
use posty_core::types::post::NewPost;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct PostRepository {
    db: Arc<DatabaseConnection>,
}

impl PostRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> PostRepository {
        PostRepository { db }
    }

    /// Inserts a new record every time; there is no deduplication.
    pub async fn create(&self, new_post: NewPost) -> Result<domain::post::entity::Model> {
        let post = domain::post::entity::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            user_id: Set(new_post.user_id),
            prompt: Set(new_post.prompt),
            variant_a: Set(new_post.variant_a),
            variant_b: Set(new_post.variant_b),
            created_at: Set(Utc::now()),
        };
        let post = post.insert(self.db.as_ref()).await?;
        Ok(post)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<domain::post::entity::Model>> {
        let post = domain::post::entity::Entity::find_by_id(id.to_string())
            .one(self.db.as_ref())
            .await?;
        Ok(post)
    }

    /// Newest first.
    pub async fn find_all_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Vec<domain::post::entity::Model>> {
        let posts = domain::post::entity::Entity::find()
            .filter(domain::post::entity::Column::UserId.eq(user_id))
            .order_by_desc(domain::post::entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;
        Ok(posts)
    }
}
