use posty_core::types::post::Post;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "post")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    #[sea_orm(column_type = "Text")]
    pub prompt: String,
    #[sea_orm(column_type = "Text")]
    pub variant_a: String,
    #[sea_orm(column_type = "Text")]
    pub variant_b: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub trait IntoPost {
    fn into_post(self) -> Post;
}

impl IntoPost for Model {
    fn into_post(self) -> Post {
        Post {
            id: self.id,
            user_id: self.user_id,
            prompt: self.prompt,
            variant_a: self.variant_a,
            variant_b: self.variant_b,
            created_at: self.created_at,
        }
    }
}

pub trait IntoPosts {
    fn into_posts(self) -> Vec<Post>;
}

impl IntoPosts for Vec<Model> {
    fn into_posts(self) -> Vec<Post> {
        self.into_iter().map(IntoPost::into_post).collect()
    }
}
