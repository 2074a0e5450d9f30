use sea_orm_migration::{prelude::*, schema::*};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250101_000001_create_post_table::Migration)]
    }
}

mod m20250101_000001_create_post_table {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Post::Table)
                        .if_not_exists()
                        .col(string(Post::Id).primary_key())
                        .col(string(Post::UserId))
                        .col(text(Post::Prompt))
                        .col(text(Post::VariantA))
                        .col(text(Post::VariantB))
                        .col(
                            timestamp_with_time_zone(Post::CreatedAt)
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_post_user_id")
                        .table(Post::Table)
                        .col(Post::UserId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Post::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Post {
        Table,
        Id,
        UserId,
        Prompt,
        VariantA,
        VariantB,
        CreatedAt,
    }
}
