use sea_orm_migration::{prelude::*, schema::*};

use super::{m20251210_000001_create_user_table::User, m20251210_000002_create_product_table::Product};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductReview::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductReview::Id))
                    .col(integer(ProductReview::ProductId))
                    .col(integer(ProductReview::UserId))
                    .col(string(ProductReview::Name))
                    .col(integer(ProductReview::Rating))
                    .col(string(ProductReview::Comment).default(""))
                    .col(
                        timestamp_with_time_zone(ProductReview::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_review_product_id")
                            .from(ProductReview::Table, ProductReview::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_review_user_id")
                            .from(ProductReview::Table, ProductReview::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One review per user per product
        manager
            .create_index(
                Index::create()
                    .name("idx_product_review_unique")
                    .table(ProductReview::Table)
                    .col(ProductReview::ProductId)
                    .col(ProductReview::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_product_review_unique")
                    .table(ProductReview::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProductReview::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProductReview {
    Table,
    Id,
    ProductId,
    UserId,
    Name,
    Rating,
    Comment,
    CreatedAt,
}
