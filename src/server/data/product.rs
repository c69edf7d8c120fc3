//! Product data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::product::{CreateProductParams, UpdateProductParams};

/// A product row together with its review rows.
pub type ProductWithReviews = (entity::product::Model, Vec<entity::product_review::Model>);

pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new product with no reviews.
    pub async fn create(&self, params: CreateProductParams) -> Result<entity::product::Model, DbErr> {
        let now = Utc::now();

        entity::product::ActiveModel {
            name: ActiveValue::Set(params.name),
            price: ActiveValue::Set(params.price),
            description: ActiveValue::Set(params.description),
            category: ActiveValue::Set(params.category),
            image: ActiveValue::Set(params.image),
            rating: ActiveValue::Set(0.0),
            num_reviews: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all products with their reviews, ordered by id.
    pub async fn get_all(&self) -> Result<Vec<ProductWithReviews>, DbErr> {
        entity::prelude::Product::find()
            .order_by_asc(entity::product::Column::Id)
            .find_with_related(entity::prelude::ProductReview)
            .all(self.db)
            .await
    }

    /// Gets a product by ID with its reviews.
    ///
    /// # Returns
    /// - `Ok(Some((product, reviews)))` - Product found
    /// - `Ok(None)` - No product with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<ProductWithReviews>, DbErr> {
        let Some(product) = entity::prelude::Product::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let reviews = entity::prelude::ProductReview::find()
            .filter(entity::product_review::Column::ProductId.eq(id))
            .order_by_asc(entity::product_review::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some((product, reviews)))
    }

    /// Updates a product's editable fields and bumps `updated_at`.
    ///
    /// The review aggregate columns are never touched here.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated product
    /// - `Ok(None)` - No product with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        params: UpdateProductParams,
    ) -> Result<Option<entity::product::Model>, DbErr> {
        let Some(product) = entity::prelude::Product::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::product::ActiveModel = product.into();
        active.name = ActiveValue::Set(params.name);
        active.price = ActiveValue::Set(params.price);
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(category) = params.category {
            active.category = ActiveValue::Set(category);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Deletes a product and all of its reviews in one transaction.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The deleted product row
    /// - `Ok(None)` - No product with that id, nothing deleted
    /// - `Err(DbErr)` - Database error, nothing deleted
    pub async fn delete(&self, id: i32) -> Result<Option<entity::product::Model>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(product) = entity::prelude::Product::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        entity::prelude::ProductReview::delete_many()
            .filter(entity::product_review::Column::ProductId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Product::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(Some(product))
    }
}
