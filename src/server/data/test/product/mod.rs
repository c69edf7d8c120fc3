use crate::server::{
    data::product::ProductRepository,
    model::product::{CreateProductParams, UpdateProductParams},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_by_id;
