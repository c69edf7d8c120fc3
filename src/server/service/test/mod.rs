mod auth;
mod product;
