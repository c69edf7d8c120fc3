pub use super::product::Entity as Product;
pub use super::product_review::Entity as ProductReview;
pub use super::user::Entity as User;
