use thiserror::Error;

pub mod catalog;
pub mod category;
pub mod fixture;
pub mod product;
pub mod user;

pub use catalog::Catalog;
pub use category::{Category, CategoryId};
pub use product::{EnrichedProduct, Product, ProductId};
pub use user::{Sex, User, UserId};

/// Error type for loading a catalog fixture. A fixture is rejected as a whole
/// when any of its references cannot be resolved to exactly one entity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FixtureError {
    #[error("product {product:?} refers to missing category {category:?}")]
    MissingCategory { product: ProductId, category: CategoryId },
    #[error("category {category:?} refers to missing owner {owner:?}")]
    MissingOwner { category: CategoryId, owner: UserId },
    #[error("user id {0:?} is used more than once")]
    DuplicateUser(UserId),
    #[error("category id {0:?} is used more than once")]
    DuplicateCategory(CategoryId),
    #[error("product id {0:?} is used more than once")]
    DuplicateProduct(ProductId),
}
