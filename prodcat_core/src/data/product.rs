use super::{
    category::{Category, CategoryId},
    user::User,
};

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord)]
pub struct ProductId(pub u32);

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
}

/// A product together with its resolved category and that category's owner.
/// Borrows from the catalog that produced it.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct EnrichedProduct<'a> {
    pub product: &'a Product,
    pub category: &'a Category,
    pub owner: &'a User,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, category_id: u32) -> Self {
        Product { id: ProductId(id), name: name.into(), category_id: CategoryId(category_id) }
    }
}

impl<'a> EnrichedProduct<'a> {
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn name(&self) -> &'a str {
        &self.product.name
    }
}
