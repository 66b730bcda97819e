use std::collections::HashSet;

use tracing::{debug, warn};

use super::{
    category::{CategoriesTable, Category},
    fixture,
    product::{EnrichedProduct, Product},
    user::{User, UsersTable},
    FixtureError,
};

/// The read-only dataset behind the table. Every reference between entities
/// is resolved when the catalog is built, so joining never fails afterwards.
#[derive(Debug, Default)]
pub struct Catalog {
    users: UsersTable,
    categories: CategoriesTable,
    products: Vec<Product>,
    /// For each product, the positions of its category and of the category's
    /// owner in their tables. Same length and order as `products`.
    links: Vec<ProductLinks>,
}

#[derive(Debug, Clone, Copy)]
struct ProductLinks {
    category: usize,
    owner: usize,
}

impl Catalog {
    /// Builds a catalog, rejecting the fixture if an id is used twice or if a
    /// product or category refers to an entity that does not exist.
    pub fn new(
        users: Vec<User>,
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> Result<Self, FixtureError> {
        let result = Self::link(users, categories, products);
        match &result {
            Ok(catalog) => debug!(
                users = catalog.users.len(),
                categories = catalog.categories.len(),
                products = catalog.products.len(),
                "loaded catalog"
            ),
            Err(err) => warn!(%err, "rejected catalog fixture"),
        }
        result
    }

    /// The catalog built from the dataset compiled into the crate.
    pub fn builtin() -> Result<Self, FixtureError> {
        Self::new(fixture::users(), fixture::categories(), fixture::products())
    }

    fn link(
        users: Vec<User>,
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> Result<Self, FixtureError> {
        let users = UsersTable::from_users(users)?;
        let categories = CategoriesTable::from_categories(categories)?;

        // every category must have an owner, even one without products
        let owners = categories
            .as_slice()
            .iter()
            .map(|category| {
                users.position(category.owner_id).ok_or(FixtureError::MissingOwner {
                    category: category.id,
                    owner: category.owner_id,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = HashSet::with_capacity(products.len());
        let mut links = Vec::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(FixtureError::DuplicateProduct(product.id));
            }
            let category = categories.position(product.category_id).ok_or(
                FixtureError::MissingCategory {
                    product: product.id,
                    category: product.category_id,
                },
            )?;
            links.push(ProductLinks { category, owner: owners[category] });
        }

        Ok(Catalog { users, categories, products, links })
    }

    pub fn users(&self) -> &[User] {
        self.users.as_slice()
    }

    pub fn categories(&self) -> &[Category] {
        self.categories.as_slice()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns every product joined with its category and owner, in fixture
    /// order.
    pub fn enriched(&self) -> impl Iterator<Item = EnrichedProduct<'_>> + '_ {
        let users = self.users.as_slice();
        let categories = self.categories.as_slice();
        self.products.iter().zip(&self.links).map(move |(product, links)| EnrichedProduct {
            product,
            category: &categories[links.category],
            owner: &users[links.owner],
        })
    }
}
