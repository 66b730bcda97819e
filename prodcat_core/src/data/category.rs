use std::collections::HashMap;

use super::{user::UserId, FixtureError};

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord)]
pub struct CategoryId(pub u32);

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Category {
    pub id: CategoryId,
    /// A short name of the category, e.g. "Grocery"
    pub title: String,
    /// An emoji shown next to the title.
    pub icon: String,
    /// The user responsible for the category.
    pub owner_id: UserId,
}

/// The categories of a catalog in fixture order, indexed by id.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct CategoriesTable {
    categories: Vec<Category>,
    index: HashMap<CategoryId, usize>,
}

impl Category {
    pub fn new(id: u32, title: impl Into<String>, icon: impl Into<String>, owner_id: u32) -> Self {
        Category {
            id: CategoryId(id),
            title: title.into(),
            icon: icon.into(),
            owner_id: UserId(owner_id),
        }
    }
}

impl CategoriesTable {
    /// Indexes the given categories. Fails if two categories share an id.
    pub fn from_categories(categories: Vec<Category>) -> Result<Self, FixtureError> {
        let mut index = HashMap::with_capacity(categories.len());
        for (position, category) in categories.iter().enumerate() {
            if index.insert(category.id, position).is_some() {
                return Err(FixtureError::DuplicateCategory(category.id));
            }
        }
        Ok(CategoriesTable { categories, index })
    }

    pub fn position(&self, id: CategoryId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn as_slice(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }
}
