//! The builtin dataset the table is rendered from.

use super::{
    category::Category,
    product::Product,
    user::{Sex, User},
};

const USERS: [(u32, &str, Sex); 4] = [
    (1, "Roma", Sex::Male),
    (2, "Anna", Sex::Female),
    (3, "Max", Sex::Male),
    (4, "John", Sex::Male),
];

// (id, title, icon, owner id)
const CATEGORIES: [(u32, &str, &str, u32); 5] = [
    (1, "Grocery", "🍞", 2),
    (2, "Drinks", "🍺", 1),
    (3, "Fruits", "🍏", 2),
    (4, "Electronics", "💻", 1),
    (5, "Clothes", "👚", 3),
];

// (id, name, category id)
const PRODUCTS: [(u32, &str, u32); 9] = [
    (1, "Milk", 2),
    (2, "Bread", 1),
    (3, "Eggs", 1),
    (4, "Jacket", 5),
    (5, "Sugar", 1),
    (6, "Apples", 3),
    (7, "Beer", 2),
    (8, "Laptop", 4),
    (9, "Ice cream", 1),
];

pub fn users() -> Vec<User> {
    USERS.iter().map(|&(id, name, sex)| User::new(id, name, sex)).collect()
}

pub fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|&(id, title, icon, owner_id)| Category::new(id, title, icon, owner_id))
        .collect()
}

pub fn products() -> Vec<Product> {
    PRODUCTS.iter().map(|&(id, name, category_id)| Product::new(id, name, category_id)).collect()
}
