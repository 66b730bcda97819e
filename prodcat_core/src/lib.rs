//! Core of the product categories table: the catalog fixture and its join,
//! the filter and sort state driven by the user, and the render model that
//! front-ends draw.

pub mod data;
pub mod view;
