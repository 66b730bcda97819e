use super::sort::SortColumn;

/// A column of the product table.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Column {
    pub key: SortColumn,
    pub title: &'static str,
}

pub const COLUMNS: [Column; 4] = [
    Column { key: SortColumn::Id, title: "ID" },
    Column { key: SortColumn::Name, title: "Product" },
    Column { key: SortColumn::Category, title: "Category" },
    Column { key: SortColumn::Owner, title: "User" },
];

pub const NO_MATCHING_MESSAGE: &str = "No products matching selected criteria";

/// Values of the `data-cy` attribute put on each interactive element, used
/// by UI automation to find them.
pub mod test_id {
    pub const FILTER_ALL_USERS: &str = "FilterAllUsers";
    pub const FILTER_USER: &str = "FilterUser";
    pub const SEARCH_FIELD: &str = "SearchField";
    pub const CLEAR_BUTTON: &str = "ClearButton";
    pub const ALL_CATEGORIES: &str = "AllCategories";
    pub const FILTER_CATEGORY: &str = "FilterCategory";
    pub const RESET_ALL_BUTTON: &str = "ResetAllButton";
    pub const PRODUCT_TABLE: &str = "ProductTable";
    pub const SORT_ICON: &str = "SortIcon";
    pub const NO_MATCHING_MESSAGE: &str = "NoMatchingMessage";
}
