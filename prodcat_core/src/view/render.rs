//! The render model: a plain description of the filter panel and the table
//! for the current state. Front-ends only translate it into markup, so
//! everything that decides what is shown lives here.

use tracing::trace;

use crate::data::{Catalog, CategoryId, EnrichedProduct, ProductId, Sex};

use super::{
    config::COLUMNS,
    sort::{SortColumn, SortOrder},
    state::TableState,
};

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TableView {
    /// Class of the "All" owner tab.
    pub all_users_class: String,
    pub owner_tabs: Vec<OwnerTab>,
    pub search: SearchBox,
    /// Class of the "All" categories button.
    pub all_categories_class: String,
    pub category_buttons: Vec<CategoryButton>,
    pub headers: Vec<ColumnHeader>,
    /// The products left after filtering, in sorted order.
    pub rows: Vec<ProductRow>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct OwnerTab {
    pub name: String,
    pub class: String,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SearchBox {
    pub query: String,
    /// The clear button is only shown while there is something to clear.
    pub show_clear: bool,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CategoryButton {
    pub id: CategoryId,
    pub title: String,
    pub class: String,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ColumnHeader {
    pub column: SortColumn,
    pub title: &'static str,
    /// `column-N`, numbering columns from 1.
    pub class: String,
    pub icon: SortIcon,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum SortIcon {
    Unsorted,
    Ascending,
    Descending,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    /// The category icon and title, e.g. "🍞 - Grocery".
    pub category: String,
    pub owner: String,
    pub owner_class: &'static str,
}

impl TableView {
    /// Whether the empty-state message is shown instead of rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl SortIcon {
    fn for_order(order: SortOrder) -> Self {
        match order {
            SortOrder::None => SortIcon::Unsorted,
            SortOrder::Asc => SortIcon::Ascending,
            SortOrder::Desc => SortIcon::Descending,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            SortIcon::Unsorted => "fas fa-sort",
            SortIcon::Ascending => "fas fa-sort-up",
            SortIcon::Descending => "fas fa-sort-down",
        }
    }
}

/// Text colour class for an owner's name.
fn owner_class(sex: Sex) -> &'static str {
    match sex {
        Sex::Male => "has-text-link",
        Sex::Female => "has-text-danger",
    }
}

/// Joins `base` with every flag name that is enabled.
fn class_names(base: &str, flags: &[(&str, bool)]) -> String {
    let mut class = base.to_owned();
    for (name, _) in flags.iter().filter(|(_, enabled)| *enabled) {
        if !class.is_empty() {
            class.push(' ');
        }
        class.push_str(name);
    }
    class
}

/// Joins, filters and sorts the catalog's products for the given state.
fn derive_products<'a>(catalog: &'a Catalog, state: &TableState) -> Vec<EnrichedProduct<'a>> {
    let mut products: Vec<_> =
        catalog.enriched().filter(|product| state.filter.matches(product)).collect();
    state.sort.sort(&mut products);
    products
}

pub fn render(catalog: &Catalog, state: &TableState) -> TableView {
    let filter = &state.filter;

    let owner_tabs = catalog
        .users()
        .iter()
        .map(|user| OwnerTab {
            name: user.name.clone(),
            class: class_names("", &[("is-active", filter.is_owner_selected(&user.name))]),
        })
        .collect();

    let category_buttons = catalog
        .categories()
        .iter()
        .map(|category| CategoryButton {
            id: category.id,
            title: category.title.clone(),
            class: class_names(
                "button mr-2 my-1",
                &[("is-info", filter.is_category_selected(category.id))],
            ),
        })
        .collect();

    let headers = COLUMNS
        .iter()
        .enumerate()
        .map(|(index, column)| ColumnHeader {
            column: column.key,
            title: column.title,
            class: format!("column-{}", index + 1),
            icon: SortIcon::for_order(state.sort.order_of(column.key)),
        })
        .collect();

    let rows: Vec<_> = derive_products(catalog, state)
        .into_iter()
        .map(|product| ProductRow {
            id: product.id(),
            name: product.name().to_owned(),
            category: format!("{} - {}", product.category.icon, product.category.title),
            owner: product.owner.name.clone(),
            owner_class: owner_class(product.owner.sex),
        })
        .collect();
    trace!(rows = rows.len(), "rendered product table");

    TableView {
        all_users_class: class_names("", &[("is-active", filter.selected_owner().is_none())]),
        owner_tabs,
        search: SearchBox {
            query: filter.search_query().to_owned(),
            show_clear: !filter.search_query().is_empty(),
        },
        all_categories_class: class_names(
            "button is-success mr-6",
            &[("is-outlined", !filter.selected_categories().is_empty())],
        ),
        category_buttons,
        headers,
        rows,
    }
}
