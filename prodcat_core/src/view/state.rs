use tracing::debug;

use crate::data::CategoryId;

use super::{
    filter::ProductFilter,
    sort::{SortBy, SortColumn},
};

/// Everything the user can change about the table. Front-ends own one of
/// these and change it only through [`TableState::dispatch`].
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct TableState {
    pub filter: ProductFilter,
    pub sort: SortBy,
}

/// An interaction with the filter panel or the table header.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TableAction {
    /// A click on an owner tab. `None` is the "All" tab.
    SelectOwner(Option<String>),
    /// A click on a category button.
    ToggleCategory(CategoryId),
    /// A click on the "All" categories button.
    ClearCategories,
    SetSearchQuery(String),
    ClearSearch,
    /// A click on a column header.
    Sort(SortColumn),
    /// Puts every filter and the sort back to their initial values.
    ResetAll,
}

impl TableState {
    pub fn new() -> Self {
        TableState::default()
    }

    /// Applies the action to the state. Actions never fail.
    pub fn dispatch(&mut self, action: TableAction) {
        debug!(?action, "dispatching table action");
        match action {
            TableAction::SelectOwner(owner) => self.filter.select_owner(owner.as_deref()),
            TableAction::ToggleCategory(id) => self.filter.toggle_category(id),
            TableAction::ClearCategories => self.filter.clear_categories(),
            TableAction::SetSearchQuery(query) => self.filter.set_search_query(query),
            TableAction::ClearSearch => self.filter.clear_search_query(),
            TableAction::Sort(column) => self.sort.click(column),
            TableAction::ResetAll => *self = TableState::default(),
        }
    }
}
