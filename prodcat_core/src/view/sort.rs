use feruca::Collator;

use crate::data::EnrichedProduct;

/// A column the table can be sorted by.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum SortColumn {
    Id,
    Name,
    Category,
    Owner,
}

#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum SortOrder {
    #[default]
    None,
    Asc,
    Desc,
}

/// The current sort of the table. Either both a column and an order are set,
/// or neither is.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub struct SortBy {
    column: Option<SortColumn>,
    order: SortOrder,
}

impl SortBy {
    pub fn unsorted() -> Self {
        SortBy::default()
    }

    pub fn ascending(column: SortColumn) -> Self {
        SortBy { column: Some(column), order: SortOrder::Asc }
    }

    pub fn descending(column: SortColumn) -> Self {
        SortBy { column: Some(column), order: SortOrder::Desc }
    }

    /// The order in which the given column is sorted; `None` for every column
    /// but the active one.
    pub fn order_of(&self, column: SortColumn) -> SortOrder {
        if self.column == Some(column) {
            self.order
        } else {
            SortOrder::None
        }
    }

    /// Advances the sort after a click on the header of `column`. Repeated
    /// clicks on one header cycle through ascending, descending and unsorted;
    /// a click on another header sorts by it ascending.
    pub fn click(&mut self, column: SortColumn) {
        *self = match self.order_of(column) {
            SortOrder::Asc => SortBy::descending(column),
            SortOrder::Desc => SortBy::unsorted(),
            SortOrder::None => SortBy::ascending(column),
        };
    }

    /// Sorts products by the active column. The sort is stable, so products
    /// that compare equal, or every product when the table is unsorted, keep
    /// their order.
    pub fn sort(&self, products: &mut [EnrichedProduct<'_>]) {
        let Some(column) = self.column else {
            return;
        };
        // CLDR root collation: accents and case only break ties, lower case first
        let mut collator = Collator::default();
        products.sort_by(|a, b| {
            let ordering = match column {
                SortColumn::Id => a.id().cmp(&b.id()),
                SortColumn::Name => collator.collate(a.name(), b.name()),
                SortColumn::Category => {
                    collator.collate(a.category.title.as_str(), b.category.title.as_str())
                }
                SortColumn::Owner => collator.collate(a.owner.name.as_str(), b.owner.name.as_str()),
            };
            match self.order {
                SortOrder::Desc => ordering.reverse(),
                SortOrder::Asc | SortOrder::None => ordering,
            }
        });
    }
}

#[cfg(test)]
mod test {
    use crate::data::{Catalog, Category, Product, ProductId, Sex, User};

    use super::*;

    fn catalog_of(products: &[&str]) -> Catalog {
        Catalog::new(
            vec![User::new(1, "roma", Sex::Male), User::new(2, "Anna", Sex::Female)],
            vec![Category::new(1, "grocery", "🍞", 2), Category::new(2, "Drinks", "🍺", 1)],
            products
                .iter()
                .enumerate()
                .map(|(i, name)| Product::new(i as u32 + 1, *name, 1))
                .collect(),
        )
        .unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![User::new(1, "roma", Sex::Male), User::new(2, "Anna", Sex::Female)],
            vec![Category::new(1, "grocery", "🍞", 2), Category::new(2, "Drinks", "🍺", 1)],
            vec![
                Product::new(1, "bread", 1),
                Product::new(2, "Apples", 2),
                Product::new(3, "Cheese", 1),
            ],
        )
        .unwrap()
    }

    fn sorted_ids(catalog: &Catalog, sort: SortBy) -> Vec<u32> {
        let mut products: Vec<_> = catalog.enriched().collect();
        sort.sort(&mut products);
        products.iter().map(|product| product.id().0).collect()
    }

    fn sorted_names(catalog: &Catalog, sort: SortBy) -> Vec<String> {
        let mut products: Vec<_> = catalog.enriched().collect();
        sort.sort(&mut products);
        products.iter().map(|product| product.name().to_owned()).collect()
    }

    #[test]
    fn click_cycles_through_three_states() {
        let mut sort = SortBy::unsorted();
        sort.click(SortColumn::Id);
        assert_eq!(sort, SortBy::ascending(SortColumn::Id));
        sort.click(SortColumn::Id);
        assert_eq!(sort, SortBy::descending(SortColumn::Id));
        sort.click(SortColumn::Id);
        assert_eq!(sort, SortBy::unsorted());
        assert_eq!(sort.order_of(SortColumn::Id), SortOrder::None);
        sort.click(SortColumn::Id);
        assert_eq!(sort, SortBy::ascending(SortColumn::Id));
    }

    #[test]
    fn click_on_other_column_restarts_ascending() {
        let mut sort = SortBy::descending(SortColumn::Name);
        sort.click(SortColumn::Owner);
        assert_eq!(sort, SortBy::ascending(SortColumn::Owner));
        assert_eq!(sort.order_of(SortColumn::Name), SortOrder::None);
        assert_eq!(sort.order_of(SortColumn::Owner), SortOrder::Asc);
    }

    #[test]
    fn sorts_by_id() {
        let catalog = catalog();
        let mut sort = SortBy::unsorted();
        sort.click(SortColumn::Id);
        assert_eq!(sorted_ids(&catalog, sort), vec![1, 2, 3]);
        sort.click(SortColumn::Id);
        assert_eq!(sorted_ids(&catalog, sort), vec![3, 2, 1]);
        sort.click(SortColumn::Id);
        assert_eq!(sorted_ids(&catalog, sort), vec![1, 2, 3]);
    }

    #[test]
    fn sorts_text_columns_ignoring_case() {
        let catalog = catalog();
        assert_eq!(sorted_ids(&catalog, SortBy::ascending(SortColumn::Name)), vec![2, 1, 3]);
        assert_eq!(sorted_ids(&catalog, SortBy::descending(SortColumn::Name)), vec![3, 1, 2]);
        // Drinks < grocery; ties keep fixture order
        assert_eq!(sorted_ids(&catalog, SortBy::ascending(SortColumn::Category)), vec![2, 1, 3]);
        assert_eq!(sorted_ids(&catalog, SortBy::descending(SortColumn::Category)), vec![1, 3, 2]);
        // Anna < roma
        assert_eq!(sorted_ids(&catalog, SortBy::ascending(SortColumn::Owner)), vec![1, 3, 2]);
    }

    #[test]
    fn accented_letters_sort_with_their_base_letter() {
        let catalog = catalog_of(&["fig", "Pinsel", "éclair", "Ölfarbe", "apple"]);
        assert_eq!(
            sorted_names(&catalog, SortBy::ascending(SortColumn::Name)),
            vec!["apple", "éclair", "fig", "Ölfarbe", "Pinsel"]
        );
        assert_eq!(
            sorted_names(&catalog, SortBy::descending(SortColumn::Name)),
            vec!["Pinsel", "Ölfarbe", "fig", "éclair", "apple"]
        );
    }

    #[test]
    fn case_only_breaks_ties() {
        let catalog = catalog_of(&["Milk", "milk", "Ice cream", "Ice"]);
        assert_eq!(
            sorted_names(&catalog, SortBy::ascending(SortColumn::Name)),
            vec!["Ice", "Ice cream", "milk", "Milk"]
        );
    }

    #[test]
    fn unsorted_keeps_fixture_order() {
        let catalog = catalog();
        assert_eq!(sorted_ids(&catalog, SortBy::unsorted()), vec![1, 2, 3]);
        let first = catalog.enriched().next().unwrap();
        assert_eq!(first.id(), ProductId(1));
    }
}
