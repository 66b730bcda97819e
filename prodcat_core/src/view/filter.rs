use crate::data::{CategoryId, EnrichedProduct};

/// The filters selected in the filter panel. A product is shown only if it
/// passes all of them; an unset filter lets everything through.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct ProductFilter {
    /// Name of the owner whose products are shown.
    selected_owner: Option<String>,
    /// Categories whose products are shown, in the order they were selected.
    /// Never contains duplicates.
    selected_categories: Vec<CategoryId>,
    search_query: String,
}

impl ProductFilter {
    pub fn selected_owner(&self) -> Option<&str> {
        self.selected_owner.as_deref()
    }

    pub fn selected_categories(&self) -> &[CategoryId] {
        &self.selected_categories
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn is_owner_selected(&self, name: &str) -> bool {
        self.selected_owner.as_deref() == Some(name)
    }

    pub fn is_category_selected(&self, id: CategoryId) -> bool {
        self.selected_categories.contains(&id)
    }

    /// Selects the given owner, or clears the owner filter if that owner is
    /// already selected. Selecting `None` always clears it.
    pub fn select_owner(&mut self, owner: Option<&str>) {
        self.selected_owner = match owner {
            Some(owner) if !self.is_owner_selected(owner) => Some(owner.to_owned()),
            _ => None,
        };
    }

    /// Adds the category to the selection, or removes it if it is already
    /// selected.
    pub fn toggle_category(&mut self, id: CategoryId) {
        if self.is_category_selected(id) {
            self.selected_categories.retain(|&selected| selected != id);
        } else {
            self.selected_categories.push(id);
        }
    }

    pub fn clear_categories(&mut self) {
        self.selected_categories.clear();
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn clear_search_query(&mut self) {
        self.search_query.clear();
    }

    pub fn matches(&self, product: &EnrichedProduct<'_>) -> bool {
        self.matches_owner(product) && self.matches_category(product) && self.matches_name(product)
    }

    fn matches_owner(&self, product: &EnrichedProduct<'_>) -> bool {
        self.selected_owner.as_deref().map_or(true, |owner| product.owner.name == owner)
    }

    fn matches_category(&self, product: &EnrichedProduct<'_>) -> bool {
        self.selected_categories.is_empty() || self.is_category_selected(product.category.id)
    }

    fn matches_name(&self, product: &EnrichedProduct<'_>) -> bool {
        self.search_query.is_empty()
            || product.name().to_lowercase().contains(&self.search_query.to_lowercase())
    }
}

#[cfg(test)]
mod test {
    use crate::data::{Catalog, Category, Product, Sex, User};

    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![User::new(1, "Roma", Sex::Male), User::new(2, "Anna", Sex::Female)],
            vec![Category::new(1, "Grocery", "🍞", 2), Category::new(2, "Drinks", "🍺", 1)],
            vec![
                Product::new(1, "Milk", 1),
                Product::new(2, "Bread", 2),
                Product::new(3, "Mineral water", 2),
            ],
        )
        .unwrap()
    }

    fn matching_names(catalog: &Catalog, filter: &ProductFilter) -> Vec<String> {
        catalog
            .enriched()
            .filter(|product| filter.matches(product))
            .map(|product| product.name().to_owned())
            .collect()
    }

    #[test]
    fn empty_filter_matches_everything() {
        let catalog = catalog();
        assert_eq!(matching_names(&catalog, &ProductFilter::default()).len(), 3);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let catalog = catalog();
        let mut filter = ProductFilter::default();
        filter.set_search_query("mI");
        assert_eq!(matching_names(&catalog, &filter), vec!["Milk", "Mineral water"]);

        filter.set_search_query("WATER");
        assert_eq!(matching_names(&catalog, &filter), vec!["Mineral water"]);

        filter.clear_search_query();
        assert_eq!(filter.search_query(), "");
    }

    #[test]
    fn owner_match_is_exact() {
        let catalog = catalog();
        let mut filter = ProductFilter::default();
        filter.select_owner(Some("Roma"));
        assert_eq!(matching_names(&catalog, &filter), vec!["Bread", "Mineral water"]);

        filter.select_owner(Some("roma"));
        assert_eq!(matching_names(&catalog, &filter), Vec::<String>::new());
    }

    #[test]
    fn selecting_owner_twice_clears_it() {
        let mut filter = ProductFilter::default();
        filter.select_owner(Some("Anna"));
        assert!(filter.is_owner_selected("Anna"));
        filter.select_owner(Some("Anna"));
        assert_eq!(filter.selected_owner(), None);

        filter.select_owner(Some("Anna"));
        filter.select_owner(Some("Roma"));
        assert_eq!(filter.selected_owner(), Some("Roma"));
        filter.select_owner(None);
        assert_eq!(filter.selected_owner(), None);
    }

    #[test]
    fn toggling_category_twice_restores_selection() {
        let mut filter = ProductFilter::default();
        filter.toggle_category(CategoryId(2));
        let before = filter.clone();

        filter.toggle_category(CategoryId(1));
        assert_eq!(filter.selected_categories(), &[CategoryId(2), CategoryId(1)]);
        filter.toggle_category(CategoryId(1));
        assert_eq!(filter, before);
    }

    #[test]
    fn categories_match_by_id() {
        let catalog = catalog();
        let mut filter = ProductFilter::default();
        filter.toggle_category(CategoryId(1));
        assert_eq!(matching_names(&catalog, &filter), vec!["Milk"]);

        filter.toggle_category(CategoryId(2));
        assert_eq!(matching_names(&catalog, &filter).len(), 3);

        filter.clear_categories();
        assert!(filter.selected_categories().is_empty());
    }

    #[test]
    fn filters_are_conjunctive() {
        let catalog = catalog();
        let mut filter = ProductFilter::default();
        filter.select_owner(Some("Roma"));
        filter.toggle_category(CategoryId(2));
        filter.set_search_query("bread");
        assert_eq!(matching_names(&catalog, &filter), vec!["Bread"]);

        filter.select_owner(Some("Anna"));
        assert_eq!(matching_names(&catalog, &filter), Vec::<String>::new());
    }
}
