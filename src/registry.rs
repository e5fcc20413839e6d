use crate::models::Category;

/// Ordered, immutable catalog of rooms, defined once at startup.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    /// Builds a registry from an ordered list of categories.
    ///
    /// # Panics
    ///
    /// Panics if `categories` is empty; the forum needs a default room to
    /// fall back to.
    pub fn new(categories: Vec<Category>) -> Self {
        assert!(
            !categories.is_empty(),
            "the forum needs at least one category"
        );
        Self { categories }
    }

    /// All categories in registration order.
    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// The fallback room for unknown selections: the first registered
    /// category.
    pub fn default_category(&self) -> &Category {
        &self.categories[0]
    }
}
