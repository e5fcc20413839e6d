use chrono::Utc;

use crate::error::ValidationError;
use crate::models::{Category, Thread};

/// Append-only in-memory collection of threads. The only removal path is
/// the admin bulk clear. Nothing here touches disk; the whole collection
/// dies with the process.
#[derive(Debug, Default)]
pub struct ThreadStore {
    threads: Vec<Thread>,
    last_id: u64,
}

impl ThreadStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Unix-millis base, bumped past the previous id so rapid creation in
    // the same millisecond still yields unique, strictly increasing ids.
    fn next_id(&mut self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }

    /// Appends a new thread to the given category.
    ///
    /// Title and body are trimmed; either being empty afterwards rejects
    /// the input and leaves the store untouched. `is_premium_only` mirrors
    /// the category's tier at creation time. Taking the `Category` itself
    /// (not an id) keeps every stored thread pointing at a registered room.
    pub fn create(
        &mut self,
        category: &Category,
        title: &str,
        body: &str,
        author: &str,
    ) -> Result<Thread, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let body = body.trim();
        if body.is_empty() {
            return Err(ValidationError::EmptyBody);
        }

        let thread = Thread {
            id: self.next_id(),
            category_id: category.id.clone(),
            title: title.to_string(),
            body: body.to_string(),
            author: author.to_string(),
            created_at: Utc::now(),
            is_premium_only: category.tier.is_premium(),
        };
        self.threads.push(thread.clone());
        Ok(thread)
    }

    /// Threads of one category, most recent first. Non-destructive and
    /// repeatable.
    pub fn list(&self, category_id: &str) -> Vec<Thread> {
        self.threads
            .iter()
            .rev()
            .filter(|t| t.category_id == category_id)
            .cloned()
            .collect()
    }

    /// Empties the collection unconditionally. The admin gate lives in the
    /// controller, not here.
    pub fn clear(&mut self) {
        self.threads.clear();
    }

    pub fn len(&self) -> usize {
        self.threads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tier;

    fn free_category() -> Category {
        Category {
            id: "general".to_string(),
            name: "General Parenting".to_string(),
            description: "Everyday parenting.".to_string(),
            tier: Tier::Free,
        }
    }

    fn premium_category() -> Category {
        Category {
            id: "teens".to_string(),
            name: "Raising Teens Faithfully".to_string(),
            description: "Identity, friends, boundaries.".to_string(),
            tier: Tier::Premium,
        }
    }

    #[test]
    fn create_trims_and_stores() {
        let mut store = ThreadStore::new();
        let thread = store
            .create(&free_category(), "  Hi  ", "  Hello world  ", "A")
            .unwrap();
        assert_eq!(thread.title, "Hi");
        assert_eq!(thread.body, "Hello world");
        assert_eq!(thread.author, "A");
        assert_eq!(thread.category_id, "general");
        assert!(!thread.is_premium_only);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn premium_flag_mirrors_category_tier() {
        let mut store = ThreadStore::new();
        let thread = store
            .create(&premium_category(), "T", "B", "A")
            .unwrap();
        assert!(thread.is_premium_only);
    }

    #[test]
    fn empty_input_is_rejected_without_state_change() {
        let mut store = ThreadStore::new();
        assert_eq!(
            store.create(&free_category(), "   ", "body", "A"),
            Err(ValidationError::EmptyTitle)
        );
        assert_eq!(
            store.create(&free_category(), "title", " \n ", "A"),
            Err(ValidationError::EmptyBody)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn list_returns_most_recent_first() {
        let mut store = ThreadStore::new();
        let first = store.create(&free_category(), "First", "B", "A").unwrap();
        let second = store.create(&free_category(), "Second", "B", "A").unwrap();
        let listed = store.list("general");
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[test]
    fn list_filters_by_category() {
        let mut store = ThreadStore::new();
        store.create(&free_category(), "Free topic", "B", "A").unwrap();
        store.create(&premium_category(), "Teen topic", "B", "A").unwrap();
        assert_eq!(store.list("general").len(), 1);
        assert_eq!(store.list("teens").len(), 1);
        assert!(store.list("unknown").is_empty());
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut store = ThreadStore::new();
        let mut last = 0;
        for i in 0..10 {
            let thread = store
                .create(&free_category(), &format!("T{i}"), "B", "A")
                .unwrap();
            assert!(thread.id > last);
            last = thread.id;
        }
    }

    #[test]
    fn clear_empties_everything() {
        let mut store = ThreadStore::new();
        store.create(&free_category(), "T", "B", "A").unwrap();
        store.create(&premium_category(), "T2", "B", "A").unwrap();
        store.clear();
        assert!(store.is_empty());
        assert!(store.list("general").is_empty());
    }
}
