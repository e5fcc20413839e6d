// tests/common/helpers.rs
//! Shared helper functions for integration tests

#![allow(dead_code)]

use parent_forum::registry::CategoryRegistry;
use parent_forum::store::ThreadStore;
use parent_forum::{Category, ForumConfig, ForumController, Tier, UnlockOutcome};

pub const TEST_SECRET: &str = "TESTSECRET42";

pub fn test_config() -> ForumConfig {
    ForumConfig {
        admin_secret: TEST_SECRET.to_string(),
        free_topic_quota: 1,
        logo_tap_threshold: 5,
    }
}

pub fn test_categories() -> Vec<Category> {
    vec![
        Category {
            id: "general".to_string(),
            name: "General Parenting".to_string(),
            description: "Everyday parenting.".to_string(),
            tier: Tier::Free,
        },
        Category {
            id: "faith-kids".to_string(),
            name: "Faith & Kids".to_string(),
            description: "Faith in simple ways.".to_string(),
            tier: Tier::Free,
        },
        Category {
            id: "teens".to_string(),
            name: "Raising Teens Faithfully".to_string(),
            description: "Identity, friends, boundaries.".to_string(),
            tier: Tier::Premium,
        },
    ]
}

/// An empty forum with a known catalog, secret and quota.
pub fn test_forum() -> ForumController {
    ForumController::new(
        test_config(),
        CategoryRegistry::new(test_categories()),
        ThreadStore::new(),
    )
}

/// Runs the full tap-then-code ritual with the correct secret.
pub fn unlock_admin(forum: &mut ForumController) {
    for _ in 0..5 {
        forum.tap_admin_logo();
    }
    let outcome = forum.submit_admin_code(TEST_SECRET);
    assert_eq!(outcome, UnlockOutcome::Granted);
}
