use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access tier of a category. Exactly two tiers exist.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Free,
    Premium,
}

impl Tier {
    pub fn is_premium(self) -> bool {
        matches!(self, Tier::Premium)
    }
}

/// Represents a discussion room in the forum.
///
/// Categories are immutable and defined once at startup; see
/// `seed::default_categories` for the demo catalog.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tier: Tier,
}

/// The single active user's session. Created with defaults at startup and
/// never destroyed; all mutation goes through the methods below.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub display_name: String,
    pub is_premium: bool,
    pub is_admin: bool,
    pub free_topics_created: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            display_name: "Guest Parent".to_string(),
            is_premium: false,
            is_admin: false,
            free_topics_created: 0,
        }
    }
}

impl Session {
    /// Counts a topic against the free quota. The counter is frozen once
    /// the session is premium; an upgrade never resets it.
    pub fn record_creation(&mut self) {
        if !self.is_premium {
            self.free_topics_created += 1;
        }
    }

    /// Idempotent premium upgrade.
    pub fn upgrade(&mut self) {
        self.is_premium = true;
    }

    /// Admin status is never revoked within a session.
    pub fn grant_admin(&mut self) {
        self.is_admin = true;
    }

    /// Replaces the display name. Whitespace-only input keeps the current
    /// name, so the name stays non-empty.
    pub fn set_display_name(&mut self, name: &str) {
        let trimmed = name.trim();
        if !trimmed.is_empty() {
            self.display_name = trimmed.to_string();
        }
    }
}

/// A topic started in a category. Immutable after creation; the only
/// removal path is the admin bulk clear on the store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    pub id: u64,
    pub category_id: String,
    pub title: String,
    pub body: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub is_premium_only: bool,
}
