//! Default catalog and welcome content for the demo forum.

use tracing::debug;

use crate::models::{Category, Tier};
use crate::registry::CategoryRegistry;
use crate::store::ThreadStore;

fn category(id: &str, name: &str, description: &str, tier: Tier) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        tier,
    }
}

/// The demo catalog: five free rooms followed by eight premium rooms.
pub fn default_categories() -> Vec<Category> {
    vec![
        category(
            "general",
            "General Parenting",
            "Everyday parenting, family routines, practical tips.",
            Tier::Free,
        ),
        category(
            "faith-kids",
            "Faith & Kids",
            "Helping children know and love God in simple ways.",
            Tier::Free,
        ),
        category(
            "school-behaviour",
            "School & Behaviour",
            "Classroom issues, friends, bullying, discipline.",
            Tier::Free,
        ),
        category(
            "tech",
            "Kids & Technology",
            "Screens, phones, games, internet safety.",
            Tier::Free,
        ),
        category(
            "health-emotions",
            "Health & Emotions",
            "Worries, anger, shyness, sleep and more.",
            Tier::Free,
        ),
        category(
            "hard-questions",
            "Hard Questions Kids Ask",
            "Deep or confusing questions children bring about God, life and the world.",
            Tier::Premium,
        ),
        category(
            "serious-concerns",
            "Serious Parent Concerns",
            "Heavier topics that need extra care and privacy.",
            Tier::Premium,
        ),
        category(
            "teens",
            "Raising Teens Faithfully",
            "Identity, friends, boundaries, faith and big emotions.",
            Tier::Premium,
        ),
        category(
            "special-needs",
            "Special Needs Parenting",
            "Support, encouragement and wisdom for parents of special needs children.",
            Tier::Premium,
        ),
        category(
            "marriage-parenting",
            "Marriage & Parenting Corner",
            "Balancing marriage, communication and raising kids together.",
            Tier::Premium,
        ),
        category(
            "single-parents",
            "Single Parents Support Hub",
            "A kind place for single mums and dads.",
            Tier::Premium,
        ),
        category(
            "workshops",
            "Premium Workshops",
            "Special sessions, teaching notes and replays (future).",
            Tier::Premium,
        ),
        category(
            "library",
            "Digital Library",
            "Downloadable guides, worksheets and family resources (future).",
            Tier::Premium,
        ),
    ]
}

/// Seeds the two moderator threads every fresh forum starts with.
pub fn welcome_threads(store: &mut ThreadStore, registry: &CategoryRegistry) {
    let seeds = [
        (
            "general",
            "Welcome to the Curious Kids Parent Forum",
            "This is a gentle, adult-only space. Please keep conversations \
             kind, private and respectful. Children should not use this forum.",
        ),
        (
            "faith-kids",
            "How do you answer 'Where is God?'",
            "Many children ask if God is in the sky, in the church or in the \
             toilet because of funny things at home. How have you explained \
             God's presence simply?",
        ),
    ];

    for (category_id, title, body) in seeds {
        if let Some(category) = registry.get(category_id) {
            // Seed content is static and non-empty, so creation cannot fail.
            let _ = store.create(category, title, body, "Moderator");
            debug!(category_id, title, "Seeded welcome thread");
        }
    }
}
