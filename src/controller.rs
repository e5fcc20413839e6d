use tracing::{debug, info, warn};

use crate::config::ForumConfig;
use crate::error::{ForumError, PermissionError, ValidationError};
use crate::models::{Category, Session, Thread};
use crate::policy::{self, UnlockOutcome};
use crate::registry::CategoryRegistry;
use crate::seed;
use crate::store::ThreadStore;

/// Which screen the UI is on. `AdminPanel` is reachable only by an admin
/// session; `Browsing` is always reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Browsing,
    AdminPanel,
}

/// Translates user intents into policy checks and state transitions, and
/// keeps the single user-facing message for the rendering layer.
///
/// Everything the UI shows is derived from this struct; the tap counter
/// for the hidden admin unlock is a field here, never process-wide state.
pub struct ForumController {
    config: ForumConfig,
    registry: CategoryRegistry,
    store: ThreadStore,
    session: Session,
    screen: Screen,
    selected_category_id: String,
    message: Option<String>,
    logo_taps: u32,
}

impl ForumController {
    pub fn new(config: ForumConfig, registry: CategoryRegistry, store: ThreadStore) -> Self {
        let selected_category_id = registry.default_category().id.clone();
        Self {
            config,
            registry,
            store,
            session: Session::default(),
            screen: Screen::Browsing,
            selected_category_id,
            message: None,
            logo_taps: 0,
        }
    }

    /// A forum with the demo catalog, the welcome threads and a fresh
    /// guest session.
    pub fn with_defaults(config: ForumConfig) -> Self {
        let registry = CategoryRegistry::new(seed::default_categories());
        let mut store = ThreadStore::new();
        seed::welcome_threads(&mut store, &registry);
        Self::new(config, registry, store)
    }

    // --- Derived views (pure reads) ---

    /// All rooms in registration order: free rooms first, then premium.
    pub fn categories(&self) -> &[Category] {
        self.registry.all()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The current user-facing message, if the last action produced one.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn selected_category(&self) -> &Category {
        self.registry
            .get(&self.selected_category_id)
            .unwrap_or_else(|| self.registry.default_category())
    }

    /// Threads of the selected room, most recent first.
    pub fn visible_threads(&self) -> Vec<Thread> {
        self.store.list(&self.selected_category().id)
    }

    /// Whether a room is closed to the current session.
    pub fn premium_locked(&self, category: &Category) -> bool {
        category.tier.is_premium() && !self.session.is_premium
    }

    /// Whether the new-topic form is rendered for the selected room, or
    /// replaced by an upgrade prompt. Only the tier gate matters here; the
    /// quota is enforced on submit.
    pub fn show_new_topic_form(&self) -> bool {
        !self.premium_locked(self.selected_category())
    }

    /// True once enough logo taps have accumulated for a code prompt.
    pub fn awaiting_admin_code(&self) -> bool {
        self.logo_taps >= self.config.logo_tap_threshold
    }

    /// Total number of threads across all rooms, for the admin panel.
    pub fn thread_count(&self) -> usize {
        self.store.len()
    }

    // --- User intents ---

    /// Selects a room. An unknown id silently falls back to the default
    /// room; a premium room keeps the previous selection for free sessions
    /// and tells them why.
    pub fn select_category(&mut self, id: &str) {
        let Some(category) = self.registry.get(id) else {
            self.selected_category_id = self.registry.default_category().id.clone();
            return;
        };
        if category.tier.is_premium() && !self.session.is_premium {
            debug!(category_id = %id, "Free session tried to enter a premium room");
            self.message =
                Some("This room is for Premium Parents. Upgrade to enter.".to_string());
            return;
        }
        self.selected_category_id = category.id.clone();
    }

    /// Starts a new topic in the selected room. Checks run in a fixed
    /// order: validation, then the tier gate, then the quota gate. Exactly
    /// one outcome message is set per attempt, and a failed attempt leaves
    /// all state unchanged.
    pub fn create_thread(&mut self, title: &str, body: &str) -> Result<Thread, ForumError> {
        self.message = None;

        let category = self.selected_category().clone();
        let result = self.try_create(title, body, &category);
        match &result {
            Ok(thread) => {
                info!(
                    thread_id = thread.id,
                    category_id = %category.id,
                    author = %thread.author,
                    "Topic created"
                );
                self.message = Some("Your topic has been added.".to_string());
            }
            Err(e) => {
                warn!(error = %e, category_id = %category.id, "Topic rejected");
                self.message = Some(e.to_string());
            }
        }
        result
    }

    fn try_create(
        &mut self,
        title: &str,
        body: &str,
        category: &Category,
    ) -> Result<Thread, ForumError> {
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        if body.trim().is_empty() {
            return Err(ValidationError::EmptyBody.into());
        }
        policy::check_post(&self.session, category, self.config.free_topic_quota)?;

        let author = self.session.display_name.clone();
        let thread = self.store.create(category, title, body, &author)?;
        self.session.record_creation();
        Ok(thread)
    }

    /// Idempotent premium upgrade.
    pub fn upgrade_to_premium(&mut self) {
        if !self.session.is_premium {
            info!("Session upgraded to premium");
        }
        self.session.upgrade();
        self.message = Some(
            "You are now viewing the forum as a Premium Parent (simulation only).".to_string(),
        );
    }

    /// Changes the display name. Whitespace-only input is a no-op.
    pub fn change_display_name(&mut self, name: &str) {
        self.session.set_display_name(name);
    }

    /// One tap on the hidden logo area. Below the threshold nothing is
    /// said; exactly four taps produce no prompt.
    pub fn tap_admin_logo(&mut self) {
        self.logo_taps += 1;
        debug!(taps = self.logo_taps, "Logo tapped");
    }

    /// Submits an admin code. Below the tap threshold the attempt is
    /// ignored and the counter keeps accumulating; at or above it the code
    /// decides, and the counter resets to zero either way.
    pub fn submit_admin_code(&mut self, code: &str) -> UnlockOutcome {
        let outcome = policy::attempt_admin_unlock(
            self.logo_taps,
            self.config.logo_tap_threshold,
            code,
            &self.config.admin_secret,
        );
        match outcome {
            UnlockOutcome::Ignored => {}
            UnlockOutcome::Granted => {
                self.logo_taps = 0;
                self.session.grant_admin();
                self.screen = Screen::AdminPanel;
                self.message = Some("Admin mode enabled (secret login).".to_string());
                info!("Admin mode granted");
            }
            UnlockOutcome::Denied => {
                self.logo_taps = 0;
                self.message = Some("Incorrect admin code.".to_string());
                warn!("Admin unlock denied: incorrect code");
            }
        }
        outcome
    }

    /// Re-enters the panel without the tap ritual. Only for sessions that
    /// were already granted admin.
    pub fn enter_admin_panel(&mut self) -> Result<(), PermissionError> {
        if !self.session.is_admin {
            return Err(PermissionError);
        }
        self.screen = Screen::AdminPanel;
        Ok(())
    }

    /// Leaves the admin panel. Always available.
    pub fn return_to_forum(&mut self) {
        self.screen = Screen::Browsing;
    }

    /// Empties the whole thread store. Admin only; a non-admin session is
    /// rejected with the store untouched.
    pub fn admin_clear_threads(&mut self) -> Result<(), PermissionError> {
        if !self.session.is_admin {
            warn!("Non-admin session attempted to clear threads");
            self.message = Some(PermissionError.to_string());
            return Err(PermissionError);
        }
        let removed = self.store.len();
        self.store.clear();
        info!(removed, "All threads cleared");
        self.message = Some("All threads cleared on this demo forum.".to_string());
        Ok(())
    }
}
