use std::env;

const DEFAULT_ADMIN_SECRET: &str = "CKADMIN2025";
const DEFAULT_FREE_TOPIC_QUOTA: u32 = 1;
const DEFAULT_LOGO_TAP_THRESHOLD: u32 = 5;

/// Engine configuration. The admin secret is injected here rather than
/// hardcoded next to the policy; a real deployment would replace the whole
/// unlock ritual with a server-side credential check.
#[derive(Clone, Debug)]
pub struct ForumConfig {
    pub admin_secret: String,
    pub free_topic_quota: u32,
    pub logo_tap_threshold: u32,
}

impl Default for ForumConfig {
    fn default() -> Self {
        Self {
            admin_secret: DEFAULT_ADMIN_SECRET.to_string(),
            free_topic_quota: DEFAULT_FREE_TOPIC_QUOTA,
            logo_tap_threshold: DEFAULT_LOGO_TAP_THRESHOLD,
        }
    }
}

impl ForumConfig {
    /// Reads `FORUM_ADMIN_SECRET`, `FORUM_FREE_TOPIC_QUOTA` and
    /// `FORUM_LOGO_TAP_THRESHOLD` from the environment, falling back to the
    /// demo defaults. Unparseable numbers fall back as well.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let admin_secret =
            env::var("FORUM_ADMIN_SECRET").unwrap_or(defaults.admin_secret);
        let free_topic_quota = env::var("FORUM_FREE_TOPIC_QUOTA")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.free_topic_quota);
        // At least one tap, so the unlock always stays a deliberate gesture.
        let logo_tap_threshold = env::var("FORUM_LOGO_TAP_THRESHOLD")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.logo_tap_threshold)
            .max(1);

        Self {
            admin_secret,
            free_topic_quota,
            logo_tap_threshold,
        }
    }
}
