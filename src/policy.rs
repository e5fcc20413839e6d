//! Pure access decisions for posting and the hidden admin unlock.
//!
//! Nothing in this module mutates state; the controller applies whatever
//! these functions decide.

use crate::error::PolicyError;
use crate::models::{Category, Session};

/// Outcome of an admin unlock attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    /// The tap threshold has not been reached; nothing to decide yet.
    Ignored,
    Granted,
    Denied,
}

/// Full posting check. The tier gate runs first so a free user in a
/// premium room hears about the room, not the quota; that ordering is a
/// contract, not an accident.
pub fn check_post(
    session: &Session,
    category: &Category,
    quota: u32,
) -> Result<(), PolicyError> {
    if category.tier.is_premium() && !session.is_premium {
        return Err(PolicyError::PremiumRequired);
    }
    if !quota_ok(session, quota) {
        return Err(PolicyError::QuotaExceeded { limit: quota });
    }
    Ok(())
}

/// Fails closed: any gate failing means no posting.
pub fn can_post(session: &Session, category: &Category, quota: u32) -> bool {
    check_post(session, category, quota).is_ok()
}

/// Premium sessions are never quota-limited; free sessions may start up to
/// `quota` topics total, across all categories.
pub fn quota_ok(session: &Session, quota: u32) -> bool {
    session.is_premium || session.free_topics_created < quota
}

/// Decides an admin unlock attempt. `Ignored` while the tap count is below
/// the threshold; once reached, an exact match against the secret decides.
/// The caller must reset its tap counter after any non-`Ignored` outcome.
pub fn attempt_admin_unlock(
    tap_count: u32,
    threshold: u32,
    entered_code: &str,
    secret: &str,
) -> UnlockOutcome {
    if tap_count < threshold {
        return UnlockOutcome::Ignored;
    }
    if entered_code == secret {
        UnlockOutcome::Granted
    } else {
        UnlockOutcome::Denied
    }
}
