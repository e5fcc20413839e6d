use thiserror::Error;

/// Rejections for malformed thread input. Titles and bodies are trimmed
/// before the check, so whitespace-only input is empty input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please add a short title and a few more words in your post.")]
    EmptyTitle,
    #[error("Please add a short title and a few more words in your post.")]
    EmptyBody,
}

/// Posting rejected by the access policy. The tier gate is always checked
/// before the quota gate, so a free user in a premium room sees
/// `PremiumRequired` even when the quota is also spent.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PolicyError {
    #[error("This room is for Premium Parents only. Please upgrade to post here.")]
    PremiumRequired,
    #[error("Free parents can start {limit} topic in this demo. Upgrade to share more.")]
    QuotaExceeded { limit: u32 },
}

/// An admin-only operation was invoked by a non-admin session.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Only an admin can do that.")]
pub struct PermissionError;

/// Boundary error for the controller surface. Every variant is recoverable
/// and carries its own user-facing message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ForumError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Policy(#[from] PolicyError),
    #[error(transparent)]
    Permission(#[from] PermissionError),
}
