//! In-memory engine for a small parent-forum demo: category browsing,
//! thread creation behind a free/premium access policy, and a hidden
//! tap-then-code admin unlock.
//!
//! The engine is synchronous and single-owner; every operation runs to
//! completion on the caller's thread. Nothing is persisted: all state dies
//! with the process. A persistence collaborator could be added behind
//! [`store::ThreadStore`] without changing its contract.

// Declare the modules (public for the library)
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod policy;
pub mod registry;
pub mod seed;
pub mod store;

pub use config::ForumConfig;
pub use controller::{ForumController, Screen};
pub use error::{ForumError, PermissionError, PolicyError, ValidationError};
pub use models::{Category, Session, Thread, Tier};
pub use policy::UnlockOutcome;
