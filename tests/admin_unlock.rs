// tests/admin_unlock.rs
// Declare the common module
mod common;

use parent_forum::{PermissionError, Screen, UnlockOutcome};

// Bring helpers into scope
use common::helpers::{test_forum, unlock_admin, TEST_SECRET};

#[test]
fn four_taps_produce_no_prompt() {
    let mut forum = test_forum();
    for _ in 0..4 {
        forum.tap_admin_logo();
    }
    assert!(!forum.awaiting_admin_code());
    assert!(forum.message().is_none());

    // Submitting early is ignored and keeps the taps accumulating.
    assert_eq!(forum.submit_admin_code(TEST_SECRET), UnlockOutcome::Ignored);
    assert!(!forum.session().is_admin);

    forum.tap_admin_logo();
    assert!(forum.awaiting_admin_code());
}

#[test]
fn fifth_tap_with_correct_code_grants_admin() {
    let mut forum = test_forum();
    for _ in 0..5 {
        forum.tap_admin_logo();
    }
    assert_eq!(forum.submit_admin_code(TEST_SECRET), UnlockOutcome::Granted);
    assert!(forum.session().is_admin);
    assert_eq!(forum.screen(), Screen::AdminPanel);
    assert_eq!(forum.message(), Some("Admin mode enabled (secret login)."));

    // The tap counter reset with the grant.
    assert!(!forum.awaiting_admin_code());
}

#[test]
fn fifth_tap_with_wrong_code_denies_and_resets() {
    let mut forum = test_forum();
    for _ in 0..5 {
        forum.tap_admin_logo();
    }
    assert_eq!(forum.submit_admin_code("nope"), UnlockOutcome::Denied);
    assert!(!forum.session().is_admin);
    assert_eq!(forum.screen(), Screen::Browsing);
    assert_eq!(forum.message(), Some("Incorrect admin code."));

    // Counter reset: the next submission is ignored until five new taps.
    assert_eq!(forum.submit_admin_code(TEST_SECRET), UnlockOutcome::Ignored);
    for _ in 0..5 {
        forum.tap_admin_logo();
    }
    assert_eq!(forum.submit_admin_code(TEST_SECRET), UnlockOutcome::Granted);
}

#[test]
fn admin_status_survives_leaving_the_panel() {
    let mut forum = test_forum();
    unlock_admin(&mut forum);

    forum.return_to_forum();
    assert_eq!(forum.screen(), Screen::Browsing);
    assert!(forum.session().is_admin);

    // Re-entry needs no new ritual.
    forum.enter_admin_panel().expect("admin may re-enter");
    assert_eq!(forum.screen(), Screen::AdminPanel);
}

#[test]
fn panel_is_closed_to_non_admins() {
    let mut forum = test_forum();
    assert_eq!(forum.enter_admin_panel(), Err(PermissionError));
    assert_eq!(forum.screen(), Screen::Browsing);
}

#[test]
fn clear_threads_requires_admin() {
    let mut forum = test_forum();
    forum.create_thread("Hi", "Hello world").unwrap();

    assert_eq!(forum.admin_clear_threads(), Err(PermissionError));
    assert_eq!(forum.thread_count(), 1);

    unlock_admin(&mut forum);
    forum.admin_clear_threads().expect("admin clear should pass");
    assert_eq!(forum.thread_count(), 0);
    assert_eq!(
        forum.message(),
        Some("All threads cleared on this demo forum.")
    );
}

#[test]
fn clear_threads_empties_every_room() {
    let mut forum = test_forum();
    forum.upgrade_to_premium();
    forum.create_thread("General topic", "Body").unwrap();
    forum.select_category("teens");
    forum.create_thread("Teen topic", "Body").unwrap();

    unlock_admin(&mut forum);
    forum.admin_clear_threads().unwrap();

    assert!(forum.visible_threads().is_empty());
    forum.select_category("general");
    assert!(forum.visible_threads().is_empty());
}
