use super::*;
use crate::state::store::MemoryStore;

// =============================================================
// Role
// =============================================================

#[test]
fn role_from_tag_recognizes_known_roles() {
    assert_eq!(Role::from_tag("user"), Role::User);
    assert_eq!(Role::from_tag("admin"), Role::Admin);
}

#[test]
fn role_from_tag_is_case_sensitive() {
    assert_eq!(Role::from_tag("Admin"), Role::Unknown("Admin".to_owned()));
}

#[test]
fn role_unknown_is_neither_admin_nor_user() {
    let role = Role::from_tag("manager");
    assert!(!role.is_admin());
    assert!(!role.is_user());
    assert_eq!(role.as_tag(), "manager");
}

#[test]
fn role_dashboard_path_prefers_user_dashboard_for_non_admin() {
    assert_eq!(Role::Admin.dashboard_path(), "/admin/dashboard");
    assert_eq!(Role::User.dashboard_path(), "/user/dashboard");
    assert_eq!(Role::Unknown("guest".to_owned()).dashboard_path(), "/user/dashboard");
}

#[test]
fn role_display_matches_tag() {
    assert_eq!(Role::Admin.to_string(), "admin");
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_default_is_empty() {
    let session = Session::default();
    assert!(!session.has_token());
    assert!(!session.is_complete());
}

#[test]
fn session_treats_empty_strings_as_absent() {
    let session = Session::new(Some(""), Some(""));
    assert_eq!(session, Session::default());
}

#[test]
fn session_token_without_role_is_incomplete() {
    let session = Session::new(Some("abc"), None);
    assert!(session.has_token());
    assert!(!session.is_complete());
    assert_eq!(session.active_role(), None);
}

#[test]
fn session_role_without_token_has_no_active_role() {
    let session = Session::new(None, Some("admin"));
    assert!(!session.is_complete());
    assert_eq!(session.active_role(), None);
}

#[test]
fn session_load_reads_both_keys() {
    let store = MemoryStore::with_entries([(TOKEN_KEY, "abc"), (ROLE_KEY, "admin")]);
    let session = Session::load(&store);
    assert_eq!(session.token.as_deref(), Some("abc"));
    assert_eq!(session.role, Some(Role::Admin));
    assert!(session.is_complete());
}

#[test]
fn save_login_then_clear_round_trips_through_store() {
    let store = MemoryStore::new();
    save_login(&store, "t-1", "user");
    assert_eq!(Session::load(&store), Session::new(Some("t-1"), Some("user")));

    clear(&store);
    assert!(store.is_empty());
    assert_eq!(Session::load(&store), Session::default());
}
