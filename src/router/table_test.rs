use std::collections::HashSet;

use super::*;

// =============================================================
// Table invariants
// =============================================================

#[test]
fn route_names_are_unique_and_in_table_order() {
    for (idx, name) in RouteName::ALL.iter().enumerate() {
        assert_eq!(ROUTES[idx].name, *name);
    }
    let unique: HashSet<_> = ROUTES.iter().map(|r| r.name).collect();
    assert_eq!(unique.len(), ROUTES.len());
}

#[test]
fn route_paths_are_unique() {
    let unique: HashSet<_> = ROUTES.iter().map(|r| r.path).collect();
    assert_eq!(unique.len(), ROUTES.len());
}

#[test]
fn admin_and_user_sets_are_disjoint_subsets_of_auth_required() {
    let auth: HashSet<_> = auth_required().collect();
    let admin: HashSet<_> = admin_only().collect();
    let user: HashSet<_> = user_only().collect();

    assert!(admin.is_disjoint(&user));
    assert!(admin.is_subset(&auth));
    assert!(user.is_subset(&auth));
}

#[test]
fn every_gated_route_has_exactly_one_role() {
    let admin: HashSet<_> = admin_only().collect();
    let user: HashSet<_> = user_only().collect();
    for name in RouteName::ALL {
        if matches!(name, RouteName::Home | RouteName::Login | RouteName::Signup) {
            assert!(!name.class().requires_auth(), "{name} must be public");
            continue;
        }
        assert!(admin.contains(&name) ^ user.contains(&name), "{name} must be in one role set");
    }
}

#[test]
fn role_sets_match_route_surface() {
    let user: Vec<_> = user_only().collect();
    assert_eq!(user, vec![RouteName::UserDashboard, RouteName::BookSpot, RouteName::ReleaseSpot]);
    assert_eq!(admin_only().count(), 7);
    assert_eq!(auth_required().count(), 10);
}

#[test]
fn parameterized_routes_take_props_from_params() {
    for r in &ROUTES {
        let has_params = r.path.contains("/:");
        assert_eq!(r.props_from_params, has_params, "{}", r.name);
    }
}

// =============================================================
// Names
// =============================================================

#[test]
fn route_name_parses_from_display_string() {
    for name in RouteName::ALL {
        assert_eq!(name.to_string().parse::<RouteName>(), Ok(name));
    }
}

#[test]
fn route_name_parse_rejects_unknown() {
    assert_eq!(
        "Dashboard".parse::<RouteName>(),
        Err(RouteError::UnknownRoute("Dashboard".to_owned()))
    );
}

// =============================================================
// Path templates
// =============================================================

#[test]
fn match_path_resolves_static_routes() {
    let m = match_path("/admin/lots/create").expect("route");
    assert_eq!(m.name, RouteName::CreateLot);
    assert!(m.params.is_empty());
}

#[test]
fn match_path_extracts_parameters() {
    let m = match_path("/admin/lots/12/edit").expect("route");
    assert_eq!(m.name, RouteName::EditLot);
    assert_eq!(m.param("lotId"), Some("12"));
    assert_eq!(m.param("spotId"), None);
}

#[test]
fn match_path_ignores_query_fragment_and_trailing_slash() {
    assert_eq!(match_path("/user/release/9/?x=1").map(|m| m.name), Some(RouteName::ReleaseSpot));
    assert_eq!(match_path("/login#top").map(|m| m.name), Some(RouteName::Login));
}

#[test]
fn match_path_root_is_home() {
    assert_eq!(match_path("/").map(|m| m.name), Some(RouteName::Home));
}

#[test]
fn match_path_rejects_unknown_and_relative_paths() {
    assert_eq!(match_path("/admin/unknown"), None);
    assert_eq!(match_path("/admin/spots/"), None);
    assert_eq!(match_path("user/book"), None);
    assert_eq!(match_path(""), None);
}

// =============================================================
// Root redirect
// =============================================================

#[test]
fn root_redirect_sends_admin_to_admin_dashboard() {
    let session = Session::new(Some("t"), Some("admin"));
    assert_eq!(root_redirect(&session), "/admin/dashboard");
}

#[test]
fn root_redirect_sends_other_roles_to_user_dashboard() {
    assert_eq!(root_redirect(&Session::new(Some("t"), Some("user"))), "/user/dashboard");
    assert_eq!(root_redirect(&Session::new(Some("t"), Some("auditor"))), "/user/dashboard");
}

#[test]
fn root_redirect_without_complete_session_goes_to_login() {
    assert_eq!(root_redirect(&Session::default()), "/login");
    assert_eq!(root_redirect(&Session::new(Some("t"), None)), "/login");
    assert_eq!(root_redirect(&Session::new(None, Some("admin"))), "/login");
}
