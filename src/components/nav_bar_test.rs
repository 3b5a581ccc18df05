use super::*;

#[test]
fn nav_links_empty_without_role() {
    assert!(nav_links(None).is_empty());
}

#[test]
fn nav_links_for_admin_are_admin_routes() {
    let links = nav_links(Some(&Role::Admin));
    assert!(links.iter().all(|r| r.class() == crate::router::AuthClass::AdminOnly));
    assert_eq!(links[0], RouteName::AdminDashboard);
}

#[test]
fn nav_links_for_unknown_role_fall_back_to_user_links() {
    let links = nav_links(Some(&Role::Unknown("auditor".to_owned())));
    assert_eq!(links, nav_links(Some(&Role::User)));
    assert!(links.contains(&RouteName::BookSpot));
}

#[test]
fn link_labels_are_human_readable() {
    assert_eq!(link_label(RouteName::CreateLot), "New Lot");
    assert_eq!(link_label(RouteName::UserDashboard), "Dashboard");
    assert_eq!(link_label(RouteName::ViewSpot), "ViewSpot");
}
