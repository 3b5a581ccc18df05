//! Top navigation bar with role-specific links and logout.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppGuard;
use crate::router::RouteName;
use crate::state::session::{self, LOGIN_PATH, Role, Session};

const ADMIN_LINKS: &[RouteName] = &[
    RouteName::AdminDashboard,
    RouteName::CreateLot,
    RouteName::Users,
    RouteName::AdminSearch,
    RouteName::AdminSummary,
];
const USER_LINKS: &[RouteName] = &[RouteName::UserDashboard, RouteName::BookSpot];

/// Links shown for the active role. Roles other than `admin` get the user links.
pub(crate) fn nav_links(role: Option<&Role>) -> &'static [RouteName] {
    match role {
        Some(Role::Admin) => ADMIN_LINKS,
        Some(_) => USER_LINKS,
        None => &[],
    }
}

pub(crate) fn link_label(route: RouteName) -> &'static str {
    match route {
        RouteName::AdminDashboard | RouteName::UserDashboard => "Dashboard",
        RouteName::CreateLot => "New Lot",
        RouteName::Users => "Users",
        RouteName::AdminSearch => "Search",
        RouteName::AdminSummary => "Summary",
        RouteName::BookSpot => "Book a Spot",
        other => other.as_str(),
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let guard = expect_context::<AppGuard>();
    let navigate = use_navigate();
    let current = Session::load(guard.store());
    let links = nav_links(current.active_role());

    let on_logout = move |_: leptos::ev::MouseEvent| {
        session::clear(guard.store());
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"Parking"</span>
            {links
                .iter()
                .map(|route| {
                    view! {
                        <a class="nav-bar__link" href=route.path()>
                            {link_label(*route)}
                        </a>
                    }
                })
                .collect_view()}
            <button class="nav-bar__logout" on:click=on_logout>
                "Logout"
            </button>
        </nav>
    }
}
