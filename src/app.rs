//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::route_guard::{Guarded, HomeRedirect};
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::pages::admin::{
    AdminDashboardPage, AdminSearchPage, AdminSummaryPage, CreateLotPage, EditLotPage, UsersPage, ViewSpotPage,
};
use crate::pages::login::LoginPage;
use crate::pages::signup::SignupPage;
use crate::pages::user::{BookSpotPage, ReleaseSpotPage, UserDashboardPage};
use crate::router::NavigationGuard;
use crate::state::store::LocalStorageStore;

/// Navigation guard over the browser's `localStorage`.
pub type AppGuard = NavigationGuard<LocalStorageStore>;
/// API client over the browser's `localStorage`.
pub type AppApi = ApiClient<LocalStorageStore>;

/// Root application component.
///
/// Provides the guard and the API client as context and declares
/// every route. All routes but `/` render through [`Guarded`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    provide_context(AppApi::new(&config, LocalStorageStore));
    provide_context(AppGuard::new(LocalStorageStore));

    view! {
        <Title text="Parking"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomeRedirect/>
                <Route
                    path=path!("/login")
                    view=|| view! { <Guarded><LoginPage/></Guarded> }
                />
                <Route
                    path=path!("/signup")
                    view=|| view! { <Guarded><SignupPage/></Guarded> }
                />
                <Route
                    path=path!("/user/dashboard")
                    view=|| view! { <Guarded><UserDashboardPage/></Guarded> }
                />
                <Route
                    path=path!("/user/book")
                    view=|| view! { <Guarded><BookSpotPage/></Guarded> }
                />
                <Route
                    path=path!("/user/release/:reservationId")
                    view=|| view! { <Guarded><ReleaseSpotPage/></Guarded> }
                />
                <Route
                    path=path!("/admin/dashboard")
                    view=|| view! { <Guarded><AdminDashboardPage/></Guarded> }
                />
                <Route
                    path=path!("/admin/lots/create")
                    view=|| view! { <Guarded><CreateLotPage/></Guarded> }
                />
                <Route
                    path=path!("/admin/lots/:lotId/edit")
                    view=|| view! { <Guarded><EditLotPage/></Guarded> }
                />
                <Route
                    path=path!("/admin/spots/:spotId")
                    view=|| view! { <Guarded><ViewSpotPage/></Guarded> }
                />
                <Route
                    path=path!("/admin/users")
                    view=|| view! { <Guarded><UsersPage/></Guarded> }
                />
                <Route
                    path=path!("/admin/search")
                    view=|| view! { <Guarded><AdminSearchPage/></Guarded> }
                />
                <Route
                    path=path!("/admin/summary")
                    view=|| view! { <Guarded><AdminSummaryPage/></Guarded> }
                />
            </Routes>
        </Router>
    }
}
