//! Screens for the `admin` role: lot and spot management, users, reports.

use leptos::prelude::*;

use super::param;
use crate::components::nav_bar::NavBar;
use crate::router::RouteName;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <NavBar/>
        <section class="page admin-dashboard">
            <h1>"Parking Lots"</h1>
            <a class="page__action" href=RouteName::CreateLot.path()>"Create lot"</a>
        </section>
    }
}

#[component]
pub fn CreateLotPage() -> impl IntoView {
    view! {
        <NavBar/>
        <section class="page create-lot">
            <h1>"Create Parking Lot"</h1>
        </section>
    }
}

#[component]
pub fn EditLotPage() -> impl IntoView {
    let lot_id = param("lotId");
    view! {
        <NavBar/>
        <section class="page edit-lot">
            <h1>"Edit Parking Lot"</h1>
            <p>"Lot #" {lot_id}</p>
        </section>
    }
}

#[component]
pub fn ViewSpotPage() -> impl IntoView {
    let spot_id = param("spotId");
    view! {
        <NavBar/>
        <section class="page view-spot">
            <h1>"Parking Spot"</h1>
            <p>"Spot #" {spot_id}</p>
        </section>
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <NavBar/>
        <section class="page users">
            <h1>"Registered Users"</h1>
        </section>
    }
}

#[component]
pub fn AdminSearchPage() -> impl IntoView {
    view! {
        <NavBar/>
        <section class="page admin-search">
            <h1>"Search"</h1>
        </section>
    }
}

#[component]
pub fn AdminSummaryPage() -> impl IntoView {
    view! {
        <NavBar/>
        <section class="page admin-summary">
            <h1>"Summary"</h1>
        </section>
    }
}
