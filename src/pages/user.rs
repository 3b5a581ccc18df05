//! Screens for the `user` role: dashboard, booking, and releasing a spot.

use leptos::prelude::*;

use super::param;
use crate::components::nav_bar::NavBar;
use crate::router::RouteName;

#[component]
pub fn UserDashboardPage() -> impl IntoView {
    view! {
        <NavBar/>
        <section class="page user-dashboard">
            <h1>"My Reservations"</h1>
            <a class="page__action" href=RouteName::BookSpot.path()>"Book a spot"</a>
        </section>
    }
}

#[component]
pub fn BookSpotPage() -> impl IntoView {
    view! {
        <NavBar/>
        <section class="page book-spot">
            <h1>"Book a Spot"</h1>
        </section>
    }
}

#[component]
pub fn ReleaseSpotPage() -> impl IntoView {
    let reservation_id = param("reservationId");

    view! {
        <NavBar/>
        <section class="page release-spot">
            <h1>"Release Spot"</h1>
            <p>"Reservation #" {reservation_id}</p>
        </section>
    }
}
