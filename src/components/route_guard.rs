//! Route-level guard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed view except `/` is wrapped in [`Guarded`], so the navigation
//! guard runs each time a route renders, before the page itself is built.
//! The target route is resolved from the current URL through the route
//! table, never named by the caller.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::app::AppGuard;
use crate::router::NavigationDecision;

/// Render `children` when the guard lets navigation to the current path
/// proceed, otherwise redirect.
#[component]
pub fn Guarded(children: Children) -> impl IntoView {
    let guard = expect_context::<AppGuard>();
    let path = use_location().pathname.get_untracked();
    match guard.check_path(&path) {
        NavigationDecision::Proceed => children().into_any(),
        NavigationDecision::RedirectTo(target) => view! { <Redirect path=target/> }.into_any(),
    }
}

/// `/` has no page of its own; send the visitor to the dashboard or login.
#[component]
pub fn HomeRedirect() -> impl IntoView {
    let guard = expect_context::<AppGuard>();
    let path = guard.root_redirect();
    view! { <Redirect path=path/> }
}
