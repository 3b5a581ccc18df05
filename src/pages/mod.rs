//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages own form state and API calls; access control happens before they
//! render, in `components::route_guard`.


pub mod admin;
pub mod login;
pub mod signup;
pub mod user;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::router::match_path;

/// Path parameter `name` of `path`, only for routes whose descriptor hands
/// parameters to the page.
pub(crate) fn route_param(path: &str, name: &str) -> Option<String> {
    let matched = match_path(path)?;
    if !matched.name.descriptor().props_from_params {
        return None;
    }
    matched.param(name).map(str::to_owned)
}

/// Reactive value of path parameter `name` for the current URL, empty when absent.
pub(crate) fn param(name: &'static str) -> impl Fn() -> String + Copy {
    let pathname = use_location().pathname;
    move || pathname.with(|path| route_param(path, name)).unwrap_or_default()
}
