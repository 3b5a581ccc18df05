//! Navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once per navigation attempt, before the target page renders. The
//! decision depends only on the target route and the session read at that
//! moment; nothing is remembered between calls.
//!
//! Rules, first match wins:
//! 1. `Login`/`Signup` with token and role present: go to the role's dashboard.
//! 2. Routes needing auth: no token goes to `/login`; admin-only routes with a
//!    non-admin role go to `/user/dashboard`; user-only routes with a non-user
//!    role go to `/admin/dashboard`.
//! 3. Everything else proceeds.
//!
//! A role that is neither `user` nor `admin` is "not admin" and "not user" at
//! the same time, so it bounces between the two dashboards' redirects.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::table::{self, AuthClass, RouteName};
use crate::state::session::{ADMIN_DASHBOARD_PATH, LOGIN_PATH, Role, Session, USER_DASHBOARD_PATH};
use crate::state::store::SessionStore;

/// Outcome of one navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    Proceed,
    RedirectTo(&'static str),
}

/// Decide whether navigation to `target` may proceed for `session`.
pub fn decide(target: RouteName, session: &Session) -> NavigationDecision {
    if matches!(target, RouteName::Login | RouteName::Signup) {
        if let Some(role) = session.active_role() {
            return NavigationDecision::RedirectTo(role.dashboard_path());
        }
    }

    decide_for_class(target.class(), session)
}

/// Rules 2 and 3 for a route of access class `class`.
fn decide_for_class(class: AuthClass, session: &Session) -> NavigationDecision {
    if class.requires_auth() {
        if !session.has_token() {
            return NavigationDecision::RedirectTo(LOGIN_PATH);
        }
        let role = session.role.as_ref();
        if class == AuthClass::AdminOnly && !role.is_some_and(Role::is_admin) {
            return NavigationDecision::RedirectTo(USER_DASHBOARD_PATH);
        }
        if class == AuthClass::UserOnly && !role.is_some_and(Role::is_user) {
            return NavigationDecision::RedirectTo(ADMIN_DASHBOARD_PATH);
        }
    }

    NavigationDecision::Proceed
}

/// [`decide`] for a route given by name. Names outside the table belong to no
/// guarded set and proceed.
pub fn decide_by_name(target: &str, session: &Session) -> NavigationDecision {
    match target.parse::<RouteName>() {
        Ok(name) => decide(name, session),
        Err(_) => NavigationDecision::Proceed,
    }
}

/// Guard bound to an injected session store.
#[derive(Clone, Debug, Default)]
pub struct NavigationGuard<S> {
    store: S,
}

impl<S: SessionStore> NavigationGuard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the current session and decide navigation to `target`.
    pub fn check(&self, target: RouteName) -> NavigationDecision {
        let session = Session::load(&self.store);
        let decision = decide(target, &session);
        if let NavigationDecision::RedirectTo(path) = decision {
            leptos::logging::log!("navigation to {target} redirected to {path}");
        }
        decision
    }

    /// Decide navigation to a concrete browser path. The route, and with it
    /// the access class, comes from the route table; paths outside the table
    /// proceed.
    pub fn check_path(&self, path: &str) -> NavigationDecision {
        match table::match_path(path) {
            Some(matched) => self.check(matched.name),
            None => NavigationDecision::Proceed,
        }
    }

    /// Resolve `/` for the current session.
    pub fn root_redirect(&self) -> &'static str {
        table::root_redirect(&Session::load(&self.store))
    }
}
