//! Static route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigable screen has exactly one [`RouteDescriptor`]. The descriptor
//! carries its own [`AuthClass`], so the guard never consults separate name
//! lists and a route cannot be missing from all of them.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::fmt;
use std::str::FromStr;

use crate::state::session::{LOGIN_PATH, Role, Session};

/// Unique route identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Login,
    Signup,
    UserDashboard,
    BookSpot,
    ReleaseSpot,
    AdminDashboard,
    CreateLot,
    EditLot,
    ViewSpot,
    Users,
    AdminSearch,
    AdminSummary,
}

/// Access class of a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthClass {
    /// `/`: resolves to another path from the session, renders nothing.
    Root,
    /// Reachable without a session.
    Public,
    /// Needs a token, any role.
    Authenticated,
    /// Needs a token and the `user` role.
    UserOnly,
    /// Needs a token and the `admin` role.
    AdminOnly,
}

impl AuthClass {
    pub fn requires_auth(self) -> bool {
        matches!(self, Self::Authenticated | Self::UserOnly | Self::AdminOnly)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub name: RouteName,
    /// Path template; `:name` segments are parameters.
    pub path: &'static str,
    pub class: AuthClass,
    /// Path parameters are handed to the page as props.
    pub props_from_params: bool,
}

const fn route(name: RouteName, path: &'static str, class: AuthClass, props_from_params: bool) -> RouteDescriptor {
    RouteDescriptor { name, path, class, props_from_params }
}

/// All routes, in declaration order.
pub static ROUTES: [RouteDescriptor; 13] = [
    route(RouteName::Home, "/", AuthClass::Root, false),
    route(RouteName::Login, "/login", AuthClass::Public, false),
    route(RouteName::Signup, "/signup", AuthClass::Public, false),
    route(RouteName::UserDashboard, "/user/dashboard", AuthClass::UserOnly, false),
    route(RouteName::BookSpot, "/user/book", AuthClass::UserOnly, false),
    route(RouteName::ReleaseSpot, "/user/release/:reservationId", AuthClass::UserOnly, true),
    route(RouteName::AdminDashboard, "/admin/dashboard", AuthClass::AdminOnly, false),
    route(RouteName::CreateLot, "/admin/lots/create", AuthClass::AdminOnly, false),
    route(RouteName::EditLot, "/admin/lots/:lotId/edit", AuthClass::AdminOnly, true),
    route(RouteName::ViewSpot, "/admin/spots/:spotId", AuthClass::AdminOnly, true),
    route(RouteName::Users, "/admin/users", AuthClass::AdminOnly, false),
    route(RouteName::AdminSearch, "/admin/search", AuthClass::AdminOnly, false),
    route(RouteName::AdminSummary, "/admin/summary", AuthClass::AdminOnly, false),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("unknown route name: {0}")]
    UnknownRoute(String),
}

impl RouteName {
    pub const ALL: [RouteName; 13] = [
        Self::Home,
        Self::Login,
        Self::Signup,
        Self::UserDashboard,
        Self::BookSpot,
        Self::ReleaseSpot,
        Self::AdminDashboard,
        Self::CreateLot,
        Self::EditLot,
        Self::ViewSpot,
        Self::Users,
        Self::AdminSearch,
        Self::AdminSummary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Login",
            Self::Signup => "Signup",
            Self::UserDashboard => "UserDashboard",
            Self::BookSpot => "BookSpot",
            Self::ReleaseSpot => "ReleaseSpot",
            Self::AdminDashboard => "AdminDashboard",
            Self::CreateLot => "CreateLot",
            Self::EditLot => "EditLot",
            Self::ViewSpot => "ViewSpot",
            Self::Users => "Users",
            Self::AdminSearch => "AdminSearch",
            Self::AdminSummary => "AdminSummary",
        }
    }

    pub fn descriptor(self) -> &'static RouteDescriptor {
        // ROUTES is declared in the same order as ALL.
        &ROUTES[self as usize]
    }

    pub fn path(self) -> &'static str {
        self.descriptor().path
    }

    pub fn class(self) -> AuthClass {
        self.descriptor().class
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteName {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| RouteError::UnknownRoute(s.to_owned()))
    }
}

/// Routes that need a token.
pub fn auth_required() -> impl Iterator<Item = RouteName> {
    ROUTES.iter().filter(|r| r.class.requires_auth()).map(|r| r.name)
}

pub fn admin_only() -> impl Iterator<Item = RouteName> {
    ROUTES.iter().filter(|r| r.class == AuthClass::AdminOnly).map(|r| r.name)
}

pub fn user_only() -> impl Iterator<Item = RouteName> {
    ROUTES.iter().filter(|r| r.class == AuthClass::UserOnly).map(|r| r.name)
}

/// A concrete path resolved against the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub name: RouteName,
    pub params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
    }
}

/// Resolve a concrete path such as `/admin/lots/4/edit` to its route.
///
/// Query strings and fragments are ignored and a trailing slash is tolerated.
pub fn match_path(path: &str) -> Option<RouteMatch> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    if !path.starts_with('/') {
        return None;
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return Some(RouteMatch { name: RouteName::Home, params: Vec::new() });
    }

    let segments: Vec<&str> = trimmed.split('/').skip(1).collect();
    ROUTES.iter().skip(1).find_map(|r| match_template(r, &segments))
}

fn match_template(route: &RouteDescriptor, segments: &[&str]) -> Option<RouteMatch> {
    let template: Vec<&'static str> = route.path.split('/').skip(1).collect();
    if template.len() != segments.len() {
        return None;
    }
    let mut params = Vec::new();
    for (tpl, seg) in template.into_iter().zip(segments) {
        match tpl.strip_prefix(':') {
            Some(_) if seg.is_empty() => return None,
            Some(param) => params.push((param, (*seg).to_owned())),
            None if tpl == *seg => {}
            None => return None,
        }
    }
    Some(RouteMatch { name: route.name, params })
}

/// Where `/` sends the visitor: the role's dashboard for a complete session,
/// `/login` otherwise.
pub fn root_redirect(session: &Session) -> &'static str {
    session.active_role().map_or(LOGIN_PATH, Role::dashboard_path)
}
