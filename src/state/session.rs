//! Persisted auth session for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is two string entries in the origin's key-value store: the
//! bearer token and the role tag returned by the login endpoint. It is read
//! fresh on every navigation and every outgoing request.
//!
//! DESIGN
//! ======
//! Empty strings are treated as absent values. Role tags other than `user`
//! and `admin` are kept as [`Role::Unknown`] instead of being rejected; they
//! compare unequal to both known roles wherever the guard checks a role.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;

use super::store::SessionStore;

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key of the role tag.
pub const ROLE_KEY: &str = "role";

pub const LOGIN_PATH: &str = "/login";
pub const USER_DASHBOARD_PATH: &str = "/user/dashboard";
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";

/// Role granted to the logged-in account.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Admin,
    /// A stored tag that is neither `user` nor `admin`.
    Unknown(String),
}

impl Role {
    /// Parse a stored role tag. Matching is exact and case-sensitive.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "user" => Self::User,
            "admin" => Self::Admin,
            other => Self::Unknown(other.to_owned()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Unknown(tag) => tag,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    pub fn is_user(&self) -> bool {
        matches!(self, Self::User)
    }

    /// Landing route for this role. Anything but `admin` lands on the user dashboard.
    pub fn dashboard_path(&self) -> &'static str {
        if self.is_admin() { ADMIN_DASHBOARD_PATH } else { USER_DASHBOARD_PATH }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Snapshot of the stored token and role.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<Role>,
}

impl Session {
    pub fn new(token: Option<&str>, role: Option<&str>) -> Self {
        Self {
            token: non_empty(token).map(str::to_owned),
            role: non_empty(role).map(Role::from_tag),
        }
    }

    /// Read the session from `store`. Token and role are two separate reads.
    pub fn load<S: SessionStore>(store: &S) -> Self {
        let token = store.get(TOKEN_KEY);
        let role = store.get(ROLE_KEY);
        Self::new(token.as_deref(), role.as_deref())
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Both token and role are present.
    pub fn is_complete(&self) -> bool {
        self.token.is_some() && self.role.is_some()
    }

    /// The role, but only when a token is stored alongside it.
    pub fn active_role(&self) -> Option<&Role> {
        if self.is_complete() { self.role.as_ref() } else { None }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Persist a freshly issued token and role tag.
pub fn save_login<S: SessionStore>(store: &S, token: &str, role: &str) {
    store.set(TOKEN_KEY, token);
    store.set(ROLE_KEY, role);
}

/// Drop the stored session (logout).
pub fn clear<S: SessionStore>(store: &S) {
    store.remove(TOKEN_KEY);
    store.remove(ROLE_KEY);
}
