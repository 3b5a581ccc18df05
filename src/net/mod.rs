//! Networking: the bearer-authenticated API client and its wire types.

pub mod api;
pub mod types;
