//! Reusable UI pieces shared by pages.

pub mod nav_bar;
pub mod route_guard;
