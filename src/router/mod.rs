//! Route table and navigation guard.
//!
//! `table` declares every screen and its access class; `guard` turns a target
//! route plus the stored session into a [`guard::NavigationDecision`].

pub mod guard;
pub mod table;

pub use guard::{NavigationDecision, NavigationGuard, decide, decide_by_name};
pub use table::{AuthClass, RouteDescriptor, RouteError, RouteMatch, RouteName, match_path, root_redirect};
