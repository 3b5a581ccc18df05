//! Client-side state.
//!
//! DESIGN
//! ======
//! `store` abstracts the origin-scoped key-value storage; `session` gives the
//! token/role pair kept there a typed shape.

pub mod session;
pub mod store;
