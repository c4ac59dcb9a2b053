//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped loading and delegates rendering details to
//! `components`.

pub mod admin;
pub mod objects;
pub mod products;
