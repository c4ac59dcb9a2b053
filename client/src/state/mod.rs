//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`app`, `detail`, `table`, `tree`, ...) so each
//! component depends on a small focused model. The models are plain data
//! with pure transitions; components hold them in `RwSignal`s.

pub mod admin;
pub mod app;
pub mod detail;
pub mod history;
pub mod objects;
pub mod products;
pub mod relations;
pub mod table;
pub mod tree;
pub mod ui;
