//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns request plumbing and error decoding, the `api_*` modules expose
//! typed calls per resource, and `types` defines the shared wire schema.

pub mod api_objects;
pub mod api_products;
pub mod api_schema;
pub mod http;
pub mod types;
