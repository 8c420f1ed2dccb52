//! Networking modules for the REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls with bearer auth; `types` defines the shared
//! wire schema.

pub mod api;
pub mod types;
