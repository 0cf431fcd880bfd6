//! Networking modules for the subscription API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls and owns the bearer-token slot; `types`
//! defines the shared wire schema.

pub mod api;
pub mod types;
