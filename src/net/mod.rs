//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the login exchange plus the shared authorized-request
//! plumbing; the sibling modules are thin clients for the feature
//! endpoints. All requests run client-side via `gloo-net`; SSR paths return
//! explicit transport errors.

pub mod account;
pub mod analytics;
pub mod api;
pub mod configurations;
pub mod profiles;
pub mod users;
