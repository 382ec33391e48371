//! Client state for identity, persistence, and notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` is the single source of truth for the signed-in identity,
//! `session` persists it across reloads, and `notify` carries operation
//! outcomes to the toast area. All three are constructed once in `App` and
//! shared through context.

pub mod auth;
pub mod notify;
pub mod session;
