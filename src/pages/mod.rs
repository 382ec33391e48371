//! Routed pages for the console.

pub mod account;
pub mod configurations;
pub mod dashboard;
pub mod login;
pub mod profiles;
pub mod users;
