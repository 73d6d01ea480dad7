//! REST API module.
//!
//! Contains all API routes and handlers following the front-end contract.
//! Envelope shapes are route-specific (the front-end predates a uniform
//! envelope), so each handler returns its own response struct from
//! [`crate::models`].

mod uploads;
mod users;

pub use uploads::*;
pub use users::*;
