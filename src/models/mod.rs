//! Data models for the Click Fit backend.
//!
//! These models match the front-end JSON contract exactly for seamless interoperability.

mod upload;
mod user;

pub use upload::*;
pub use user::*;
