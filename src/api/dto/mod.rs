//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs derive `Deserialize` + `validator::Validate` and are read with
//! [`crate::api::extract::ValidatedJson`]. Response DTOs never expose
//! password hashes.

pub mod auth;
pub mod carriage;
pub mod health;
pub mod station;
pub mod train;
pub mod user;
