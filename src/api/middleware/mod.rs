//! HTTP middleware for request processing and protection.
//!
//! - [`auth`] - Header Extractor and Authenticator
//! - [`role`] - Authorizer, parameterized by the required [`crate::auth::Role`]
//! - [`tracing`] - request/response spans

pub mod auth;
pub mod role;
pub mod tracing;
