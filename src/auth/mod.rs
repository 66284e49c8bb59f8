//! Credential issuing and validation.
//!
//! - [`claims`] - typed claim set carried by every credential and the closed [`Role`] set
//! - [`token`] - HS256 compact token codec ([`TokenCodec`]) and its failure kinds
//! - [`password`] - bcrypt hashing on the blocking pool
//! - [`current_user`] - the verified identity handlers extract after the Authenticator ran
//!
//! The codec is constructed once from the process signing secret and shared
//! read-only through [`crate::state::AppState`]. Request-path code never reads
//! the environment.

pub mod claims;
pub mod current_user;
pub mod password;
pub mod token;

pub use claims::{Claims, Role};
pub use current_user::CurrentUser;
pub use token::{TokenCodec, TokenError};
