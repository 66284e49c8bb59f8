//! Registration and login.

use std::sync::Arc;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::{Role, TokenCodec};
use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

const INVALID_LOGIN: &str = "invalid email or password";

/// Issues credentials to users who register or prove their password.
///
/// Self-registered accounts always receive [`Role::User`]; admin accounts are
/// created with the `admin` CLI.
pub struct AuthService<R: UserRepository + ?Sized> {
    repository: Arc<R>,
    codec: Arc<TokenCodec>,
    bcrypt_cost: u32,
}

impl<R: UserRepository + ?Sized> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - user repository
    /// - `codec` - token codec keyed by the process signing secret
    /// - `bcrypt_cost` - work factor for new password hashes
    pub fn new(repository: Arc<R>, codec: Arc<TokenCodec>, bcrypt_cost: u32) -> Self {
        Self {
            repository,
            codec,
            bcrypt_cost,
        }
    }

    /// Creates a `user` account and returns it with a fresh credential.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] on hashing, signing or database errors.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(User, String), AppError> {
        let email = normalize_email(email);

        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("email already registered"));
        }

        let password_hash = hash_password(password, self.bcrypt_cost).await?;

        let user = self
            .repository
            .create(NewUser {
                name: name.trim().to_string(),
                email,
                password_hash,
                role: Role::User,
            })
            .await?;

        tracing::info!(user_id = user.id, "user registered");

        let token = self.issue(&user)?;
        Ok((user, token))
    }

    /// Verifies email and password and returns the user with a fresh credential.
    ///
    /// Unknown email and wrong password produce the same error and cost the
    /// same bcrypt work.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the credentials do not match.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String), AppError> {
        let email = normalize_email(email);

        let Some(user) = self.repository.find_by_email(&email).await? else {
            // Spend the same bcrypt work as a password check.
            if let Err(e) = hash_password(password, self.bcrypt_cost).await {
                tracing::debug!(error = %e, "login timing hash failed");
            }
            return Err(AppError::unauthorized(INVALID_LOGIN));
        };

        if !verify_password(password, &user.password_hash).await? {
            tracing::debug!(user_id = user.id, "login rejected: wrong password");
            return Err(AppError::unauthorized(INVALID_LOGIN));
        }

        let token = self.issue(&user)?;
        Ok((user, token))
    }

    fn issue(&self, user: &User) -> Result<String, AppError> {
        let user_id = user
            .claim_id()
            .ok_or_else(|| AppError::internal(format!("user id {} out of claim range", user.id)))?;

        Ok(self.codec.mint(user_id, user.role)?)
    }
}

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
