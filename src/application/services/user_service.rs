//! Profile management for authenticated users and role administration.

use std::sync::Arc;

use crate::application::services::auth_service::normalize_email;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::Role;
use crate::domain::entities::{UpdateUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service behind the `/user` and `/admin/users` routes.
pub struct UserService<R: UserRepository + ?Sized> {
    repository: Arc<R>,
    bcrypt_cost: u32,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    pub fn new(repository: Arc<R>, bcrypt_cost: u32) -> Self {
        Self {
            repository,
            bcrypt_cost,
        }
    }

    /// Loads the account named by a verified `userId` claim.
    ///
    /// A credential can outlive its account, so a missing row is reported as
    /// [`AppError::Unauthorized`] rather than not found.
    pub async fn get_profile(&self, user_id: u64) -> Result<User, AppError> {
        let id = i64::try_from(user_id).map_err(|_| AppError::unauthorized("unknown user"))?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::unauthorized("unknown user"))
    }

    /// Applies profile changes for the calling user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the account no longer exists.
    /// Returns [`AppError::Conflict`] if the new email belongs to another account.
    pub async fn update_profile(
        &self,
        user_id: u64,
        update: UpdateUser,
    ) -> Result<User, AppError> {
        let current = self.get_profile(user_id).await?;

        let update = UpdateUser {
            name: update.name.map(|n| n.trim().to_string()),
            email: update.email.map(|e| normalize_email(&e)),
        };

        if let Some(email) = &update.email
            && *email != current.email
            && self.repository.find_by_email(email).await?.is_some()
        {
            return Err(AppError::conflict("email already registered"));
        }

        self.repository.update(current.id, update).await
    }

    /// Replaces the password after checking the current one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if `current_password` is wrong.
    pub async fn change_password(
        &self,
        user_id: u64,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let user = self.get_profile(user_id).await?;

        if !verify_password(current_password, &user.password_hash).await? {
            return Err(AppError::unauthorized("current password is incorrect"));
        }

        let password_hash = hash_password(new_password, self.bcrypt_cost).await?;
        self.repository
            .update_password(user.id, &password_hash)
            .await?;

        tracing::info!(user_id = user.id, "password changed");
        Ok(())
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// Grants `role` to a user.
    ///
    /// Credentials already issued keep the role they were minted with until
    /// they expire.
    pub async fn set_role(&self, id: i64, role: Role) -> Result<User, AppError> {
        let user = self.repository.set_role(id, role).await?;
        tracing::info!(user_id = user.id, role = %role, "role changed");
        Ok(user)
    }
}
