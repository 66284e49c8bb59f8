//! Liveness probe for the backing store.

use crate::error::AppError;
use async_trait::async_trait;

/// Answers whether the storage backend is reachable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Runs a trivial round trip against the store.
    async fn ping(&self) -> Result<(), AppError>;
}
