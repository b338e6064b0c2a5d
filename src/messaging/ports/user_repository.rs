//! Repository port for users and their subscriptions.

use crate::messaging::domain::User;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// User persistence contract, keyed by user name.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts or replaces the user with the same name and returns the stored
    /// copy.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::Persistence`] when the backing store
    /// fails.
    async fn save(&self, user: &User) -> UserRepositoryResult<User>;

    /// Finds a user by name.
    ///
    /// Returns `None` when the user does not exist.
    async fn find_by_name(&self, name: &str) -> UserRepositoryResult<Option<User>>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
