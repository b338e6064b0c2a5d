//! In-memory user repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::messaging::{
    domain::User,
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository keyed by user name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> UserRepositoryError {
    UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> UserRepositoryResult<User> {
        let mut users = self.users.write().map_err(poisoned)?;
        users.insert(user.name().to_owned(), user.clone());
        Ok(user.clone())
    }

    async fn find_by_name(&self, name: &str) -> UserRepositoryResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(name).cloned())
    }
}
