//! Service layer for following and unfollowing authors.

use super::{MessagingError, MessagingResult};
use crate::messaging::{domain::User, ports::UserRepository};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Request payload naming a user and an author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowRequest {
    user: String,
    author: String,
}

impl FollowRequest {
    /// Creates a request for `user` to (un)follow `author`.
    #[must_use]
    pub fn new(user: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            author: author.into(),
        }
    }
}

/// Subscription management service.
#[derive(Clone)]
pub struct SubscriptionService<U>
where
    U: UserRepository,
{
    users: Arc<U>,
}

impl<U> SubscriptionService<U>
where
    U: UserRepository,
{
    /// Creates a new subscription service.
    #[must_use]
    pub const fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// Makes the user follow an author, registering the user on first use.
    ///
    /// # Errors
    ///
    /// Returns [`MessagingError::UserRepository`] when persistence fails.
    #[instrument(skip(self, request), fields(user = %request.user, author = %request.author))]
    pub async fn follow(&self, request: FollowRequest) -> MessagingResult<User> {
        let FollowRequest { user, author } = request;
        let mut follower = self
            .users
            .find_by_name(&user)
            .await?
            .unwrap_or_else(|| User::new(user));
        follower.follow(author);
        let saved = self.users.save(&follower).await?;
        debug!(subscriptions = saved.subscriptions().len(), "author followed");
        Ok(saved)
    }

    /// Makes the user stop following an author.
    ///
    /// # Errors
    ///
    /// Returns [`MessagingError::UserNotFound`] when the user is unknown and
    /// [`MessagingError::UserRepository`] when persistence fails.
    #[instrument(skip(self, request), fields(user = %request.user, author = %request.author))]
    pub async fn unfollow(&self, request: FollowRequest) -> MessagingResult<User> {
        let FollowRequest { user, author } = request;
        let Some(mut follower) = self.users.find_by_name(&user).await? else {
            return Err(MessagingError::UserNotFound(user));
        };
        follower.unfollow(&author);
        let saved = self.users.save(&follower).await?;
        debug!(subscriptions = saved.subscriptions().len(), "author unfollowed");
        Ok(saved)
    }

    /// Returns the authors followed by `user`, or an empty list for unknown
    /// users.
    ///
    /// # Errors
    ///
    /// Returns [`MessagingError::UserRepository`] when the lookup fails.
    pub async fn subscriptions(&self, user: &str) -> MessagingResult<Vec<String>> {
        let found = self.users.find_by_name(user).await?;
        Ok(found.map(|follower| follower.subscriptions()).unwrap_or_default())
    }
}
