//! Users and the authors they follow.

use serde::{Deserialize, Serialize};

/// A reader of timelines who can follow authors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    name: String,
    subscriptions: Vec<String>,
}

impl User {
    /// Creates a user who follows nobody.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subscriptions: Vec::new(),
        }
    }

    /// Returns the user name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Starts following `author`.
    ///
    /// Following an author twice keeps a single subscription.
    pub fn follow(&mut self, author: impl Into<String>) {
        let followed = author.into();
        if !self.follows(&followed) {
            self.subscriptions.push(followed);
        }
    }

    /// Stops following `author`. Does nothing when not subscribed.
    pub fn unfollow(&mut self, author: &str) {
        self.subscriptions.retain(|followed| followed != author);
    }

    /// Returns `true` when the user follows `author`.
    #[must_use]
    pub fn follows(&self, author: &str) -> bool {
        self.subscriptions.iter().any(|followed| followed == author)
    }

    /// Returns the followed authors in subscription order.
    #[must_use]
    pub fn subscriptions(&self) -> Vec<String> {
        self.subscriptions.clone()
    }
}
