//! In-memory message repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::messaging::{
    domain::{Message, MessageId},
    ports::{MessageRepository, MessageRepositoryError, MessageRepositoryResult},
};

/// Thread-safe in-memory message repository.
///
/// `save` is last-write-wins. Lookups return messages in first-insertion
/// order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageRepository {
    state: Arc<RwLock<InMemoryMessageState>>,
}

#[derive(Debug, Default)]
struct InMemoryMessageState {
    messages: HashMap<MessageId, Message>,
    insertion_order: Vec<MessageId>,
}

impl InMemoryMessageState {
    fn upsert(&mut self, message: Message) {
        let id = message.id();
        if self.messages.insert(id, message).is_none() {
            self.insertion_order.push(id);
        }
    }

    fn ordered(&self) -> impl Iterator<Item = &Message> {
        self.insertion_order
            .iter()
            .filter_map(|id| self.messages.get(id))
    }
}

fn poisoned(err: impl std::fmt::Display) -> MessageRepositoryError {
    MessageRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

impl InMemoryMessageRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `messages`.
    ///
    /// Later messages replace earlier ones with the same identifier.
    #[must_use]
    pub fn with_messages(messages: impl IntoIterator<Item = Message>) -> Self {
        let mut state = InMemoryMessageState::default();
        for message in messages {
            state.upsert(message);
        }
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Returns copies of every stored message in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`MessageRepositoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn messages(&self) -> MessageRepositoryResult<Vec<Message>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.ordered().cloned().collect())
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn save(&self, message: &Message) -> MessageRepositoryResult<Message> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.upsert(message.clone());
        Ok(message.clone())
    }

    async fn find_all_by_author(&self, author: &str) -> MessageRepositoryResult<Vec<Message>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .ordered()
            .filter(|message| message.author() == author)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: MessageId) -> MessageRepositoryResult<Option<Message>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.messages.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: MessageId) -> MessageRepositoryResult<bool> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.messages.contains_key(&id))
    }
}
