//! The Message entity and its persistence snapshot.

use super::{MessageDomainError, MessageId, MessageText};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A message posted by an author to their timeline.
///
/// # Invariants
///
/// - `text` always satisfies the [`MessageText`] rules
/// - `id`, `author` and `published_at` never change after creation
///
/// Equality and hashing consider the identifier only. Compare
/// [`Message::snapshot`] values to check full state.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use crieur::messaging::domain::{Message, MessageId};
///
/// let published_at = Utc.with_ymd_and_hms(2020, 2, 14, 17, 46, 51).unwrap();
/// let mut message = Message::create(MessageId::new(), "Alice", "Hello world!", published_at)
///     .expect("valid message");
///
/// message.edit_text("Hello world! I'm Alice").expect("valid edit");
/// assert_eq!(message.text().as_str(), "Hello world! I'm Alice");
/// assert_eq!(message.author(), "Alice");
/// ```
#[derive(Debug, Clone)]
pub struct Message {
    id: MessageId,
    author: String,
    text: MessageText,
    published_at: DateTime<Utc>,
}

/// Immutable plain-data view of a [`Message`].
///
/// Snapshots cross the persistence and serialisation boundaries without
/// exposing the entity itself. Rebuilding a message from a snapshot runs the
/// text validation again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSnapshot {
    /// Message identifier.
    pub id: MessageId,
    /// Author name.
    pub author: String,
    /// Raw message text.
    pub text: String,
    /// Publication timestamp.
    pub published_at: DateTime<Utc>,
}

impl Message {
    /// Creates a message.
    ///
    /// `id`, `author` and `published_at` are stored verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`MessageDomainError`] when the text is blank or too long.
    pub fn create(
        id: MessageId,
        author: impl Into<String>,
        text: impl Into<String>,
        published_at: DateTime<Utc>,
    ) -> Result<Self, MessageDomainError> {
        Ok(Self {
            id,
            author: author.into(),
            text: MessageText::new(text)?,
            published_at,
        })
    }

    /// Reconstructs a message from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`MessageDomainError`] when the stored text no longer
    /// satisfies the [`MessageText`] rules.
    pub fn from_snapshot(snapshot: MessageSnapshot) -> Result<Self, MessageDomainError> {
        let MessageSnapshot {
            id,
            author,
            text,
            published_at,
        } = snapshot;
        Self::create(id, author, text, published_at)
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> MessageSnapshot {
        MessageSnapshot {
            id: self.id,
            author: self.author.clone(),
            text: self.text.as_str().to_owned(),
            published_at: self.published_at,
        }
    }

    /// Replaces the message text.
    ///
    /// The current text is kept when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`MessageDomainError`] when the new text is blank or too long.
    pub fn edit_text(&mut self, text: impl Into<String>) -> Result<(), MessageDomainError> {
        self.text = MessageText::new(text)?;
        Ok(())
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the author name.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message text.
    #[must_use]
    pub const fn text(&self) -> &MessageText {
        &self.text
    }

    /// Returns the publication timestamp.
    #[must_use]
    pub const fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Message {}

impl Hash for Message {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl From<&Message> for MessageSnapshot {
    fn from(message: &Message) -> Self {
        message.snapshot()
    }
}

impl TryFrom<MessageSnapshot> for Message {
    type Error = MessageDomainError;

    fn try_from(snapshot: MessageSnapshot) -> Result<Self, Self::Error> {
        Self::from_snapshot(snapshot)
    }
}
