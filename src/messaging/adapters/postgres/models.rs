//! Diesel row models for message persistence.

use super::schema::messages;
use crate::messaging::domain::{MessageId, MessageSnapshot};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for message records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MessageRow {
    /// Message identifier.
    pub id: uuid::Uuid,
    /// Author name.
    pub author: String,
    /// Message text.
    pub body: String,
    /// Publication timestamp.
    pub published_at: DateTime<Utc>,
}

/// Insert model for message records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = messages)]
pub struct NewMessageRow {
    /// Message identifier.
    pub id: uuid::Uuid,
    /// Author name.
    pub author: String,
    /// Message text.
    pub body: String,
    /// Publication timestamp.
    pub published_at: DateTime<Utc>,
}

impl From<MessageSnapshot> for NewMessageRow {
    fn from(snapshot: MessageSnapshot) -> Self {
        Self {
            id: snapshot.id.into_inner(),
            author: snapshot.author,
            body: snapshot.text,
            published_at: snapshot.published_at,
        }
    }
}

impl From<MessageRow> for MessageSnapshot {
    fn from(row: MessageRow) -> Self {
        Self {
            id: MessageId::from_uuid(row.id),
            author: row.author,
            text: row.body,
            published_at: row.published_at,
        }
    }
}
