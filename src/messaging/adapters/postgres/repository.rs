//! `PostgreSQL` repository implementation for message storage.

use super::{
    models::{MessageRow, NewMessageRow},
    schema::messages,
};
use crate::messaging::{
    domain::{Message, MessageId, MessageSnapshot},
    ports::{MessageRepository, MessageRepositoryError, MessageRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};

/// `PostgreSQL` connection pool type used by message adapters.
pub type MessagePgPool = Pool<ConnectionManager<PgConnection>>;

/// Builds a connection pool for `database_url` holding at most `max_size`
/// connections.
///
/// # Errors
///
/// Returns [`PoolError`] when the initial connections cannot be opened.
pub fn build_pool(database_url: &str, max_size: u32) -> Result<MessagePgPool, PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder().max_size(max_size).build(manager)
}

/// `PostgreSQL`-backed message repository.
///
/// `save` is an `INSERT .. ON CONFLICT (id) DO UPDATE`, so concurrent saves
/// of the same message are last-write-wins.
///
/// `published_at` is kept to microsecond precision. A message carrying a
/// finer instant is truncated by the database, and `save` returns the stored
/// value rather than the input.
#[derive(Debug, Clone)]
pub struct PostgresMessageRepository {
    pool: MessagePgPool,
}

impl PostgresMessageRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: MessagePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> MessageRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> MessageRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(MessageRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(MessageRepositoryError::persistence)?
    }
}

#[async_trait]
impl MessageRepository for PostgresMessageRepository {
    async fn save(&self, message: &Message) -> MessageRepositoryResult<Message> {
        let new_row = NewMessageRow::from(message.snapshot());

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(messages::table)
                .values(&new_row)
                .on_conflict(messages::id)
                .do_update()
                .set((
                    messages::author.eq(&new_row.author),
                    messages::body.eq(&new_row.body),
                    messages::published_at.eq(new_row.published_at),
                ))
                .returning(MessageRow::as_returning())
                .get_result::<MessageRow>(connection)
                .map_err(MessageRepositoryError::persistence)?;
            row_to_message(row)
        })
        .await
    }

    async fn find_all_by_author(&self, author: &str) -> MessageRepositoryResult<Vec<Message>> {
        let lookup_author = author.to_owned();
        self.run_blocking(move |connection| {
            let rows = messages::table
                .filter(messages::author.eq(&lookup_author))
                .order(messages::published_at.asc())
                .select(MessageRow::as_select())
                .load::<MessageRow>(connection)
                .map_err(MessageRepositoryError::persistence)?;
            rows.into_iter().map(row_to_message).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: MessageId) -> MessageRepositoryResult<Option<Message>> {
        self.run_blocking(move |connection| {
            let row = messages::table
                .filter(messages::id.eq(id.into_inner()))
                .select(MessageRow::as_select())
                .first::<MessageRow>(connection)
                .optional()
                .map_err(MessageRepositoryError::persistence)?;
            row.map(row_to_message).transpose()
        })
        .await
    }

    async fn exists_by_id(&self, id: MessageId) -> MessageRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            diesel::select(diesel::dsl::exists(
                messages::table.filter(messages::id.eq(id.into_inner())),
            ))
            .get_result::<bool>(connection)
            .map_err(MessageRepositoryError::persistence)
        })
        .await
    }
}

fn row_to_message(row: MessageRow) -> MessageRepositoryResult<Message> {
    let snapshot = MessageSnapshot::from(row);
    let id = snapshot.id;
    Message::from_snapshot(snapshot)
        .map_err(|source| MessageRepositoryError::CorruptRecord { id, source })
}
