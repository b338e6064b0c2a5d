//! Shared world state for messaging BDD scenarios.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use crieur::messaging::{
    adapters::{clock::FixedClock, memory::InMemoryMessageRepository},
    domain::MessageId,
    services::{
        EditMessageHandler, MessagingError, PostMessageHandler, TimelineEntry,
        ViewTimelineHandler,
    },
};
use eyre::{WrapErr, eyre};
use rstest::fixture;
use uuid::Uuid;

/// Scenario world for messaging behaviour tests.
pub struct MessagingWorld {
    pub repository: Arc<InMemoryMessageRepository>,
    pub clock: Arc<FixedClock>,
    pub last_result: Option<Result<(), MessagingError>>,
    pub last_timeline: Option<Result<Vec<TimelineEntry>, MessagingError>>,
}

impl MessagingWorld {
    /// Creates a world with an empty repository and a clock at the epoch.
    #[must_use]
    pub fn new() -> Self {
        Self {
            repository: Arc::new(InMemoryMessageRepository::new()),
            clock: Arc::new(FixedClock::default()),
            last_result: None,
            last_timeline: None,
        }
    }

    pub fn post_handler(&self) -> PostMessageHandler<InMemoryMessageRepository, FixedClock> {
        PostMessageHandler::new(Arc::clone(&self.repository), Arc::clone(&self.clock))
    }

    pub fn edit_handler(&self) -> EditMessageHandler<InMemoryMessageRepository> {
        EditMessageHandler::new(Arc::clone(&self.repository))
    }

    pub fn timeline_handler(&self) -> ViewTimelineHandler<InMemoryMessageRepository, FixedClock> {
        ViewTimelineHandler::new(Arc::clone(&self.repository), Arc::clone(&self.clock))
    }
}

impl Default for MessagingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> MessagingWorld {
    MessagingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses a message identifier written in a feature file.
pub fn parse_id(raw: &str) -> Result<MessageId, eyre::Report> {
    Uuid::parse_str(raw)
        .map(MessageId::from_uuid)
        .wrap_err_with(|| format!("parse message id {raw}"))
}

/// Parses an RFC 3339 timestamp written in a feature file.
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>, eyre::Report> {
    DateTime::parse_from_rfc3339(raw)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|err| eyre!("parse timestamp {raw}: {err}"))
}
