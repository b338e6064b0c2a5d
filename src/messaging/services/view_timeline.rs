//! Use case for reading an author's timeline.

use super::MessagingResult;
use crate::messaging::{
    domain::{Message, MessageId},
    ports::{DateProvider, MessageRepository},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Request payload for viewing a timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewTimelineRequest {
    author: String,
}

impl ViewTimelineRequest {
    /// Creates a timeline request for `author`.
    #[must_use]
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
        }
    }

    /// Returns the requested author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }
}

/// One message as presented on a timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Message identifier.
    pub id: MessageId,
    /// Author name.
    pub author: String,
    /// Message text.
    pub text: String,
    /// Age of the message, e.g. `"2 minutes ago"`.
    pub relative_time: String,
}

impl TimelineEntry {
    fn from_message(message: &Message, now: DateTime<Utc>) -> Self {
        Self {
            id: message.id(),
            author: message.author().to_owned(),
            text: message.text().as_str().to_owned(),
            relative_time: relative_time_label(message.published_at(), now),
        }
    }
}

/// Builds the newest-first timeline of a single author.
#[derive(Clone)]
pub struct ViewTimelineHandler<R, D>
where
    R: MessageRepository,
    D: DateProvider,
{
    repository: Arc<R>,
    date_provider: Arc<D>,
}

impl<R, D> ViewTimelineHandler<R, D>
where
    R: MessageRepository,
    D: DateProvider,
{
    /// Creates a new timeline handler.
    #[must_use]
    pub const fn new(repository: Arc<R>, date_provider: Arc<D>) -> Self {
        Self {
            repository,
            date_provider,
        }
    }

    /// Returns the author's messages, most recent first.
    ///
    /// Messages published at the same instant keep the order the repository
    /// returned them in. An author without messages yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`MessagingError::Repository`](super::MessagingError::Repository)
    /// when the lookup fails.
    #[instrument(skip(self, request), fields(author = %request.author()))]
    pub async fn handle(&self, request: ViewTimelineRequest) -> MessagingResult<Vec<TimelineEntry>> {
        let mut messages = self.repository.find_all_by_author(&request.author).await?;
        messages.sort_by_key(|message| std::cmp::Reverse(message.published_at()));

        let now = self.date_provider.now();
        let entries: Vec<TimelineEntry> = messages
            .iter()
            .map(|message| TimelineEntry::from_message(message, now))
            .collect();
        debug!(entries = entries.len(), "timeline built");
        Ok(entries)
    }
}

/// Formats the whole minutes between `published_at` and `now`.
///
/// The plural suffix starts at two minutes, so zero renders as
/// `"0 minute ago"`.
fn relative_time_label(published_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - published_at).num_minutes();
    let unit = if minutes > 1 { "minutes" } else { "minute" };
    format!("{minutes} {unit} ago")
}
