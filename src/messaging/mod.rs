//! Posting, editing and reading timelines of short messages.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`] ([`domain::Message`], [`domain::MessageText`],
//!   [`domain::User`])
//! - Port contracts in [`ports`] ([`ports::MessageRepository`],
//!   [`ports::DateProvider`], [`ports::UserRepository`])
//! - Adapter implementations in [`adapters`]
//! - Use-case handlers in [`services`]
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use chrono::{Duration, TimeZone, Utc};
//! use crieur::messaging::{
//!     adapters::{clock::FixedClock, memory::InMemoryMessageRepository},
//!     domain::MessageId,
//!     services::{
//!         PostMessageHandler, PostMessageRequest, ViewTimelineHandler, ViewTimelineRequest,
//!     },
//! };
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let repository = Arc::new(InMemoryMessageRepository::new());
//! let clock = Arc::new(FixedClock::new(
//!     Utc.with_ymd_and_hms(2020, 2, 14, 17, 44, 51).unwrap(),
//! ));
//! let post = PostMessageHandler::new(Arc::clone(&repository), Arc::clone(&clock));
//! let timeline = ViewTimelineHandler::new(Arc::clone(&repository), Arc::clone(&clock));
//!
//! post.handle(PostMessageRequest::new(MessageId::new(), "Alice", "Hello world!"))
//!     .await
//!     .expect("post succeeds");
//! clock.advance(Duration::minutes(2));
//!
//! let entries = timeline
//!     .handle(ViewTimelineRequest::new("Alice"))
//!     .await
//!     .expect("timeline succeeds");
//! assert_eq!(entries[0].relative_time, "2 minutes ago");
//! # });
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
