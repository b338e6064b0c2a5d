//! In-memory adapter implementations for testing.
//!
//! These adapters provide simple, thread-safe implementations suitable for
//! unit testing without database dependencies.

mod message;
mod user;

pub use message::InMemoryMessageRepository;
pub use user::InMemoryUserRepository;
