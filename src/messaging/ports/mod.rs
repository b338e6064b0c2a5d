//! Port contracts for the messaging context.
//!
//! Ports define infrastructure-agnostic interfaces used by messaging
//! services.

pub mod date_provider;
pub mod repository;
pub mod user_repository;

pub use date_provider::DateProvider;
pub use repository::{MessageRepository, MessageRepositoryError, MessageRepositoryResult};
pub use user_repository::{UserRepository, UserRepositoryError, UserRepositoryResult};
