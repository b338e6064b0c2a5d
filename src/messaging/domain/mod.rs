//! Domain model for posting and reading messages.
//!
//! The domain owns the text rules and the message lifecycle. It performs no
//! I/O and never reads the wall clock; timestamps are passed in.

mod error;
mod ids;
mod message;
mod text;
mod user;

pub use error::MessageDomainError;
pub use ids::MessageId;
pub use message::{Message, MessageSnapshot};
pub use text::MessageText;
pub use user::User;
