//! Use-case handlers for the messaging context.
//!
//! Each handler performs one operation and receives its collaborators
//! through its constructor.

mod edit_message;
mod error;
mod post_message;
mod subscriptions;
mod view_timeline;

pub use edit_message::{EditMessageHandler, EditMessageRequest};
pub use error::{MessagingError, MessagingResult};
pub use post_message::{PostMessageHandler, PostMessageRequest};
pub use subscriptions::{FollowRequest, SubscriptionService};
pub use view_timeline::{TimelineEntry, ViewTimelineHandler, ViewTimelineRequest};
