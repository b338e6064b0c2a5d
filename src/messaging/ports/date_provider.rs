//! Time provider port.

use chrono::{DateTime, Utc};
use mockable::Clock;

/// Source of the current instant for use cases.
///
/// Every [`Clock`] is a date provider, so production code injects
/// [`mockable::DefaultClock`] and tests inject
/// [`FixedClock`](crate::messaging::adapters::clock::FixedClock).
pub trait DateProvider: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

impl<C> DateProvider for C
where
    C: Clock + Send + Sync + ?Sized,
{
    fn now(&self) -> DateTime<Utc> {
        self.utc()
    }
}
