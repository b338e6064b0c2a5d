//! Clock adapters.

use chrono::{DateTime, Local, Utc};
use mockable::Clock;
use std::sync::{PoisonError, RwLock};

/// Clock that reports a settable fixed instant.
///
/// Handlers hold the clock behind an `Arc`, so the instant can be moved
/// after wiring.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use crieur::messaging::{adapters::clock::FixedClock, ports::DateProvider};
///
/// let start = Utc.with_ymd_and_hms(2020, 2, 14, 17, 46, 51).unwrap();
/// let clock = FixedClock::new(start);
/// assert_eq!(clock.now(), start);
///
/// clock.advance(Duration::minutes(2));
/// assert_eq!(clock.now(), start + Duration::minutes(2));
/// ```
#[derive(Debug)]
pub struct FixedClock {
    now: RwLock<DateTime<Utc>>,
}

impl FixedClock {
    /// Creates a clock frozen at `now`.
    #[must_use]
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    /// Moves the clock to `now`.
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.write().unwrap_or_else(PoisonError::into_inner) = now;
    }

    /// Moves the clock forward by `delta`.
    pub fn advance(&self, delta: chrono::Duration) {
        let mut guard = self.now.write().unwrap_or_else(PoisonError::into_inner);
        *guard += delta;
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new(DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.read().unwrap_or_else(PoisonError::into_inner)
    }
}
