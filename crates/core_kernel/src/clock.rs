//! Injectable time source
//!
//! Anything that stamps wall-clock time onto an outgoing payload reads it
//! through [`Clock`] so tests can pin the current instant.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// A source of the current wall-clock time
pub trait Clock: Send + Sync {
    /// Current time as Unix epoch seconds
    fn unix_timestamp(&self) -> i64;
}

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_timestamp(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// A clock that only moves when told to
#[derive(Debug, Default)]
pub struct FixedClock {
    seconds: AtomicI64,
}

impl FixedClock {
    /// Creates a clock pinned at the given Unix epoch seconds
    pub fn at(seconds: i64) -> Self {
        Self {
            seconds: AtomicI64::new(seconds),
        }
    }

    /// Creates a clock pinned at the given instant
    pub fn at_datetime(instant: DateTime<Utc>) -> Self {
        Self::at(instant.timestamp())
    }

    /// Moves the clock to a new instant
    pub fn set(&self, seconds: i64) {
        self.seconds.store(seconds, Ordering::SeqCst);
    }

    /// Moves the clock forward by `seconds`
    pub fn advance(&self, seconds: i64) {
        self.seconds.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn unix_timestamp(&self) -> i64 {
        self.seconds.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_advances() {
        let clock = FixedClock::at(1_000);
        clock.advance(5);
        assert_eq!(clock.unix_timestamp(), 1_005);
    }

    #[test]
    fn test_system_clock_is_after_2020() {
        assert!(SystemClock.unix_timestamp() > 1_577_836_800);
    }
}
