use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

/// Source of the `timestamp` field stamped on every response.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock that never steps backwards within one process, even if the
/// system time is adjusted under it. Readings are truncated to microseconds.
#[derive(Debug, Default)]
pub struct MonotonicClock {
    last_micros: AtomicI64,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self::default()
    }

    fn clamp(&self, candidate: DateTime<Utc>) -> DateTime<Utc> {
        let micros = candidate.timestamp_micros();
        let previous = self.last_micros.fetch_max(micros, Ordering::AcqRel);
        DateTime::from_timestamp_micros(previous.max(micros)).unwrap_or(candidate)
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> DateTime<Utc> {
        self.clamp(Utc::now())
    }
}

/// Always returns the same instant. Used by tests.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn sequential_reads_never_decrease() {
        let clock = MonotonicClock::new();
        let mut previous = clock.now();
        for _ in 0..1_000 {
            let next = clock.now();
            assert!(next >= previous);
            previous = next;
        }
    }

    #[test]
    fn backwards_step_is_clamped() {
        let clock = MonotonicClock::new();
        let now = Utc::now();
        assert_eq!(clock.clamp(now).timestamp_micros(), now.timestamp_micros());

        let earlier = now - Duration::seconds(30);
        let clamped = clock.clamp(earlier);
        assert_eq!(clamped.timestamp_micros(), now.timestamp_micros());
    }

    #[test]
    fn forward_step_passes_through() {
        let clock = MonotonicClock::new();
        let now = Utc::now();
        clock.clamp(now);
        let later = now + Duration::seconds(5);
        assert_eq!(clock.clamp(later).timestamp_micros(), later.timestamp_micros());
    }
}
