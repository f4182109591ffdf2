//! Clock abstraction so timers can be driven by a controllable time source
//! in tests and a monotonic one in production.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// A source of "current time in seconds" since an arbitrary fixed origin.
/// Implementations must be monotonically non-decreasing.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Production clock backed by `std::time::Instant`, immune to wall-clock
/// adjustments (NTP, DST, manual changes). Origin is captured at construction.
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Manually advanced clock for deterministic tests. Clones share the same
/// underlying time, so a test can hold a handle while the timer owns another.
///
/// Timers are single-threaded by design, hence `Rc` rather than `Arc`.
#[derive(Clone, Default)]
pub struct ManualClock {
    secs: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, secs: f64) {
        self.secs.set(self.secs.get() + secs);
    }

    pub fn set(&self, secs: f64) {
        self.secs.set(secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.secs.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_shares_time_across_clones() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        assert_eq!(clock.now(), 0.0);

        handle.advance(1.5);
        assert_eq!(clock.now(), 1.5);

        handle.set(10.0);
        assert_eq!(clock.now(), 10.0);
    }

    #[test]
    fn monotonic_clock_never_goes_backward() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
