//! Polled game timers: a base elapsed timer plus re-armable count-up and
//! fixed-duration count-down variants with `HH:MM:SS` formatting.
//!
//! Everything is single-threaded and caller-driven: no background thread
//! advances a timer, and expiry of a bounded timer is only detected when the
//! caller polls `update`. Timers take an injected [`Clock`];
//! [`ManualClock`] makes them deterministic under test.

mod count_down;
mod count_up;

pub use count_down::{CountDownTimer, ParseDurationError};
pub use count_up::CountUpTimer;
pub use timer_engine::{format_hhmmss, Clock, ManualClock, MonotonicClock, Timer};
