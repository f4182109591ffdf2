//! Pure timing logic for the game-timers suite.
//! No platform dependencies; testable on host with a manual clock.

mod clock;
mod format;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use format::{format_hhmmss, round_to};

const DEFAULT_PRECISION_DIGITS: u32 = 2;

/// Polled elapsed-time tracker, optionally bounded with a completion command.
///
/// The timer never advances itself: elapsed time is recomputed only inside
/// `update`, `get_time`, and `stop`, and expiry of a bounded timer is detected
/// only in `update`. Callers needing timely expiry must poll.
pub struct Timer<C: Clock = MonotonicClock> {
    duration: Option<f64>,
    running: bool,
    anchor: f64,
    saved: f64,
    command: Option<Box<dyn FnMut()>>,
    clock: C,
}

impl Timer {
    /// Unbounded (`None`) or bounded timer on the monotonic system clock.
    pub fn new(duration: Option<f64>) -> Self {
        Self::with_clock(duration, MonotonicClock::new())
    }
}

impl<C: Clock> Timer<C> {
    pub fn with_clock(duration: Option<f64>, clock: C) -> Self {
        Self {
            duration,
            running: false,
            anchor: 0.0,
            saved: 0.0,
            command: None,
            clock,
        }
    }

    /// Install a command to run when the timer stops, whether by expiry or by
    /// a manual `stop` call.
    pub fn set_command<F: FnMut() + 'static>(&mut self, command: F) {
        self.command = Some(Box::new(command));
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The configured bound in seconds, `None` if unbounded.
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// The last computed elapsed value, without recomputing. While the timer
    /// is running this is only as fresh as the last `update`/`get_time` call.
    pub fn saved_time(&self) -> f64 {
        self.saved
    }

    /// Start (or restart) the clock, optionally replacing the configured
    /// duration. Re-anchors to now but does not reset the saved elapsed
    /// value; the next recompute overwrites it.
    pub fn start(&mut self, duration_override: Option<f64>) {
        if let Some(duration) = duration_override {
            self.duration = Some(duration);
        }
        self.running = true;
        self.anchor = self.clock.now();
        log::trace!("timer started, bound {:?}", self.duration);
    }

    /// Recompute the elapsed snapshot and detect expiry. This is the only
    /// place a bounded timer auto-stops.
    pub fn update(&mut self) {
        if !self.running {
            return;
        }
        self.saved = self.clock.now() - self.anchor;
        if let Some(duration) = self.duration {
            if self.saved >= duration {
                log::debug!("timer expired at {:.3}s (bound {:.3}s)", self.saved, duration);
                self.stop();
            }
        }
    }

    /// Freeze the timer at the last computed snapshot. Call `update` first if
    /// a fresh reading matters.
    pub fn pause(&mut self) {
        self.running = false;
        log::trace!("timer paused at {:.3}s", self.saved);
    }

    /// Resume after a pause. Does not re-anchor, so the paused interval still
    /// counts toward elapsed time.
    pub fn go_on(&mut self) {
        self.running = true;
        self.update();
    }

    /// Elapsed seconds, rounded to 2 decimal places while running; the frozen
    /// snapshot, unrounded, while stopped.
    pub fn get_time(&mut self) -> f64 {
        self.get_time_rounded(DEFAULT_PRECISION_DIGITS)
    }

    pub fn get_time_rounded(&mut self, digits: u32) -> f64 {
        if self.running {
            self.saved = round_to(self.clock.now() - self.anchor, digits);
        }
        self.saved
    }

    /// Stop the timer and run the command, if any. The stopped state and the
    /// final snapshot are committed before the command runs, so a panicking
    /// command leaves the timer consistent.
    pub fn stop(&mut self) -> f64 {
        self.get_time();
        self.running = false;
        if let Some(command) = self.command.as_mut() {
            command();
        }
        self.saved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_command() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let hook = Rc::clone(&count);
        (count, move || hook.set(hook.get() + 1))
    }

    #[test]
    fn test_unbounded_elapsed() {
        let clock = ManualClock::new();
        let mut timer = Timer::with_clock(None, clock.clone());
        assert!(!timer.is_running());

        timer.start(None);
        clock.advance(0.5);
        assert_eq!(timer.get_time(), 0.5);

        clock.advance(1.0);
        assert_eq!(timer.get_time(), 1.5);
    }

    #[test]
    fn test_unbounded_never_auto_stops() {
        let clock = ManualClock::new();
        let mut timer = Timer::with_clock(None, clock.clone());
        timer.start(None);

        for _ in 0..100 {
            clock.advance(1_000.0);
            timer.update();
            assert!(timer.is_running());
        }
    }

    #[test]
    fn test_bounded_expiry_fires_command_once() {
        let clock = ManualClock::new();
        let (count, command) = counting_command();
        let mut timer = Timer::with_clock(Some(1.0), clock.clone());
        timer.set_command(command);

        timer.start(None);
        clock.advance(0.5);
        timer.update();
        assert!(timer.is_running());
        assert_eq!(count.get(), 0);

        clock.advance(0.7);
        timer.update();
        assert!(!timer.is_running());
        assert_eq!(count.get(), 1);
        assert!(timer.get_time() >= 1.0);

        // further polling after the stop is a no-op
        clock.advance(5.0);
        timer.update();
        assert_eq!(count.get(), 1);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_start_override_replaces_duration() {
        let clock = ManualClock::new();
        let mut timer = Timer::with_clock(Some(10.0), clock.clone());
        timer.start(Some(2.0));
        assert_eq!(timer.duration(), Some(2.0));

        clock.advance(3.0);
        timer.update();
        assert!(!timer.is_running());
    }

    #[test]
    fn test_start_does_not_reset_saved() {
        let clock = ManualClock::new();
        let mut timer = Timer::with_clock(None, clock.clone());
        timer.start(None);
        clock.advance(2.0);
        timer.update();
        timer.pause();
        assert_eq!(timer.saved_time(), 2.0);

        // restart re-anchors but keeps the stale snapshot until a recompute
        timer.start(None);
        assert_eq!(timer.saved_time(), 2.0);
        clock.advance(1.0);
        assert_eq!(timer.get_time(), 1.0);
    }

    #[test]
    fn test_pause_freezes_last_snapshot() {
        let clock = ManualClock::new();
        let mut timer = Timer::with_clock(None, clock.clone());
        timer.start(None);
        clock.advance(1.0);
        timer.update();

        clock.advance(5.0);
        timer.pause();
        // pause does not take a fresh snapshot
        assert_eq!(timer.get_time(), 1.0);
        assert_eq!(timer.get_time(), 1.0);
    }

    #[test]
    fn test_pause_without_update_reads_zero() {
        let clock = ManualClock::new();
        let mut timer = Timer::with_clock(None, clock.clone());
        timer.start(None);
        clock.advance(1.0);
        timer.pause();
        // the documented pitfall: nothing was ever computed
        assert_eq!(timer.get_time(), 0.0);
    }

    #[test]
    fn test_go_on_counts_paused_interval() {
        let clock = ManualClock::new();
        let mut timer = Timer::with_clock(None, clock.clone());
        timer.start(None);
        clock.advance(1.0);
        timer.update();
        timer.pause();

        clock.advance(1.0);
        timer.go_on();
        // resume does not re-anchor: total wall time since start, not active time
        assert_eq!(timer.get_time(), 2.0);
    }

    #[test]
    fn test_manual_stop_fires_command() {
        let clock = ManualClock::new();
        let (count, command) = counting_command();
        let mut timer = Timer::with_clock(Some(100.0), clock.clone());
        timer.set_command(command);

        timer.start(None);
        clock.advance(1.0);
        let elapsed = timer.stop();
        assert_eq!(elapsed, 1.0);
        assert_eq!(count.get(), 1);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_get_time_idempotent_while_stopped() {
        let clock = ManualClock::new();
        let mut timer = Timer::with_clock(None, clock.clone());
        timer.start(None);
        clock.advance(1.25);
        timer.stop();

        clock.advance(3.0);
        let a = timer.get_time();
        let b = timer.get_time();
        assert_eq!(a, b);
        assert_eq!(a, 1.25);
    }

    #[test]
    fn test_get_time_rounds_while_running() {
        let clock = ManualClock::new();
        let mut timer = Timer::with_clock(None, clock.clone());
        timer.start(None);
        clock.advance(0.123456);
        assert_eq!(timer.get_time(), 0.12);
        assert_eq!(timer.get_time_rounded(4), 0.1235);
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn test_command_panic_propagates() {
        let clock = ManualClock::new();
        let mut timer = Timer::with_clock(Some(1.0), clock.clone());
        timer.set_command(|| panic!("boom"));
        timer.start(None);
        clock.advance(2.0);
        timer.update();
    }
}
