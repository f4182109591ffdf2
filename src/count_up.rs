use timer_engine::{format_hhmmss, Clock, MonotonicClock};

/// Re-armable count-up timer: a full stop-then-start cycle restarts from
/// zero instead of resuming. Readings are unrounded.
pub struct CountUpTimer<C: Clock = MonotonicClock> {
    running: bool,
    saved: f64,
    anchor: f64,
    // Set on every start; distinguishes "never started" (first start keeps
    // the construction-time anchor) from "ran before, now idle" (start
    // re-arms from zero).
    armed: bool,
    clock: C,
}

impl CountUpTimer {
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }

    /// Count up from `offset` seconds instead of zero.
    pub fn with_offset(offset: f64) -> Self {
        Self::with_offset_and_clock(offset, MonotonicClock::new())
    }
}

impl Default for CountUpTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> CountUpTimer<C> {
    pub fn with_clock(clock: C) -> Self {
        Self::with_offset_and_clock(0.0, clock)
    }

    pub fn with_offset_and_clock(offset: f64, clock: C) -> Self {
        let anchor = clock.now() - offset;
        Self {
            running: false,
            saved: 0.0,
            anchor,
            armed: false,
            clock,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start the timer. The first start keeps the construction-time anchor,
    /// so the offset and any construction-to-start gap count as elapsed;
    /// every later start re-arms from zero.
    pub fn start(&mut self) {
        if self.armed {
            self.anchor = self.clock.now();
            self.saved = 0.0;
            log::trace!("count-up timer re-armed");
        }
        self.running = true;
        self.armed = true;
    }

    fn current(&mut self) -> f64 {
        if self.running {
            self.saved = self.clock.now() - self.anchor;
        }
        self.saved
    }

    /// Elapsed seconds, recomputed while running, frozen while stopped.
    pub fn get_time(&mut self) -> f64 {
        self.current()
    }

    /// Elapsed time as `HH:MM:SS`.
    pub fn get_time_hhmmss(&mut self) -> String {
        format_hhmmss(self.current())
    }

    /// Freeze the reading and go idle. The next `start` restarts from zero.
    pub fn stop(&mut self) {
        self.current();
        self.running = false;
        log::trace!("count-up timer stopped at {:.3}s", self.saved);
    }
}
