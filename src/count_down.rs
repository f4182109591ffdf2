use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;
use timer_engine::{format_hhmmss, Clock, MonotonicClock, Timer};

/// Failure to parse an `H:M:S` duration string.
#[derive(Debug, Error)]
pub enum ParseDurationError {
    #[error("expected H:M:S, got {0:?}")]
    Fields(String),
    #[error("invalid hours field")]
    Hours(#[source] ParseIntError),
    #[error("invalid minutes field")]
    Minutes(#[source] ParseIntError),
    #[error("invalid seconds field")]
    Seconds(#[source] ParseFloatError),
}

/// Parse a strict `H:M:S` string (hours and minutes integers, seconds float)
/// into total seconds.
fn parse_hms(input: &str) -> Result<f64, ParseDurationError> {
    let mut fields = input.split(':');
    let (Some(h), Some(m), Some(s), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(ParseDurationError::Fields(input.to_string()));
    };
    let hours: i64 = h.parse().map_err(ParseDurationError::Hours)?;
    let minutes: i64 = m.parse().map_err(ParseDurationError::Minutes)?;
    let seconds: f64 = s.parse().map_err(ParseDurationError::Seconds)?;
    Ok(hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds)
}

/// Fixed-duration timer reporting time remaining rather than time elapsed.
/// Composed over the base [`Timer`] configured with the parsed duration.
pub struct CountDownTimer<C: Clock = MonotonicClock> {
    seconds: f64,
    timer: Timer<C>,
}

impl CountDownTimer {
    /// Build from an `H:M:S` duration string on the monotonic system clock.
    pub fn new(duration: &str) -> Result<Self, ParseDurationError> {
        Self::with_clock(duration, MonotonicClock::new())
    }

    /// Same, with a command to run when the countdown stops.
    pub fn with_command<F: FnMut() + 'static>(
        duration: &str,
        command: F,
    ) -> Result<Self, ParseDurationError> {
        let mut countdown = Self::new(duration)?;
        countdown.timer.set_command(command);
        Ok(countdown)
    }
}

impl<C: Clock> CountDownTimer<C> {
    pub fn with_clock(duration: &str, clock: C) -> Result<Self, ParseDurationError> {
        let seconds = parse_hms(duration)?;
        log::debug!("count-down timer for {:.3}s ({:?})", seconds, duration);
        Ok(Self {
            seconds,
            timer: Timer::with_clock(Some(seconds), clock),
        })
    }

    pub fn set_command<F: FnMut() + 'static>(&mut self, command: F) {
        self.timer.set_command(command);
    }

    /// Total configured duration in seconds.
    pub fn duration(&self) -> f64 {
        self.seconds
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn start(&mut self) {
        self.timer.start(None);
    }

    /// Poll the inner timer; this is where expiry is detected.
    pub fn update(&mut self) {
        self.timer.update();
    }

    pub fn pause(&mut self) {
        self.timer.pause();
    }

    pub fn go_on(&mut self) {
        self.timer.go_on();
        self.timer.update();
    }

    /// Remaining seconds, computed from the inner timer's frozen snapshot.
    /// Does not recompute while running (call `update` first for a live
    /// reading) and is not clamped: polling past expiry without an `update`
    /// can return a negative value.
    pub fn get_time(&self) -> f64 {
        self.seconds - self.timer.saved_time()
    }

    /// Remaining time as `HH:MM:SS`.
    ///
    /// Like [`get_time`](Self::get_time), the value is not clamped at zero.
    /// Past expiry the hours field goes negative while minutes and seconds
    /// wrap positive, e.g. half a second over renders as `-1:59:59.5`.
    pub fn get_time_hhmmss(&self) -> String {
        format_hhmmss(self.get_time())
    }

    /// Stop the inner timer (running its command, if any) and return the
    /// final elapsed seconds.
    pub fn stop(&mut self) -> f64 {
        self.timer.stop()
    }
}
