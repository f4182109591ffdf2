//! Display formatting for timer readings.

/// Round to `digits` decimal places.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}

/// Format seconds as `HH:MM:SS`.
///
/// Hours and minutes are zero-padded to width 2. The seconds field keeps its
/// fractional part: it is left-padded with a single `0` when under 10, then
/// truncated to at most 6 characters, so sub-second precision tops out around
/// microseconds. The value is rounded to 6 decimal places first so binary
/// float noise cannot leak into the truncated field.
pub fn format_hhmmss(seconds: f64) -> String {
    let mut whole_minutes = (seconds / 60.0).floor();
    let mut secs = round_to(seconds - whole_minutes * 60.0, 6);
    // rounding can carry the seconds field to exactly 60
    if secs >= 60.0 {
        secs -= 60.0;
        whole_minutes += 1.0;
    }
    let whole_minutes = whole_minutes as i64;
    let hours = whole_minutes.div_euclid(60);
    let minutes = whole_minutes.rem_euclid(60);

    let mut secs_str = format!("{}", secs);
    if secs < 10.0 {
        secs_str.insert(0, '0');
    }
    secs_str.truncate(6);

    format!("{:02}:{:02}:{}", hours, minutes, secs_str)
}
