//! Time calculation utilities for scroll animations. The current time is
//! always passed in explicitly so animations stay deterministic under test.

use std::time::{Duration, Instant};

/// Animation progress in [0, 1] at `now` for an animation started at `start`.
/// A zero duration is already complete.
#[inline]
pub fn progress(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Linear interpolation between two values.
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Linear interpolation for scroll offsets.
#[inline]
pub fn lerp_u32(from: u32, to: u32, t: f64) -> u32 {
    lerp(from as f64, to as f64, t).round() as u32
}
