use std::time::{Duration, Instant};

/// Settle window for resize bursts.
pub const DEFAULT_RESIZE_WINDOW: Duration = Duration::from_millis(1500);

/// Cancellable deadline timer coalescing resize bursts.
///
/// Each `schedule` supersedes the pending deadline, so only the last resize in
/// a burst triggers recomputation. The owner polls `fire` from its tick loop;
/// nothing runs on a background thread.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_RESIZE_WINDOW)
    }
}

impl ResizeDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the timer: the deadline becomes `now + window`,
    /// cancelling any previously pending one.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// Drop the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once per elapsed deadline; firing disarms the timer.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
