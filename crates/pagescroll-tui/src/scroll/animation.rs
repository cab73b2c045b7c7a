//! Scroll animation controller combining the easing and timing atoms.

use std::time::{Duration, Instant};

use super::easing::Easing;
use super::timing::{lerp_u32, progress};

/// Animation parameters for the smooth-scroll collaborator.
#[derive(Debug, Clone, Copy)]
pub struct ScrollConfig {
    pub smooth_enabled: bool,
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: true,
            duration: Duration::from_millis(250),
            easing: Easing::Cubic,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveAnimation {
    start: Instant,
    from: u32,
    to: u32,
}

/// Owns the viewport scroll position.
///
/// `scroll_to` starts an animation from the current interpolated position; a
/// request arriving mid-flight retargets from wherever the viewport currently
/// is, so the last request wins. There is no completion callback — callers
/// observe movement by polling `update` each frame.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    config: ScrollConfig,
    current: u32,
    animation: Option<ActiveAnimation>,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            current: 0,
            animation: None,
        }
    }

    #[inline]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Final position once the in-flight animation (if any) lands.
    pub fn target(&self) -> u32 {
        self.animation.map(|a| a.to).unwrap_or(self.current)
    }

    /// Place the viewport immediately, cancelling any animation.
    pub fn set(&mut self, offset: u32) {
        self.current = offset;
        self.animation = None;
    }

    /// Begin animating toward `target`, clamped to `max_scroll`.
    pub fn scroll_to(&mut self, target: u32, max_scroll: u32, now: Instant) {
        let target = target.min(max_scroll);
        if !self.config.smooth_enabled || self.config.duration.is_zero() {
            self.set(target);
            return;
        }
        if target == self.current {
            self.animation = None;
            return;
        }
        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.current,
            to: target,
        });
    }

    /// Advance the animation to `now` and return the current position. Also
    /// re-clamps against `max_scroll`, which may have shrunk since the
    /// animation started.
    pub fn update(&mut self, max_scroll: u32, now: Instant) -> u32 {
        if let Some(anim) = self.animation {
            let t = progress(anim.start, now, self.config.duration);
            if t >= 1.0 {
                self.current = anim.to.min(max_scroll);
                self.animation = None;
            } else {
                let eased = self.config.easing.apply(t);
                self.current = lerp_u32(anim.from, anim.to, eased).min(max_scroll);
            }
        } else if self.current > max_scroll {
            self.current = max_scroll;
        }
        self.current
    }

    pub fn cancel(&mut self) {
        self.animation = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_config() -> ScrollConfig {
        ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_instant_jump_when_smooth_disabled() {
        let mut animator = ScrollAnimator::new(instant_config());
        animator.scroll_to(100, 200, Instant::now());
        assert_eq!(animator.current(), 100);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut animator = ScrollAnimator::default();
        let start = Instant::now();
        animator.scroll_to(100, 200, start);
        assert!(animator.is_animating());
        assert_eq!(animator.target(), 100);

        let mid = animator.update(200, start + Duration::from_millis(125));
        assert!(mid > 0 && mid < 100, "mid-flight position was {mid}");

        let done = animator.update(200, start + Duration::from_millis(250));
        assert_eq!(done, 100);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_retarget_mid_flight_wins() {
        let mut animator = ScrollAnimator::default();
        let start = Instant::now();
        animator.scroll_to(100, 400, start);
        animator.update(400, start + Duration::from_millis(125));

        // A newer request supersedes the old target from the current position.
        animator.scroll_to(300, 400, start + Duration::from_millis(125));
        assert_eq!(animator.target(), 300);
        let done = animator.update(400, start + Duration::from_millis(400));
        assert_eq!(done, 300);
    }

    #[test]
    fn test_target_clamped_to_max() {
        let mut animator = ScrollAnimator::new(instant_config());
        animator.scroll_to(500, 120, Instant::now());
        assert_eq!(animator.current(), 120);
    }

    #[test]
    fn test_update_reclamps_when_max_shrinks() {
        let mut animator = ScrollAnimator::new(instant_config());
        animator.scroll_to(100, 200, Instant::now());
        assert_eq!(animator.update(40, Instant::now()), 40);
    }

    #[test]
    fn test_noop_when_already_at_target() {
        let mut animator = ScrollAnimator::default();
        animator.set(50);
        animator.scroll_to(50, 100, Instant::now());
        assert!(!animator.is_animating());
    }
}
