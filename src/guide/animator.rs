//! Frame-stepped vertical scroll animation.
//!
//! The animator holds at most one tween. Starting a new tween replaces the old
//! one, and the host calls [`ScrollAnimator::step`] once per frame until it
//! reports [`Step::Finished`].

/// Outcome of one animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Nothing is animating.
    Idle,
    /// Scroll moved to the contained offset; more frames follow.
    Moved(f64),
    /// Scroll reached the contained offset; the tween is gone.
    Finished(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Tween {
    delta: f64,
    target: f64,
}

impl Tween {
    /// True once another step of `delta` from `current` would reach or pass the target.
    fn completes_from(&self, current: f64) -> bool {
        let remaining = self.target - current;
        remaining == 0.0
            || remaining.signum() != self.delta.signum()
            || remaining.abs() <= self.delta.abs()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScrollAnimator {
    tween: Option<Tween>,
}

impl ScrollAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin tweening from `from` to `target` in roughly `steps` frames.
    ///
    /// Any running tween is cancelled first. Returns false (and leaves the
    /// animator idle) when there is no distance to cover.
    pub fn start(&mut self, from: f64, target: f64, steps: f64) -> bool {
        self.cancel();
        let distance = target - from;
        if distance == 0.0 || steps <= 0.0 {
            return false;
        }
        self.tween = Some(Tween {
            delta: distance / steps,
            target,
        });
        true
    }

    /// Advance one frame from the current scroll offset.
    pub fn step(&mut self, current: f64) -> Step {
        let Some(tween) = self.tween else {
            return Step::Idle;
        };
        if tween.completes_from(current) {
            self.tween = None;
            return Step::Finished(tween.target);
        }
        Step::Moved(current + tween.delta)
    }

    /// Stop any running tween. Safe to call when idle.
    pub fn cancel(&mut self) {
        self.tween = None;
    }

    pub fn is_active(&self) -> bool {
        self.tween.is_some()
    }
}
