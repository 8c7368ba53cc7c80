// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Fraction of the remaining distance covered by each [`PanAnimator::step`].
const EASE_FRACTION: f64 = 0.02;

/// Remaining distance below which the animator snaps onto its target.
const SNAP_DISTANCE: f64 = 0.1;

/// Eased horizontal pan: a displayed offset chasing a target offset.
///
/// Input writes the target; [`step`](Self::step), called once per displayed
/// frame, moves the current offset a fixed fraction of the way there
/// (exponential ease-out) and snaps once it is within a tenth of a pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanAnimator {
    current: f64,
    target: f64,
}

impl PanAnimator {
    /// Creates an animator at rest on `offset`.
    #[must_use]
    pub fn new(offset: f64) -> Self {
        Self {
            current: offset,
            target: offset,
        }
    }

    /// The offset to draw with this frame.
    #[must_use]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// The offset being eased toward.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Sets the target; the current offset follows over subsequent steps.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Shifts the target by `delta` pixels.
    pub fn pan_by(&mut self, delta: f64) {
        self.target += delta;
    }

    /// Drops any residual glide by retargeting onto the current offset.
    ///
    /// Called when direct manipulation begins so the view tracks the pointer
    /// rather than finishing a previous animation underneath it.
    pub fn hold(&mut self) {
        self.target = self.current;
    }

    /// Moves both current and target to `offset` without easing.
    pub fn jump_to(&mut self, offset: f64) {
        self.current = offset;
        self.target = offset;
    }

    /// Advances one frame. Returns `true` if the current offset changed.
    pub fn step(&mut self) -> bool {
        let delta = self.target - self.current;
        if delta == 0.0 {
            return false;
        }
        if delta.abs() > SNAP_DISTANCE {
            self.current += delta * EASE_FRACTION;
        } else {
            self.current = self.target;
        }
        true
    }

    /// Returns `true` if current and target are at most `threshold` apart.
    #[must_use]
    pub fn is_settled_within(&self, threshold: f64) -> bool {
        (self.target - self.current).abs() <= threshold
    }

    /// Snapshot of the animator for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PanAnimatorDebugInfo {
        PanAnimatorDebugInfo {
            current: self.current,
            target: self.target,
            remaining: self.target - self.current,
        }
    }
}

/// Debug snapshot of a [`PanAnimator`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanAnimatorDebugInfo {
    /// Offset drawn this frame.
    pub current: f64,
    /// Offset being eased toward.
    pub target: f64,
    /// `target - current`.
    pub remaining: f64,
}

#[cfg(test)]
mod tests {
    use super::PanAnimator;

    #[test]
    fn step_covers_two_percent_of_the_gap() {
        let mut pan = PanAnimator::new(0.0);
        pan.set_target(100.0);
        assert!(pan.step());
        assert!((pan.current() - 2.0).abs() < 1e-12);
        assert!(pan.step());
        assert!((pan.current() - (2.0 + 98.0 * 0.02)).abs() < 1e-12);
    }

    #[test]
    fn snaps_inside_a_tenth_of_a_pixel() {
        let mut pan = PanAnimator::new(10.0);
        pan.set_target(10.05);
        assert!(pan.step());
        assert_eq!(pan.current(), 10.05);
        assert!(!pan.step());
    }

    #[test]
    fn converges_monotonically() {
        let mut pan = PanAnimator::new(0.0);
        pan.set_target(-250.0);
        let mut last = pan.current();
        let mut frames = 0;
        while pan.step() {
            assert!(pan.current() <= last);
            assert!(pan.current() >= -250.0);
            last = pan.current();
            frames += 1;
            assert!(frames < 10_000, "pan never settled");
        }
        assert_eq!(pan.current(), -250.0);
    }

    #[test]
    fn hold_cancels_residual_glide() {
        let mut pan = PanAnimator::new(0.0);
        pan.set_target(500.0);
        pan.step();
        pan.hold();
        assert_eq!(pan.target(), pan.current());
        assert!(!pan.step());

        pan.pan_by(-3.0);
        assert_eq!(pan.target(), pan.current() - 3.0);
    }

    #[test]
    fn jump_and_settle() {
        let mut pan = PanAnimator::new(0.0);
        pan.jump_to(42.0);
        assert_eq!(pan.debug_info().remaining, 0.0);
        pan.pan_by(2.0);
        assert!(pan.is_settled_within(2.0));
        pan.pan_by(0.5);
        assert!(!pan.is_settled_within(2.0));
    }
}
