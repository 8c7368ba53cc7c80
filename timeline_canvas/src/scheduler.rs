// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-frame animation task.
//!
//! A timeline animates for as long as it is shown: every displayed frame
//! advances the pan easing and redraws. [`FrameScheduler`] is the one task
//! that does this. The host calls [`FrameScheduler::run_frame`] from its
//! frame callback and requests another frame while it returns
//! [`FrameStatus::Reschedule`]. Cancelling the scheduler's [`CancelToken`],
//! from anywhere, stops the loop at the next frame.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use timeline_imaging::Surface;

use crate::timeline::Timeline;

/// Shared flag that stops a [`FrameScheduler`].
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A token that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that the scheduler stop. Idempotent.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether [`cancel`](Self::cancel) has been called on any clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// What the host should do after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    /// Request another frame.
    Reschedule,
    /// The scheduler was cancelled; stop requesting frames.
    Stopped,
}

/// Owns the repeating frame task of one timeline.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    token: CancelToken,
    frames: u64,
}

impl FrameScheduler {
    /// A scheduler with a fresh token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A scheduler stopped by `token`.
    #[must_use]
    pub fn with_token(token: CancelToken) -> Self {
        Self { token, frames: 0 }
    }

    /// A handle that cancels this scheduler.
    #[must_use]
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Frames run so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs one frame unless cancelled.
    pub fn run_frame<S: Surface>(&mut self, timeline: &mut Timeline<S>) -> FrameStatus {
        if self.token.is_cancelled() {
            return FrameStatus::Stopped;
        }
        timeline.tick();
        self.frames += 1;
        FrameStatus::Reschedule
    }

    /// Runs up to `limit` frames back to back, stopping early on cancellation.
    ///
    /// Returns the number of frames run. Intended for headless hosts that
    /// have no display clock.
    pub fn run_frames<S: Surface>(&mut self, timeline: &mut Timeline<S>, limit: u64) -> u64 {
        let mut ran = 0;
        while ran < limit && self.run_frame(timeline) == FrameStatus::Reschedule {
            ran += 1;
        }
        ran
    }
}
