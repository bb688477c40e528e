// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::{Easing, FrameTime};

/// Duration and curve of a single transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    /// How long the transition takes. Zero means "jump".
    pub duration: Duration,
    /// Shape of the transition.
    pub easing: Easing,
}

impl Transition {
    /// Transitions that complete instantly.
    pub const IMMEDIATE: Self = Self {
        duration: Duration::ZERO,
        easing: Easing::Linear,
    };

    /// Default transition length for focus changes.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(250);

    /// Creates a transition of `duration` with the default easing.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            easing: Easing::default(),
        }
    }

    /// Replaces the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION)
    }
}

/// A scalar interpolating from one value to a target over a [`Transition`].
///
/// The state is `{from, target, start, transition}`. The animated value is a
/// pure function of that state and the frame time passed to
/// [`AnimatedScalar::value_at`]; nothing advances on its own.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnimatedScalar {
    from: f64,
    target: f64,
    start: FrameTime,
    transition: Transition,
}

impl AnimatedScalar {
    /// Creates a scalar already settled at `value`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            from: value,
            target: value,
            start: FrameTime::ZERO,
            transition: Transition::IMMEDIATE,
        }
    }

    /// The value this scalar is moving towards (its settled value).
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// The frame time at which the current transition started.
    #[must_use]
    pub fn start_time(&self) -> FrameTime {
        self.start
    }

    /// The transition currently being followed.
    #[must_use]
    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Linear progress of the current transition at `now`, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: FrameTime) -> f64 {
        let duration = self.transition.duration;
        if duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_since(self.start);
        if elapsed >= duration {
            1.0
        } else {
            elapsed.as_secs_f64() / duration.as_secs_f64()
        }
    }

    /// Interpolated value at `now`.
    #[must_use]
    pub fn value_at(&self, now: FrameTime) -> f64 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.target;
        }
        self.from + (self.target - self.from) * self.transition.easing.apply(t)
    }

    /// Returns `true` once the transition has completed at `now`.
    #[must_use]
    pub fn is_settled(&self, now: FrameTime) -> bool {
        self.progress(now) >= 1.0
    }

    /// Starts moving towards `target` from the value at `now`.
    ///
    /// Retargeting to the current target is a no-op, so an in-flight
    /// transition is not restarted by a repeated event.
    pub fn retarget(&mut self, target: f64, now: FrameTime, transition: Transition) {
        if target == self.target {
            return;
        }
        self.from = self.value_at(now);
        self.target = target;
        self.start = now;
        self.transition = transition;
    }

    /// Settles at `value` immediately, dropping any in-flight transition.
    pub fn jump_to(&mut self, value: f64) {
        *self = Self::new(value);
    }
}
