// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gridcast_layout::Timestamp;
use gridcast_motion::{AnimatedScalar, FrameTime, Transition};

/// The camera's animation target.
///
/// The channel index and the two program bounds are animated independently.
/// Program bounds start out unset: until a program is focused only vertical
/// (channel) centering applies.
#[derive(Clone, Debug, PartialEq)]
pub struct FocusTarget {
    channel_index: usize,
    channel: AnimatedScalar,
    program: Option<ProgramBounds>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct ProgramBounds {
    start: Timestamp,
    end: Timestamp,
    animated_start: AnimatedScalar,
    animated_end: AnimatedScalar,
}

/// Focus values sampled at one frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FocusSample {
    /// Channel index, fractional while moving between rows.
    pub channel: f64,
    /// Program start and end in milliseconds, if a program has been focused.
    pub program: Option<(f64, f64)>,
}

impl FocusTarget {
    /// A target on channel `0` with no program.
    #[must_use]
    pub fn new() -> Self {
        Self {
            channel_index: 0,
            channel: AnimatedScalar::new(0.0),
            program: None,
        }
    }

    /// The channel index being moved towards.
    #[must_use]
    pub fn channel_index(&self) -> usize {
        self.channel_index
    }

    /// The program bounds being moved towards, if any.
    #[must_use]
    pub fn program(&self) -> Option<(Timestamp, Timestamp)> {
        self.program.map(|p| (p.start, p.end))
    }

    /// Moves the channel target, leaving program bounds untouched.
    pub fn retarget_channel(
        &mut self,
        channel_index: usize,
        now: FrameTime,
        transition: Transition,
    ) {
        self.channel_index = channel_index;
        self.channel.retarget(channel_index as f64, now, transition);
    }

    /// Moves all three targets.
    ///
    /// The first program ever focused is adopted without a horizontal
    /// transition, since there is no previous horizontal position to move from.
    pub fn retarget(
        &mut self,
        channel_index: usize,
        start: Timestamp,
        end: Timestamp,
        now: FrameTime,
        transition: Transition,
    ) {
        self.retarget_channel(channel_index, now, transition);
        match &mut self.program {
            Some(bounds) => {
                bounds.start = start;
                bounds.end = end;
                bounds.animated_start.retarget(start as f64, now, transition);
                bounds.animated_end.retarget(end as f64, now, transition);
            }
            None => {
                self.program = Some(ProgramBounds {
                    start,
                    end,
                    animated_start: AnimatedScalar::new(start as f64),
                    animated_end: AnimatedScalar::new(end as f64),
                });
            }
        }
    }

    /// Interpolated values at `now`.
    #[must_use]
    pub fn sample(&self, now: FrameTime) -> FocusSample {
        FocusSample {
            channel: self.channel.value_at(now),
            program: self
                .program
                .map(|p| (p.animated_start.value_at(now), p.animated_end.value_at(now))),
        }
    }

    /// Values once every transition has completed.
    #[must_use]
    pub fn settled(&self) -> FocusSample {
        FocusSample {
            channel: self.channel.target(),
            program: self.program.map(|p| (p.start as f64, p.end as f64)),
        }
    }

    /// Returns `true` when no field is still moving at `now`.
    #[must_use]
    pub fn is_settled(&self, now: FrameTime) -> bool {
        self.channel.is_settled(now)
            && self.program.is_none_or(|p| {
                p.animated_start.is_settled(now) && p.animated_end.is_settled(now)
            })
    }
}

impl Default for FocusTarget {
    fn default() -> Self {
        Self::new()
    }
}
