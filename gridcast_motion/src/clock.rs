// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Add;
use core::time::Duration;

/// A frame timestamp on the host's monotonic clock.
///
/// Only differences between frame times are meaningful; the epoch is whatever
/// the host chooses (app start, first frame, ...).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FrameTime(Duration);

impl FrameTime {
    /// The host clock's epoch.
    pub const ZERO: Self = Self(Duration::ZERO);

    /// Wraps a duration since the host epoch.
    #[must_use]
    pub const fn from_duration(since_epoch: Duration) -> Self {
        Self(since_epoch)
    }

    /// Frame time `millis` milliseconds after the host epoch.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    /// Returns the duration since the host epoch.
    #[must_use]
    pub const fn as_duration(self) -> Duration {
        self.0
    }

    /// Time elapsed since `earlier`, or zero if `earlier` is in the future.
    #[must_use]
    pub fn saturating_since(self, earlier: Self) -> Duration {
        self.0.saturating_sub(earlier.0)
    }
}

impl Add<Duration> for FrameTime {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Self(self.0.saturating_add(rhs))
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::FrameTime;

    #[test]
    fn since_saturates_when_clock_runs_backwards() {
        let a = FrameTime::from_millis(100);
        let b = FrameTime::from_millis(40);
        assert_eq!(a.saturating_since(b), Duration::from_millis(60));
        assert_eq!(b.saturating_since(a), Duration::ZERO);
    }

    #[test]
    fn add_advances_frames() {
        let t = FrameTime::ZERO + Duration::from_millis(16);
        assert_eq!(t, FrameTime::from_millis(16));
        assert_eq!(t.as_duration(), Duration::from_millis(16));
    }
}
