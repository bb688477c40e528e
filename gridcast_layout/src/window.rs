// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row windowing: which channel rows are rendered at full detail.
//!
//! Rows outside the window stay mounted; hosts render them as cheap
//! placeholders. The window is never clamped to the channel count, so a
//! [`VisibleRange`] may start below zero or extend past the last row. Those
//! indices simply never match in [`VisibleRange::contains`].

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Inclusive range of row indices considered in view.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct VisibleRange {
    /// First row in view. May be negative near the top of the grid.
    pub min: i64,
    /// Last row in view. May exceed the last channel index.
    pub max: i64,
}

impl VisibleRange {
    /// Creates a range covering `min..=max`.
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Returns `true` when row `index` lies within `min..=max`.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        i64::try_from(index).is_ok_and(|i| self.min <= i && i <= self.max)
    }

    /// Number of row slots covered, including ones outside the grid.
    #[must_use]
    pub fn span(&self) -> i64 {
        self.max.saturating_sub(self.min)
    }

    /// The part of this range that names real rows of a `len`-row grid.
    ///
    /// Returns an empty range when the window does not overlap the grid.
    #[must_use]
    pub fn clamped_to(&self, len: usize) -> core::ops::Range<usize> {
        let last = i64::try_from(len).unwrap_or(i64::MAX);
        let start = self.min.clamp(0, last);
        let end = self.max.saturating_add(1).clamp(start, last);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "bounds were clamped to `0..=len`, which fits in usize"
        )]
        let (start, end) = (start as usize, end as usize);
        start..end
    }
}

/// Number of rows to keep in view for a viewport of `viewport_height`.
///
/// `ceil(viewport_height / row_stride) + 1`: the rows that physically fit plus
/// one for a partially visible row. Non-finite or non-positive heights, and a
/// non-positive stride, count as zero fitting rows.
#[must_use]
pub fn row_capacity(viewport_height: f64, row_stride: f64) -> i64 {
    if !viewport_height.is_finite()
        || viewport_height <= 0.0
        || row_stride.is_nan()
        || row_stride <= 0.0
    {
        return 1;
    }
    let fitting = (viewport_height / row_stride).ceil();
    #[expect(
        clippy::cast_possible_truncation,
        reason = "a whole, non-negative row count; `as` saturates on overflow"
    )]
    let fitting = fitting as i64;
    fitting.saturating_add(1)
}

/// Top-anchored window used before anything has been focused.
#[must_use]
pub fn default_range(capacity: i64) -> VisibleRange {
    VisibleRange::new(0, capacity)
}

/// Window centered on `channel_index`.
///
/// `[ceil(c - capacity / 2), max(capacity, ceil(c + capacity / 2))]`. The `max`
/// keeps the window from collapsing when focus is near the top.
#[must_use]
pub fn focus_range(channel_index: usize, capacity: i64) -> VisibleRange {
    let c = i64::try_from(channel_index).unwrap_or(i64::MAX);
    let capacity = capacity.max(0);
    // For integers, ceil(c - k/2) == c - floor(k/2) and ceil(c + k/2) == c + ceil(k/2).
    let min = c.saturating_sub(capacity / 2);
    let max = c.saturating_add(capacity - capacity / 2).max(capacity);
    VisibleRange::new(min, max)
}

/// Convenience wrapper over [`row_capacity`], [`default_range`] and [`focus_range`].
#[must_use]
pub fn visible_range(viewport_height: f64, row_stride: f64, focus: Option<usize>) -> VisibleRange {
    let capacity = row_capacity(viewport_height, row_stride);
    match focus {
        Some(channel_index) => focus_range(channel_index, capacity),
        None => default_range(capacity),
    }
}
