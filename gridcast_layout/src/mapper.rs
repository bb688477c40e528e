// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between guide coordinates (time, channel index) and pixels.
//!
//! Horizontal positions are always relative to an `origin` timestamp that is
//! fixed for the lifetime of a guide, so layout stays stable across frames.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Milliseconds since the Unix epoch.
pub type Timestamp = i64;

/// Milliseconds in one minute.
pub const MINUTE_MS: Timestamp = 60_000;

/// Milliseconds in one hour.
pub const HOUR_MS: Timestamp = 60 * MINUTE_MS;

/// Truncates `now` to the start of its hour.
///
/// Guides anchor their horizontal axis at this value when they are built.
///
/// ```rust
/// use gridcast_layout::{HOUR_MS, hour_origin};
///
/// let now = 5 * HOUR_MS + 1_234;
/// assert_eq!(hour_origin(now), 5 * HOUR_MS);
/// ```
#[must_use]
pub fn hour_origin(now: Timestamp) -> Timestamp {
    now.div_euclid(HOUR_MS) * HOUR_MS
}

/// Maps a point in time to an X coordinate relative to `origin`.
///
/// `t` is taken as `f64` so that interpolated (animated) timestamps can be
/// mapped directly.
#[must_use]
pub fn time_to_x(t: f64, origin: Timestamp, minute_width: f64) -> f64 {
    (t - origin as f64) / MINUTE_MS as f64 * minute_width
}

/// Inverse of [`time_to_x`].
///
/// A non-positive `minute_width` has no inverse; `origin` is returned.
#[must_use]
pub fn x_to_time(x: f64, origin: Timestamp, minute_width: f64) -> f64 {
    if minute_width <= 0.0 || !minute_width.is_finite() {
        return origin as f64;
    }
    origin as f64 + x / minute_width * MINUTE_MS as f64
}

/// Width in pixels of the interval `start..end`.
///
/// Reversed intervals produce negative widths; callers that ingest untrusted
/// data are expected to have rejected those already.
#[must_use]
pub fn duration_to_width(start: f64, end: f64, minute_width: f64) -> f64 {
    (end - start) / MINUTE_MS as f64 * minute_width
}

/// Top edge of the row at `index`.
#[must_use]
pub fn channel_to_y(index: f64, row_height: f64, row_spacing: f64) -> f64 {
    index * (row_height + row_spacing)
}

/// Row index whose stride contains `y`, if any.
///
/// Points in the spacing below a row resolve to that row. Returns `None` for
/// negative or non-finite `y` and for a degenerate stride.
#[must_use]
pub fn y_to_channel(y: f64, row_height: f64, row_spacing: f64) -> Option<usize> {
    let stride = row_height + row_spacing;
    if stride.is_nan() || stride <= 0.0 || !y.is_finite() || y < 0.0 {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "row is a non-negative whole number; `as` saturates on overflow"
    )]
    let row = (y / stride).floor() as usize;
    Some(row)
}
