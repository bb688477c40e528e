// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use kurbo::Rect;

use crate::mapper::{
    Timestamp, channel_to_y, duration_to_width, time_to_x, x_to_time, y_to_channel,
};
use crate::scale::GridMetrics;

/// Coordinate mapping for one guide grid.
///
/// Bundles the [`GridMetrics`], the fixed time origin and the number of
/// channel rows so that hosts do not have to thread them through every call.
/// Content coordinates start at `(0, 0)` for the origin time on the first row;
/// camera translations are applied on top of these.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridGeometry {
    metrics: GridMetrics,
    origin: Timestamp,
    channel_count: usize,
}

impl GridGeometry {
    /// Creates a geometry for `channel_count` rows anchored at `origin`.
    #[must_use]
    pub const fn new(metrics: GridMetrics, origin: Timestamp, channel_count: usize) -> Self {
        Self {
            metrics,
            origin,
            channel_count,
        }
    }

    /// Returns the pixel metrics.
    #[must_use]
    pub fn metrics(&self) -> GridMetrics {
        self.metrics
    }

    /// Returns the time that maps to `x == 0`.
    #[must_use]
    pub fn origin(&self) -> Timestamp {
        self.origin
    }

    /// Returns the number of channel rows.
    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channel_count
    }

    /// X coordinate of a (possibly interpolated) point in time.
    #[must_use]
    pub fn time_x(&self, t: f64) -> f64 {
        time_to_x(t, self.origin, self.metrics.minute_width)
    }

    /// Point in time at content X coordinate `x`.
    #[must_use]
    pub fn time_at(&self, x: f64) -> f64 {
        x_to_time(x, self.origin, self.metrics.minute_width)
    }

    /// Y coordinate of the top of a (possibly fractional) row index.
    #[must_use]
    pub fn row_y(&self, index: f64) -> f64 {
        channel_to_y(index, self.metrics.row_height, self.metrics.row_spacing)
    }

    /// Vertical extent of row `index`, excluding the spacing below it.
    #[must_use]
    pub fn row_span(&self, index: usize) -> Range<f64> {
        let top = self.row_y(index as f64);
        top..top + self.metrics.row_height
    }

    /// Row at content Y coordinate `y`, if it names a real row.
    #[must_use]
    pub fn row_at(&self, y: f64) -> Option<usize> {
        y_to_channel(y, self.metrics.row_height, self.metrics.row_spacing)
            .filter(|&row| row < self.channel_count)
    }

    /// Horizontal extent of the interval `start..end`.
    #[must_use]
    pub fn program_span(&self, start: Timestamp, end: Timestamp) -> Range<f64> {
        let x = self.time_x(start as f64);
        let width = duration_to_width(start as f64, end as f64, self.metrics.minute_width);
        x..x + width
    }

    /// Outer rectangle of a program cell on row `channel_index`.
    ///
    /// Reversed intervals produce zero-width rectangles.
    #[must_use]
    pub fn cell_rect(&self, channel_index: usize, start: Timestamp, end: Timestamp) -> Rect {
        let x = self.program_span(start, end);
        let y = self.row_span(channel_index);
        Rect::new(x.start, y.start, x.end.max(x.start), y.end)
    }

    /// Cell rectangle inset by half the row spacing on each side.
    ///
    /// Neighbouring cells then show the same gap horizontally as rows do
    /// vertically.
    #[must_use]
    pub fn cell_content_rect(
        &self,
        channel_index: usize,
        start: Timestamp,
        end: Timestamp,
    ) -> Rect {
        let outer = self.cell_rect(channel_index, start, end);
        let pad = (self.metrics.row_spacing / 2.0).min(outer.width() / 2.0);
        Rect::new(outer.x0 + pad, outer.y0, outer.x1 - pad, outer.y1)
    }

    /// Total height of all rows, spacing included.
    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.row_y(self.channel_count as f64)
    }
}
