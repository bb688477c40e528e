// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridcast Layout: pure coordinate mapping and row windowing for program guides.
//!
//! A program guide is a grid of channels (rows) by time (columns). This crate
//! holds the parts of a guide that are plain arithmetic:
//!
//! - [`time_to_x`], [`duration_to_width`], [`channel_to_y`] and their inverses:
//!   conversions between timestamps / channel indices and pixel positions.
//! - [`DeviceScale`] and [`GridMetrics`]: a diagonal-preserving scale factor that
//!   turns design-space constants into device pixels, rounded to whole pixels.
//! - [`GridGeometry`]: the mapper bundled for a single guide, producing row
//!   spans and program cell rectangles.
//! - [`VisibleRange`], [`row_capacity`], [`default_range`] and [`focus_range`]:
//!   the windowing rules that decide which rows are rendered at full detail.
//!
//! Nothing here is stateful. Animated cameras and focus handling live in
//! higher-level crates built on top of this one.
//!
//! ## Minimal example
//!
//! ```rust
//! use gridcast_layout::{GridGeometry, GridMetrics, MINUTE_MS, focus_range, row_capacity};
//!
//! let metrics = GridMetrics::new(5.0, 100.0, 5.0);
//! let origin = 1_709_114_400_000;
//! let geometry = GridGeometry::new(metrics, origin, 10);
//!
//! // A half-hour program starting at the origin is 150px wide.
//! let span = geometry.program_span(origin, origin + 30 * MINUTE_MS);
//! assert_eq!(span.end - span.start, 150.0);
//!
//! // A 600px tall viewport fits six 105px rows, plus one for bleed.
//! let capacity = row_capacity(600.0, metrics.row_stride());
//! assert_eq!(capacity, 7);
//!
//! let range = focus_range(5, capacity);
//! assert!(range.contains(5));
//! ```
//!
//! All pixel values are `f64`; timestamps are milliseconds since the Unix epoch.
//! This crate is `no_std`.

#![no_std]

mod geometry;
mod mapper;
mod scale;
mod window;

pub use geometry::GridGeometry;
pub use mapper::{
    HOUR_MS, MINUTE_MS, Timestamp, channel_to_y, duration_to_width, hour_origin, time_to_x,
    x_to_time, y_to_channel,
};
pub use scale::{DeviceScale, GridMetrics, scale_factor};
pub use window::{VisibleRange, default_range, focus_range, row_capacity, visible_range};
