// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridcast Camera: the animated camera that keeps a focused guide cell centered.
//!
//! A [`CameraController`] owns three pieces of mutable state:
//!
//! - the [`ViewportState`] reported by the host's layout pass,
//! - the [`FocusTarget`] (channel index plus optional program bounds), each
//!   field animated independently with [`gridcast_motion::AnimatedScalar`],
//! - the [`VisibleRange`](gridcast_layout::VisibleRange) of rows to render at
//!   full detail.
//!
//! Every frame the host asks for [`CameraController::current_transform`] and
//! applies the resulting [`Transform`] to the scrollable grid container.
//!
//! ## Minimal example
//!
//! ```rust
//! use gridcast_camera::CameraController;
//! use gridcast_layout::{GridGeometry, GridMetrics, MINUTE_MS};
//! use gridcast_motion::{FrameTime, Transition};
//!
//! let origin = 1_709_114_400_000;
//! let geometry = GridGeometry::new(GridMetrics::new(5.0, 100.0, 5.0), origin, 10);
//! let mut camera = CameraController::new(geometry, Transition::default());
//! camera.set_viewport(600.0, 800.0);
//!
//! camera.focus(5, origin, origin + 30 * MINUTE_MS, FrameTime::from_millis(0));
//!
//! // Mid-transition values are interpolated; once settled row 5 is centered.
//! let settled = camera.current_transform(FrameTime::from_millis(1_000));
//! assert_eq!(settled.translate_y, -275.0);
//! assert_eq!(settled.translate_x, Some(325.0));
//! ```
//!
//! Vertical centering always applies. Horizontal centering only applies once a
//! program has been focused; until then [`Transform::translate_x`] is `None`
//! and hosts keep their previous horizontal offset.
//!
//! This crate is `no_std`.

#![no_std]

mod camera;
mod focus;
mod transform;
mod viewport;

pub use camera::CameraController;
pub use focus::{FocusSample, FocusTarget};
pub use transform::Transform;
pub use viewport::ViewportState;
