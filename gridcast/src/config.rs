// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use gridcast_layout::{DeviceScale, GridMetrics};
use gridcast_motion::{Easing, Transition};
use kurbo::Size;

/// A screen resolution in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Resolution {
    /// 1920x1080, the resolution guide metrics are authored against.
    pub const FULL_HD: Self = Self::new(1920.0, 1080.0);

    /// Creates a resolution.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the resolution as a `kurbo::Size`.
    #[must_use]
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::FULL_HD
    }
}

/// Guide configuration.
///
/// Sizes are given in *design* pixels for [`GuideConfig::design_resolution`]
/// and scaled to the device by the ratio of the two screen diagonals, with
/// each derived constant rounded to a whole pixel.
///
/// ```rust
/// use gridcast::{GuideConfig, Resolution};
///
/// let config = GuideConfig::default().with_device_resolution(Resolution::new(3840.0, 2160.0));
/// let metrics = config.metrics();
/// assert_eq!(metrics.row_height, 200.0);
/// assert_eq!(metrics.row_stride(), 210.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GuideConfig {
    /// Resolution the design-pixel sizes refer to.
    pub design_resolution: Resolution,
    /// Resolution of the device the guide renders on.
    pub device_resolution: Resolution,
    /// Width of one minute of airtime, in design pixels.
    pub minute_width: f64,
    /// Height of a channel row, in design pixels.
    pub row_height: f64,
    /// Gap between channel rows, in design pixels.
    pub row_spacing: f64,
    /// Duration of focus transitions, in milliseconds.
    pub transition_ms: u64,
    /// Easing of focus transitions.
    pub easing: Easing,
    /// Opacity of rows outside the visible range.
    pub out_of_view_opacity: f64,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            design_resolution: Resolution::FULL_HD,
            device_resolution: Resolution::FULL_HD,
            minute_width: 5.0,
            row_height: 100.0,
            row_spacing: 5.0,
            transition_ms: 250,
            easing: Easing::EaseInOut,
            out_of_view_opacity: 0.2,
        }
    }
}

impl GuideConfig {
    /// Sets the device resolution.
    #[must_use]
    pub fn with_device_resolution(mut self, resolution: Resolution) -> Self {
        self.device_resolution = resolution;
        self
    }

    /// Sets the design resolution.
    #[must_use]
    pub fn with_design_resolution(mut self, resolution: Resolution) -> Self {
        self.design_resolution = resolution;
        self
    }

    /// Sets the design-pixel grid sizes.
    #[must_use]
    pub fn with_grid(mut self, minute_width: f64, row_height: f64, row_spacing: f64) -> Self {
        self.minute_width = minute_width;
        self.row_height = row_height;
        self.row_spacing = row_spacing;
        self
    }

    /// Sets the focus transition duration.
    #[must_use]
    pub fn with_transition_duration(mut self, duration: Duration) -> Self {
        self.transition_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Sets the focus transition easing.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Sets the opacity of out-of-view rows. Clamped to `0.0..=1.0`.
    #[must_use]
    pub fn with_out_of_view_opacity(mut self, opacity: f64) -> Self {
        self.out_of_view_opacity = if opacity.is_nan() {
            0.0
        } else {
            opacity.max(0.0).min(1.0)
        };
        self
    }

    /// Device-to-design scale.
    #[must_use]
    pub fn scale(&self) -> DeviceScale {
        DeviceScale::from_resolutions(self.device_resolution.size(), self.design_resolution.size())
    }

    /// Grid metrics in device pixels.
    #[must_use]
    pub fn metrics(&self) -> GridMetrics {
        let design = GridMetrics::new(self.minute_width, self.row_height, self.row_spacing);
        GridMetrics::scaled(design, self.scale())
    }

    /// Focus transition.
    #[must_use]
    pub fn transition(&self) -> Transition {
        Transition::new(Duration::from_millis(self.transition_ms)).with_easing(self.easing)
    }
}
