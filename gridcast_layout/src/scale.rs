// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Size;

/// Diagonal-preserving ratio between a device resolution and a design resolution.
///
/// `sqrt(device_h² + device_w²) / sqrt(design_h² + design_w²)`. A degenerate
/// (zero or non-finite) design diagonal yields `1.0`.
#[must_use]
pub fn scale_factor(
    device_height: f64,
    device_width: f64,
    design_height: f64,
    design_width: f64,
) -> f64 {
    let design = (design_height * design_height + design_width * design_width).sqrt();
    if !design.is_finite() || design <= 0.0 {
        return 1.0;
    }
    (device_height * device_height + device_width * device_width).sqrt() / design
}

/// Uniform scale applied to every design-space pixel constant.
///
/// Scaled sizes are rounded to whole pixels so that adjacent cells never leave
/// sub-pixel seams between them.
///
/// ```rust
/// use gridcast_layout::DeviceScale;
/// use kurbo::Size;
///
/// // A 1280x720 device against a 1920x1080 design.
/// let device = Size::new(1280.0, 720.0);
/// let design = Size::new(1920.0, 1080.0);
/// let scale = DeviceScale::from_resolutions(device, design);
/// assert_eq!(scale.px(100.0), 67.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DeviceScale(f64);

impl DeviceScale {
    /// The identity scale: design pixels are device pixels.
    pub const IDENTITY: Self = Self(1.0);

    /// Wraps a raw ratio. Non-finite or negative ratios fall back to identity.
    #[must_use]
    pub fn new(ratio: f64) -> Self {
        if ratio.is_finite() && ratio >= 0.0 {
            Self(ratio)
        } else {
            Self::IDENTITY
        }
    }

    /// Computes the scale between a device and a design resolution.
    #[must_use]
    pub fn from_resolutions(device: Size, design: Size) -> Self {
        Self::new(scale_factor(device.height, device.width, design.height, design.width))
    }

    /// Returns the raw ratio.
    #[must_use]
    pub fn ratio(self) -> f64 {
        self.0
    }

    /// Scales a design-space size and rounds it to the nearest device pixel.
    #[must_use]
    pub fn px(self, design_size: f64) -> f64 {
        (self.0 * design_size).round()
    }
}

impl Default for DeviceScale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Pixel constants of a guide grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridMetrics {
    /// Width of one minute of airtime.
    pub minute_width: f64,
    /// Height of a channel row.
    pub row_height: f64,
    /// Vertical gap between adjacent rows.
    pub row_spacing: f64,
}

impl GridMetrics {
    /// Creates metrics from already-scaled pixel values.
    #[must_use]
    pub const fn new(minute_width: f64, row_height: f64, row_spacing: f64) -> Self {
        Self {
            minute_width,
            row_height,
            row_spacing,
        }
    }

    /// Scales design-space metrics to device pixels, rounding each constant.
    #[must_use]
    pub fn scaled(design: Self, scale: DeviceScale) -> Self {
        Self {
            minute_width: scale.px(design.minute_width),
            row_height: scale.px(design.row_height),
            row_spacing: scale.px(design.row_spacing),
        }
    }

    /// Distance between the tops of two adjacent rows.
    #[must_use]
    pub fn row_stride(&self) -> f64 {
        self.row_height + self.row_spacing
    }
}
