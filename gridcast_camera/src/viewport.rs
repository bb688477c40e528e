// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Size of the guide's visible area, as last reported by the layout pass.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct ViewportState {
    /// Visible height in pixels.
    pub height: f64,
    /// Visible width in pixels.
    pub width: f64,
}

impl ViewportState {
    /// Creates a viewport state. Negative or non-finite sizes become `0`.
    #[must_use]
    pub fn new(height: f64, width: f64) -> Self {
        Self {
            height: sanitize(height),
            width: sanitize(width),
        }
    }

    /// Returns the viewport as a [`Size`].
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl From<Size> for ViewportState {
    fn from(size: Size) -> Self {
        Self::new(size.height, size.width)
    }
}

fn sanitize(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}
