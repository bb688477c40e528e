// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Vec2};

/// Translation applied to the whole guide grid for one frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform {
    /// Vertical offset. Always present.
    pub translate_y: f64,
    /// Horizontal offset, once a program has been focused.
    ///
    /// `None` means "leave the horizontal offset where it was", not zero.
    pub translate_x: Option<f64>,
}

impl Transform {
    /// Resolves the offset, keeping `prior_x` when no horizontal term is set.
    #[must_use]
    pub fn offset(&self, prior_x: f64) -> Vec2 {
        Vec2::new(self.translate_x.unwrap_or(prior_x), self.translate_y)
    }

    /// Resolves the transform into an affine translation.
    #[must_use]
    pub fn to_affine(&self, prior_x: f64) -> Affine {
        Affine::translate(self.offset(prior_x))
    }
}
