// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use gridcast_camera::Transform;
use gridcast_layout::VisibleRange;
use kurbo::Rect;

use crate::GuideConfig;

/// How much of a row the renderer should draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowDetail {
    /// Every program cell.
    Full,
    /// A lightweight stand-in of the same height.
    Placeholder,
}

/// Whether a row falls inside the visible range.
///
/// Rows outside the range stay mounted as placeholders so that scrolling never
/// changes the content height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RowVisibility {
    /// `true` if the row is inside the visible range.
    pub in_view: bool,
}

impl RowVisibility {
    /// Level of detail for the row.
    #[must_use]
    pub fn detail(self) -> RowDetail {
        if self.in_view {
            RowDetail::Full
        } else {
            RowDetail::Placeholder
        }
    }

    /// Opacity for the row under `config`.
    #[must_use]
    pub fn opacity(self, config: &GuideConfig) -> f64 {
        if self.in_view {
            1.0
        } else {
            config.out_of_view_opacity
        }
    }
}

/// Per-row state in a [`GuideFrame`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowFrame {
    /// Channel position.
    pub index: usize,
    /// Visibility of the row.
    pub visibility: RowVisibility,
    /// Opacity the row should be drawn with.
    pub opacity: f64,
    /// Top edge of the row in grid coordinates, before the frame transform.
    pub top: f64,
}

/// A program cell ready to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellFrame {
    /// Channel position.
    pub channel_index: usize,
    /// Program position within the channel.
    pub program_index: usize,
    /// Content rectangle in grid coordinates, before the frame transform.
    pub rect: Rect,
    /// `true` for the cell holding focus.
    pub focused: bool,
}

/// Everything the renderer reads for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct GuideFrame {
    /// Grid translation for the frame.
    pub transform: Transform,
    /// Rows drawn at full detail.
    pub visible: VisibleRange,
    /// One entry per channel, in order.
    pub rows: Vec<RowFrame>,
    /// `true` while a focus transition is still running.
    pub animating: bool,
}

impl GuideFrame {
    /// Rows inside the visible range.
    pub fn rows_in_view(&self) -> impl Iterator<Item = &RowFrame> {
        self.rows.iter().filter(|row| row.visibility.in_view)
    }
}
