// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use gridcast_camera::{CameraController, Transform};
use gridcast_layout::{GridGeometry, Timestamp, VisibleRange, hour_origin};
use gridcast_motion::FrameTime;
use kurbo::Rect;

use crate::{CellFrame, GuideConfig, GuideData, GuideFrame, Program, RowFrame, RowVisibility};

/// The program cell holding focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FocusedCell {
    /// Channel position.
    pub channel_index: usize,
    /// Start of the focused program.
    pub start: Timestamp,
    /// End of the focused program.
    pub end: Timestamp,
}

/// Owns a guide and answers the renderer's per-frame questions.
///
/// Layout and focus events go in; a [`Transform`] and per-row
/// [`RowVisibility`] come out. Every method is total: out-of-range indices
/// produce "not in view" or `None`, never a panic.
#[derive(Clone, Debug)]
pub struct GuideController {
    data: GuideData,
    config: GuideConfig,
    camera: CameraController,
    focused: Option<FocusedCell>,
}

impl GuideController {
    /// Creates a controller whose time axis starts at `origin`.
    #[must_use]
    pub fn new(data: GuideData, config: GuideConfig, origin: Timestamp) -> Self {
        let geometry = GridGeometry::new(config.metrics(), origin, data.len());
        let camera = CameraController::new(geometry, config.transition());
        Self {
            data,
            config,
            camera,
            focused: None,
        }
    }

    /// Creates a controller whose time axis starts at the top of the hour
    /// containing `now`.
    #[must_use]
    pub fn anchored_at(data: GuideData, config: GuideConfig, now: Timestamp) -> Self {
        Self::new(data, config, hour_origin(now))
    }

    /// Returns the guide data.
    #[must_use]
    pub fn data(&self) -> &GuideData {
        &self.data
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GuideConfig {
        &self.config
    }

    /// Returns the grid geometry in device pixels.
    #[must_use]
    pub fn geometry(&self) -> &GridGeometry {
        self.camera.geometry()
    }

    /// Returns the camera.
    #[must_use]
    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// Reports the container size. Returns `true` if it changed.
    pub fn on_layout(&mut self, height: f64, width: f64) -> bool {
        self.camera.set_viewport(height, width)
    }

    /// Reports that the cell `start..end` on row `channel_index` gained focus.
    pub fn on_focus(
        &mut self,
        channel_index: usize,
        start: Timestamp,
        end: Timestamp,
        now: FrameTime,
    ) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("on_focus", channel_index, start, end).entered();
        self.focused = Some(FocusedCell {
            channel_index,
            start,
            end,
        });
        self.camera.focus(channel_index, start, end, now);
    }

    /// Focuses program `program_index` of channel `channel_index`.
    ///
    /// Returns `None` and changes nothing if no such program exists.
    pub fn focus_program(
        &mut self,
        channel_index: usize,
        program_index: usize,
        now: FrameTime,
    ) -> Option<FocusedCell> {
        let Some(program) = self.data.program(channel_index, program_index) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(channel_index, program_index, "focus on missing program ignored");
            return None;
        };
        let (start, end) = (program.start, program.end);
        self.on_focus(channel_index, start, end, now);
        self.focused
    }

    /// Reports that the focused cell lost focus.
    ///
    /// Only the highlight is cleared; the camera stays on its last target.
    pub fn on_blur(&mut self) {
        #[cfg(feature = "tracing")]
        if let Some(cell) = self.focused {
            tracing::trace!(channel_index = cell.channel_index, start = cell.start, "blur");
        }
        self.focused = None;
    }

    /// Returns the focused cell, if any.
    #[must_use]
    pub fn focused_cell(&self) -> Option<FocusedCell> {
        self.focused
    }

    /// Returns `true` if `program` on row `channel_index` holds focus.
    #[must_use]
    pub fn is_focused(&self, channel_index: usize, program: &Program) -> bool {
        self.focused.is_some_and(|cell| {
            cell.channel_index == channel_index
                && cell.start == program.start
                && cell.end == program.end
        })
    }

    /// Grid transform for the frame at `now`.
    #[must_use]
    pub fn transform(&self, now: FrameTime) -> Transform {
        self.camera.current_transform(now)
    }

    /// Returns `true` while a focus transition is running at `now`.
    #[must_use]
    pub fn is_animating(&self, now: FrameTime) -> bool {
        self.camera.is_animating(now)
    }

    /// Rows drawn at full detail.
    #[must_use]
    pub fn visible_range(&self) -> VisibleRange {
        self.camera.visible_range()
    }

    /// Visibility of row `index`.
    #[must_use]
    pub fn row_visibility(&self, index: usize) -> RowVisibility {
        RowVisibility {
            in_view: self.visible_range().contains(index),
        }
    }

    /// Outer rectangle of a program cell in grid coordinates.
    #[must_use]
    pub fn cell_rect(&self, channel_index: usize, program_index: usize) -> Option<Rect> {
        let program = self.data.program(channel_index, program_index)?;
        Some(self.geometry().cell_rect(channel_index, program.start, program.end))
    }

    /// Program cells of every in-view row, row by row.
    #[must_use]
    pub fn visible_cells(&self) -> Vec<CellFrame> {
        let geometry = self.geometry();
        let mut cells = Vec::new();
        for channel_index in self.visible_range().clamped_to(self.data.len()) {
            let Some(channel) = self.data.channel(channel_index) else {
                continue;
            };
            cells.extend(channel.programs.iter().enumerate().map(|(program_index, p)| {
                CellFrame {
                    channel_index,
                    program_index,
                    rect: geometry.cell_content_rect(channel_index, p.start, p.end),
                    focused: self.is_focused(channel_index, p),
                }
            }));
        }
        cells
    }

    /// Snapshot of everything the renderer needs at `now`.
    #[must_use]
    pub fn frame(&self, now: FrameTime) -> GuideFrame {
        let geometry = self.geometry();
        let rows = (0..self.data.len())
            .map(|index| {
                let visibility = self.row_visibility(index);
                RowFrame {
                    index,
                    visibility,
                    opacity: visibility.opacity(&self.config),
                    top: geometry.row_y(index as f64),
                }
            })
            .collect();
        GuideFrame {
            transform: self.transform(now),
            visible: self.visible_range(),
            rows,
            animating: self.is_animating(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::vec::Vec;

    use super::GuideController;
    use crate::{ChannelBuilder, GuideConfig, GuideData, MINUTE_MS, ValidationPolicy};
    use gridcast_layout::{HOUR_MS, Timestamp};
    use gridcast_motion::FrameTime;

    const T0: Timestamp = 1_709_114_400_000;

    fn guide(channels: usize) -> GuideController {
        let channels = (0..channels)
            .map(|i| {
                ChannelBuilder::new(format!("Channel {}", i + 1), T0)
                    .program("A", 30 * MINUTE_MS)
                    .program("B", 60 * MINUTE_MS)
                    .build()
            })
            .collect();
        let data = GuideData::new(channels, ValidationPolicy::Strict).unwrap();
        GuideController::new(data, GuideConfig::default(), T0)
    }

    fn ms(v: u64) -> FrameTime {
        FrameTime::from_millis(v)
    }

    #[test]
    fn only_first_row_in_view_before_layout() {
        let guide = guide(5);
        assert!(guide.row_visibility(0).in_view);
        assert!(!guide.row_visibility(1).in_view);
    }

    #[test]
    fn layout_before_focus_uses_top_window() {
        let mut guide = guide(30);
        assert!(guide.on_layout(600.0, 800.0));
        assert!(!guide.on_layout(600.0, 800.0));
        let range = guide.visible_range();
        assert_eq!((range.min, range.max), (0, 7));
        assert_eq!(guide.transform(ms(0)).translate_y, 0.0);
        assert_eq!(guide.transform(ms(0)).translate_x, None);
    }

    #[test]
    fn focus_program_tracks_highlight() {
        let mut guide = guide(10);
        guide.on_layout(600.0, 800.0);
        let cell = guide.focus_program(3, 1, ms(0)).unwrap();
        assert_eq!(cell.channel_index, 3);
        assert_eq!(cell.start, T0 + 30 * MINUTE_MS);

        let program = guide.data().program(3, 1).unwrap().clone();
        assert!(guide.is_focused(3, &program));
        assert!(!guide.is_focused(2, &program));

        guide.on_blur();
        assert_eq!(guide.focused_cell(), None);
        assert!(!guide.is_focused(3, &program));
        // The camera keeps its target.
        assert_eq!(guide.camera().focus_target().channel_index(), 3);
    }

    #[test]
    fn missing_program_is_ignored() {
        let mut guide = guide(4);
        guide.on_layout(600.0, 800.0);
        assert!(guide.focus_program(4, 0, ms(0)).is_none());
        assert!(guide.focus_program(0, 2, ms(0)).is_none());
        assert_eq!(guide.focused_cell(), None);
        assert!(!guide.camera().has_focus());
    }

    #[test]
    fn frame_reports_every_row() {
        let mut guide = guide(40);
        guide.on_layout(600.0, 800.0);
        guide.focus_program(20, 0, ms(0));
        let frame = guide.frame(ms(100));
        assert_eq!(frame.rows.len(), 40);
        assert!(frame.animating);
        let in_view: Vec<usize> = frame.rows_in_view().map(|r| r.index).collect();
        assert_eq!(in_view, (17..=24).collect::<Vec<_>>());
        assert_eq!(frame.rows[0].opacity, 0.2);
        assert_eq!(frame.rows[20].opacity, 1.0);
        assert_eq!(frame.rows[3].top, 315.0);
        assert!(!guide.frame(ms(250)).animating);
    }

    #[test]
    fn visible_cells_cover_in_view_rows() {
        let mut guide = guide(40);
        guide.on_layout(600.0, 800.0);
        guide.focus_program(20, 1, ms(0));
        let cells = guide.visible_cells();
        assert_eq!(cells.len(), 8 * 2);
        let focused: Vec<_> = cells.iter().filter(|c| c.focused).collect();
        assert_eq!(focused.len(), 1);
        assert_eq!((focused[0].channel_index, focused[0].program_index), (20, 1));
        // 30 minutes at 5 px, inset by 2.5 px on either side.
        assert_eq!(focused[0].rect.x0, 152.5);
        assert_eq!(focused[0].rect.x1, 447.5);
    }

    #[test]
    fn cell_rect_follows_time_axis() {
        let guide = guide(2);
        let rect = guide.cell_rect(1, 1).unwrap();
        assert_eq!((rect.x0, rect.x1), (150.0, 450.0));
        assert_eq!((rect.y0, rect.y1), (105.0, 205.0));
        assert!(guide.cell_rect(2, 0).is_none());
    }

    #[test]
    fn anchored_at_truncates_to_hour() {
        let data = GuideData::new(Vec::new(), ValidationPolicy::Strict).unwrap();
        let guide = GuideController::anchored_at(data, GuideConfig::default(), T0 + HOUR_MS / 2);
        assert_eq!(guide.geometry().origin(), T0);
    }
}
