// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gridcast_layout::{
    GridGeometry, Timestamp, VisibleRange, default_range, duration_to_width, focus_range,
    row_capacity,
};
use gridcast_motion::{FrameTime, Transition};

use crate::{FocusSample, FocusTarget, Transform, ViewportState};

/// Keeps the focused guide cell centered in the viewport.
///
/// The controller reacts to two kinds of events:
///
/// - [`CameraController::set_viewport`] from the host's layout pass,
/// - [`CameraController::focus`] from the input layer,
///
/// and derives a [`Transform`] for any frame time. Both events also update the
/// [`VisibleRange`] of rows to render at full detail. Focus changes update the
/// window from the *target* channel immediately, so the window leads the
/// scroll animation rather than trailing it.
///
/// Resize and focus events commute: whichever order they arrive in, the
/// settled transform is the same.
#[derive(Clone, Debug)]
pub struct CameraController {
    geometry: GridGeometry,
    viewport: ViewportState,
    focus: FocusTarget,
    has_focus: bool,
    visible: VisibleRange,
    transition: Transition,
}

impl CameraController {
    /// Creates a camera over `geometry` with an empty viewport.
    ///
    /// Nothing is in view until the first [`CameraController::set_viewport`].
    #[must_use]
    pub fn new(geometry: GridGeometry, transition: Transition) -> Self {
        Self {
            geometry,
            viewport: ViewportState::default(),
            focus: FocusTarget::new(),
            has_focus: false,
            visible: VisibleRange::new(0, 0),
            transition,
        }
    }

    /// Returns the grid geometry.
    #[must_use]
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Returns the last reported viewport.
    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    /// Returns the focus target.
    #[must_use]
    pub fn focus_target(&self) -> &FocusTarget {
        &self.focus
    }

    /// Returns `true` once any focus event has been received.
    #[must_use]
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Returns the rows currently considered in view.
    #[must_use]
    pub fn visible_range(&self) -> VisibleRange {
        self.visible
    }

    /// Returns the transition used for focus changes.
    #[must_use]
    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Replaces the transition used by subsequent focus changes.
    pub fn set_transition(&mut self, transition: Transition) {
        self.transition = transition;
    }

    /// Records a new viewport size.
    ///
    /// Before the first focus the window resets to the top-anchored default;
    /// afterwards it is recomputed around the focused row. Returns `false`
    /// (and changes nothing) when the size is unchanged.
    pub fn set_viewport(&mut self, height: f64, width: f64) -> bool {
        let viewport = ViewportState::new(height, width);
        if viewport == self.viewport {
            return false;
        }
        self.viewport = viewport;
        self.update_window();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            height = viewport.height,
            width = viewport.width,
            min = self.visible.min,
            max = self.visible.max,
            "viewport changed"
        );
        true
    }

    /// Starts centering on the program `start..end` of row `channel_index`.
    ///
    /// In-flight transitions are retargeted from their current values.
    pub fn focus(
        &mut self,
        channel_index: usize,
        start: Timestamp,
        end: Timestamp,
        now: FrameTime,
    ) {
        self.focus.retarget(channel_index, start, end, now, self.transition);
        self.has_focus = true;
        self.update_window();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            channel_index,
            start,
            end,
            min = self.visible.min,
            max = self.visible.max,
            "camera focus"
        );
    }

    /// Starts centering on row `channel_index` without touching the program target.
    pub fn focus_channel(&mut self, channel_index: usize, now: FrameTime) {
        self.focus.retarget_channel(channel_index, now, self.transition);
        self.has_focus = true;
        self.update_window();
        #[cfg(feature = "tracing")]
        tracing::debug!(channel_index, "camera focus channel");
    }

    /// Transform for the frame at `now`, from the interpolated focus values.
    #[must_use]
    pub fn current_transform(&self, now: FrameTime) -> Transform {
        self.transform_for(self.focus.sample(now))
    }

    /// Transform once every focus transition has completed.
    #[must_use]
    pub fn settled_transform(&self) -> Transform {
        self.transform_for(self.focus.settled())
    }

    /// Returns `true` while any focus transition is still running at `now`.
    #[must_use]
    pub fn is_animating(&self, now: FrameTime) -> bool {
        !self.focus.is_settled(now)
    }

    fn update_window(&mut self) {
        let capacity = row_capacity(self.viewport.height, self.geometry.metrics().row_stride());
        self.visible = if self.has_focus {
            focus_range(self.focus.channel_index(), capacity)
        } else {
            default_range(capacity)
        };
    }

    fn transform_for(&self, sample: FocusSample) -> Transform {
        let metrics = self.geometry.metrics();
        let height = self.viewport.height;
        let width = self.viewport.width;

        let centered_y =
            -self.geometry.row_y(sample.channel) + height / 2.0 - metrics.row_height / 2.0;
        // Content shorter than the viewport stays top-anchored.
        let lowest = (height - self.geometry.content_height()).min(0.0);
        let translate_y = centered_y.max(lowest).min(0.0);

        let translate_x = sample.program.map(|(start, end)| {
            let mid = self.geometry.time_x(start)
                + duration_to_width(start, end, metrics.minute_width) / 2.0;
            width / 2.0 - mid
        });

        Transform {
            translate_y,
            translate_x,
        }
    }
}
