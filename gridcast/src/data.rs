// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use gridcast_layout::Timestamp;

use crate::{Channel, GuideDataError, Program};

/// How [`GuideData::new`] treats malformed schedules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ValidationPolicy {
    /// Reject any program that does not end after it starts, and any gap or
    /// overlap between neighbouring programs.
    #[default]
    Strict,
    /// Accept the data, collapsing inverted programs to zero width
    /// (`end = start`) and keeping gaps and overlaps as they are.
    Clamp,
}

/// Validated, immutable channel data for one guide.
///
/// The channel order is fixed at construction; channels are never reordered,
/// added or removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuideData {
    channels: Vec<Channel>,
}

impl GuideData {
    /// Validates `channels` under `policy`.
    ///
    /// # Errors
    ///
    /// With [`ValidationPolicy::Strict`], returns the first
    /// [`GuideDataError`] found, scanning channels and programs in order.
    /// [`ValidationPolicy::Clamp`] never fails.
    pub fn new(
        mut channels: Vec<Channel>,
        policy: ValidationPolicy,
    ) -> Result<Self, GuideDataError> {
        for (channel_index, channel) in channels.iter_mut().enumerate() {
            match policy {
                ValidationPolicy::Strict => check_channel(channel_index, &channel.programs)?,
                ValidationPolicy::Clamp => repair_channel(channel_index, &mut channel.programs),
            }
        }
        Ok(Self { channels })
    }

    /// Returns the channels in display order.
    #[must_use]
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Returns the channel at `index`.
    #[must_use]
    pub fn channel(&self, index: usize) -> Option<&Channel> {
        self.channels.get(index)
    }

    /// Returns program `program_index` of channel `channel_index`.
    #[must_use]
    pub fn program(&self, channel_index: usize, program_index: usize) -> Option<&Program> {
        self.channel(channel_index)?.programs.get(program_index)
    }

    /// Number of channels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Returns `true` if there are no channels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Earliest start and latest end over all programs.
    #[must_use]
    pub fn time_bounds(&self) -> Option<(Timestamp, Timestamp)> {
        self.channels
            .iter()
            .flat_map(|c| c.programs.iter())
            .fold(None, |acc, p| match acc {
                None => Some((p.start, p.end)),
                Some((lo, hi)) => Some((lo.min(p.start), hi.max(p.end))),
            })
    }

    /// Consumes the guide data, returning the channels.
    #[must_use]
    pub fn into_channels(self) -> Vec<Channel> {
        self.channels
    }
}

fn check_channel(channel: usize, programs: &[Program]) -> Result<(), GuideDataError> {
    let mut previous_end = None;
    for (program, p) in programs.iter().enumerate() {
        if p.end <= p.start {
            return Err(GuideDataError::NonPositiveDuration {
                channel,
                program,
                start: p.start,
                end: p.end,
            });
        }
        if let Some(previous_end) = previous_end
            && previous_end != p.start
        {
            return Err(GuideDataError::Discontiguous {
                channel,
                program,
                previous_end,
                start: p.start,
            });
        }
        previous_end = Some(p.end);
    }
    Ok(())
}

#[cfg_attr(
    not(feature = "tracing"),
    expect(unused_variables, reason = "repairs are only reported through tracing")
)]
fn repair_channel(channel: usize, programs: &mut [Program]) {
    let mut previous_end: Option<Timestamp> = None;
    for (program, p) in programs.iter_mut().enumerate() {
        if p.end < p.start {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                channel,
                program,
                start = p.start,
                end = p.end,
                "inverted program clamped to zero width"
            );
            p.end = p.start;
        }
        if let Some(previous_end) = previous_end
            && previous_end != p.start
        {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                channel,
                program,
                previous_end,
                start = p.start,
                "discontiguous program accepted"
            );
        }
        previous_end = Some(p.end);
    }
}
