// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use gridcast_layout::Timestamp;

/// Error returned when guide data fails strict validation.
///
/// Indices are zero-based positions in the channel list and in the channel's
/// program list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuideDataError {
    /// A program ends at or before its start.
    NonPositiveDuration {
        /// Channel position.
        channel: usize,
        /// Program position within the channel.
        program: usize,
        /// Program start.
        start: Timestamp,
        /// Program end.
        end: Timestamp,
    },
    /// A program does not start where its predecessor ends.
    Discontiguous {
        /// Channel position.
        channel: usize,
        /// Position of the later program within the channel.
        program: usize,
        /// End of the preceding program.
        previous_end: Timestamp,
        /// Start of the later program.
        start: Timestamp,
    },
}

impl GuideDataError {
    /// Channel position the error refers to.
    #[must_use]
    pub fn channel(&self) -> usize {
        match *self {
            Self::NonPositiveDuration { channel, .. } | Self::Discontiguous { channel, .. } => {
                channel
            }
        }
    }
}

impl fmt::Display for GuideDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveDuration {
                channel,
                program,
                start,
                end,
            } => write!(
                f,
                "program {program} of channel {channel} ends at {end}, not after its start {start}"
            ),
            Self::Discontiguous {
                channel,
                program,
                previous_end,
                start,
            } => {
                let kind = if start > previous_end { "gap" } else { "overlap" };
                write!(
                    f,
                    "program {program} of channel {channel} starts at {start} but its predecessor \
                     ends at {previous_end} ({kind})"
                )
            }
        }
    }
}

impl core::error::Error for GuideDataError {}
