// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use gridcast_layout::Timestamp;

/// One broadcast slot on a channel.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Program {
    /// 1-based position within its channel.
    pub id: u32,
    /// Display title.
    pub title: String,
    /// Start time in milliseconds since the Unix epoch.
    pub start: Timestamp,
    /// End time in milliseconds since the Unix epoch. Exclusive.
    pub end: Timestamp,
}

impl Program {
    /// Length of the slot in milliseconds. Negative for malformed data.
    #[must_use]
    pub fn duration_ms(&self) -> i64 {
        self.end - self.start
    }

    /// Returns `true` if `t` falls within `start..end`.
    #[must_use]
    pub fn airs_at(&self, t: Timestamp) -> bool {
        self.start <= t && t < self.end
    }
}

/// A channel row and its programs in broadcast order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Channel {
    /// Display title.
    pub title: String,
    /// Programs, chronological and back-to-back.
    pub programs: Vec<Program>,
}

impl Channel {
    /// Index of the program airing at `t`, if any.
    #[must_use]
    pub fn program_at(&self, t: Timestamp) -> Option<usize> {
        // Programs are sorted and contiguous, so a binary search suffices.
        let idx = self.programs.partition_point(|p| p.end <= t);
        self.programs
            .get(idx)
            .filter(|p| p.airs_at(t))
            .map(|_| idx)
    }
}

/// Assembles a channel whose programs follow each other without gaps.
///
/// Program ids are assigned sequentially from `1`, and every program starts
/// where the previous one ended.
///
/// ```rust
/// use gridcast::{ChannelBuilder, MINUTE_MS};
///
/// let channel = ChannelBuilder::new("Channel 1", 0)
///     .program("Morning News", 30 * MINUTE_MS)
///     .program("Weather", 5 * MINUTE_MS)
///     .build();
///
/// assert_eq!(channel.programs[1].id, 2);
/// assert_eq!(channel.programs[1].start, channel.programs[0].end);
/// ```
#[derive(Clone, Debug)]
pub struct ChannelBuilder {
    title: String,
    next_start: Timestamp,
    programs: Vec<Program>,
}

impl ChannelBuilder {
    /// Starts a channel whose first program begins at `first_start`.
    #[must_use]
    pub fn new(title: impl Into<String>, first_start: Timestamp) -> Self {
        Self {
            title: title.into(),
            next_start: first_start,
            programs: Vec::new(),
        }
    }

    /// Appends a program lasting `duration_ms`.
    #[must_use]
    pub fn program(mut self, title: impl Into<String>, duration_ms: i64) -> Self {
        self.push(title, duration_ms);
        self
    }

    /// Appends a program lasting `duration_ms`, by reference.
    pub fn push(&mut self, title: impl Into<String>, duration_ms: i64) -> &mut Self {
        let start = self.next_start;
        let end = start.saturating_add(duration_ms);
        let id = u32::try_from(self.programs.len() + 1).unwrap_or(u32::MAX);
        self.programs.push(Program {
            id,
            title: title.into(),
            start,
            end,
        });
        self.next_start = end;
        self
    }

    /// Where the next appended program would start.
    #[must_use]
    pub fn next_start(&self) -> Timestamp {
        self.next_start
    }

    /// Finishes the channel.
    #[must_use]
    pub fn build(self) -> Channel {
        Channel {
            title: self.title,
            programs: self.programs,
        }
    }
}
