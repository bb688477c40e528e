// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Random but reproducible guide schedules.

use gridcast::{Channel, ChannelBuilder, MINUTE_MS, Timestamp};
use gridcast_layout::hour_origin;
use rand::Rng;

const MIN_MINUTES: f64 = 25.0;
const MAX_MINUTES: f64 = 120.0;

/// A duration of 25 to 120 minutes, rounded to the nearest five minutes.
pub(crate) fn random_duration<R: Rng>(rng: &mut R) -> i64 {
    let minutes = (rng.random::<f64>() * MAX_MINUTES).floor().max(MIN_MINUTES);
    #[expect(
        clippy::cast_possible_truncation,
        reason = "bounded to at most 120 whole minutes"
    )]
    let rounded = ((minutes / 5.0).round() * 5.0) as i64;
    rounded * MINUTE_MS
}

/// Builds `channels` channels of `programs` back-to-back programs each.
///
/// Every channel's first program starts one random duration after the top of
/// the hour containing `now`, so cells line up with the guide's time axis.
pub(crate) fn sample_channels<R: Rng>(
    rng: &mut R,
    now: Timestamp,
    channels: usize,
    programs: usize,
) -> Vec<Channel> {
    let origin = hour_origin(now);
    (0..channels)
        .map(|c| {
            let first_start = origin + random_duration(rng);
            let mut builder = ChannelBuilder::new(format!("Channel {}", c + 1), first_start);
            for p in 0..programs {
                let duration = random_duration(rng);
                builder.push(format!("Program {}", p + 1), duration);
            }
            builder.build()
        })
        .collect()
}
