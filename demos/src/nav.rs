// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! D-pad navigation over guide cells.

use anyhow::{Result, bail};
use gridcast::{Channel, GuideData, Timestamp};

/// One remote-control key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Move {
    Up,
    Down,
    Left,
    Right,
}

/// Parses a key sequence such as `"RRDDL"`.
pub(crate) fn parse_moves(keys: &str) -> Result<Vec<Move>> {
    keys.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            Ok(match c.to_ascii_uppercase() {
                'U' => Move::Up,
                'D' => Move::Down,
                'L' => Move::Left,
                'R' => Move::Right,
                other => bail!("unknown move {other:?}, expected one of U, D, L, R"),
            })
        })
        .collect()
}

/// Cell reached from `(channel, program)` by `mv`.
///
/// Vertical moves keep the point in time: the new cell is the program airing
/// when the current one starts. Moves off the grid stay put.
pub(crate) fn step(
    data: &GuideData,
    (channel, program): (usize, usize),
    mv: Move,
) -> (usize, usize) {
    let Some(start) = data.program(channel, program).map(|p| p.start) else {
        return (channel, program);
    };
    match mv {
        Move::Left => (channel, program.saturating_sub(1)),
        Move::Right => {
            let last = data.channel(channel).map_or(0, |c| c.programs.len().saturating_sub(1));
            (channel, (program + 1).min(last))
        }
        Move::Up if channel > 0 => (channel - 1, nearest(&data.channels()[channel - 1], start)),
        Move::Down if channel + 1 < data.len() => {
            (channel + 1, nearest(&data.channels()[channel + 1], start))
        }
        Move::Up | Move::Down => (channel, program),
    }
}

fn nearest(channel: &Channel, t: Timestamp) -> usize {
    channel.program_at(t).unwrap_or_else(|| {
        channel
            .programs
            .partition_point(|p| p.start <= t)
            .saturating_sub(1)
    })
}

#[cfg(test)]
mod tests {
    use gridcast::{ChannelBuilder, GuideData, ValidationPolicy};

    use super::{Move, parse_moves, step};

    fn data() -> GuideData {
        let channels = vec![
            ChannelBuilder::new("A", 0).program("a1", 30).program("a2", 30).build(),
            ChannelBuilder::new("B", 0).program("b1", 10).program("b2", 50).build(),
            ChannelBuilder::new("C", 100).program("c1", 10).build(),
        ];
        GuideData::new(channels, ValidationPolicy::Strict).unwrap()
    }

    #[test]
    fn parses_keys() {
        assert_eq!(
            parse_moves("r d L u").unwrap(),
            [Move::Right, Move::Down, Move::Left, Move::Up]
        );
        assert!(parse_moves("RX").is_err());
    }

    #[test]
    fn vertical_moves_keep_time() {
        let data = data();
        // a2 starts at 30, which b2 covers.
        assert_eq!(step(&data, (0, 1), Move::Down), (1, 1));
        // Channel C starts after t = 10; fall back to its first program.
        assert_eq!(step(&data, (1, 1), Move::Down), (2, 0));
        assert_eq!(step(&data, (2, 0), Move::Down), (2, 0));
        assert_eq!(step(&data, (0, 0), Move::Up), (0, 0));
    }

    #[test]
    fn horizontal_moves_stop_at_edges() {
        let data = data();
        assert_eq!(step(&data, (0, 0), Move::Left), (0, 0));
        assert_eq!(step(&data, (0, 0), Move::Right), (0, 1));
        assert_eq!(step(&data, (0, 1), Move::Right), (0, 1));
    }
}
