// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end behavior of a guide: ingestion, focus, and what the renderer sees.

use gridcast::{
    Channel, ChannelBuilder, GuideConfig, GuideController, GuideData, GuideDataError, MINUTE_MS,
    Program, RowDetail, Timestamp, ValidationPolicy,
};
use gridcast_motion::FrameTime;
use proptest::prelude::*;

const T0: Timestamp = 1_709_114_400_000;

fn ms(v: u64) -> FrameTime {
    FrameTime::from_millis(v)
}

fn uniform_guide(channels: usize, program_minutes: &[i64]) -> GuideData {
    let channels = (0..channels)
        .map(|i| {
            let mut builder = ChannelBuilder::new(format!("Channel {}", i + 1), T0);
            for (p, minutes) in program_minutes.iter().enumerate() {
                builder.push(format!("Program {}", p + 1), minutes * MINUTE_MS);
            }
            builder.build()
        })
        .collect();
    GuideData::new(channels, ValidationPolicy::Strict).unwrap()
}

#[test]
fn golden_centering_through_the_guide() {
    let config = GuideConfig::default().with_grid(25.0, 100.0, 5.0);
    let mut guide = GuideController::new(uniform_guide(10, &[1, 29, 30]), config, T0);
    guide.on_layout(600.0, 600.0);
    guide.focus_program(5, 1, ms(0));

    let settled = guide.transform(ms(250));
    assert_eq!(settled.translate_y, -275.0);
    // vw / 2 - (25 + 725 / 2)
    assert_eq!(settled.translate_x, Some(300.0 - 387.5));
}

#[test]
fn visibility_boundary_is_inclusive() {
    let mut guide = GuideController::new(uniform_guide(60, &[30]), GuideConfig::default(), T0);
    guide.on_layout(600.0, 800.0);
    guide.focus_program(30, 0, ms(0));

    let range = guide.visible_range();
    let max = usize::try_from(range.max).unwrap();
    let min = usize::try_from(range.min).unwrap();
    assert!(guide.row_visibility(max).in_view);
    assert!(!guide.row_visibility(max + 1).in_view);
    assert!(guide.row_visibility(min).in_view);
    assert!(!guide.row_visibility(min - 1).in_view);
    assert_eq!(guide.row_visibility(max + 1).detail(), RowDetail::Placeholder);
}

#[test]
fn window_leads_the_scroll_animation() {
    let mut guide = GuideController::new(uniform_guide(60, &[30]), GuideConfig::default(), T0);
    guide.on_layout(600.0, 800.0);
    guide.focus_program(2, 0, ms(0));
    guide.focus_program(40, 0, ms(300));

    // Mid-transition the grid is still far from row 40, but it is already in view.
    let frame = guide.frame(ms(310));
    assert!(frame.animating);
    assert!(frame.rows[40].visibility.in_view);
    assert!(!frame.rows[2].visibility.in_view);
    assert!(frame.transform.translate_y > -(40.0 * 105.0 - 250.0));
}

#[test]
fn blur_then_focus_moves_highlight() {
    let mut guide = GuideController::new(uniform_guide(5, &[30, 30]), GuideConfig::default(), T0);
    guide.on_layout(600.0, 800.0);
    guide.focus_program(1, 0, ms(0));
    guide.on_blur();
    guide.focus_program(1, 1, ms(16));

    let cells = guide.visible_cells();
    let focused: Vec<_> = cells.iter().filter(|c| c.focused).collect();
    assert_eq!(focused.len(), 1);
    assert_eq!((focused[0].channel_index, focused[0].program_index), (1, 1));
}

#[test]
fn repeated_focus_does_not_restart_transition() {
    let mut guide = GuideController::new(uniform_guide(20, &[30]), GuideConfig::default(), T0);
    guide.on_layout(600.0, 800.0);
    guide.focus_program(10, 0, ms(0));
    let before = guide.transform(ms(200));
    guide.focus_program(10, 0, ms(200));
    assert_eq!(guide.transform(ms(200)), before);
    assert!(!guide.is_animating(ms(250)));
}

#[test]
fn strict_and_clamp_disagree_on_overlap() {
    let channel = Channel {
        title: "Channel 1".into(),
        programs: vec![
            Program {
                id: 1,
                title: "A".into(),
                start: T0,
                end: T0 + 30 * MINUTE_MS,
            },
            Program {
                id: 2,
                title: "B".into(),
                start: T0 + 20 * MINUTE_MS,
                end: T0 + 50 * MINUTE_MS,
            },
        ],
    };
    let err = GuideData::new(vec![channel.clone()], ValidationPolicy::Strict).unwrap_err();
    assert!(matches!(err, GuideDataError::Discontiguous { program: 1, .. }));
    assert!(err.to_string().contains("overlap"), "{err}");

    let data = GuideData::new(vec![channel], ValidationPolicy::Clamp).unwrap();
    assert_eq!(data.channels()[0].programs[1].start, T0 + 20 * MINUTE_MS);
}

proptest! {
    #[test]
    fn built_channels_are_contiguous(minutes in prop::collection::vec(1_i64..240, 1..40)) {
        let data = uniform_guide(1, &minutes);
        let programs = &data.channels()[0].programs;
        prop_assert_eq!(programs.len(), minutes.len());
        for pair in programs.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
            prop_assert!(pair[0].end > pair[0].start);
        }
    }

    #[test]
    fn clamp_never_leaves_inverted_programs(
        spans in prop::collection::vec((-500_i64..500, -500_i64..500), 0..30),
    ) {
        let programs = spans
            .iter()
            .enumerate()
            .map(|(i, &(start, end))| Program {
                id: u32::try_from(i + 1).unwrap(),
                title: String::new(),
                start,
                end,
            })
            .collect();
        let channel = Channel { title: String::new(), programs };
        let data = GuideData::new(vec![channel], ValidationPolicy::Clamp).unwrap();
        for p in &data.channels()[0].programs {
            prop_assert!(p.end >= p.start);
        }
    }

    #[test]
    fn focused_row_always_full_detail(
        channels in 1_usize..200,
        focus in 0_usize..200,
        height in 1.0_f64..3_000.0,
    ) {
        let focus = focus % channels;
        let mut guide =
            GuideController::new(uniform_guide(channels, &[30]), GuideConfig::default(), T0);
        guide.on_layout(height, 1_280.0);
        guide.focus_program(focus, 0, ms(0));
        prop_assert_eq!(guide.row_visibility(focus).detail(), RowDetail::Full);
    }
}
