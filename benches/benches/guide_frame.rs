// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use gridcast::{ChannelBuilder, GuideConfig, GuideController, GuideData, ValidationPolicy};
use gridcast_layout::MINUTE_MS;
use gridcast_motion::FrameTime;

const T0: i64 = 1_709_114_400_000;

fn build_guide(channels: usize, programs: usize) -> GuideController {
    let channels = (0..channels)
        .map(|c| {
            let mut builder = ChannelBuilder::new(format!("Channel {}", c + 1), T0);
            for p in 0..programs {
                // Staggered lengths so rows do not line up.
                let minutes = 25 + 5 * ((c + p) % 20) as i64;
                builder.push(format!("Program {}", p + 1), minutes * MINUTE_MS);
            }
            builder.build()
        })
        .collect();
    let data = GuideData::new(channels, ValidationPolicy::Strict)
        .expect("generated schedules are contiguous");
    let mut guide = GuideController::new(data, GuideConfig::default(), T0);
    guide.on_layout(1_080.0, 1_920.0);
    guide
}

fn bench_guide(c: &mut Criterion) {
    let mut group = c.benchmark_group("gridcast");

    for &channels in &[100_usize, 1_000, 10_000] {
        let mut guide = build_guide(channels, 24);
        guide.focus_program(channels / 2, 12, FrameTime::ZERO);

        group.bench_function(format!("transform_mid_flight(n={channels})"), |b| {
            b.iter(|| black_box(guide.transform(black_box(FrameTime::from_millis(120)))));
        });

        group.bench_function(format!("frame(n={channels})"), |b| {
            b.iter(|| black_box(guide.frame(black_box(FrameTime::from_millis(120)))));
        });

        group.bench_function(format!("visible_cells(n={channels})"), |b| {
            b.iter(|| black_box(guide.visible_cells()));
        });

        group.bench_function(format!("focus_walk(n={channels})"), |b| {
            b.iter_batched(
                || guide.clone(),
                |mut guide| {
                    for step in 0..60_u64 {
                        let channel = (channels / 2 + step as usize) % channels;
                        guide.focus_program(channel, 12, FrameTime::from_millis(step * 16));
                    }
                    black_box(guide.transform(FrameTime::from_millis(1_000)));
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_guide);
criterion_main!(benches);
