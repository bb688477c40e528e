// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gridcast_layout::{GridGeometry, GridMetrics, MINUTE_MS, visible_range};

const T0: i64 = 1_709_114_400_000;

fn bench_windowing(c: &mut Criterion) {
    let mut group = c.benchmark_group("gridcast_layout");

    group.bench_function("visible_range_sweep(10k rows)", |b| {
        b.iter(|| {
            let mut span = 0_i64;
            for channel in 0..10_000_usize {
                span += visible_range(black_box(1_080.0), 105.0, Some(channel)).span();
            }
            black_box(span);
        });
    });

    let geometry = GridGeometry::new(GridMetrics::new(5.0, 100.0, 5.0), T0, 1_000);
    group.bench_function("cell_rect(1k rows x 24 programs)", |b| {
        b.iter(|| {
            let mut area = 0.0;
            for channel in 0..1_000_usize {
                let mut start = T0;
                for _ in 0..24 {
                    let end = start + 30 * MINUTE_MS;
                    area += geometry.cell_content_rect(channel, start, end).area();
                    start = end;
                }
            }
            black_box(area);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_windowing);
criterion_main!(benches);
