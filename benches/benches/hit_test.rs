// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use fermata_geometry::HitList;
use fermata_view::ViewportState;
use kurbo::{Point, Rect, Vec2};

/// One note per beat on every row, laid out the way a render pass would.
fn grid_hits(rows: u32, beats: u32, view: &ViewportState) -> HitList<u32> {
    let mut hits = HitList::with_capacity((rows * beats) as usize);
    for row in 0..rows {
        for beat in 0..beats {
            let world = Rect::new(beat as f64, row as f64, beat as f64 + 0.75, row as f64 + 1.0);
            hits.push(view.rect_to_screen(world), row * beats + beat);
        }
    }
    hits
}

fn bench_hit_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_list/hit_point");
    let view = ViewportState::new(Point::ORIGIN, Vec2::new(24.0, 12.0));
    for side in [16u32, 64, 128] {
        let hits = grid_hits(side, side, &view);
        group.throughput(Throughput::Elements(hits.len() as u64));
        // Bottom-left corner: the reverse scan visits almost every entry.
        let worst = view.position_to_screen(Point::new(0.1, 0.1));
        group.bench_with_input(BenchmarkId::new("worst_case", side), &hits, |b, hits| {
            b.iter(|| black_box(hits.hit_point(black_box(worst))));
        });
        let miss = Point::new(-10.0, -10.0);
        group.bench_with_input(BenchmarkId::new("miss", side), &hits, |b, hits| {
            b.iter(|| black_box(hits.hit_point(black_box(miss))));
        });
    }
    group.finish();
}

fn bench_hit_rect(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_list/hit_rect");
    let view = ViewportState::new(Point::ORIGIN, Vec2::new(24.0, 12.0));
    for side in [16u32, 64, 128] {
        let hits = grid_hits(side, side, &view);
        group.throughput(Throughput::Elements(hits.len() as u64));
        let quarter = Rect::new(0.0, 0.0, side as f64 * 6.0, side as f64 * 3.0);
        group.bench_with_input(BenchmarkId::new("quarter", side), &hits, |b, hits| {
            b.iter(|| black_box(hits.hit_rect(black_box(quarter))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hit_point, bench_hit_rect);
criterion_main!(benches);
