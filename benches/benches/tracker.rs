// Copyright 2025 the Rowline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use rowline_viewport::ViewportTracker;
use rowline_window::HeightRule;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }
}

fn row_height(index: usize) -> f64 {
    if index % 25 == 0 { 64.0 } else { 28.0 }
}

fn bench_tracker(c: &mut Criterion) {
    let mut group = c.benchmark_group("rowline_tracker");
    group.sample_size(50);

    for &n in &[10_000_usize, 100_000] {
        // Eight scroll notifications coalesced into each frame.
        group.bench_function(format!("scroll_burst_frames(n={n})"), |b| {
            b.iter_batched(
                || {
                    let tracker = ViewportTracker::new(n, HeightRule::variable(row_height), 720.0);
                    (tracker, Lcg::new(0x7AC4_0000_0000_0001))
                },
                |(tracker, mut rng)| {
                    let Ok(mut tracker) = tracker else {
                        return;
                    };
                    for _ in 0..64 {
                        for _ in 0..8 {
                            tracker.on_scroll(f64::from(rng.next_u32() % 2_000_000));
                        }
                        black_box(tracker.on_frame());
                    }
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(format!("append_rebuild(n={n})"), |b| {
            b.iter_batched(
                || ViewportTracker::new(n, HeightRule::variable(row_height), 720.0),
                |tracker| {
                    let Ok(mut tracker) = tracker else {
                        return;
                    };
                    tracker.set_follow_tail(true);
                    if tracker.set_item_count(n + 100).is_err() {
                        return;
                    }
                    black_box(tracker.on_frame());
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tracker);
criterion_main!(benches);
