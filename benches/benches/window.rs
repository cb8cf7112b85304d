// Copyright 2025 the Rowline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use rowline_window::{HeightRule, PositionTable, resolve, resolve_fixed};

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

    fn gen_heights(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| f64::from(16 + self.next_u32() % 80)).collect()
    }
}

fn scroll_positions(table: &PositionTable<f64>, count: usize, seed: u64) -> Vec<f64> {
    let mut rng = Lcg::new(seed);
    let span = table.total_height() as u64 + 1;
    (0..count)
        .map(|_| (u64::from(rng.next_u32()) % span) as f64)
        .collect()
}

// Reference scan over the offsets, used to show what the binary search saves.
fn linear_window(offsets: &[f64], scroll: f64, viewport: f64) -> Option<(usize, usize)> {
    let len = offsets.len() - 1;
    if len == 0 {
        return None;
    }
    let mut start = 0;
    while start + 1 < len && offsets[start + 1] <= scroll {
        start += 1;
    }
    let bottom = scroll + viewport;
    let mut end = start;
    while end + 1 < len && offsets[end] < bottom {
        end += 1;
    }
    Some((start, end))
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("rowline_build");
    group.sample_size(30);

    for &n in &[1_000_usize, 10_000, 100_000] {
        let heights = Lcg::new(0x0B01_0000_0000_0001).gen_heights(n);

        group.bench_function(format!("from_heights(n={n})"), |b| {
            b.iter(|| black_box(PositionTable::from_heights(black_box(&heights))));
        });

        group.bench_function(format!("build_variable_rule(n={n})"), |b| {
            b.iter_batched(
                || HeightRule::variable(|i| if i % 7 == 0 { 48.0_f64 } else { 24.0 }),
                |rule| black_box(PositionTable::build(n, &rule)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("rowline_resolve");
    group.sample_size(50);

    for &n in &[1_000_usize, 10_000, 100_000] {
        let heights = Lcg::new(0x0B01_0000_0000_0002).gen_heights(n);
        let Ok(table) = PositionTable::from_heights(&heights) else {
            continue;
        };
        let scrolls = scroll_positions(&table, 256, 0x0B01_0000_0000_0003);

        group.bench_function(format!("binary_search(n={n})"), |b| {
            b.iter(|| {
                let mut acc = 0_usize;
                for &scroll in &scrolls {
                    let window = resolve(&table, scroll, 800.0, 3);
                    acc += window.len();
                }
                black_box(acc)
            });
        });

        group.bench_function(format!("linear_scan(n={n})"), |b| {
            b.iter(|| {
                let mut acc = 0_usize;
                for &scroll in &scrolls {
                    if let Some((start, end)) = linear_window(table.offsets(), scroll, 800.0) {
                        acc += end - start + 1;
                    }
                }
                black_box(acc)
            });
        });

        group.bench_function(format!("fixed_fast_path(n={n})"), |b| {
            b.iter(|| {
                let mut acc = 0_usize;
                for &scroll in &scrolls {
                    if let Ok(window) = resolve_fixed(n, 48.0_f64, scroll, 800.0, 3) {
                        acc += window.len();
                    }
                }
                black_box(acc)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_resolve);
criterion_main!(benches);
