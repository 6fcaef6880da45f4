// Copyright 2025 the Nebula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use nebula_layout::{
    LayoutParams, RelaxParams, align_to_principal_axis, fit_to_rect, layout, relax,
};

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

    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }
}

/// A clumpy synthetic projection: a few dense clusters plus scatter, the
/// shape dimensionality reduction tends to produce.
fn synthetic_projection(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = Lcg::new(seed);
    let mut centers = Vec::new();
    for _ in 0..5 {
        centers.push(Point::new(
            rng.next_unit() * 20.0 - 10.0,
            rng.next_unit() * 20.0 - 10.0,
        ));
    }
    (0..n)
        .map(|i| {
            let c = centers[i % centers.len()];
            Point::new(
                c.x + (rng.next_unit() - 0.5) * 3.0,
                c.y + (rng.next_unit() - 0.5) * 3.0,
            )
        })
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("nebula_layout");
    group.sample_size(30);
    let target = Rect::new(0.0, 0.0, 1280.0, 800.0);

    for &n in &[100_usize, 300, 600] {
        let raw = synthetic_projection(n, 0xC10D_0000_0000_0001);

        group.bench_function(format!("full_pipeline(n={n})"), |b| {
            b.iter(|| {
                let out = layout(&raw, target, &LayoutParams::default());
                black_box(out);
            });
        });

        group.bench_function(format!("align(n={n})"), |b| {
            b.iter_batched(
                || raw.clone(),
                |mut pts| {
                    align_to_principal_axis(&mut pts);
                    black_box(pts);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("fit(n={n})"), |b| {
            b.iter_batched(
                || raw.clone(),
                |mut pts| {
                    fit_to_rect(&mut pts, target, 0.03);
                    black_box(pts);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("relax(n={n})"), |b| {
            b.iter_batched(
                || {
                    let mut pts = raw.clone();
                    fit_to_rect(&mut pts, target, 0.03);
                    pts
                },
                |mut pts| {
                    relax(&mut pts, &RelaxParams::default());
                    black_box(pts);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
