// Copyright 2025 the Nebula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use nebula_cloud::{CloudParams, PointCloud};
use nebula_rank::Ranking;

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

fn build_cloud(n: usize, seed: u64) -> PointCloud {
    let mut rng = Lcg::new(seed);
    let items: Vec<(Point, String)> = (0..n)
        .map(|i| {
            (
                Point::new(rng.next_unit() * 30.0, rng.next_unit() * 30.0),
                format!("corpus item {i}"),
            )
        })
        .collect();
    PointCloud::new(
        items,
        Rect::new(0.0, 0.0, 1280.0, 800.0),
        CloudParams::default(),
        seed,
    )
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("nebula_cloud");
    group.sample_size(50);

    for &n in &[100_usize, 300, 600] {
        let mut scores_rng = Lcg::new(0xF7A3_0000_0000_0002);
        let scores: Vec<f64> = (0..n).map(|_| scores_rng.next_unit()).collect();

        group.bench_function(format!("frame(n={n})"), |b| {
            let mut cloud = build_cloud(n, 0xF7A3_0000_0000_0001);
            cloud.commit_search(&scores).unwrap();
            let mut time = 0.0;
            b.iter(|| {
                time += 1.0 / 60.0;
                let frame = cloud.frame(1.0 / 60.0, Some(Point::new(0.3, -0.4)), time);
                black_box(frame);
            });
        });

        group.bench_function(format!("commit_search(n={n})"), |b| {
            b.iter_batched(
                || build_cloud(n, 0xF7A3_0000_0000_0003),
                |mut cloud| {
                    cloud.commit_search(&scores).unwrap();
                    black_box(cloud);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("ranking_from_scores(n={n})"), |b| {
            b.iter(|| {
                let ranking = Ranking::from_scores(&scores, n).unwrap();
                black_box(ranking);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
