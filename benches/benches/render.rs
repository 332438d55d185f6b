// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use floorplan_imaging_ref::RefBackend;
use floorplan_imaging_vello_cpu::CpuSurface;
use floorplan_model::{
    Camera, Dimensions, Door, FloorPlanData, Furniture, FurnitureKind, Point, Wall, Window,
};
use floorplan_render::Renderer;

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

    /// Uniform value in `[0, upper)`.
    fn next_f64(&mut self, upper: f64) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX) * upper
    }

    fn point(&mut self, dims: Dimensions) -> Point {
        Point::new(self.next_f64(dims.width), self.next_f64(dims.height))
    }
}

/// A plan with `n` entities of each kind scattered over a 1000x750 extent.
fn scattered_plan(n: usize, seed: u64) -> FloorPlanData {
    let dims = Dimensions::new(1000.0, 750.0);
    let mut rng = Lcg::new(seed);
    let mut plan = FloorPlanData::new(dims);

    plan.walls = (0..n)
        .map(|_| Wall {
            start: rng.point(dims),
            end: rng.point(dims),
            thickness: 4.0 + rng.next_f64(8.0),
        })
        .collect();
    plan.windows = Some(
        (0..n)
            .map(|_| Window {
                start: rng.point(dims),
                end: rng.point(dims),
                width: 6.0,
            })
            .collect(),
    );
    plan.doors = Some(
        (0..n)
            .map(|i| {
                let start = rng.point(dims);
                Door {
                    start,
                    end: Point::new(start.x + 80.0, start.y),
                    is_open: i % 2 == 0,
                    opening_angle: Some(90.0),
                }
            })
            .collect(),
    );
    let kinds = ["bed", "table", "chair", "sofa", "lamp"];
    plan.furniture = Some(
        (0..n)
            .map(|i| Furniture {
                kind: FurnitureKind::from(kinds[i % kinds.len()]),
                position: rng.point(dims),
                width: 40.0 + rng.next_f64(120.0),
                height: 40.0 + rng.next_f64(120.0),
                rotation: Some(rng.next_f64(360.0)),
            })
            .collect(),
    );
    plan.cameras = Some(
        (0..n)
            .map(|i| Camera {
                position: rng.point(dims),
                direction: rng.next_f64(360.0),
                field_of_view: 60.0,
                range: 150.0,
                is_active: Some(i % 3 != 0),
            })
            .collect(),
    );
    plan
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("floorplan_render");
    group.sample_size(50);
    let renderer = Renderer::default();

    for n in [10_usize, 100] {
        let plan = scattered_plan(n, 0x5eed);

        group.bench_function(format!("record(n={n})"), |b| {
            b.iter_batched(
                RefBackend::default,
                |mut backend| {
                    renderer.render(&mut backend, black_box(&plan), 1000, 750);
                    black_box(backend.ops().len());
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("rasterize(n={n})"), |b| {
            b.iter_batched(
                || CpuSurface::new(500, 375).expect("surface"),
                |mut surface| {
                    {
                        let mut backend = surface.backend();
                        renderer.render(&mut backend, black_box(&plan), 500, 375);
                    }
                    black_box(surface.to_rgba8());
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
