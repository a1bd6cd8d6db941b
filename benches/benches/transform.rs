// Copyright 2026 the Planelab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use planelab_figure::FigureBuilder;
use planelab_transform::{ReflectionAxis, Transform};

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform/apply");
    let p = Point::new(2.0, 3.0);

    let cases = [
        (
            "translation",
            Transform::Translation {
                offset: Vec2::new(1.0, 1.0),
            },
        ),
        (
            "reflection",
            Transform::Reflection {
                axis: ReflectionAxis::Diagonal,
            },
        ),
        ("rotation", Transform::Rotation { degrees: 37.0 }),
        ("dilation", Transform::Dilation { factor: 2.0 }),
    ];

    for (name, transform) in cases {
        group.bench_function(name, |b| {
            b.iter(|| black_box(transform.apply(black_box(p))));
        });
    }
    group.finish();
}

fn bench_figure_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("figure/build");
    let p = Point::new(2.0, 3.0);

    group.bench_function("rotation_figure", |b| {
        b.iter(|| {
            let fig = FigureBuilder::new(black_box(p), Transform::Rotation { degrees: 90.0 })
                .build();
            black_box(fig);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_apply, bench_figure_build);
criterion_main!(benches);
