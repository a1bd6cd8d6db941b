// Copyright 2026 the Planelab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property checks for the transformation engine.
//!
//! These exercise the algebraic identities the engine promises: translation
//! is componentwise addition, reflections are involutions, rotations and
//! dilations invert cleanly, and the worked examples from the lab hold.

use kurbo::{Point, Vec2};
use planelab_transform::{ReflectionAxis, Transform};

const TOLERANCE: f64 = 1e-9;

fn sample_points() -> [Point; 6] {
    [
        Point::ZERO,
        Point::new(2.0, 3.0),
        Point::new(-1.0, 4.5),
        Point::new(-3.25, -2.75),
        Point::new(0.5, -0.5),
        Point::new(100.0, -250.0),
    ]
}

fn assert_close(a: Point, b: Point) {
    assert!(
        (a.x - b.x).abs() < TOLERANCE && (a.y - b.y).abs() < TOLERANCE,
        "{a:?} != {b:?}"
    );
}

#[test]
fn translation_is_componentwise_addition() {
    for p in sample_points() {
        for offset in [
            Vec2::new(1.0, 1.0),
            Vec2::new(-4.5, 0.25),
            Vec2::ZERO,
            Vec2::new(0.0, -5.0),
        ] {
            let t = Transform::Translation { offset };
            assert_eq!(t.apply(p), Point::new(p.x + offset.x, p.y + offset.y));
        }
    }
}

#[test]
fn reflection_is_an_involution_for_every_axis() {
    for p in sample_points() {
        for axis in ReflectionAxis::ALL {
            let t = Transform::Reflection { axis };
            assert_eq!(t.apply(t.apply(p)), p, "axis {axis:?}");
        }
    }
}

#[test]
fn rotation_by_zero_and_full_turn_is_identity() {
    for p in sample_points() {
        for degrees in [0.0, 360.0, -360.0] {
            let t = Transform::Rotation { degrees };
            assert_close(t.apply(p), p);
        }
    }
}

#[test]
fn rotation_round_trips_through_its_inverse_angle() {
    for p in sample_points() {
        for degrees in [90.0, 37.0, -123.45, 359.0] {
            let there = Transform::Rotation { degrees };
            let back = Transform::Rotation { degrees: -degrees };
            assert_close(back.apply(there.apply(p)), p);
        }
    }
}

#[test]
fn dilation_by_one_is_identity() {
    for p in sample_points() {
        let t = Transform::Dilation { factor: 1.0 };
        assert_eq!(t.apply(p), p);
    }
}

#[test]
fn dilation_round_trips_through_its_reciprocal() {
    for p in sample_points() {
        for factor in [2.0, 0.5, -3.0, 1.25] {
            let there = Transform::Dilation { factor };
            let back = Transform::Dilation {
                factor: 1.0 / factor,
            };
            assert_close(back.apply(there.apply(p)), p);
        }
    }
}

#[test]
fn worked_examples_from_the_lab() {
    let p = Point::new(2.0, 3.0);

    let reflect = Transform::Reflection {
        axis: ReflectionAxis::X,
    };
    assert_eq!(reflect.apply(p), Point::new(2.0, -3.0));

    let rotate = Transform::Rotation { degrees: 90.0 };
    assert_close(rotate.apply(Point::new(1.0, 0.0)), Point::new(0.0, 1.0));

    let dilate = Transform::Dilation { factor: 2.0 };
    assert_eq!(dilate.apply(p), Point::new(4.0, 6.0));

    let translate = Transform::Translation {
        offset: Vec2::new(1.0, 1.0),
    };
    assert_eq!(translate.apply(p), Point::new(3.0, 4.0));
}

#[test]
fn apply_has_no_hidden_state_across_invocations() {
    let t = Transform::Rotation { degrees: 45.0 };
    let p = Point::new(2.0, 3.0);
    let first = t.apply(p);
    for _ in 0..10 {
        assert_eq!(t.apply(p), first);
    }
}
