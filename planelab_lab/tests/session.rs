// Copyright 2026 the Planelab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `planelab_lab` session layer.
//!
//! These exercise the recompute cycle end to end: state mutation, kind
//! selection semantics, input parsing, and determinism of `outcome()`.

use kurbo::{Point, Vec2};
use planelab_lab::LabSession;
use planelab_transform::{ReflectionAxis, Transform, TransformKind};

#[test]
fn new_session_uses_lab_initial_values() {
    let session = LabSession::new();
    assert_eq!(session.point(), Point::new(2.0, 3.0));
    assert_eq!(
        session.transform(),
        Transform::Translation {
            offset: Vec2::new(1.0, 1.0)
        }
    );

    let outcome = session.outcome();
    assert_eq!(outcome.result, Point::new(3.0, 4.0));
    assert_eq!(outcome.original_readout(), "P = (2.00, 3.00)");
    assert_eq!(outcome.result_readout(), "P' = (3.00, 4.00)");
    assert_eq!(outcome.formula, "P' = (2 + 1, 3 + 1)");
}

#[test]
fn switching_kind_installs_that_kinds_defaults() {
    let mut session = LabSession::new();

    session.select_kind(TransformKind::Dilation);
    assert_eq!(session.transform(), Transform::Dilation { factor: 2.0 });

    // Adjust, then re-select the same kind: parameters survive.
    session.set_transform(Transform::Dilation { factor: -1.5 });
    session.select_kind(TransformKind::Dilation);
    assert_eq!(session.transform(), Transform::Dilation { factor: -1.5 });

    // Switching away and back resets to defaults.
    session.select_kind(TransformKind::Rotation);
    assert_eq!(session.transform(), Transform::Rotation { degrees: 90.0 });
    session.select_kind(TransformKind::Dilation);
    assert_eq!(session.transform(), Transform::Dilation { factor: 2.0 });
}

#[test]
fn set_point_from_input_parses_both_coordinates() {
    let mut session = LabSession::new();
    session
        .set_point_from_input(" -1.5", "4 ")
        .expect("valid coordinates");
    assert_eq!(session.point(), Point::new(-1.5, 4.0));
}

#[test]
fn failed_input_leaves_the_session_untouched() {
    let mut session = LabSession::new();
    let before = session.clone();

    let err = session
        .set_point_from_input("7", "seven")
        .expect_err("second coordinate is not a number");
    assert_eq!(err.text(), "seven");
    assert_eq!(session, before);
}

#[test]
fn outcome_is_deterministic_for_fixed_state() {
    let mut session = LabSession::new();
    session.set_point(Point::new(-1.0, 2.5));
    session.set_transform(Transform::Rotation { degrees: -45.0 });

    let a = session.outcome();
    let b = session.outcome();
    assert_eq!(a, b);
}

#[test]
fn outcome_carries_description_and_figure() {
    let mut session = LabSession::new();
    session.select_kind(TransformKind::Reflection);
    session.set_transform(Transform::Reflection {
        axis: ReflectionAxis::Diagonal,
    });

    let outcome = session.outcome();
    assert_eq!(outcome.description, "reflection over the line y = x");
    assert_eq!(outcome.result, Point::new(3.0, 2.0));
    assert!(outcome.figure.link.is_none());
    assert_eq!(outcome.figure.markers.len(), 2);
}
