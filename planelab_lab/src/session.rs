// Copyright 2026 the Planelab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::Point;
use planelab_figure::{Figure, FigureBuilder};
use planelab_transform::{Transform, TransformKind};

use crate::input::{InputError, parse_coordinate};

/// Result of one synchronous recompute.
///
/// Everything a presentation layer needs to render one interaction: the two
/// points, the user-facing text, and the figure model.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    /// The input point `P`.
    pub original: Point,
    /// The transformed point `P'`.
    pub result: Point,
    /// Human-readable mapping rule for this input.
    pub formula: String,
    /// Sentence-level description of the transformation.
    pub description: String,
    /// Figure model of the before/after plot.
    pub figure: Figure,
}

impl Outcome {
    /// Coordinate readout for `P`, two decimals.
    #[must_use]
    pub fn original_readout(&self) -> &str {
        &self.figure.original_readout
    }

    /// Coordinate readout for `P'`, two decimals.
    #[must_use]
    pub fn result_readout(&self) -> &str {
        &self.figure.result_readout
    }
}

/// State of one interactive lab session.
///
/// Holds the current input point and the selected transformation. Mutating
/// either does no work; [`LabSession::outcome`] recomputes everything on
/// demand and is a pure function of the state at that moment.
#[derive(Clone, Debug, PartialEq)]
pub struct LabSession {
    point: Point,
    transform: Transform,
}

impl Default for LabSession {
    fn default() -> Self {
        Self::new()
    }
}

impl LabSession {
    /// Creates a session with the lab's initial values: point `(2, 3)` and
    /// translation by `(1, 1)`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            point: Point::new(2.0, 3.0),
            transform: Transform::default(),
        }
    }

    /// The current input point.
    #[must_use]
    pub fn point(&self) -> Point {
        self.point
    }

    /// Sets the input point.
    pub fn set_point(&mut self, point: Point) {
        self.point = point;
    }

    /// Sets the input point from user-entered coordinate text.
    ///
    /// Both coordinates are parsed before anything changes; on error the
    /// session state is left untouched.
    pub fn set_point_from_input(&mut self, x: &str, y: &str) -> Result<(), InputError> {
        let x = parse_coordinate(x)?;
        let y = parse_coordinate(y)?;
        self.point = Point::new(x, y);
        Ok(())
    }

    /// The currently selected transformation.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Sets the transformation, parameters included.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Selects a transformation kind.
    ///
    /// Switching to a different kind installs that kind's default
    /// parameters, the way the lab's selector resets its widgets.
    /// Re-selecting the current kind keeps the adjusted parameters.
    pub fn select_kind(&mut self, kind: TransformKind) {
        if self.transform.kind() != kind {
            self.transform = Transform::default_for(kind);
        }
    }

    /// Recomputes the outcome for the current state.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        let figure = FigureBuilder::new(self.point, self.transform).build();
        Outcome {
            original: self.point,
            result: figure.result,
            formula: self.transform.formula(self.point),
            description: self.transform.describe(),
            figure,
        }
    }
}
