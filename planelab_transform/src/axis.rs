// Copyright 2026 the Planelab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point};

/// Mirror line for a reflection.
///
/// All four lines pass through the origin, so each reflection is a fixed
/// linear map given by a 2x2 matrix (see [`ReflectionAxis::matrix`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ReflectionAxis {
    /// The X axis (the line `y = 0`); maps `(x, y)` to `(x, -y)`.
    #[default]
    X,
    /// The Y axis (the line `x = 0`); maps `(x, y)` to `(-x, y)`.
    Y,
    /// The diagonal `y = x`; maps `(x, y)` to `(y, x)`.
    Diagonal,
    /// The anti-diagonal `y = -x`; maps `(x, y)` to `(-y, -x)`.
    AntiDiagonal,
}

impl ReflectionAxis {
    /// All four mirror lines, in presentation order.
    pub const ALL: [Self; 4] = [Self::X, Self::Y, Self::Diagonal, Self::AntiDiagonal];

    /// The 2x2 reflection matrix, row-major.
    #[must_use]
    pub const fn matrix(self) -> [[f64; 2]; 2] {
        match self {
            Self::X => [[1.0, 0.0], [0.0, -1.0]],
            Self::Y => [[-1.0, 0.0], [0.0, 1.0]],
            Self::Diagonal => [[0.0, 1.0], [1.0, 0.0]],
            Self::AntiDiagonal => [[0.0, -1.0], [-1.0, 0.0]],
        }
    }

    /// Applies the reflection to a point, returning the mirrored point.
    #[must_use]
    pub fn reflect(self, p: Point) -> Point {
        let [[m00, m01], [m10, m11]] = self.matrix();
        Point::new(m00 * p.x + m01 * p.y, m10 * p.x + m11 * p.y)
    }

    /// The reflection expressed as an affine map.
    #[must_use]
    pub fn to_affine(self) -> Affine {
        let [[m00, m01], [m10, m11]] = self.matrix();
        // kurbo coefficient order: x' = c0*x + c2*y + c4, y' = c1*x + c3*y + c5.
        Affine::new([m00, m10, m01, m11, 0.0, 0.0])
    }

    /// Human-readable label for the mirror line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::X => "X axis (y = 0)",
            Self::Y => "Y axis (x = 0)",
            Self::Diagonal => "line y = x",
            Self::AntiDiagonal => "line y = -x",
        }
    }

    /// The coordinate mapping rule, for example `(x, y) -> (x, -y)`.
    #[must_use]
    pub const fn mapping_rule(self) -> &'static str {
        match self {
            Self::X => "(x, y) -> (x, -y)",
            Self::Y => "(x, y) -> (-x, y)",
            Self::Diagonal => "(x, y) -> (y, x)",
            Self::AntiDiagonal => "(x, y) -> (-y, -x)",
        }
    }
}
