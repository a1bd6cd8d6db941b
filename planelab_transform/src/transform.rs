// Copyright 2026 the Planelab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use core::ops::RangeInclusive;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sin_cos`
use kurbo::{Affine, Point, Vec2};

use crate::axis::ReflectionAxis;

/// Discriminant of [`Transform`]: which kind of transformation is selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TransformKind {
    /// Addition of a fixed offset vector.
    #[default]
    Translation,
    /// Mirroring over an axis or diagonal through the origin.
    Reflection,
    /// Rotation about the origin, counter-clockwise for positive angles.
    Rotation,
    /// Uniform scaling about the origin.
    Dilation,
}

impl TransformKind {
    /// All four kinds, in presentation order.
    pub const ALL: [Self; 4] = [
        Self::Translation,
        Self::Reflection,
        Self::Rotation,
        Self::Dilation,
    ];

    /// Lowercase human-readable name of the kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Translation => "translation",
            Self::Reflection => "reflection",
            Self::Rotation => "rotation",
            Self::Dilation => "dilation",
        }
    }
}

/// A plane transformation of a 2D point, with kind-specific parameters.
///
/// Applying a transform is a pure function: it reads the input point and the
/// parameters stored in the variant and produces a new point. See the crate
/// docs for the matrix definitions behind each variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    /// `P' = P + T` for the offset vector `T`.
    Translation {
        /// The offset vector `(tx, ty)`.
        offset: Vec2,
    },
    /// `P' = M·P` for the fixed mirror matrix of `axis`.
    Reflection {
        /// The mirror line.
        axis: ReflectionAxis,
    },
    /// `P' = R(θ)·P` with `θ = degrees·π/180`, counter-clockwise positive,
    /// centered on the origin.
    Rotation {
        /// Signed angle in degrees.
        degrees: f64,
    },
    /// `P' = k·P`, uniform scaling about the origin.
    Dilation {
        /// The scale factor `k`.
        factor: f64,
    },
}

impl Default for Transform {
    fn default() -> Self {
        Self::default_for(TransformKind::default())
    }
}

impl Transform {
    /// Nominal widget range for translation offsets, per component.
    pub const OFFSET_RANGE: RangeInclusive<f64> = -5.0..=5.0;
    /// Nominal widget range for the rotation angle in degrees.
    pub const DEGREES_RANGE: RangeInclusive<f64> = -360.0..=360.0;
    /// Nominal widget range for the dilation scale factor.
    pub const FACTOR_RANGE: RangeInclusive<f64> = -3.0..=3.0;

    /// The default parameterization for a given kind.
    ///
    /// These are the initial widget values of the lab: translation by
    /// `(1, 1)`, reflection over the X axis, rotation by `90°`, dilation
    /// by `k = 2`.
    #[must_use]
    pub fn default_for(kind: TransformKind) -> Self {
        match kind {
            TransformKind::Translation => Self::Translation {
                offset: Vec2::new(1.0, 1.0),
            },
            TransformKind::Reflection => Self::Reflection {
                axis: ReflectionAxis::default(),
            },
            TransformKind::Rotation => Self::Rotation { degrees: 90.0 },
            TransformKind::Dilation => Self::Dilation { factor: 2.0 },
        }
    }

    /// Which kind of transformation this is.
    #[must_use]
    pub const fn kind(&self) -> TransformKind {
        match self {
            Self::Translation { .. } => TransformKind::Translation,
            Self::Reflection { .. } => TransformKind::Reflection,
            Self::Rotation { .. } => TransformKind::Rotation,
            Self::Dilation { .. } => TransformKind::Dilation,
        }
    }

    /// Applies the transformation to a point, returning the new point.
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        match *self {
            Self::Translation { offset } => p + offset,
            Self::Reflection { axis } => axis.reflect(p),
            Self::Rotation { degrees } => {
                let (s, c) = degrees.to_radians().sin_cos();
                Point::new(c * p.x - s * p.y, s * p.x + c * p.y)
            }
            Self::Dilation { factor } => Point::new(factor * p.x, factor * p.y),
        }
    }

    /// The transformation expressed as an affine map.
    ///
    /// `self.to_affine() * p` agrees with [`Transform::apply`] up to
    /// floating-point tolerance.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        match *self {
            Self::Translation { offset } => Affine::translate(offset),
            Self::Reflection { axis } => axis.to_affine(),
            Self::Rotation { degrees } => Affine::rotate(degrees.to_radians()),
            Self::Dilation { factor } => Affine::scale(factor),
        }
    }

    /// Human-readable mapping rule for the given input point.
    ///
    /// Translation substitutes the concrete coordinates
    /// (`P' = (2 + 1, 3 + 1)`); the matrix kinds state the rule
    /// (`(x, y) -> (x, -y)`, `P' = R(90°)·P`, `P' = 2·P`).
    #[must_use]
    pub fn formula(&self, p: Point) -> String {
        match *self {
            Self::Translation { offset } => format!(
                "P' = ({} + {}, {} + {})",
                fmt_num(p.x),
                fmt_num(offset.x),
                fmt_num(p.y),
                fmt_num(offset.y)
            ),
            Self::Reflection { axis } => String::from(axis.mapping_rule()),
            Self::Rotation { degrees } => format!("P' = R({}°)·P", fmt_num(degrees)),
            Self::Dilation { factor } => format!("P' = {}·P", fmt_num(factor)),
        }
    }

    /// Sentence-level description of the transformation and its parameters.
    #[must_use]
    pub fn describe(&self) -> String {
        match *self {
            Self::Translation { offset } => format!(
                "translation by the vector ({}, {})",
                fmt_num(offset.x),
                fmt_num(offset.y)
            ),
            Self::Reflection { axis } => {
                format!("reflection over the {}", axis.label())
            }
            Self::Rotation { degrees } => format!(
                "rotation by {}° counter-clockwise about the origin (0, 0)",
                fmt_num(degrees)
            ),
            Self::Dilation { factor } => format!(
                "dilation by scale factor k = {} about the origin (0, 0)",
                fmt_num(factor)
            ),
        }
    }

    /// Returns the transformation with its parameters clamped into the
    /// nominal widget ranges.
    ///
    /// [`Transform::apply`] itself never requires this; it exists for
    /// callers that want slider semantics when accepting free-form input.
    #[must_use]
    pub fn clamped(&self) -> Self {
        match *self {
            Self::Translation { offset } => Self::Translation {
                offset: Vec2::new(
                    clamp_into(offset.x, &Self::OFFSET_RANGE),
                    clamp_into(offset.y, &Self::OFFSET_RANGE),
                ),
            },
            Self::Reflection { axis } => Self::Reflection { axis },
            Self::Rotation { degrees } => Self::Rotation {
                degrees: clamp_into(degrees, &Self::DEGREES_RANGE),
            },
            Self::Dilation { factor } => Self::Dilation {
                factor: clamp_into(factor, &Self::FACTOR_RANGE),
            },
        }
    }
}

fn clamp_into(v: f64, range: &RangeInclusive<f64>) -> f64 {
    v.clamp(*range.start(), *range.end())
}

/// Formats a parameter value compactly: integers without a fractional part,
/// everything else with up to three decimals, trailing zeros trimmed.
fn fmt_num(v: f64) -> String {
    if v.is_finite() {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "best-effort pretty formatting"
        )]
        let i = v as i64;
        let diff = (i as f64) - v;
        if diff > -1e-9 && diff < 1e-9 {
            return format!("{i}");
        }
    } else {
        return format!("{v}");
    }

    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}
