// Copyright 2026 the Planelab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planelab Transform: the plane-geometry transformation engine.
//!
//! This crate provides a small, headless model of the four classic
//! origin-centered transformations of a 2D point:
//! - **Translation** by an offset vector.
//! - **Reflection** over the X axis, the Y axis, the line `y = x`, or the
//!   line `y = -x`.
//! - **Rotation** by a signed angle in degrees, counter-clockwise positive.
//! - **Dilation** (uniform scaling) by a factor `k`.
//!
//! Each transformation is a deterministic, pure function of the input point
//! and its parameters: applying one always produces a new [`kurbo::Point`]
//! and never mutates or stores anything. All operations are total over real
//! inputs; there are no error conditions.
//!
//! It does **not** own any input widgets or rendering backend. Callers are
//! expected to:
//! - Collect coordinates and parameters at a higher layer (for example
//!   `planelab_lab`).
//! - Use [`Transform::apply`] for the numeric result and
//!   [`Transform::formula`] / [`Transform::describe`] for user-facing text.
//! - Hand both points to a figure/plotting layer (for example
//!   `planelab_figure`).
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use planelab_transform::{ReflectionAxis, Transform};
//!
//! let p = Point::new(2.0, 3.0);
//!
//! let reflect = Transform::Reflection { axis: ReflectionAxis::X };
//! assert_eq!(reflect.apply(p), Point::new(2.0, -3.0));
//!
//! let translate = Transform::Translation { offset: Vec2::new(1.0, 1.0) };
//! assert_eq!(translate.apply(p), Point::new(3.0, 4.0));
//! ```
//!
//! ## Design notes
//!
//! - Rotation and dilation are centered on the origin; a transformation
//!   about an arbitrary center can be composed at a higher layer via
//!   [`Transform::to_affine`].
//! - Parameter ranges ([`Transform::DEGREES_RANGE`] and friends) are the
//!   nominal widget ranges of the lab UI, not hard limits; [`Transform::apply`]
//!   accepts any real parameters and [`Transform::clamped`] normalizes into
//!   the nominal ranges when a caller wants widget semantics.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod axis;
mod transform;

pub use axis::ReflectionAxis;
pub use transform::{Transform, TransformKind};
