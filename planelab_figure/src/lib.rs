// Copyright 2026 the Planelab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planelab Figure: headless model of the before/after transformation plot.
//!
//! This crate turns an input point and a transformation into a [`Figure`]:
//! a plain description of everything the lab plot shows — world bounds,
//! grid lines, the two coordinate axes, the original and transformed point
//! markers with their labels, an optional connecting segment, and the
//! textual readouts (coordinates and formula).
//!
//! It does **not** own any rendering backend. Callers are expected to:
//! - Build a [`Figure`] via [`FigureBuilder`].
//! - Hand it to an export backend (for example `planelab_figure_svg`) or
//!   walk its fields directly to draw with their own renderer.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use planelab_figure::FigureBuilder;
//! use planelab_transform::Transform;
//!
//! let figure = FigureBuilder::new(Point::new(2.0, 3.0), Transform::Rotation { degrees: 90.0 })
//!     .build();
//!
//! assert_eq!(figure.original_readout, "P = (2.00, 3.00)");
//! // The figure always keeps the origin in view.
//! assert!(figure.bounds.contains(Point::ZERO));
//! ```
//!
//! ## Design notes
//!
//! - World bounds are the bounding box of the original point, the
//!   transformed point, and the origin, expanded by a fixed margin, so
//!   both points and the axes are always visible.
//! - Grid spacing is chosen from a 1‑2‑5 ladder so grid lines land on
//!   "nice" world values.
//! - The connecting segment is present for translation, rotation, and
//!   dilation; reflection draws only the two points.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod figure;
mod style;

pub use figure::{Figure, FigureBuilder, Marker, MarkerShape};
pub use style::FigureStyle;
