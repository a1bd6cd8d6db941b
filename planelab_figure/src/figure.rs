// Copyright 2026 the Planelab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `ceil`/`floor`
use kurbo::{Line, Point, Rect};
use peniko::Color;
use planelab_transform::{Transform, TransformKind};

use crate::style::FigureStyle;

/// Shape of a point marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerShape {
    /// Filled dot, used for the original point `P`.
    Dot,
    /// Diagonal cross, used for the transformed point `P'`.
    Cross,
}

/// A labeled point marker in world coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    /// World-space position.
    pub pos: Point,
    /// Marker shape.
    pub shape: MarkerShape,
    /// Text label placed next to the marker.
    pub label: String,
    /// Marker and label color.
    pub color: Color,
}

/// Headless description of a before/after plot.
///
/// All coordinates are in world units. Backends map them into device space
/// themselves; [`Figure::equal_aspect`] tells them to preserve a 1:1 world
/// aspect ratio while doing so.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    /// Plot title.
    pub title: String,
    /// The transformation the figure visualizes.
    pub transform: Transform,
    /// Original point `P`.
    pub original: Point,
    /// Transformed point `P'`.
    pub result: Point,
    /// World bounds of the plot area.
    pub bounds: Rect,
    /// Spacing between grid lines, in world units.
    pub grid_spacing: f64,
    /// Background grid lines spanning the bounds.
    pub grid: Vec<Line>,
    /// The `y = 0` axis across the bounds.
    pub x_axis: Line,
    /// The `x = 0` axis across the bounds.
    pub y_axis: Line,
    /// Segment from `P` to `P'`; absent for reflections.
    pub link: Option<Line>,
    /// The two point markers, original first.
    pub markers: Vec<Marker>,
    /// Coordinate readout for `P`, two decimals.
    pub original_readout: String,
    /// Coordinate readout for `P'`, two decimals.
    pub result_readout: String,
    /// Human-readable mapping rule for this input.
    pub formula: String,
    /// Whether backends should preserve a 1:1 world aspect ratio.
    pub equal_aspect: bool,
    /// Visual parameters.
    pub style: FigureStyle,
}

/// Builds a [`Figure`] from an input point and a transformation.
#[derive(Clone, Debug)]
pub struct FigureBuilder {
    original: Point,
    transform: Transform,
    style: FigureStyle,
}

impl FigureBuilder {
    /// Creates a builder for the given input point and transformation.
    #[must_use]
    pub fn new(original: Point, transform: Transform) -> Self {
        Self {
            original,
            transform,
            style: FigureStyle::default(),
        }
    }

    /// Overrides the default visual style.
    #[must_use]
    pub fn style(mut self, style: FigureStyle) -> Self {
        self.style = style;
        self
    }

    /// Builds the figure.
    #[must_use]
    pub fn build(self) -> Figure {
        let result = self.transform.apply(self.original);
        let margin = self.style.margin;

        // Keep both points and the origin in view, as the lab plot does.
        let min_x = self.original.x.min(result.x).min(0.0) - margin;
        let max_x = self.original.x.max(result.x).max(0.0) + margin;
        let min_y = self.original.y.min(result.y).min(0.0) - margin;
        let max_y = self.original.y.max(result.y).max(0.0) + margin;
        let bounds = Rect::new(min_x, min_y, max_x, max_y);

        let grid_spacing = grid_spacing_for(bounds.width().max(bounds.height()));
        let grid = grid_lines(bounds, grid_spacing);

        let x_axis = Line::new((bounds.x0, 0.0), (bounds.x1, 0.0));
        let y_axis = Line::new((0.0, bounds.y0), (0.0, bounds.y1));

        let link = (self.transform.kind() != TransformKind::Reflection)
            .then(|| Line::new(self.original, result));

        let markers = alloc::vec![
            marker(self.original, MarkerShape::Dot, "P", self.style.original_color),
            marker(result, MarkerShape::Cross, "P'", self.style.result_color),
        ];

        Figure {
            title: format!("Visualizing {}", self.transform.kind().label()),
            transform: self.transform,
            original: self.original,
            result,
            bounds,
            grid_spacing,
            grid,
            x_axis,
            y_axis,
            link,
            markers,
            original_readout: readout("P", self.original),
            result_readout: readout("P'", result),
            formula: self.transform.formula(self.original),
            equal_aspect: true,
            style: self.style,
        }
    }
}

fn marker(pos: Point, shape: MarkerShape, label: &str, color: Color) -> Marker {
    Marker {
        pos,
        shape,
        label: String::from(label),
        color,
    }
}

fn readout(label: &str, p: Point) -> String {
    format!("{label} = ({:.2}, {:.2})", p.x, p.y)
}

/// Chooses a grid spacing from a 1-2-5 ladder, aiming for about eight grid
/// intervals across `extent` world units.
fn grid_spacing_for(extent: f64) -> f64 {
    if !extent.is_finite() || extent <= 0.0 {
        return 1.0;
    }
    let desired = extent / 8.0;

    let mut unit = 1.0_f64;
    while unit * 10.0 <= desired {
        unit *= 10.0;
    }
    while unit > desired {
        unit /= 10.0;
    }

    for m in [1.0_f64, 2.0, 5.0, 10.0] {
        let step = m * unit;
        if step >= desired {
            return step;
        }
    }
    10.0 * unit
}

fn grid_lines(bounds: Rect, spacing: f64) -> Vec<Line> {
    let mut lines = Vec::new();

    #[allow(
        clippy::cast_possible_truncation,
        reason = "grid indices are small integers by construction"
    )]
    {
        let i0 = (bounds.x0 / spacing).ceil() as i64;
        let i1 = (bounds.x1 / spacing).floor() as i64;
        for i in i0..=i1 {
            let x = (i as f64) * spacing;
            lines.push(Line::new((x, bounds.y0), (x, bounds.y1)));
        }

        let j0 = (bounds.y0 / spacing).ceil() as i64;
        let j1 = (bounds.y1 / spacing).floor() as i64;
        for j in j0..=j1 {
            let y = (j as f64) * spacing;
            lines.push(Line::new((bounds.x0, y), (bounds.x1, y)));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::{FigureBuilder, MarkerShape, grid_spacing_for};
    use kurbo::{Point, Vec2};
    use planelab_transform::{ReflectionAxis, Transform};

    #[test]
    fn bounds_cover_both_points_and_origin_with_margin() {
        let p = Point::new(2.0, 3.0);
        let fig = FigureBuilder::new(p, Transform::Dilation { factor: 2.0 }).build();

        assert_eq!(fig.result, Point::new(4.0, 6.0));
        assert_eq!(fig.bounds.x0, -2.0);
        assert_eq!(fig.bounds.y0, -2.0);
        assert_eq!(fig.bounds.x1, 6.0);
        assert_eq!(fig.bounds.y1, 8.0);
        assert!(fig.bounds.contains(Point::ZERO));
    }

    #[test]
    fn reflection_has_no_connecting_segment() {
        let p = Point::new(2.0, 3.0);
        let fig = FigureBuilder::new(
            p,
            Transform::Reflection {
                axis: ReflectionAxis::X,
            },
        )
        .build();
        assert!(fig.link.is_none());

        let fig = FigureBuilder::new(
            p,
            Transform::Translation {
                offset: Vec2::new(1.0, 1.0),
            },
        )
        .build();
        let link = fig.link.expect("translation draws a connecting segment");
        assert_eq!(link.p0, p);
        assert_eq!(link.p1, Point::new(3.0, 4.0));
    }

    #[test]
    fn markers_label_original_and_result() {
        let fig = FigureBuilder::new(Point::new(1.0, 0.0), Transform::Rotation { degrees: 90.0 })
            .build();
        assert_eq!(fig.markers.len(), 2);
        assert_eq!(fig.markers[0].label, "P");
        assert_eq!(fig.markers[0].shape, MarkerShape::Dot);
        assert_eq!(fig.markers[0].pos, Point::new(1.0, 0.0));
        assert_eq!(fig.markers[1].label, "P'");
        assert_eq!(fig.markers[1].shape, MarkerShape::Cross);
    }

    #[test]
    fn readouts_use_two_decimals() {
        let fig = FigureBuilder::new(Point::new(2.0, 3.0), Transform::Rotation { degrees: 90.0 })
            .build();
        assert_eq!(fig.original_readout, "P = (2.00, 3.00)");
        assert_eq!(fig.result_readout, "P' = (-3.00, 2.00)");
        assert_eq!(fig.title, "Visualizing rotation");
    }

    #[test]
    fn grid_spacing_follows_the_ladder() {
        assert_eq!(grid_spacing_for(8.0), 1.0);
        assert_eq!(grid_spacing_for(16.0), 2.0);
        assert_eq!(grid_spacing_for(40.0), 5.0);
        assert_eq!(grid_spacing_for(80.0), 10.0);
        assert_eq!(grid_spacing_for(4.0), 0.5);
        assert_eq!(grid_spacing_for(0.0), 1.0);
    }

    #[test]
    fn grid_lines_land_on_spacing_multiples_inside_bounds() {
        let fig = FigureBuilder::new(Point::new(2.0, 3.0), Transform::Dilation { factor: 2.0 })
            .build();
        let s = fig.grid_spacing;
        assert!(!fig.grid.is_empty());
        for line in &fig.grid {
            let vertical = line.p0.x == line.p1.x;
            let v = if vertical { line.p0.x } else { line.p0.y };
            let nearest = (v / s).round() * s;
            assert!((v - nearest).abs() < 1e-9, "{v} not on a multiple of {s}");
            assert!(v >= fig.bounds.x0.min(fig.bounds.y0));
            assert!(v <= fig.bounds.x1.max(fig.bounds.y1));
        }
    }

    #[test]
    fn axes_span_the_bounds() {
        let fig = FigureBuilder::new(Point::new(-1.0, 4.0), Transform::Rotation { degrees: 45.0 })
            .build();
        assert_eq!(fig.x_axis.p0.y, 0.0);
        assert_eq!(fig.x_axis.p1.y, 0.0);
        assert_eq!(fig.x_axis.p0.x, fig.bounds.x0);
        assert_eq!(fig.x_axis.p1.x, fig.bounds.x1);
        assert_eq!(fig.y_axis.p0.x, 0.0);
        assert_eq!(fig.y_axis.p1.x, 0.0);
    }
}
