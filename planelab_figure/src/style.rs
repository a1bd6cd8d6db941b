// Copyright 2026 the Planelab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use peniko::Color;

/// Visual parameters of a figure.
///
/// Distances are in world units unless noted otherwise; backends translate
/// them into device units as part of their world→view mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureStyle {
    /// Color of the original point marker and its label.
    pub original_color: Color,
    /// Color of the transformed point marker and its label.
    pub result_color: Color,
    /// Color of the two coordinate axes.
    pub axis_color: Color,
    /// Color of the background grid lines.
    pub grid_color: Color,
    /// Color of the segment connecting the two points.
    pub link_color: Color,
    /// Marker radius in device pixels.
    pub marker_radius: f64,
    /// Offset of a marker's text label from the marker, in world units.
    pub label_offset: Vec2,
    /// Margin added around the content bounding box, in world units.
    pub margin: f64,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            original_color: Color::from_rgba8(38, 139, 210, 255),
            result_color: Color::from_rgba8(220, 50, 47, 255),
            axis_color: Color::from_rgba8(96, 96, 96, 255),
            grid_color: Color::from_rgba8(208, 208, 208, 255),
            link_color: Color::from_rgba8(128, 128, 128, 255),
            marker_radius: 4.0,
            label_offset: Vec2::new(0.1, 0.1),
            margin: 2.0,
        }
    }
}
