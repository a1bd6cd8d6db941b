// Copyright 2026 the Planelab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export backend for Planelab figures.
//!
//! This crate renders a [`Figure`] into a standalone SVG document: grid,
//! axes, the connecting segment, the two point markers with labels, the
//! title, and the coordinate/formula readouts.
//!
//! This is intended for debugging/inspection, not pixel-perfect plotting:
//! - Text metrics are approximated with fixed font sizes.
//! - No styling hooks beyond what [`planelab_figure::FigureStyle`] carries.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use planelab_figure::FigureBuilder;
//! use planelab_figure_svg::to_svg;
//! use planelab_transform::Transform;
//!
//! let figure = FigureBuilder::new(Point::new(2.0, 3.0), Transform::Dilation { factor: 2.0 })
//!     .build();
//! let svg = to_svg(&figure, 480, 480);
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use core::fmt::Write as _;

use kurbo::{Affine, Line, Point};
use peniko::Color;
use planelab_figure::{Figure, Marker, MarkerShape};

/// Returns the affine map from the figure's world coordinates into an SVG
/// viewport of `width` x `height` pixels.
///
/// The figure bounds are scaled to fit, centered, and flipped vertically so
/// that world Y grows upward while SVG Y grows downward. When
/// [`Figure::equal_aspect`] is set (it always is for lab figures), the scale
/// is uniform.
#[must_use]
pub fn world_to_view(figure: &Figure, width: u32, height: u32) -> Affine {
    let bounds = figure.bounds;
    let (bw, bh) = (bounds.width(), bounds.height());
    if bw <= 0.0 || bh <= 0.0 {
        return Affine::IDENTITY;
    }

    let (w, h) = (f64::from(width), f64::from(height));
    let sx = w / bw;
    let sy = h / bh;
    let (sx, sy) = if figure.equal_aspect {
        let s = sx.min(sy);
        (s, s)
    } else {
        (sx, sy)
    };

    // Center the fitted content, then flip Y into screen space.
    let offset_x = (w - bw * sx) / 2.0;
    let offset_y = (h - bh * sy) / 2.0;
    Affine::translate((offset_x, h - offset_y))
        * Affine::scale_non_uniform(sx, -sy)
        * Affine::translate((-bounds.x0, -bounds.y0))
}

/// Exports the figure as an SVG document.
///
/// `width`/`height` are used both as the SVG `width`/`height` attributes and
/// to set `viewBox="0 0 width height"`.
#[must_use]
pub fn to_svg(figure: &Figure, width: u32, height: u32) -> String {
    let xf = world_to_view(figure, width, height);
    let style = &figure.style;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );
    let _ = write!(
        svg,
        "<rect width=\"{width}\" height=\"{height}\" fill=\"#ffffff\"/>"
    );

    for line in &figure.grid {
        write_line(&mut svg, xf, *line, style.grid_color, 1.0, None);
    }

    write_line(&mut svg, xf, figure.x_axis, style.axis_color, 1.0, None);
    write_line(&mut svg, xf, figure.y_axis, style.axis_color, 1.0, None);

    if let Some(link) = figure.link {
        write_line(&mut svg, xf, link, style.link_color, 1.0, Some("4,3"));
    }

    for m in &figure.markers {
        write_marker(&mut svg, xf, m, style.marker_radius);
        let anchor = xf * (m.pos + style.label_offset);
        write_text(&mut svg, anchor, &m.label, m.color, 13, None);
    }

    let mid = f64::from(width) / 2.0;
    write_text(
        &mut svg,
        Point::new(mid, 16.0),
        &figure.title,
        Color::BLACK,
        14,
        Some("middle"),
    );
    for (i, readout) in [
        &figure.original_readout,
        &figure.result_readout,
        &figure.formula,
    ]
    .into_iter()
    .enumerate()
    {
        let y = 34.0 + 14.0 * (i as f64);
        write_text(&mut svg, Point::new(8.0, y), readout, Color::BLACK, 12, None);
    }

    svg.push_str("</svg>");
    svg
}

fn write_line(
    svg: &mut String,
    xf: Affine,
    line: Line,
    color: Color,
    width: f64,
    dash: Option<&str>,
) {
    let p0 = xf * line.p0;
    let p1 = xf * line.p1;
    let (rgb, a) = color_to_svg(color);
    let _ = write!(
        svg,
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{rgb}\" stroke-width=\"{}\"",
        fmt_px(p0.x),
        fmt_px(p0.y),
        fmt_px(p1.x),
        fmt_px(p1.y),
        fmt_px(width),
    );
    if a < 1.0 {
        let _ = write!(svg, " stroke-opacity=\"{}\"", fmt_px(f64::from(a)));
    }
    if let Some(dash) = dash {
        let _ = write!(svg, " stroke-dasharray=\"{dash}\"");
    }
    svg.push_str("/>");
}

fn write_marker(svg: &mut String, xf: Affine, marker: &Marker, radius: f64) {
    let c = xf * marker.pos;
    let (rgb, _) = color_to_svg(marker.color);
    match marker.shape {
        MarkerShape::Dot => {
            let _ = write!(
                svg,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{rgb}\"/>",
                fmt_px(c.x),
                fmt_px(c.y),
                fmt_px(radius),
            );
        }
        MarkerShape::Cross => {
            // An "x" of two strokes through the center.
            for (dx, dy) in [(radius, radius), (radius, -radius)] {
                let _ = write!(
                    svg,
                    "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{rgb}\" stroke-width=\"2\"/>",
                    fmt_px(c.x - dx),
                    fmt_px(c.y - dy),
                    fmt_px(c.x + dx),
                    fmt_px(c.y + dy),
                );
            }
        }
    }
}

fn write_text(
    svg: &mut String,
    at: Point,
    text: &str,
    color: Color,
    size: u32,
    anchor: Option<&str>,
) {
    let (rgb, _) = color_to_svg(color);
    let _ = write!(
        svg,
        "<text x=\"{}\" y=\"{}\" fill=\"{rgb}\" font-size=\"{size}\" font-family=\"sans-serif\"",
        fmt_px(at.x),
        fmt_px(at.y),
    );
    if let Some(anchor) = anchor {
        let _ = write!(svg, " text-anchor=\"{anchor}\"");
    }
    let _ = write!(svg, ">");
    for ch in text.chars() {
        match ch {
            '&' => svg.push_str("&amp;"),
            '<' => svg.push_str("&lt;"),
            '>' => svg.push_str("&gt;"),
            _ => svg.push(ch),
        }
    }
    svg.push_str("</text>");
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (
        alloc::format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b),
        a,
    )
}

/// Formats a pixel coordinate compactly: integers without a fractional part,
/// everything else with up to two decimals, trailing zeros trimmed.
fn fmt_px(v: f64) -> String {
    if v.is_finite() {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "best-effort pretty formatting"
        )]
        let i = v as i64;
        let diff = (i as f64) - v;
        if diff > -1e-6 && diff < 1e-6 {
            return alloc::format!("{i}");
        }
    } else {
        return alloc::format!("{v}");
    }

    let mut s = alloc::format!("{v:.2}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}
