// Copyright 2026 the Planelab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Planelab demo binaries.

use planelab_lab::parse_coordinate;
use planelab_transform::{ReflectionAxis, Transform};

/// Usage text for the transform selector arguments.
pub const TRANSFORM_USAGE: &str = "\
transform arguments:
  translate TX TY     translation by the vector (TX, TY)
  reflect AXIS        reflection; AXIS is one of x, y, y=x, y=-x
  rotate DEGREES      rotation about the origin, counter-clockwise
  dilate K            dilation by scale factor K about the origin";

/// Parses a transform selector and its parameters from CLI arguments.
pub fn parse_transform(args: &[String]) -> Result<Transform, String> {
    let (selector, params) = args
        .split_first()
        .ok_or_else(|| String::from("missing transform selector"))?;

    match (selector.as_str(), params) {
        ("translate", [tx, ty]) => Ok(Transform::Translation {
            offset: kurbo::Vec2::new(num(tx)?, num(ty)?),
        }),
        ("reflect", [axis]) => {
            let axis = match axis.as_str() {
                "x" => ReflectionAxis::X,
                "y" => ReflectionAxis::Y,
                "y=x" => ReflectionAxis::Diagonal,
                "y=-x" => ReflectionAxis::AntiDiagonal,
                other => return Err(format!("unknown reflection axis {other:?}")),
            };
            Ok(Transform::Reflection { axis })
        }
        ("rotate", [degrees]) => Ok(Transform::Rotation {
            degrees: num(degrees)?,
        }),
        ("dilate", [factor]) => Ok(Transform::Dilation {
            factor: num(factor)?,
        }),
        ("translate" | "reflect" | "rotate" | "dilate", _) => Err(format!(
            "wrong number of parameters for {selector} (see usage)"
        )),
        (other, _) => Err(format!("unknown transform {other:?}")),
    }
}

fn num(text: &str) -> Result<f64, String> {
    parse_coordinate(text).map_err(|err| err.to_string())
}
