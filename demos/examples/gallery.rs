// Copyright 2026 the Planelab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders one figure per transformation kind for the default point,
//! writing `planelab_translation.svg`, `planelab_reflection.svg`,
//! `planelab_rotation.svg`, and `planelab_dilation.svg`.
//!
//! Example:
//!   `cargo run -p planelab_demos --example gallery`

use std::process::ExitCode;

use planelab_figure_svg::to_svg;
use planelab_lab::LabSession;
use planelab_transform::TransformKind;

fn main() -> ExitCode {
    let mut session = LabSession::new();

    for kind in TransformKind::ALL {
        session.select_kind(kind);
        let outcome = session.outcome();
        let path = format!("planelab_{}.svg", kind.label());
        if let Err(err) = std::fs::write(&path, to_svg(&outcome.figure, 480, 480)) {
            eprintln!("failed to write {path}: {err}");
            return ExitCode::FAILURE;
        }
        println!("{path}: {}", outcome.description);
    }
    ExitCode::SUCCESS
}
