// Copyright 2026 the Planelab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CLI front end to the transformation lab.
//!
//! Takes a point and a transform selector, prints the coordinate readouts
//! and formula, and writes the before/after figure as `transform_lab.svg`.
//!
//! Examples:
//!   `cargo run -p planelab_demos --example transform_lab -- 2 3 rotate 90`
//!   `cargo run -p planelab_demos --example transform_lab -- 2 3 reflect y=x`
//!   `cargo run -p planelab_demos --example transform_lab -- 1 0 translate 1 1`

use std::env;
use std::process::ExitCode;

use planelab_demos::{TRANSFORM_USAGE, parse_transform};
use planelab_figure_svg::to_svg;
use planelab_lab::LabSession;

const OUT_PATH: &str = "transform_lab.svg";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 3 {
        eprintln!("usage: transform_lab X Y TRANSFORM [PARAMS...]");
        eprintln!("{TRANSFORM_USAGE}");
        return ExitCode::from(2);
    }

    let mut session = LabSession::new();
    if let Err(err) = session.set_point_from_input(&args[0], &args[1]) {
        eprintln!("{err}");
        return ExitCode::from(2);
    }
    match parse_transform(&args[2..]) {
        Ok(transform) => session.set_transform(transform),
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(2);
        }
    }

    let outcome = session.outcome();
    println!("{}", outcome.description);
    println!("  {}", outcome.original_readout());
    println!("  {}", outcome.result_readout());
    println!("  {}", outcome.formula);

    let svg = to_svg(&outcome.figure, 480, 480);
    if let Err(err) = std::fs::write(OUT_PATH, svg) {
        eprintln!("failed to write {OUT_PATH}: {err}");
        return ExitCode::FAILURE;
    }
    println!("wrote {OUT_PATH}");
    ExitCode::SUCCESS
}
