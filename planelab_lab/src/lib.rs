// Copyright 2026 the Planelab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planelab Lab: session state for the interactive transformation lab.
//!
//! This crate models one user's lab session: the current input point, the
//! currently selected transformation, and a synchronous [`LabSession::outcome`]
//! recompute that yields the transformed point, user-facing text, and the
//! figure model in one call. Each user interaction maps to exactly one
//! recompute; no state carries across recomputes.
//!
//! The only fallible surface in the whole system lives here: free-form
//! numeric input. [`parse_coordinate`] turns user text into a finite `f64`
//! or an [`InputError`] whose `Display` output is the user-facing message.
//! A failed parse leaves the session untouched, so the caller simply skips
//! the render pass for that interaction.
//!
//! ## Example
//!
//! ```rust
//! use planelab_lab::LabSession;
//! use planelab_transform::TransformKind;
//!
//! let mut session = LabSession::new();
//! session.select_kind(TransformKind::Rotation);
//! let outcome = session.outcome();
//! assert_eq!(outcome.result_readout(), "P' = (-3.00, 2.00)");
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod input;
mod session;

pub use input::{InputError, parse_coordinate};
pub use session::{LabSession, Outcome};
