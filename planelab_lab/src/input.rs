// Copyright 2026 the Planelab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use core::fmt;

/// Error for user-entered text that does not parse as a finite number.
///
/// The `Display` output is the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputError {
    text: String,
}

impl InputError {
    /// The offending input text, trimmed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid numeric input: {:?}", self.text)
    }
}

impl core::error::Error for InputError {}

/// Parses a user-entered coordinate.
///
/// Surrounding whitespace is ignored. Input that is not a number, or that
/// parses to NaN or an infinity, is rejected; a coordinate must be finite.
pub fn parse_coordinate(text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError {
            text: trimmed.to_string(),
        }),
    }
}
