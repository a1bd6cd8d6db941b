// Copyright 2026 the Planelab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Criterion benchmarks for Planelab. See the `benches/` directory.
