// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Opacity clamping.

/// Clamps an alpha factor to `[0, 1]`.
///
/// The single policy for out-of-range alpha across all interpreters: the
/// value is clamped at the point of use, never an error, and never passed
/// through to the underlying imaging primitives. NaN clamps to 0.
#[must_use]
pub fn clamp_unit(factor: f32) -> f32 {
    if factor >= 1.0 {
        1.0
    } else if factor > 0.0 {
        factor
    } else {
        // Covers negatives, -0.0, and NaN.
        0.0
    }
}
