// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gradient stops and the shared gradient contract.

use alloc::vec::Vec;

use peniko::Color;

/// A single color stop of a linear gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient axis, in `[0, 1]`.
    pub offset: f32,
    /// Color at this position.
    pub color: Color,
}

/// Asserts the gradient color-count contract.
///
/// Every interpreter implementing
/// [`LinearGradient`](crate::ops::LinearGradient) calls this before
/// producing a result, so a bad gradient aborts at construction time
/// instead of degrading into a solid fill.
///
/// # Panics
///
/// Panics if `colors` has fewer than 2 entries.
pub fn require_gradient_colors(colors: &[Color]) {
    assert!(
        colors.len() >= 2,
        "linear gradient requires at least 2 colors, got {}",
        colors.len()
    );
}

/// Spreads `colors` evenly along the gradient axis: stop *i* of *n* colors
/// sits at `i / (n - 1)`, so the first color is at 0 and the last at 1.
///
/// # Panics
///
/// Panics if `colors` has fewer than 2 entries (see
/// [`require_gradient_colors`]).
#[must_use]
pub fn even_stops(colors: &[Color]) -> Vec<GradientStop> {
    require_gradient_colors(colors);
    let last = (colors.len() - 1) as f32;
    colors
        .iter()
        .enumerate()
        .map(|(i, &color)| GradientStop {
            offset: i as f32 / last,
            color,
        })
        .collect()
}
