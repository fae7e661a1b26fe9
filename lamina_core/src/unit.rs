// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unit-square coordinates.

use kurbo::{Point, Rect};

/// A point in the unit square `[0, 1] × [0, 1]`, positioned relative to
/// some absolute rectangle.
///
/// `(0, 0)` is the rectangle's origin, `(1, 1)` the opposite corner.
/// Values outside the unit square are allowed and extrapolate linearly.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UnitPoint {
    /// Horizontal fraction of the target rectangle's width.
    pub u: f64,
    /// Vertical fraction of the target rectangle's height.
    pub v: f64,
}

impl UnitPoint {
    /// The rectangle's origin.
    pub const TOP_LEFT: Self = Self::new(0.0, 0.0);
    /// Midpoint of the top edge.
    pub const TOP: Self = Self::new(0.5, 0.0);
    /// The top-right corner.
    pub const TOP_RIGHT: Self = Self::new(1.0, 0.0);
    /// The rectangle's center.
    pub const CENTER: Self = Self::new(0.5, 0.5);
    /// The bottom-left corner.
    pub const BOTTOM_LEFT: Self = Self::new(0.0, 1.0);
    /// Midpoint of the bottom edge.
    pub const BOTTOM: Self = Self::new(0.5, 1.0);
    /// The corner opposite the origin.
    pub const BOTTOM_RIGHT: Self = Self::new(1.0, 1.0);

    /// Creates a unit point from fractions of width and height.
    #[must_use]
    pub const fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }

    /// Maps this unit point to an absolute point inside `rect`:
    /// `origin + size * unit`, by linear interpolation.
    #[must_use]
    pub fn resolve(self, rect: Rect) -> Point {
        Point::new(
            rect.x0 + rect.width() * self.u,
            rect.y0 + rect.height() * self.v,
        )
    }
}
