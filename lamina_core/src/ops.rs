// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability traits — the operation families of the drawing algebra.
//!
//! Each trait is an independently satisfiable contract over a single
//! abstract result type (`Self`). An interpreter implements the traits it
//! can support and omits the rest; a builder requires an intersection of
//! traits. Adding an operation family means adding a trait here plus an
//! implementation per interested interpreter — existing builders and
//! interpreters are untouched. Adding an interpreter means implementing
//! whichever traits it intends to support.

use alloc::vec::Vec;

use kurbo::{Rect, Vec2};
use peniko::Color;

use crate::unit::UnitPoint;

/// Rectangles, ellipses, and ordered composition.
///
/// The foundational capability: every interpreter implements this.
pub trait ShapeDrawing: Sized {
    /// A rectangle filled with `fill`.
    ///
    /// A rectangle with non-positive extent draws nothing useful; the exact
    /// output is implementation-defined, never an error.
    fn rectangle(rect: Rect, fill: Color) -> Self;

    /// An ellipse inscribed in `bounds`, filled with `fill`.
    fn ellipse(bounds: Rect, fill: Color) -> Self;

    /// The children drawn in order: the first child is bottom-most, each
    /// later child may occlude earlier ones.
    ///
    /// An empty sequence is a valid drawing that draws nothing.
    fn combined(children: Vec<Self>) -> Self;
}

/// Uniform transparency applied to a child drawing.
pub trait AlphaBlending: Sized {
    /// `child` drawn with its overall opacity scaled by `factor`.
    ///
    /// `factor` is clamped to `[0, 1]` (see
    /// [`clamp_unit`](crate::opacity::clamp_unit)); every interpreter
    /// applies the same policy. Nested `alpha` composes multiplicatively:
    /// `alpha(a, alpha(b, d))` draws `d` at opacity `a * b`.
    fn alpha(factor: f32, child: Self) -> Self;
}

/// A drop shadow cast by a child drawing.
///
/// Only interpreters with a retained, composited output model can render
/// shadows; immediate interpreters simply do not implement this trait, and
/// any builder requiring it will not pair with them.
pub trait DropShadow: Sized {
    /// `child` with a shadow described by `style`.
    fn shadow(style: ShadowStyle, child: Self) -> Self;

    /// `child` with the default shadow ([`ShadowStyle::default`]).
    fn drop_shadow(child: Self) -> Self {
        Self::shadow(ShadowStyle::default(), child)
    }
}

/// An axis-aligned linear gradient fill.
pub trait LinearGradient: Sized {
    /// A linear gradient filling `bounds`, running from `start` to `end`
    /// (unit-square coordinates relative to `bounds`), through `colors` at
    /// evenly spaced stops.
    ///
    /// # Panics
    ///
    /// Panics if `colors` has fewer than 2 entries. A gradient through one
    /// color is a caller bug, not a degenerate fill; every interpreter
    /// fails fast (see
    /// [`require_gradient_colors`](crate::gradient::require_gradient_colors)).
    fn gradient(bounds: Rect, start: UnitPoint, end: UnitPoint, colors: Vec<Color>) -> Self;
}

/// Shadow parameters for [`DropShadow::shadow`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowStyle {
    /// Shadow opacity in `[0, 1]`.
    pub opacity: f32,
    /// Offset of the shadow from the casting content, in absolute units.
    pub offset: Vec2,
    /// Blur radius in absolute units.
    pub blur_radius: f64,
}

impl Default for ShadowStyle {
    /// A soft downward shadow: opacity 0.75, offset (0, 3), blur radius 3.
    fn default() -> Self {
        Self {
            opacity: 0.75,
            offset: Vec2::new(0.0, 3.0),
            blur_radius: 3.0,
        }
    }
}
