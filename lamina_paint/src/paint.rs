// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Painting`] result type and its capability implementations.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;
use peniko::Color;

use lamina_core::gradient::even_stops;
use lamina_core::opacity::clamp_unit;
use lamina_core::ops::{AlphaBlending, LinearGradient, ShapeDrawing};
use lamina_core::unit::UnitPoint;

use crate::scope::StateScope;
use crate::surface::Surface;

/// A deferred paint procedure.
///
/// Owned exclusively by the expression node that constructed it and
/// consumed exactly once by [`paint`](Self::paint) — the imaging side
/// effects happen then, not at construction.
pub struct Painting(Box<dyn FnOnce(&mut dyn Surface)>);

impl fmt::Debug for Painting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Painting(..)")
    }
}

impl Painting {
    /// Wraps a paint procedure.
    fn from_fn(f: impl FnOnce(&mut dyn Surface) + 'static) -> Self {
        Self(Box::new(f))
    }

    /// Runs the paint procedure against `surface`, consuming the painting.
    ///
    /// The surface's state stack is left exactly as it was found.
    pub fn paint(self, surface: &mut dyn Surface) {
        (self.0)(surface);
    }
}

impl ShapeDrawing for Painting {
    fn rectangle(rect: Rect, fill: Color) -> Self {
        Self::from_fn(move |surface| {
            let mut scope = StateScope::new(surface);
            scope.set_fill_color(fill);
            scope.fill_rect(rect);
        })
    }

    fn ellipse(bounds: Rect, fill: Color) -> Self {
        Self::from_fn(move |surface| {
            let mut scope = StateScope::new(surface);
            scope.set_fill_color(fill);
            scope.fill_ellipse(bounds);
        })
    }

    fn combined(children: Vec<Self>) -> Self {
        Self::from_fn(move |surface| {
            for child in children {
                child.paint(surface);
            }
        })
    }
}

impl AlphaBlending for Painting {
    /// Scoped global alpha around the child.
    ///
    /// Each scope is independent and surface alpha composes multiplicatively
    /// under source-over, so nested `alpha` multiplies effective opacity.
    fn alpha(factor: f32, child: Self) -> Self {
        let factor = clamp_unit(factor);
        Self::from_fn(move |surface| {
            let mut scope = StateScope::new(surface);
            scope.set_global_alpha(factor);
            child.paint(&mut *scope);
        })
    }
}

impl LinearGradient for Painting {
    fn gradient(bounds: Rect, start: UnitPoint, end: UnitPoint, colors: Vec<Color>) -> Self {
        // Fails fast at construction, not when painted.
        let stops = even_stops(&colors);
        Self::from_fn(move |surface| {
            let mut scope = StateScope::new(surface);
            scope.clip_rect(bounds);
            scope.fill_linear_gradient(start.resolve(bounds), end.resolve(bounds), &stops);
        })
    }
}
