// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The raster target boundary.

use kurbo::{Point, Rect};
use peniko::Color;

use lamina_core::gradient::GradientStop;

/// A mutable raster drawing target.
///
/// Implemented by the embedder over whatever imaging backend presents the
/// result (a bitmap context, an HTML canvas, a test double). The surface
/// carries a stack of graphics states; [`save_state`](Self::save_state) and
/// [`restore_state`](Self::restore_state) push and pop the current fill
/// color, global alpha, and clip. Fills composite source-over under the
/// current state.
///
/// The interpreter only ever mutates state inside a save/restore pair, so
/// an implementation may assume balanced calls.
pub trait Surface {
    /// Pushes a copy of the current graphics state.
    fn save_state(&mut self);

    /// Pops the most recently saved graphics state, discarding all changes
    /// made since the matching [`save_state`](Self::save_state).
    fn restore_state(&mut self);

    /// Sets the fill color for subsequent fills.
    fn set_fill_color(&mut self, color: Color);

    /// Sets the current scope's global alpha factor, in `[0, 1]`.
    ///
    /// Alpha composes multiplicatively across scopes: the factor applied to
    /// fills is `alpha` times the factor of the enclosing saved state. The
    /// interpreter calls this at most once per saved scope.
    fn set_global_alpha(&mut self, alpha: f32);

    /// Fills `rect` with the current fill color.
    fn fill_rect(&mut self, rect: Rect);

    /// Fills the ellipse inscribed in `bounds` with the current fill color.
    fn fill_ellipse(&mut self, bounds: Rect);

    /// Intersects the current clip region with `rect`.
    fn clip_rect(&mut self, rect: Rect);

    /// Fills the current clip region with a linear gradient running from
    /// `start` to `end` (absolute coordinates) through `stops`, which are
    /// ordered by offset with the first at 0 and the last at 1.
    fn fill_linear_gradient(&mut self, start: Point, end: Point, stops: &[GradientStop]);
}
