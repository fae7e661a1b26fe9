// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering realized layer trees through the [`Surface`] boundary.

use lamina_core::gradient::even_stops;
use lamina_layer::{Layer, LayerPath};
use lamina_paint::Surface;

/// Paints a realized [`Layer`] tree onto `surface`, depth first, children
/// in attachment order.
///
/// Exists so the retained interpreter's output can be compared pixel for
/// pixel with the immediate interpreter's. Each layer opens its own state
/// scope: its opacity becomes the scope's global alpha (composing with
/// ancestors), its fills draw, then its children. Shadow fields are
/// ignored — the [`Surface`] boundary has no blur primitive, and this
/// flattener checks geometry and color only.
pub fn paint_layer(layer: &Layer, surface: &mut dyn Surface) {
    surface.save_state();
    surface.set_global_alpha(layer.opacity());

    if let Some(fill) = layer.background() {
        surface.set_fill_color(fill);
        match layer.path() {
            Some(LayerPath::Ellipse(bounds)) => surface.fill_ellipse(bounds),
            None => surface.fill_rect(layer.frame()),
        }
    }

    if let Some(gradient) = layer.gradient() {
        let frame = layer.frame();
        surface.save_state();
        surface.clip_rect(frame);
        surface.fill_linear_gradient(
            gradient.start.resolve(frame),
            gradient.end.resolve(frame),
            &even_stops(&gradient.colors),
        );
        surface.restore_state();
    }

    for child in layer.children() {
        paint_layer(child, surface);
    }

    surface.restore_state();
}
