// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`LayerDrawing`] factory and its capability implementations.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;
use peniko::Color;

use lamina_core::gradient::require_gradient_colors;
use lamina_core::opacity::clamp_unit;
use lamina_core::ops::{AlphaBlending, DropShadow, LinearGradient, ShadowStyle, ShapeDrawing};
use lamina_core::unit::UnitPoint;

use crate::node::{GradientFill, Layer, LayerPath};

/// A node-producing factory for one drawing expression.
///
/// Construction is cheap and side-effect free; [`realize`](Self::realize)
/// builds a fresh, independently owned [`Layer`] tree on every call, so the
/// same expression can feed multiple attachment points without sharing
/// nodes.
pub struct LayerDrawing(Box<dyn Fn() -> Layer>);

impl fmt::Debug for LayerDrawing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LayerDrawing(..)")
    }
}

impl LayerDrawing {
    /// Wraps a node factory.
    fn from_fn(f: impl Fn() -> Layer + 'static) -> Self {
        Self(Box::new(f))
    }

    /// Builds a fresh layer tree for this drawing.
    #[must_use]
    pub fn realize(&self) -> Layer {
        (self.0)()
    }
}

impl ShapeDrawing for LayerDrawing {
    fn rectangle(rect: Rect, fill: Color) -> Self {
        Self::from_fn(move || {
            let mut layer = Layer::new(rect);
            layer.set_background(Some(fill));
            layer
        })
    }

    fn ellipse(bounds: Rect, fill: Color) -> Self {
        Self::from_fn(move || {
            let mut layer = Layer::new(bounds);
            layer.set_path(Some(LayerPath::Ellipse(bounds)));
            layer.set_background(Some(fill));
            layer
        })
    }

    fn combined(children: Vec<Self>) -> Self {
        Self::from_fn(move || {
            let mut container = Layer::new(Rect::ZERO);
            for child in &children {
                container.add_child(child.realize());
            }
            container
        })
    }
}

impl AlphaBlending for LayerDrawing {
    /// Scales the realized child's own opacity by the clamped factor.
    ///
    /// The node model supports opacity natively, so no wrapper node is
    /// added. Multiplying (rather than overwriting) keeps nested `alpha`
    /// multiplicative when both factors land on the same node.
    fn alpha(factor: f32, child: Self) -> Self {
        let factor = clamp_unit(factor);
        Self::from_fn(move || {
            let mut layer = child.realize();
            layer.set_opacity(layer.opacity() * factor);
            layer
        })
    }
}

impl DropShadow for LayerDrawing {
    fn shadow(style: ShadowStyle, child: Self) -> Self {
        Self::from_fn(move || {
            let mut layer = child.realize();
            layer.set_shadow(Some(style));
            layer
        })
    }
}

impl LinearGradient for LayerDrawing {
    fn gradient(bounds: Rect, start: UnitPoint, end: UnitPoint, colors: Vec<Color>) -> Self {
        // Fails fast at construction, not when realized.
        require_gradient_colors(&colors);
        Self::from_fn(move || {
            let mut layer = Layer::new(bounds);
            layer.set_gradient(Some(GradientFill {
                start,
                end,
                colors: colors.clone(),
            }));
            layer
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use peniko::color::palette;

    use super::*;

    const RECT: Rect = Rect::new(0.0, 0.0, 10.0, 10.0);

    #[test]
    fn rectangle_node_fields() {
        let layer = LayerDrawing::rectangle(RECT, palette::css::BLUE).realize();
        assert_eq!(layer.frame(), RECT);
        assert_eq!(layer.background(), Some(palette::css::BLUE));
        assert_eq!(layer.path(), None);
    }

    #[test]
    fn ellipse_node_carries_inscribed_path() {
        let layer = LayerDrawing::ellipse(RECT, palette::css::RED).realize();
        assert_eq!(layer.path(), Some(LayerPath::Ellipse(RECT)));
        assert_eq!(layer.background(), Some(palette::css::RED));
    }

    #[test]
    fn empty_combination_is_childless_container() {
        let layer = LayerDrawing::combined(vec![]).realize();
        assert!(layer.children().is_empty());
        assert_eq!(layer.background(), None);
        assert!(layer.gradient().is_none());
    }

    #[test]
    fn overlapping_scene_attaches_children_in_order() {
        // combined([ellipse, rectangle]): ellipse is bottom-most.
        let drawing = LayerDrawing::combined(vec![
            LayerDrawing::ellipse(Rect::new(0.0, 0.0, 100.0, 100.0), palette::css::RED),
            LayerDrawing::rectangle(Rect::new(50.0, 50.0, 150.0, 150.0), palette::css::BLUE),
        ]);
        let root = drawing.realize();
        assert_eq!(root.children().len(), 2);

        let ellipse = &root.children()[0];
        assert_eq!(
            ellipse.path(),
            Some(LayerPath::Ellipse(Rect::new(0.0, 0.0, 100.0, 100.0)))
        );
        assert_eq!(ellipse.background(), Some(palette::css::RED));

        let rectangle = &root.children()[1];
        assert_eq!(rectangle.frame(), Rect::new(50.0, 50.0, 150.0, 150.0));
        assert_eq!(rectangle.background(), Some(palette::css::BLUE));
        assert_eq!(rectangle.path(), None);
    }

    #[test]
    fn nested_alpha_multiplies_opacity() {
        let drawing = LayerDrawing::alpha(
            0.5,
            LayerDrawing::alpha(0.5, LayerDrawing::rectangle(RECT, palette::css::RED)),
        );
        assert_eq!(drawing.realize().opacity(), 0.25);
    }

    #[test]
    fn alpha_clamps_out_of_range_factors() {
        let over = LayerDrawing::alpha(3.0, LayerDrawing::rectangle(RECT, palette::css::RED));
        assert_eq!(over.realize().opacity(), 1.0);
        let under = LayerDrawing::alpha(-0.5, LayerDrawing::rectangle(RECT, palette::css::RED));
        assert_eq!(under.realize().opacity(), 0.0);
    }

    #[test]
    fn shadow_sets_style_on_child_node() {
        let style = ShadowStyle {
            opacity: 0.5,
            offset: kurbo::Vec2::new(2.0, 4.0),
            blur_radius: 8.0,
        };
        let layer =
            LayerDrawing::shadow(style, LayerDrawing::rectangle(RECT, palette::css::RED)).realize();
        assert_eq!(layer.shadow(), Some(style));
    }

    #[test]
    fn default_shadow_forwards_default_style() {
        let layer =
            LayerDrawing::drop_shadow(LayerDrawing::rectangle(RECT, palette::css::RED)).realize();
        assert_eq!(layer.shadow(), Some(ShadowStyle::default()));
    }

    #[test]
    fn gradient_node_fields() {
        let layer = LayerDrawing::gradient(
            RECT,
            UnitPoint::TOP,
            UnitPoint::BOTTOM,
            vec![palette::css::GOLD, palette::css::REBECCA_PURPLE],
        )
        .realize();
        let fill = layer.gradient().expect("gradient fill set");
        assert_eq!(fill.start, UnitPoint::TOP);
        assert_eq!(fill.end, UnitPoint::BOTTOM);
        assert_eq!(fill.colors.len(), 2);
    }

    #[test]
    #[should_panic(expected = "at least 2 colors")]
    fn gradient_with_no_colors_fails_at_construction() {
        let _ = LayerDrawing::gradient(RECT, UnitPoint::TOP, UnitPoint::BOTTOM, vec![]);
    }

    #[test]
    fn each_realization_builds_fresh_nodes() {
        let drawing = LayerDrawing::combined(vec![LayerDrawing::rectangle(
            RECT,
            palette::css::RED,
        )]);
        let mut first = drawing.realize();
        first.set_opacity(0.1);
        let second = drawing.realize();
        // Mutating one realization must not leak into the next.
        assert_eq!(second.opacity(), 1.0);
        assert_eq!(second.children().len(), 1);
    }
}
