// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The retained [`Layer`] node.

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Color;

use lamina_core::ops::ShadowStyle;
use lamina_core::unit::UnitPoint;

/// A non-rectangular shape carried by a layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayerPath {
    /// The ellipse inscribed in the given rectangle.
    Ellipse(Rect),
}

/// A linear gradient fill in layer-relative coordinates.
///
/// Start and end are unit points resolved against the layer's frame by the
/// presenting host; stops are evenly spaced, so only the ordered color list
/// is stored.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientFill {
    /// Gradient start, in the unit square of the layer's frame.
    pub start: UnitPoint,
    /// Gradient end, in the unit square of the layer's frame.
    pub end: UnitPoint,
    /// At least 2 colors, in stop order.
    pub colors: Vec<Color>,
}

/// A node in a retained, presentable layer hierarchy.
///
/// A layer is a plain owned value: whoever holds it owns it uniquely, and
/// [`add_child`](Self::add_child) moves a node into its parent, so a node
/// can never be attached at two points. Children draw in attachment order,
/// first child bottom-most.
///
/// The fill fields layer as follows: [`background`](Self::background) fills
/// the frame (or the [`path`](Self::path), when one is set);
/// [`gradient`](Self::gradient) fills the frame with a linear gradient.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    frame: Rect,
    background: Option<Color>,
    path: Option<LayerPath>,
    opacity: f32,
    shadow: Option<ShadowStyle>,
    gradient: Option<GradientFill>,
    children: Vec<Layer>,
}

impl Layer {
    /// Creates a layer with the given frame, full opacity, no fill, no
    /// path, no shadow, no gradient, and no children.
    #[must_use]
    pub const fn new(frame: Rect) -> Self {
        Self {
            frame,
            background: None,
            path: None,
            opacity: 1.0,
            shadow: None,
            gradient: None,
            children: Vec::new(),
        }
    }

    /// Returns the layer's frame rectangle.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Sets the layer's frame rectangle.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    /// Returns the background fill color, if any.
    #[must_use]
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Sets the background fill color.
    pub fn set_background(&mut self, background: Option<Color>) {
        self.background = background;
    }

    /// Returns the shape path, if any.
    #[must_use]
    pub fn path(&self) -> Option<LayerPath> {
        self.path
    }

    /// Sets the shape path.
    pub fn set_path(&mut self, path: Option<LayerPath>) {
        self.path = path;
    }

    /// Returns the layer's own opacity in `[0, 1]`.
    ///
    /// Opacity applies to the layer's fills and its entire subtree; the
    /// displayed opacity of a node is the product of its own opacity and
    /// its ancestors'.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Sets the layer's own opacity.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    /// Returns the shadow style, if any.
    #[must_use]
    pub fn shadow(&self) -> Option<ShadowStyle> {
        self.shadow
    }

    /// Sets the shadow style.
    pub fn set_shadow(&mut self, shadow: Option<ShadowStyle>) {
        self.shadow = shadow;
    }

    /// Returns the gradient fill, if any.
    #[must_use]
    pub fn gradient(&self) -> Option<&GradientFill> {
        self.gradient.as_ref()
    }

    /// Sets the gradient fill.
    pub fn set_gradient(&mut self, gradient: Option<GradientFill>) {
        self.gradient = gradient;
    }

    /// Attaches `child` as the last (top-most) child.
    pub fn add_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Returns the children in attachment (paint) order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }
}
