// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ready-made drawing builders.
//!
//! Each builder is a pure function generic over the minimal capability set
//! it needs. A builder never names an interpreter: the same call site
//! produces an immediate painting, a retained layer tree, or whatever a
//! future interpreter emits, depending only on the chosen type parameter.

use alloc::vec;

use kurbo::Rect;
use peniko::color::palette;

use crate::ops::{AlphaBlending, DropShadow, LinearGradient, ShapeDrawing};
use crate::unit::UnitPoint;

/// A red ellipse partially occluded by a blue rectangle.
///
/// The ellipse is inscribed in `(0, 0)–(100, 100)` and drawn first; the
/// rectangle covers `(50, 50)–(150, 150)` and is drawn on top.
pub fn overlapping_shapes<D: ShapeDrawing>() -> D {
    D::combined(vec![
        D::ellipse(Rect::new(0.0, 0.0, 100.0, 100.0), palette::css::RED),
        D::rectangle(Rect::new(50.0, 50.0, 150.0, 150.0), palette::css::BLUE),
    ])
}

/// A sky gradient with a translucent sun.
pub fn sunset_badge<D: ShapeDrawing + LinearGradient + AlphaBlending>() -> D {
    let bounds = Rect::new(0.0, 0.0, 200.0, 120.0);
    D::combined(vec![
        D::gradient(
            bounds,
            UnitPoint::TOP,
            UnitPoint::BOTTOM,
            vec![
                palette::css::GOLD,
                palette::css::ORANGE_RED,
                palette::css::REBECCA_PURPLE,
            ],
        ),
        D::alpha(
            0.6,
            D::ellipse(Rect::new(70.0, 30.0, 130.0, 90.0), palette::css::WHITE),
        ),
    ])
}

/// [`sunset_badge`] on a white card that casts the default drop shadow.
pub fn floating_card<D>() -> D
where
    D: ShapeDrawing + LinearGradient + AlphaBlending + DropShadow,
{
    let card = Rect::new(-10.0, -10.0, 210.0, 130.0);
    D::drop_shadow(D::combined(vec![
        D::rectangle(card, palette::css::WHITE),
        sunset_badge::<D>(),
    ]))
}
