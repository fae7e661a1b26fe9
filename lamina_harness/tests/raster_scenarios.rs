// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel-level scenarios for the immediate raster interpreter.

use kurbo::Rect;
use lamina_core::ops::{AlphaBlending, LinearGradient, ShapeDrawing};
use lamina_core::scenes::overlapping_shapes;
use lamina_core::unit::UnitPoint;
use lamina_harness::PixmapSurface;
use lamina_paint::Painting;
use peniko::color::palette;

const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
const CLEAR: [f32; 4] = [0.0; 4];

fn assert_pixel(pixmap: &PixmapSurface, x: usize, y: usize, expected: [f32; 4]) {
    let got = pixmap.pixel(x, y);
    let close = got
        .iter()
        .zip(expected.iter())
        .all(|(a, b)| (a - b).abs() < 1e-4);
    assert!(close, "pixel ({x}, {y}): expected {expected:?}, got {got:?}");
}

#[test]
fn overlapping_shapes_paints_blue_over_red() {
    let mut pixmap = PixmapSurface::new(200, 200);
    overlapping_shapes::<Painting>().paint(&mut pixmap);

    // Ellipse-only region: red.
    assert_pixel(&pixmap, 25, 50, RED);
    assert_pixel(&pixmap, 50, 25, RED);
    // Overlap: the rectangle drew second and wins.
    assert_pixel(&pixmap, 75, 75, BLUE);
    // Rectangle-only region: blue across its full extent.
    assert_pixel(&pixmap, 125, 125, BLUE);
    assert_pixel(&pixmap, 149, 51, BLUE);
    // Outside both shapes: untouched.
    assert_pixel(&pixmap, 5, 5, CLEAR);
    assert_pixel(&pixmap, 175, 175, CLEAR);
}

#[test]
fn reordering_children_flips_occlusion() {
    // Same shapes as `overlapping_shapes`, rectangle first.
    let drawing = Painting::combined(vec![
        Painting::rectangle(Rect::new(50.0, 50.0, 150.0, 150.0), palette::css::BLUE),
        Painting::ellipse(Rect::new(0.0, 0.0, 100.0, 100.0), palette::css::RED),
    ]);
    let mut pixmap = PixmapSurface::new(200, 200);
    drawing.paint(&mut pixmap);

    // The overlap now shows the ellipse.
    assert_pixel(&pixmap, 75, 75, RED);
    assert_pixel(&pixmap, 125, 125, BLUE);
}

#[test]
fn empty_combination_leaves_surface_untouched() {
    let mut pixmap = PixmapSurface::new(32, 32);
    Painting::combined(vec![]).paint(&mut pixmap);
    assert!(
        pixmap.pixels().iter().all(|px| *px == CLEAR),
        "no pixel may be touched"
    );
}

#[test]
fn nested_alpha_composes_multiplicatively() {
    let drawing = Painting::alpha(
        0.5,
        Painting::alpha(
            0.5,
            Painting::rectangle(Rect::new(0.0, 0.0, 10.0, 10.0), palette::css::RED),
        ),
    );
    let mut pixmap = PixmapSurface::new(10, 10);
    drawing.paint(&mut pixmap);
    assert_pixel(&pixmap, 5, 5, [1.0, 0.0, 0.0, 0.25]);
}

#[test]
fn alpha_scopes_do_not_leak_across_siblings() {
    // Translucent shape first, opaque sibling second.
    let drawing = Painting::combined(vec![
        Painting::alpha(
            0.5,
            Painting::rectangle(Rect::new(0.0, 0.0, 5.0, 10.0), palette::css::RED),
        ),
        Painting::rectangle(Rect::new(5.0, 0.0, 10.0, 10.0), palette::css::BLUE),
    ]);
    let mut pixmap = PixmapSurface::new(10, 10);
    drawing.paint(&mut pixmap);
    assert_pixel(&pixmap, 2, 5, [1.0, 0.0, 0.0, 0.5]);
    // The sibling paints at full opacity.
    assert_pixel(&pixmap, 7, 5, BLUE);
}

#[test]
fn gradient_runs_between_resolved_unit_points() {
    let drawing = Painting::gradient(
        Rect::new(0.0, 0.0, 100.0, 50.0),
        UnitPoint::TOP_LEFT,
        UnitPoint::TOP_RIGHT,
        vec![palette::css::BLACK, palette::css::WHITE],
    );
    let mut pixmap = PixmapSurface::new(120, 50);
    drawing.paint(&mut pixmap);

    let left = pixmap.pixel(0, 25);
    let mid = pixmap.pixel(50, 25);
    let right = pixmap.pixel(99, 25);
    assert!(left[0] < 0.01, "near-black at the start edge: {left:?}");
    assert!((mid[0] - 0.505).abs() < 0.01, "mid-gray at center: {mid:?}");
    assert!(right[0] > 0.99, "near-white at the end edge: {right:?}");
}

#[test]
fn gradient_is_clipped_to_its_bounds() {
    let drawing = Painting::gradient(
        Rect::new(0.0, 0.0, 100.0, 50.0),
        UnitPoint::TOP_LEFT,
        UnitPoint::TOP_RIGHT,
        vec![palette::css::BLACK, palette::css::WHITE],
    );
    let mut pixmap = PixmapSurface::new(120, 50);
    drawing.paint(&mut pixmap);
    // Outside the bounding rect nothing is painted, clip or no clip.
    assert_pixel(&pixmap, 110, 25, CLEAR);
}
