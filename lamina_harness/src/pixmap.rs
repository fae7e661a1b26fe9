// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal software rasterizer.
//!
//! [`PixmapSurface`] implements [`Surface`] over a straight-alpha f32 RGBA
//! pixel buffer with source-over blending and a scoped graphics-state
//! stack. Coverage is hard-edged (a pixel is inside or outside by its
//! center, no antialiasing), which keeps pixel assertions exact.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Rect};
use peniko::Color;

use lamina_core::gradient::GradientStop;
use lamina_core::opacity::clamp_unit;
use lamina_paint::Surface;

#[derive(Clone, Copy, Debug)]
struct GraphicsState {
    fill: Color,
    alpha: f32,
    clip: Rect,
}

/// A software raster target for pixel-level assertions.
pub struct PixmapSurface {
    width: usize,
    height: usize,
    /// Straight-alpha RGBA, row-major.
    pixels: Vec<[f32; 4]>,
    state: GraphicsState,
    saved: Vec<GraphicsState>,
}

impl fmt::Debug for PixmapSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixmapSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("saved_depth", &self.saved.len())
            .finish_non_exhaustive()
    }
}

impl PixmapSurface {
    /// Creates a transparent pixmap of the given size.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0.0; 4]; width * height],
            state: GraphicsState {
                fill: Color::TRANSPARENT,
                alpha: 1.0,
                clip: Rect::new(0.0, 0.0, width as f64, height as f64),
            },
            saved: Vec::new(),
        }
    }

    /// Returns the pixmap width in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the pixmap height in pixels.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the straight-alpha RGBA value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of range.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> [f32; 4] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of range ({}x{})",
            self.width,
            self.height
        );
        self.pixels[y * self.width + x]
    }

    /// Returns all pixels, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.pixels
    }

    /// Source-over composites `shade(center)` onto every pixel whose center
    /// lies inside the current clip.
    fn composite(&mut self, mut shade: impl FnMut(Point) -> Option<Color>) {
        let global_alpha = self.state.alpha;
        let clip = self.state.clip;
        for y in 0..self.height {
            for x in 0..self.width {
                let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                if !clip.contains(center) {
                    continue;
                }
                let Some(color) = shade(center) else {
                    continue;
                };
                let src = color.components;
                let sa = clamp_unit(src[3] * global_alpha);
                let idx = y * self.width + x;
                let dst = self.pixels[idx];
                let da = dst[3];
                let out_a = sa + da * (1.0 - sa);
                self.pixels[idx] = if out_a > 0.0 {
                    [
                        (src[0] * sa + dst[0] * da * (1.0 - sa)) / out_a,
                        (src[1] * sa + dst[1] * da * (1.0 - sa)) / out_a,
                        (src[2] * sa + dst[2] * da * (1.0 - sa)) / out_a,
                        out_a,
                    ]
                } else {
                    [0.0; 4]
                };
            }
        }
    }
}

impl Surface for PixmapSurface {
    fn save_state(&mut self) {
        self.saved.push(self.state);
    }

    fn restore_state(&mut self) {
        self.state = self
            .saved
            .pop()
            .expect("restore_state without matching save_state");
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.fill = color;
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        // Composes with the enclosing scope's factor.
        self.state.alpha *= clamp_unit(alpha);
    }

    fn fill_rect(&mut self, rect: Rect) {
        let fill = self.state.fill;
        self.composite(|p| rect.contains(p).then_some(fill));
    }

    fn fill_ellipse(&mut self, bounds: Rect) {
        let rx = bounds.width() / 2.0;
        let ry = bounds.height() / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let center = bounds.center();
        let fill = self.state.fill;
        self.composite(|p| {
            let dx = (p.x - center.x) / rx;
            let dy = (p.y - center.y) / ry;
            (dx * dx + dy * dy <= 1.0).then_some(fill)
        });
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.state.clip = self.state.clip.intersect(rect);
    }

    fn fill_linear_gradient(&mut self, start: Point, end: Point, stops: &[GradientStop]) {
        let axis = end - start;
        let len2 = axis.dot(axis);
        if len2 == 0.0 || stops.is_empty() {
            return;
        }
        self.composite(|p| {
            let t = ((p - start).dot(axis) / len2).clamp(0.0, 1.0) as f32;
            Some(sample_stops(stops, t))
        });
    }
}

/// Evaluates evenly spaced gradient stops at position `t` by piecewise
/// linear interpolation of the color components.
fn sample_stops(stops: &[GradientStop], t: f32) -> Color {
    let first = stops[0];
    if t <= first.offset {
        return first.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            if span <= 0.0 {
                return b.color;
            }
            let k = (t - a.offset) / span;
            let ca = a.color.components;
            let cb = b.color.components;
            return Color::new([
                ca[0] + (cb[0] - ca[0]) * k,
                ca[1] + (cb[1] - ca[1]) * k,
                ca[2] + (cb[2] - ca[2]) * k,
                ca[3] + (cb[3] - ca[3]) * k,
            ]);
        }
    }
    stops[stops.len() - 1].color
}

#[cfg(test)]
mod tests {
    use peniko::color::palette;

    use super::*;

    fn approx(a: [f32; 4], b: [f32; 4]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-4)
    }

    #[test]
    fn fill_rect_covers_exactly_the_rect() {
        let mut pixmap = PixmapSurface::new(8, 8);
        pixmap.set_fill_color(palette::css::RED);
        pixmap.fill_rect(Rect::new(2.0, 2.0, 6.0, 6.0));
        assert!(approx(pixmap.pixel(3, 3), [1.0, 0.0, 0.0, 1.0]));
        assert!(approx(pixmap.pixel(1, 1), [0.0; 4]));
        assert!(approx(pixmap.pixel(6, 6), [0.0; 4]));
    }

    #[test]
    fn clip_limits_fills() {
        let mut pixmap = PixmapSurface::new(8, 8);
        pixmap.clip_rect(Rect::new(0.0, 0.0, 4.0, 8.0));
        pixmap.set_fill_color(palette::css::BLUE);
        pixmap.fill_rect(Rect::new(0.0, 0.0, 8.0, 8.0));
        assert!(approx(pixmap.pixel(2, 2), [0.0, 0.0, 1.0, 1.0]));
        assert!(approx(pixmap.pixel(5, 2), [0.0; 4]));
    }

    #[test]
    fn restore_undoes_clip_and_alpha() {
        let mut pixmap = PixmapSurface::new(4, 4);
        pixmap.save_state();
        pixmap.clip_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        pixmap.set_global_alpha(0.5);
        pixmap.restore_state();

        pixmap.set_fill_color(palette::css::LIME);
        pixmap.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0));
        // Full coverage at full opacity: neither clip nor alpha leaked.
        assert!(approx(pixmap.pixel(3, 3), [0.0, 1.0, 0.0, 1.0]));
    }

    #[test]
    fn ellipse_covers_center_not_corners() {
        let mut pixmap = PixmapSurface::new(10, 10);
        pixmap.set_fill_color(palette::css::RED);
        pixmap.fill_ellipse(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(approx(pixmap.pixel(5, 5), [1.0, 0.0, 0.0, 1.0]));
        assert!(approx(pixmap.pixel(0, 0), [0.0; 4]));
        assert!(approx(pixmap.pixel(9, 9), [0.0; 4]));
    }

    #[test]
    fn gradient_interpolates_between_stops() {
        let mut pixmap = PixmapSurface::new(100, 1);
        let stops = [
            GradientStop {
                offset: 0.0,
                color: palette::css::BLACK,
            },
            GradientStop {
                offset: 1.0,
                color: palette::css::WHITE,
            },
        ];
        pixmap.fill_linear_gradient(Point::new(0.0, 0.0), Point::new(100.0, 0.0), &stops);
        let left = pixmap.pixel(0, 0);
        let mid = pixmap.pixel(50, 0);
        let right = pixmap.pixel(99, 0);
        assert!(left[0] < 0.01, "near-black at the start: {left:?}");
        assert!((mid[0] - 0.505).abs() < 0.01, "mid-gray halfway: {mid:?}");
        assert!(right[0] > 0.99, "near-white at the end: {right:?}");
    }

    #[test]
    #[should_panic(expected = "without matching save_state")]
    fn unbalanced_restore_panics() {
        let mut pixmap = PixmapSurface::new(1, 1);
        pixmap.restore_state();
    }
}
