// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable layer-tree output.

use std::io::Write;

use lamina_layer::{Layer, LayerPath};

/// Writes one indented line per layer node to a
/// [`Write`](std::io::Write) destination.
pub struct PrettyPrinter<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrinter<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrinter").finish_non_exhaustive()
    }
}

impl PrettyPrinter {
    /// Creates a printer that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }
}

impl<W: Write> PrettyPrinter<W> {
    /// Creates a printer that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Writes the tree rooted at `layer`, depth first, children in
    /// attachment order.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn print(&mut self, layer: &Layer) -> std::io::Result<()> {
        self.print_indented(layer, 0)
    }

    fn print_indented(&mut self, layer: &Layer, depth: usize) -> std::io::Result<()> {
        let frame = layer.frame();
        write!(
            self.writer,
            "{:indent$}layer frame=({}, {})..({}, {}) opacity={}",
            "",
            frame.x0,
            frame.y0,
            frame.x1,
            frame.y1,
            layer.opacity(),
            indent = depth * 2
        )?;
        if let Some(fill) = layer.background() {
            write!(self.writer, " fill={}", hex(fill))?;
        }
        if let Some(LayerPath::Ellipse(_)) = layer.path() {
            write!(self.writer, " path=ellipse")?;
        }
        if let Some(gradient) = layer.gradient() {
            write!(self.writer, " gradient={} colors", gradient.colors.len())?;
        }
        if let Some(shadow) = layer.shadow() {
            write!(
                self.writer,
                " shadow(opacity={} offset=({}, {}) blur={})",
                shadow.opacity, shadow.offset.x, shadow.offset.y, shadow.blur_radius
            )?;
        }
        writeln!(self.writer)?;

        for child in layer.children() {
            self.print_indented(child, depth + 1)?;
        }
        Ok(())
    }
}

/// Formats a color as `#rrggbbaa`.
fn hex(color: peniko::Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b, rgba.a)
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;
    use peniko::color::palette;

    use super::*;

    #[test]
    fn prints_one_indented_line_per_node() {
        let mut root = Layer::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut child = Layer::new(Rect::new(10.0, 10.0, 20.0, 20.0));
        child.set_background(Some(palette::css::RED));
        root.add_child(child);

        let mut out = Vec::new();
        PrettyPrinter::with_writer(&mut out).print(&root).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2, "one line per node: {text}");
        assert!(lines[0].starts_with("layer frame=(0, 0)..(100, 100)"));
        assert!(lines[1].starts_with("  layer"), "child is indented");
        assert!(lines[1].contains("fill=#ff0000ff"), "hex fill: {}", lines[1]);
    }
}
