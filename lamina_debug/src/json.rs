// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of layer trees.

use lamina_layer::{Layer, LayerPath};
use serde_json::{Value, json};

/// Converts a realized layer tree to a JSON value, depth first, children in
/// attachment order.
///
/// Optional fields (`background`, `path`, `gradient`, `shadow`) are present
/// only when set, so snapshots stay small and diffs stay readable.
#[must_use]
pub fn layer_to_json(layer: &Layer) -> Value {
    let frame = layer.frame();
    let mut value = json!({
        "frame": [frame.x0, frame.y0, frame.x1, frame.y1],
        "opacity": layer.opacity(),
        "children": layer.children().iter().map(layer_to_json).collect::<Vec<_>>(),
    });

    let obj = value.as_object_mut().expect("layer value is an object");
    if let Some(fill) = layer.background() {
        obj.insert("background".into(), json!(hex(fill)));
    }
    if let Some(LayerPath::Ellipse(bounds)) = layer.path() {
        obj.insert(
            "path".into(),
            json!({ "ellipse": [bounds.x0, bounds.y0, bounds.x1, bounds.y1] }),
        );
    }
    if let Some(gradient) = layer.gradient() {
        obj.insert(
            "gradient".into(),
            json!({
                "start": [gradient.start.u, gradient.start.v],
                "end": [gradient.end.u, gradient.end.v],
                "colors": gradient.colors.iter().map(|&c| hex(c)).collect::<Vec<_>>(),
            }),
        );
    }
    if let Some(shadow) = layer.shadow() {
        obj.insert(
            "shadow".into(),
            json!({
                "opacity": shadow.opacity,
                "offset": [shadow.offset.x, shadow.offset.y],
                "blur_radius": shadow.blur_radius,
            }),
        );
    }
    value
}

/// Formats a color as `#rrggbbaa`.
fn hex(color: peniko::Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b, rgba.a)
}
