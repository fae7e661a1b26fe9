// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained layer-tree interpreter for lamina drawings.
//!
//! Where `lamina_paint` produces a one-shot paint procedure, this crate
//! produces a [`LayerDrawing`]: a node factory. Realizing it yields a tree
//! of [`Layer`] values — persistent, attachable drawable nodes in the
//! style of a compositor's layer hierarchy. Realization is deferred so a
//! drawing expression built once can be rendered into fresh nodes each
//! time it is needed; a retained node belongs to exactly one attachment
//! point, which Rust expresses directly by move semantics.
//!
//! ```
//! use lamina_core::scenes::overlapping_shapes;
//! use lamina_layer::{Layer, LayerDrawing};
//!
//! let drawing: LayerDrawing = overlapping_shapes();
//! let root: Layer = drawing.realize();
//! assert_eq!(root.children().len(), 2);
//! ```
//!
//! **[`node`]** — The [`Layer`] value type and its settable fields.
//!
//! **[`host`]** — The [`LayerHost`] attachment boundary.
//!
//! **[`realize`]** — [`LayerDrawing`] and its capability implementations.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod host;
pub mod node;
pub mod realize;

pub use host::LayerHost;
pub use node::{GradientFill, Layer, LayerPath};
pub use realize::LayerDrawing;
