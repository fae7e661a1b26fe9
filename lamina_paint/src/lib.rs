// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immediate raster interpreter for lamina drawings.
//!
//! This crate turns a drawing expression into a [`Painting`]: an opaque,
//! deferred paint procedure over the [`Surface`] boundary. Nothing is drawn
//! while the expression is built; the caller allocates a surface, invokes
//! [`Painting::paint`] exactly once, and extracts the resulting image.
//!
//! ```
//! use lamina_core::scenes::overlapping_shapes;
//! use lamina_paint::{Painting, Surface};
//!
//! fn render(surface: &mut dyn Surface) {
//!     let drawing: Painting = overlapping_shapes();
//!     drawing.paint(surface);
//! }
//! ```
//!
//! Every operation brackets its surface mutations in a [`StateScope`], so
//! sibling operations never observe each other's fill color, alpha, or clip
//! settings — restoration happens on every exit path, including unwinding.
//!
//! **[`surface`]** — The [`Surface`] trait: the mutable raster target the
//! embedder provides.
//!
//! **[`scope`]** — [`StateScope`], the save/restore guard.
//!
//! **[`paint`]** — [`Painting`] and its capability implementations.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod paint;
pub mod scope;
pub mod surface;

pub use paint::Painting;
pub use scope::StateScope;
pub use surface::Surface;
