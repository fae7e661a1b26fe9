// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reusable test surfaces and layer flattening for lamina.
//!
//! **[`record`]** — [`RecordingSurface`], a [`Surface`] double that logs
//! every call as a [`SurfaceCommand`](record::SurfaceCommand) value.
//!
//! **[`pixmap`]** — [`PixmapSurface`], a minimal software rasterizer for
//! pixel-level assertions.
//!
//! **[`flatten`]** — [`paint_layer`](flatten::paint_layer), which renders a
//! realized layer tree through the [`Surface`] boundary so the two
//! interpreters can be compared pixel for pixel.
//!
//! [`Surface`]: lamina_paint::Surface

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod flatten;
pub mod pixmap;
pub mod record;

pub use pixmap::PixmapSurface;
pub use record::RecordingSurface;
