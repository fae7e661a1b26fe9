// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability contracts and drawing builders for lamina.
//!
//! Lamina is a small drawing algebra. A drawing is a composition of abstract
//! operations — shapes, grouping, alpha blending, shadows, gradients — that
//! has no existence of its own: it is built directly into the native result
//! type of whichever *interpreter* it is instantiated against.
//!
//! Each operation family is a separate *capability* trait (see [`ops`]). An
//! interpreter implements exactly the capabilities it can support, and a
//! drawing builder states the capabilities it needs as trait bounds:
//!
//! ```
//! use kurbo::Rect;
//! use lamina_core::ops::ShapeDrawing;
//! use peniko::color::palette;
//!
//! fn banner<D: ShapeDrawing>() -> D {
//!     D::combined(vec![
//!         D::rectangle(Rect::new(0.0, 0.0, 320.0, 80.0), palette::css::NAVY),
//!         D::ellipse(Rect::new(16.0, 16.0, 64.0, 64.0), palette::css::GOLD),
//!     ])
//! }
//! ```
//!
//! `banner::<D>()` works for every `D` implementing [`ShapeDrawing`] — the
//! immediate raster interpreter in `lamina_paint`, the retained layer
//! interpreter in `lamina_layer`, or any future one. Pairing a builder with
//! an interpreter that lacks a required capability fails to compile; there
//! is no runtime feature discovery.
//!
//! **[`ops`]** — The capability traits: [`ShapeDrawing`],
//! [`AlphaBlending`], [`DropShadow`], and [`LinearGradient`].
//!
//! **[`unit`]** — [`UnitPoint`](unit::UnitPoint), coordinates in the unit
//! square resolved against an absolute rectangle.
//!
//! **[`gradient`]** — Gradient stops, even stop placement, and the
//! fail-fast color-count check shared by every interpreter.
//!
//! **[`opacity`]** — The single clamp policy for alpha factors.
//!
//! **[`scenes`]** — Ready-made drawing builders, one per capability tier.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//!
//! [`ShapeDrawing`]: ops::ShapeDrawing
//! [`AlphaBlending`]: ops::AlphaBlending
//! [`DropShadow`]: ops::DropShadow
//! [`LinearGradient`]: ops::LinearGradient

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod gradient;
pub mod opacity;
pub mod ops;
pub mod scenes;
pub mod unit;
