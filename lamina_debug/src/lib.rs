// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics for lamina layer trees.
//!
//! **[`pretty`]** — [`PrettyPrinter`](pretty::PrettyPrinter) writes one
//! indented line per node to a [`Write`](std::io::Write) destination
//! (default: stderr).
//!
//! **[`json`]** — [`layer_to_json`](json::layer_to_json) exports a realized
//! tree as a [`serde_json::Value`] for snapshotting and diffing.

pub mod json;
pub mod pretty;

pub use json::layer_to_json;
pub use pretty::PrettyPrinter;
