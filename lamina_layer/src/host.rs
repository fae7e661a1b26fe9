// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layer-host attachment boundary.

use alloc::vec::Vec;

use crate::node::Layer;

/// A presentation hierarchy that realized layer trees are attached to.
///
/// This is the hand-off point at the edge of the crate: the interpreter
/// produces a single root [`Layer`], and the embedder's host — a window's
/// native layer tree, a scene cache, a test double — takes ownership of it
/// for display. What "display" means is entirely up to the host.
pub trait LayerHost {
    /// Attaches `root` to this host, after any previously attached trees.
    fn attach(&mut self, root: Layer);
}

/// The trivial collecting host: attached roots are appended in order.
impl LayerHost for Vec<Layer> {
    fn attach(&mut self, root: Layer) {
        self.push(root);
    }
}
