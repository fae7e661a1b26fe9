// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped acquisition of surface state.

use core::ops::{Deref, DerefMut};

use crate::surface::Surface;

/// A save/restore guard over a [`Surface`].
///
/// Saves the surface state on construction and restores it when dropped,
/// on every exit path. Dereferences to the surface, so scoped code reads
/// the same as unscoped code:
///
/// ```ignore
/// let mut scope = StateScope::new(surface);
/// scope.set_fill_color(fill);
/// scope.fill_rect(rect);
/// // state restored here
/// ```
#[derive(Debug)]
pub struct StateScope<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> StateScope<'a, S> {
    /// Saves the current state and enters the scope.
    pub fn new(surface: &'a mut S) -> Self {
        surface.save_state();
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Drop for StateScope<'_, S> {
    fn drop(&mut self) {
        self.surface.restore_state();
    }
}

impl<S: Surface + ?Sized> Deref for StateScope<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for StateScope<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}
