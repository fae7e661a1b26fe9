// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-recording surface double.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;

use lamina_core::gradient::GradientStop;
use lamina_paint::Surface;

/// One recorded [`Surface`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCommand {
    /// `save_state` was called.
    SaveState,
    /// `restore_state` was called.
    RestoreState,
    /// `set_fill_color` was called.
    SetFillColor(Color),
    /// `set_global_alpha` was called.
    SetGlobalAlpha(f32),
    /// `fill_rect` was called.
    FillRect(Rect),
    /// `fill_ellipse` was called.
    FillEllipse(Rect),
    /// `clip_rect` was called.
    ClipRect(Rect),
    /// `fill_linear_gradient` was called.
    FillLinearGradient {
        /// Absolute gradient start.
        start: Point,
        /// Absolute gradient end.
        end: Point,
        /// Ordered stops.
        stops: Vec<GradientStop>,
    },
}

/// A [`Surface`] that draws nothing and logs every call in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded commands in call order.
    #[must_use]
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Returns the recorded commands with state bookkeeping
    /// (save/restore/set/clip) filtered out, leaving only fills.
    #[must_use]
    pub fn fills(&self) -> Vec<&SurfaceCommand> {
        self.commands
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    SurfaceCommand::FillRect(_)
                        | SurfaceCommand::FillEllipse(_)
                        | SurfaceCommand::FillLinearGradient { .. }
                )
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn save_state(&mut self) {
        self.commands.push(SurfaceCommand::SaveState);
    }

    fn restore_state(&mut self) {
        self.commands.push(SurfaceCommand::RestoreState);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(SurfaceCommand::SetFillColor(color));
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.commands.push(SurfaceCommand::SetGlobalAlpha(alpha));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(SurfaceCommand::FillRect(rect));
    }

    fn fill_ellipse(&mut self, bounds: Rect) {
        self.commands.push(SurfaceCommand::FillEllipse(bounds));
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.commands.push(SurfaceCommand::ClipRect(rect));
    }

    fn fill_linear_gradient(&mut self, start: Point, end: Point, stops: &[GradientStop]) {
        self.commands.push(SurfaceCommand::FillLinearGradient {
            start,
            end,
            stops: stops.to_vec(),
        });
    }
}
