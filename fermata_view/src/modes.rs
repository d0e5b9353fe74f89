// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::ZoomLimits;

/// How fitted content should be positioned inside the screen.
///
/// This mode is consulted by [`crate::ViewportState::fit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Center the fitted rectangle on the screen.
    #[default]
    Center,
    /// Align the world-space minimum corner of the fitted rectangle with the
    /// screen origin.
    AlignMin,
}

/// Whether fitting keeps the aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitAxes {
    /// Use the same zoom on both axes, chosen so the whole rectangle is visible.
    #[default]
    Uniform,
    /// Fit each axis independently so the rectangle fills the screen.
    PerAxis,
}

/// Options for [`crate::ViewportState::fit`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FitOptions {
    /// Aspect handling.
    pub axes: FitAxes,
    /// Placement of the fitted rectangle.
    pub mode: FitMode,
    /// Limits the fitted zoom is clamped into.
    pub limits: ZoomLimits,
}

impl FitOptions {
    /// Sets the aspect handling.
    #[must_use]
    pub fn with_axes(mut self, axes: FitAxes) -> Self {
        self.axes = axes;
        self
    }

    /// Sets the placement of the fitted rectangle.
    #[must_use]
    pub fn with_mode(mut self, mode: FitMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the zoom limits.
    #[must_use]
    pub fn with_limits(mut self, limits: ZoomLimits) -> Self {
        self.limits = limits;
        self
    }
}
