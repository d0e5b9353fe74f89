// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::ViewError;

/// Per-axis zoom bounds.
///
/// The default minimum is `1.0` on both axes (one screen pixel per world
/// unit) and the default maximum is `1e6`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    min: Vec2,
    max: Vec2,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: Vec2::new(Self::DEFAULT_MIN, Self::DEFAULT_MIN),
            max: Vec2::new(Self::DEFAULT_MAX, Self::DEFAULT_MAX),
        }
    }
}

impl ZoomLimits {
    /// Default minimum zoom on each axis.
    pub const DEFAULT_MIN: f64 = 1.0;
    /// Default maximum zoom on each axis.
    pub const DEFAULT_MAX: f64 = 1e6;

    /// Creates per-axis limits.
    ///
    /// Each axis is normalized so that `min <= max`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidZoomLimits`] if any component is not
    /// finite and positive.
    pub fn new(min: Vec2, max: Vec2) -> Result<Self, ViewError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !(valid(min.x) && valid(min.y) && valid(max.x) && valid(max.y)) {
            return Err(ViewError::InvalidZoomLimits { min, max });
        }
        Ok(Self {
            min: Vec2::new(min.x.min(max.x), min.y.min(max.y)),
            max: Vec2::new(min.x.max(max.x), min.y.max(max.y)),
        })
    }

    /// Creates limits that are the same on both axes.
    ///
    /// # Errors
    ///
    /// See [`ZoomLimits::new`].
    pub fn uniform(min: f64, max: f64) -> Result<Self, ViewError> {
        Self::new(Vec2::new(min, min), Vec2::new(max, max))
    }

    /// Returns the minimum zoom per axis.
    #[must_use]
    pub fn min(&self) -> Vec2 {
        self.min
    }

    /// Returns the maximum zoom per axis.
    #[must_use]
    pub fn max(&self) -> Vec2 {
        self.max
    }

    /// Clamps `zoom` into the limits.
    ///
    /// NaN and non-positive components fall back to the minimum, so the
    /// result is always finite and positive.
    #[must_use]
    pub fn clamp(&self, zoom: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(zoom.x, self.min.x, self.max.x),
            clamp_axis(zoom.y, self.min.y, self.max.y),
        )
    }
}

fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() || value <= 0.0 {
        min
    } else {
        value.clamp(min, max)
    }
}
