// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Vec2;

/// Configuration error for viewport settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewError {
    /// A zoom limit component is not a finite, positive number.
    InvalidZoomLimits {
        /// Requested minimum zoom.
        min: Vec2,
        /// Requested maximum zoom.
        max: Vec2,
    },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoomLimits { min, max } => write!(
                f,
                "zoom limits must be finite and positive (min {min:?}, max {max:?})"
            ),
        }
    }
}

impl core::error::Error for ViewError {}
