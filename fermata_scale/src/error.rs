// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// Configuration error raised while building or addressing a [`QuantizedScale`].
///
/// [`QuantizedScale`]: crate::QuantizedScale
#[derive(Clone, Debug, PartialEq)]
pub enum ScaleError {
    /// The domain span is empty or not finite, so no slope can be derived.
    DegenerateDomain,
    /// The range span is empty or not finite, so the mapping cannot be inverted.
    DegenerateRange,
    /// The step size is not a finite, positive number.
    InvalidStep(f64),
    /// No axis or alias with this name exists.
    UnknownAxis(String),
    /// The name is already used by an axis or alias.
    DuplicateAxis(String),
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateDomain => f.write_str("scale domain span is empty or not finite"),
            Self::DegenerateRange => f.write_str("scale range span is empty or not finite"),
            Self::InvalidStep(step) => write!(f, "scale step {step} must be finite and positive"),
            Self::UnknownAxis(name) => write!(f, "no scale axis named {name:?}"),
            Self::DuplicateAxis(name) => write!(f, "scale axis name {name:?} is already in use"),
        }
    }
}

impl core::error::Error for ScaleError {}
