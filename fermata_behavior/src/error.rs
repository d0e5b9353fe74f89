// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use kurbo::Rect;

/// Error from configuring a [`BehaviorController`](crate::BehaviorController).
#[derive(Clone, Debug, PartialEq)]
pub enum BehaviorError {
    /// A behavior with this name is already registered.
    DuplicateName(String),
    /// No behavior with this name is registered.
    UnknownBehavior(String),
    /// The surface bounds are not finite or have a negative size.
    InvalidSurface(Rect),
}

impl fmt::Display for BehaviorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName(name) => write!(f, "behavior `{name}` is already registered"),
            Self::UnknownBehavior(name) => write!(f, "no behavior named `{name}`"),
            Self::InvalidSurface(bounds) => write!(f, "invalid surface bounds {bounds:?}"),
        }
    }
}

impl core::error::Error for BehaviorError {}
