// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use fermata_behavior::BehaviorError;
use fermata_scale::ScaleError;

use crate::NoteId;

/// Error from editing the note model or installing its behaviors.
#[derive(Clone, Debug, PartialEq)]
pub enum RollError {
    /// A note with this id already exists.
    DuplicateNote(NoteId),
    /// A snapping scale could not be built.
    Scale(ScaleError),
    /// The behavior controller rejected the configuration.
    Behavior(BehaviorError),
}

impl fmt::Display for RollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateNote(id) => write!(f, "{id} already exists"),
            Self::Scale(err) => write!(f, "invalid snapping: {err}"),
            Self::Behavior(err) => write!(f, "behavior setup failed: {err}"),
        }
    }
}

impl core::error::Error for RollError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::DuplicateNote(_) => None,
            Self::Scale(err) => Some(err),
            Self::Behavior(err) => Some(err),
        }
    }
}

impl From<ScaleError> for RollError {
    fn from(err: ScaleError) -> Self {
        Self::Scale(err)
    }
}

impl From<BehaviorError> for RollError {
    fn from(err: BehaviorError) -> Self {
        Self::Behavior(err)
    }
}
