// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Rect};

/// Stable identifier of a note.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(pub u32);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "note#{}", self.0)
    }
}

/// A note on the grid.
///
/// `start` and `duration` are in beats, `row` is the pitch row. A note
/// covers one row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Note {
    /// Identifier.
    pub id: NoteId,
    /// Start in beats.
    pub start: f64,
    /// Length in beats.
    pub duration: f64,
    /// Pitch row.
    pub row: f64,
}

impl Note {
    /// Creates a note.
    #[must_use]
    pub fn new(id: u32, start: f64, duration: f64, row: f64) -> Self {
        Self {
            id: NoteId(id),
            start,
            duration,
            row,
        }
    }

    /// Top-left corner in world space: `(start, row)`.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.start, self.row)
    }

    /// Moves the note so its top-left corner is at `position`.
    pub fn set_position(&mut self, position: Point) {
        self.start = position.x;
        self.row = position.y;
    }

    /// World-space rectangle covered by the note.
    #[must_use]
    pub fn world_rect(&self) -> Rect {
        Rect::new(self.start, self.row, self.start + self.duration, self.row + 1.0)
    }
}
