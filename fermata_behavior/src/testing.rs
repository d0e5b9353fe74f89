// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording host shared by the behavior unit tests.

use alloc::vec::Vec;

use fermata_geometry::HitList;
use fermata_view::ViewportState;
use kurbo::{Point, Rect, Vec2};

use crate::command::Command;
use crate::input::{Modifiers, PointerButton, PointerInput};
use crate::EditorHost;

#[derive(Default)]
pub(crate) struct TestHost {
    pub(crate) viewport: ViewportState,
    pub(crate) hits: HitList<u32>,
    pub(crate) selection: Vec<u32>,
    pub(crate) positions: Vec<(u32, Point)>,
    pub(crate) applied: Vec<Command<u32>>,
}

impl TestHost {
    /// Adds an object whose world position and hit rect coincide.
    pub(crate) fn with_object(mut self, key: u32, rect: Rect) -> Self {
        self.hits.push(rect, key);
        self.positions.push((key, rect.origin()));
        self
    }

    pub(crate) fn take(&mut self) -> Vec<Command<u32>> {
        core::mem::take(&mut self.applied)
    }
}

impl EditorHost for TestHost {
    type Key = u32;

    fn viewport(&self) -> ViewportState {
        self.viewport
    }

    fn hits(&self) -> &HitList<u32> {
        &self.hits
    }

    fn is_selected(&self, key: &u32) -> bool {
        self.selection.contains(key)
    }

    fn selected(&self) -> Vec<u32> {
        self.selection.clone()
    }

    fn world_position(&self, key: &u32) -> Option<Point> {
        self.positions
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, p)| *p)
    }

    fn apply(&mut self, command: Command<u32>) {
        match &command {
            Command::SetViewport(viewport) => self.viewport = *viewport,
            Command::SetSelection(keys) => self.selection.clone_from(keys),
            _ => {}
        }
        self.applied.push(command);
    }
}

pub(crate) fn down(x: f64, y: f64) -> PointerInput {
    PointerInput::Down {
        position: Point::new(x, y),
        button: PointerButton::Primary,
        modifiers: Modifiers::empty(),
    }
}

pub(crate) fn moved(x: f64, y: f64) -> PointerInput {
    PointerInput::Move {
        position: Point::new(x, y),
        modifiers: Modifiers::empty(),
    }
}

pub(crate) fn up(x: f64, y: f64) -> PointerInput {
    PointerInput::Up {
        position: Point::new(x, y),
        button: PointerButton::Primary,
        modifiers: Modifiers::empty(),
    }
}

pub(crate) fn wheel(x: f64, y: f64, delta: Vec2, modifiers: Modifiers) -> PointerInput {
    PointerInput::Wheel {
        position: Point::new(x, y),
        delta,
        modifiers,
    }
}
