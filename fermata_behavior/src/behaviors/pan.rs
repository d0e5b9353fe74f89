// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::command::Command;
use crate::input::{Axes, PointerButton, PointerInput};
use crate::{Behavior, EditorHost, Outcome};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum PanState {
    #[default]
    Idle,
    Panning {
        button: PointerButton,
        last: Point,
    },
}

/// Drag to move the viewport; content follows the pointer.
#[derive(Clone, Debug, Default)]
pub struct Pan {
    /// Button that starts a pan; `None` accepts any button.
    pub button: Option<PointerButton>,
    /// Axes the viewport may move along.
    pub axes: Axes,
    state: PanState,
}

impl Pan {
    /// Creates a pan behavior for any button on both axes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts panning to `button`.
    #[must_use]
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = Some(button);
        self
    }

    /// Sets the axes the viewport may move along.
    #[must_use]
    pub fn with_axes(mut self, axes: Axes) -> Self {
        self.axes = axes;
        self
    }
}

impl<H: EditorHost> Behavior<H> for Pan {
    fn handle(&mut self, input: &PointerInput, host: &mut H) -> Outcome {
        match (self.state, *input) {
            (PanState::Idle, PointerInput::Down { position, button, .. })
                if self.button.is_none_or(|b| b == button) =>
            {
                self.state = PanState::Panning {
                    button,
                    last: position,
                };
                Outcome::StopAndConsume
            }
            (PanState::Panning { button, last }, PointerInput::Move { position, .. }) => {
                let delta = self.axes.mask(position - last);
                self.state = PanState::Panning {
                    button,
                    last: position,
                };
                if delta != Vec2::ZERO {
                    let viewport = host.viewport().panned_by_screen(delta);
                    host.apply(Command::SetViewport(viewport));
                }
                Outcome::StopAndConsume
            }
            (PanState::Panning { button, .. }, PointerInput::Up { button: released, .. })
                if button == released =>
            {
                self.state = PanState::Idle;
                Outcome::StopAndConsume
            }
            (PanState::Panning { .. }, PointerInput::Out) => {
                self.state = PanState::Idle;
                Outcome::Continue
            }
            _ => Outcome::Continue,
        }
    }

    fn cancel(&mut self, _: &mut H) {
        self.state = PanState::Idle;
    }

    fn is_active(&self) -> bool {
        matches!(self.state, PanState::Panning { .. })
    }
}
