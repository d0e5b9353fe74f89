// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::command::Command;
use crate::input::{PointerButton, PointerInput};
use crate::{Behavior, EditorHost, Outcome};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum SelectState {
    #[default]
    Idle,
    Selecting { anchor: Point, button: PointerButton },
}

/// Rubber-band selection.
///
/// The box is the rectangle spanned by the press point and the current
/// pointer, in either drag direction. Releasing commits the keys whose hit
/// rects intersect it; leaving the surface or cancelling only clears the
/// box.
#[derive(Clone, Debug, Default)]
pub struct SelectBox {
    /// Button that starts a selection; `None` accepts any button.
    pub button: Option<PointerButton>,
    state: SelectState,
}

impl SelectBox {
    /// Creates a box selection for any button.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts selection to `button`.
    #[must_use]
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = Some(button);
        self
    }
}

impl<H: EditorHost> Behavior<H> for SelectBox {
    fn handle(&mut self, input: &PointerInput, host: &mut H) -> Outcome {
        match (self.state, *input) {
            (SelectState::Idle, PointerInput::Down { position, button, .. })
                if self.button.is_none_or(|b| b == button) =>
            {
                self.state = SelectState::Selecting {
                    anchor: position,
                    button,
                };
                host.apply(Command::SelectionBox(Some(Rect::from_points(position, position))));
                Outcome::StopAndConsume
            }
            (SelectState::Selecting { anchor, .. }, PointerInput::Move { position, .. }) => {
                host.apply(Command::SelectionBox(Some(Rect::from_points(anchor, position))));
                Outcome::StopAndConsume
            }
            (
                SelectState::Selecting { anchor, button },
                PointerInput::Up {
                    position,
                    button: released,
                    modifiers,
                },
            ) if released == button => {
                self.state = SelectState::Idle;
                let keys = host.hits().hit_rect(Rect::from_points(anchor, position));
                host.apply(Command::SelectRect { keys, modifiers });
                host.apply(Command::SelectionBox(None));
                Outcome::StopAndConsume
            }
            (SelectState::Selecting { .. }, PointerInput::Out) => {
                self.cancel(host);
                Outcome::Continue
            }
            _ => Outcome::Continue,
        }
    }

    fn cancel(&mut self, host: &mut H) {
        if core::mem::take(&mut self.state) != SelectState::Idle {
            host.apply(Command::SelectionBox(None));
        }
    }

    fn is_active(&self) -> bool {
        self.state != SelectState::Idle
    }
}
